use serde::{Deserialize, Serialize};

/// Response of `POST /process_task`.
///
/// Both fields are independent: either, both or neither may be present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessTaskResponse {
    #[serde(default)]
    pub rag_context: Option<String>,

    #[serde(default)]
    pub summary: Option<String>,
}

impl ProcessTaskResponse {
    /// Retrieved context, treating an empty string the same as absent.
    pub fn rag_context(&self) -> Option<&str> {
        non_empty(&self.rag_context)
    }

    /// Generated summary, treating an empty string the same as absent.
    pub fn summary(&self) -> Option<&str> {
        non_empty(&self.summary)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
