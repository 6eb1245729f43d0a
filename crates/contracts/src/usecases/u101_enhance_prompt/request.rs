use serde::{Deserialize, Serialize};

/// Request for `POST /process_task`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessTaskRequest {
    /// Raw prompt text as typed by the user
    pub task_description: String,

    /// Prior conversation turns, oldest first
    #[serde(default)]
    pub history: Vec<String>,
}

impl ProcessTaskRequest {
    /// A single-shot request with no prior turns.
    pub fn new(task_description: impl Into<String>) -> Self {
        Self {
            task_description: task_description.into(),
            history: Vec::new(),
        }
    }
}
