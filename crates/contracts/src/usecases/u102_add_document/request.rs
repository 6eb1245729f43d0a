use serde::{Deserialize, Serialize};

/// Source tag attached to every document submitted from the browser.
pub const FRONTEND_SOURCE: &str = "frontend_input";

/// Request for `POST /add_document`. The response body is not part of the contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddDocumentRequest {
    pub document: String,
    pub source: String,
}

impl AddDocumentRequest {
    pub fn from_frontend(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            source: FRONTEND_SOURCE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_source_tag() {
        let json = serde_json::to_value(AddDocumentRequest::from_frontend("notes")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "document": "notes", "source": "frontend_input" })
        );
    }
}
