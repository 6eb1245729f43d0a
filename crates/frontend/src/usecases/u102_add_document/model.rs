use crate::shared::api_utils::ApiError;
use crate::shared::status::StatusLine;

pub const MSG_EMPTY_DOCUMENT: &str = "⚠️ Please enter document text.";
pub const MSG_ADDING: &str = "Adding...";
pub const MSG_ADDED: &str = "✅ Document added!";

/// Document to send, or `None` when it is blank. The text is sent untrimmed.
pub fn accept_document(raw: &str) -> Option<&str> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(raw)
    }
}

pub fn empty_warning() -> StatusLine {
    StatusLine::error(MSG_EMPTY_DOCUMENT)
}

pub fn adding() -> StatusLine {
    StatusLine::neutral(MSG_ADDING)
}

pub fn added() -> StatusLine {
    StatusLine::success(MSG_ADDED)
}

/// HTTP failures surface only the status text here, unlike the enhance panel.
pub fn failed(error: &ApiError) -> StatusLine {
    let reason = match error {
        ApiError::Http { status_text, .. } => format!("API Error: {status_text}"),
        other => other.to_string(),
    };
    StatusLine::error(format!("❌ Error: {reason}"))
}
