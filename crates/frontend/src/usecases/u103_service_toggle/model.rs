use crate::shared::api_utils::ApiError;
use crate::shared::status::StatusLine;

pub const MSG_UPDATING: &str = "Updating...";
pub const MSG_ENABLED: &str = "✅ Service enabled";
pub const MSG_DISABLED: &str = "⏸️ Service disabled";

pub fn updating() -> StatusLine {
    StatusLine::neutral(MSG_UPDATING)
}

/// Status for the state the server reports, which may differ from the one requested.
pub fn applied(enabled: bool) -> StatusLine {
    StatusLine::success(if enabled { MSG_ENABLED } else { MSG_DISABLED })
}

pub fn failed(error: &ApiError) -> StatusLine {
    StatusLine::error(format!("❌ Error: {error}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_applied_text() {
        assert_eq!(applied(true).text, MSG_ENABLED);
        assert_eq!(applied(false).text, MSG_DISABLED);
        assert_eq!(applied(false).tone.css_class(), "success");
    }

    #[test]
    fn test_failed_includes_status() {
        let line = failed(&ApiError::Http {
            status: 403,
            status_text: "Forbidden".to_string(),
        });
        assert_eq!(line.text, "❌ Error: API Error: 403 Forbidden");
        assert_eq!(line.tone.css_class(), "error");
    }
}
