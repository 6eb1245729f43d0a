//! Text shown by the enhance workflow.

use contracts::usecases::u101_enhance_prompt::ProcessTaskResponse;

/// Characters of retrieved context echoed into the status log.
pub const CONTEXT_PREVIEW_CHARS: usize = 200;

pub const MSG_EMPTY_PROMPT: &str = "⚠️ Please enter a prompt first.";
pub const MSG_STARTING: &str = "🚀 Starting enhancement process...";
pub const MSG_FINISHED: &str = "✅ Process finished successfully.\n\n";
pub const MSG_NO_CONTEXT: &str = "ℹ️ No relevant RAG context was found.\n\n";
pub const MSG_NOTHING_TO_DISPLAY: &str = "No direct output to display, see log for details.";

/// Prompt to send, or `None` when it is blank. The text is sent untrimmed.
pub fn accept_prompt(raw: &str) -> Option<&str> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(raw)
    }
}

/// First [`CONTEXT_PREVIEW_CHARS`] characters followed by an ellipsis.
pub fn context_preview(context: &str) -> String {
    let mut preview: String = context.chars().take(CONTEXT_PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}

/// Human-readable log written to the status area.
pub fn status_log(response: &ProcessTaskResponse) -> String {
    let mut log = String::from(MSG_FINISHED);

    match response.rag_context() {
        Some(context) => {
            log.push_str("Retrieved RAG Context:\n");
            log.push_str(&context_preview(context));
            log.push_str("\n\n");
        }
        None => log.push_str(MSG_NO_CONTEXT),
    }

    if let Some(summary) = response.summary() {
        log.push_str("Generated Summary:\n");
        log.push_str(summary);
    }

    log
}

/// Full, untruncated output written to the result area.
pub fn result_text(response: &ProcessTaskResponse) -> String {
    let mut text = String::new();

    if let Some(context) = response.rag_context() {
        text.push_str(&format!("--- RAG CONTEXT ---\n{context}\n\n"));
    }
    if let Some(summary) = response.summary() {
        text.push_str(&format!("--- SUMMARY ---\n{summary}"));
    }

    if text.is_empty() {
        MSG_NOTHING_TO_DISPLAY.to_string()
    } else {
        text
    }
}

pub fn error_message(error: &impl std::fmt::Display) -> String {
    format!("❌ An error occurred: {error}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(rag_context: Option<&str>, summary: Option<&str>) -> ProcessTaskResponse {
        ProcessTaskResponse {
            rag_context: rag_context.map(str::to_string),
            summary: summary.map(str::to_string),
        }
    }

    #[test]
    fn test_blank_prompts_rejected() {
        for raw in ["", "   ", "\n\t  \r\n"] {
            assert_eq!(accept_prompt(raw), None, "{raw:?}");
        }
        assert_eq!(accept_prompt("  keep spacing "), Some("  keep spacing "));
    }

    #[test]
    fn test_preview_truncates_long_context() {
        let long = "x".repeat(500);
        let preview = context_preview(&long);
        assert_eq!(preview.len(), CONTEXT_PREVIEW_CHARS + 3);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_preview_counts_chars_not_bytes() {
        let wide = "界".repeat(250);
        let preview = context_preview(&wide);
        assert_eq!(preview.chars().count(), CONTEXT_PREVIEW_CHARS + 3);
    }

    #[test]
    fn test_short_context_still_gets_ellipsis() {
        assert_eq!(context_preview("X"), "X...");
    }

    #[test]
    fn test_both_fields() {
        let resp = response(Some("X"), Some("Y"));
        assert_eq!(
            status_log(&resp),
            "✅ Process finished successfully.\n\nRetrieved RAG Context:\nX...\n\nGenerated Summary:\nY"
        );
        assert_eq!(
            result_text(&resp),
            "--- RAG CONTEXT ---\nX\n\n--- SUMMARY ---\nY"
        );
    }

    #[test]
    fn test_result_keeps_full_context() {
        let long = "c".repeat(300);
        let resp = response(Some(&long), None);
        assert!(result_text(&resp).contains(&long));
        assert!(!status_log(&resp).contains(&long));
    }

    #[test]
    fn test_summary_only() {
        let resp = response(None, Some("just a summary"));
        let log = status_log(&resp);
        assert!(log.contains(MSG_NO_CONTEXT));
        assert!(log.ends_with("Generated Summary:\njust a summary"));
        assert_eq!(result_text(&resp), "--- SUMMARY ---\njust a summary");
    }

    #[test]
    fn test_neither_field() {
        let resp = response(None, None);
        assert_eq!(
            status_log(&resp),
            format!("{MSG_FINISHED}{MSG_NO_CONTEXT}")
        );
        assert_eq!(result_text(&resp), MSG_NOTHING_TO_DISPLAY);
    }

    #[test]
    fn test_empty_strings_fall_back() {
        let resp = response(Some(""), Some(""));
        assert_eq!(result_text(&resp), MSG_NOTHING_TO_DISPLAY);
    }
}
