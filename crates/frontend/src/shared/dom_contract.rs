//! Element IDs the page exposes to stylesheets and end-to-end tests.
//!
//! [`verify_mounted`] runs once after mounting; a missing ID is a startup
//! failure rather than a click that silently does nothing.

use thiserror::Error;
use web_sys::Document;

pub const ENHANCE_BUTTON: &str = "enhance-button";
pub const PROMPT_TEXTAREA: &str = "prompt-textarea";
pub const STATUS_CONTAINER: &str = "status-container";
pub const RESULT_CONTAINER: &str = "result-container";

pub const ADD_DOC_BUTTON: &str = "add-doc-button";
pub const DOC_TEXTAREA: &str = "doc-textarea";
pub const SIDEBAR_STATUS: &str = "sidebar-status";

pub const SERVICE_TOGGLE: &str = "service-toggle";
pub const SERVICE_STATUS: &str = "service-status";

pub const REQUIRED_IDS: &[&str] = &[
    ENHANCE_BUTTON,
    PROMPT_TEXTAREA,
    STATUS_CONTAINER,
    RESULT_CONTAINER,
    ADD_DOC_BUTTON,
    DOC_TEXTAREA,
    SIDEBAR_STATUS,
    SERVICE_TOGGLE,
    SERVICE_STATUS,
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StartupError {
    #[error("no window object")]
    NoWindow,
    #[error("no document object")]
    NoDocument,
    #[error("required element #{0} is missing")]
    MissingElement(&'static str),
}

/// First required ID for which `is_present` returns false.
pub fn first_missing(is_present: impl Fn(&str) -> bool) -> Option<&'static str> {
    REQUIRED_IDS.iter().copied().find(|id| !is_present(id))
}

pub fn verify(document: &Document) -> Result<(), StartupError> {
    match first_missing(|id| document.get_element_by_id(id).is_some()) {
        Some(id) => Err(StartupError::MissingElement(id)),
        None => Ok(()),
    }
}

pub fn verify_mounted() -> Result<(), StartupError> {
    let window = web_sys::window().ok_or(StartupError::NoWindow)?;
    let document = window.document().ok_or(StartupError::NoDocument)?;
    verify(&document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_present() {
        assert_eq!(first_missing(|_| true), None);
    }

    #[test]
    fn test_reports_first_missing() {
        let missing = first_missing(|id| id != RESULT_CONTAINER && id != SIDEBAR_STATUS);
        assert_eq!(missing, Some(RESULT_CONTAINER));
        assert_eq!(
            StartupError::MissingElement(RESULT_CONTAINER).to_string(),
            "required element #result-container is missing"
        );
    }

    #[test]
    fn test_ids_unique() {
        let mut ids = REQUIRED_IDS.to_vec();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), REQUIRED_IDS.len());
    }
}
