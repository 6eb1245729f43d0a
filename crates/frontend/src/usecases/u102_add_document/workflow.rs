//! Click handler of the "Add Document" button, independent of the DOM.

use super::model;
use crate::shared::api_utils::ApiError;
use crate::shared::busy::{BusyFlag, BusyGuard};
use crate::shared::status::StatusLine;
use async_trait::async_trait;
use contracts::usecases::u102_add_document::AddDocumentRequest;

#[async_trait(?Send)]
pub trait AddDocumentApi {
    async fn add_document(&self, request: &AddDocumentRequest) -> Result<(), ApiError>;
}

pub trait AddDocumentSurface: BusyFlag {
    fn show_status(&self, line: StatusLine);
    fn clear_document(&self);
}

/// Run one add-document cycle. The field is cleared only on success.
pub async fn run<A, S>(api: &A, surface: &S, raw_document: &str)
where
    A: AddDocumentApi + ?Sized,
    S: AddDocumentSurface + ?Sized,
{
    let Some(document) = model::accept_document(raw_document) else {
        surface.show_status(model::empty_warning());
        return;
    };

    surface.show_status(model::adding());
    let _busy = BusyGuard::engage(surface);

    let request = AddDocumentRequest::from_frontend(document);
    match api.add_document(&request).await {
        Ok(()) => {
            log::info!("Document added ({} chars)", document.chars().count());
            surface.show_status(model::added());
            surface.clear_document();
        }
        Err(e) => {
            log::error!("add_document failed: {}", e);
            surface.show_status(model::failed(&e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::status::StatusTone;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeSurface {
        document: RefCell<String>,
        status: RefCell<Vec<StatusLine>>,
        busy: RefCell<Vec<bool>>,
    }

    impl FakeSurface {
        fn with_document(text: &str) -> Self {
            let surface = Self::default();
            *surface.document.borrow_mut() = text.to_string();
            surface
        }

        fn last_status(&self) -> StatusLine {
            self.status.borrow().last().cloned().unwrap_or_default()
        }
    }

    impl BusyFlag for FakeSurface {
        fn set_busy(&self, busy: bool) {
            self.busy.borrow_mut().push(busy);
        }
    }

    impl AddDocumentSurface for FakeSurface {
        fn show_status(&self, line: StatusLine) {
            self.status.borrow_mut().push(line);
        }

        fn clear_document(&self) {
            self.document.borrow_mut().clear();
        }
    }

    struct FakeApi {
        sent: RefCell<Vec<AddDocumentRequest>>,
        reply: Result<(), ApiError>,
    }

    impl FakeApi {
        fn replying(reply: Result<(), ApiError>) -> Self {
            Self { sent: RefCell::default(), reply }
        }
    }

    #[async_trait(?Send)]
    impl AddDocumentApi for FakeApi {
        async fn add_document(&self, request: &AddDocumentRequest) -> Result<(), ApiError> {
            self.sent.borrow_mut().push(request.clone());
            self.reply.clone()
        }
    }

    fn run_with(api: &FakeApi, surface: &FakeSurface) {
        let raw = surface.document.borrow().clone();
        block_on(run(api, surface, &raw));
    }

    #[test]
    fn test_blank_document_sends_nothing() {
        let api = FakeApi::replying(Ok(()));
        let surface = FakeSurface::with_document("   \n");
        run_with(&api, &surface);

        assert!(api.sent.borrow().is_empty());
        assert!(surface.busy.borrow().is_empty());
        let status = surface.last_status();
        assert_eq!(status.text, model::MSG_EMPTY_DOCUMENT);
        assert_eq!(status.tone, StatusTone::Error);
    }

    #[test]
    fn test_success_clears_field() {
        let api = FakeApi::replying(Ok(()));
        let surface = FakeSurface::with_document("Tokio is an async runtime.");
        run_with(&api, &surface);

        assert_eq!(
            *api.sent.borrow(),
            vec![AddDocumentRequest {
                document: "Tokio is an async runtime.".to_string(),
                source: "frontend_input".to_string(),
            }]
        );
        let status = surface.last_status();
        assert_eq!(status.text, model::MSG_ADDED);
        assert_eq!(status.tone.css_class(), "success");
        assert_eq!(*surface.document.borrow(), "");
        assert_eq!(*surface.busy.borrow(), vec![true, false]);
    }

    #[test]
    fn test_adding_shown_before_request() {
        let api = FakeApi::replying(Ok(()));
        let surface = FakeSurface::with_document("doc");
        run_with(&api, &surface);

        let statuses = surface.status.borrow();
        assert_eq!(statuses[0].text, model::MSG_ADDING);
        assert_eq!(statuses[0].tone, StatusTone::Neutral);
    }

    #[test]
    fn test_failure_keeps_field() {
        let api = FakeApi::replying(Err(ApiError::Http {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        }));
        let surface = FakeSurface::with_document("keep me");
        run_with(&api, &surface);

        let status = surface.last_status();
        assert_eq!(status.text, "❌ Error: API Error: Internal Server Error");
        assert_eq!(status.tone.css_class(), "error");
        assert_eq!(*surface.document.borrow(), "keep me");
        assert_eq!(*surface.busy.borrow(), vec![true, false]);
    }

    #[test]
    fn test_network_failure_keeps_field() {
        let api = FakeApi::replying(Err(ApiError::Network("Failed to fetch".to_string())));
        let surface = FakeSurface::with_document("keep me too");
        run_with(&api, &surface);

        assert_eq!(surface.last_status().tone, StatusTone::Error);
        assert_eq!(*surface.document.borrow(), "keep me too");
        assert_eq!(api.sent.borrow().len(), 1);
    }
}
