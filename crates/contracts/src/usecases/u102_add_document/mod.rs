pub mod request;

pub use request::{AddDocumentRequest, FRONTEND_SOURCE};

use crate::usecases::common::UseCaseMetadata;

pub struct AddDocument;

impl UseCaseMetadata for AddDocument {
    fn usecase_index() -> &'static str {
        "u102"
    }

    fn usecase_name() -> &'static str {
        "add_document"
    }

    fn display_name() -> &'static str {
        "📚 Add to Knowledge Base"
    }

    fn endpoint() -> &'static str {
        "/add_document"
    }

    fn description() -> &'static str {
        "Add new documents to your local vector DB."
    }
}
