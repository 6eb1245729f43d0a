//! u102 — push a free-text document into the knowledge base.

pub mod api;
pub mod model;
pub mod view;
pub mod workflow;

pub use view::AddDocumentPanel;
