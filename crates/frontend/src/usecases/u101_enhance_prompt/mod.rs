//! u101 — turn a raw prompt into retrieved context plus a history summary.

pub mod api;
pub mod model;
pub mod view;
pub mod workflow;

pub use view::EnhancePromptPage;
