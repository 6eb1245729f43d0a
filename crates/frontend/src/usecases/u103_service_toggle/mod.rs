//! u103 — switch the backend memory service on or off.

pub mod api;
pub mod model;
pub mod view;
pub mod workflow;

pub use view::ServiceTogglePanel;
