pub mod api_utils;
pub mod busy;
pub mod components;
pub mod dom_contract;
pub mod page_frame;
pub mod page_standard;
pub mod status;
