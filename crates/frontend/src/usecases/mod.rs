pub mod u101_enhance_prompt;
pub mod u102_add_document;
pub mod u103_service_toggle;
