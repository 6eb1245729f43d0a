pub mod button;
pub mod checkbox;
pub mod textarea;

pub use button::Button;
pub use checkbox::Checkbox;
pub use textarea::Textarea;
