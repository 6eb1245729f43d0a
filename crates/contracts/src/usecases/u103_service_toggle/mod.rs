pub mod request;
pub mod response;

pub use request::EnableRequest;
pub use response::EnableResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct ServiceToggle;

impl UseCaseMetadata for ServiceToggle {
    fn usecase_index() -> &'static str {
        "u103"
    }

    fn usecase_name() -> &'static str {
        "service_toggle"
    }

    fn display_name() -> &'static str {
        "⚙️ Memory Service"
    }

    fn endpoint() -> &'static str {
        "/enable"
    }

    fn description() -> &'static str {
        "Switch the backend memory service on or off."
    }
}
