//! Change handler of the service checkbox, independent of the DOM.

use super::model;
use crate::shared::api_utils::ApiError;
use crate::shared::busy::{BusyFlag, BusyGuard};
use crate::shared::status::StatusLine;
use async_trait::async_trait;
use contracts::usecases::u103_service_toggle::{EnableRequest, EnableResponse};

#[async_trait(?Send)]
pub trait ServiceToggleApi {
    async fn set_enabled(&self, request: &EnableRequest) -> Result<EnableResponse, ApiError>;
}

pub trait ServiceToggleSurface: BusyFlag {
    fn show_status(&self, line: StatusLine);
    /// Checkbox state shown to the user
    fn show_enabled(&self, enabled: bool);
}

/// Request `desired` and display whatever state the server settles on.
/// On failure the checkbox falls back to `last_known`.
pub async fn run<A, S>(api: &A, surface: &S, desired: bool, last_known: bool)
where
    A: ServiceToggleApi + ?Sized,
    S: ServiceToggleSurface + ?Sized,
{
    surface.show_status(model::updating());
    let _busy = BusyGuard::engage(surface);

    match api.set_enabled(&EnableRequest { enabled: desired }).await {
        Ok(response) => {
            log::info!("Service enabled={} ({})", response.enabled, response.status);
            surface.show_enabled(response.enabled);
            surface.show_status(model::applied(response.enabled));
        }
        Err(e) => {
            log::error!("enable failed: {}", e);
            surface.show_enabled(last_known);
            surface.show_status(model::failed(&e));
        }
    }
}
