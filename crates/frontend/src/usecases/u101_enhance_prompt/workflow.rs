//! Click handler of the "Enhance Prompt" button, independent of the DOM.

use super::model;
use crate::shared::api_utils::ApiError;
use crate::shared::busy::{BusyFlag, BusyGuard};
use async_trait::async_trait;
use contracts::usecases::u101_enhance_prompt::{ProcessTaskRequest, ProcessTaskResponse};

#[async_trait(?Send)]
pub trait EnhanceApi {
    async fn process_task(&self, request: &ProcessTaskRequest) -> Result<ProcessTaskResponse, ApiError>;
}

/// Display sinks of the enhance panel; the busy flag drives the button.
pub trait EnhanceSurface: BusyFlag {
    fn show_status(&self, text: String);
    fn show_result(&self, text: String);
}

/// Run one enhance cycle. Exactly one request is sent for a non-blank prompt.
pub async fn run<A, S>(api: &A, surface: &S, raw_prompt: &str)
where
    A: EnhanceApi + ?Sized,
    S: EnhanceSurface + ?Sized,
{
    let Some(prompt) = model::accept_prompt(raw_prompt) else {
        surface.show_status(model::MSG_EMPTY_PROMPT.to_string());
        return;
    };

    surface.show_result(String::new());
    let _busy = BusyGuard::engage(surface);
    surface.show_status(model::MSG_STARTING.to_string());

    let request = ProcessTaskRequest::new(prompt);
    match api.process_task(&request).await {
        Ok(response) => {
            log::info!(
                "process_task finished: context={}, summary={}",
                response.rag_context().is_some(),
                response.summary().is_some()
            );
            surface.show_status(model::status_log(&response));
            surface.show_result(model::result_text(&response));
        }
        Err(e) => {
            log::error!("process_task failed: {}", e);
            surface.show_status(model::error_message(&e));
        }
    }
}
