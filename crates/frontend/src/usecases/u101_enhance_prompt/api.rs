use super::workflow::EnhanceApi;
use crate::shared::api_utils::{ApiError, BackendClient};
use async_trait::async_trait;
use contracts::usecases::u101_enhance_prompt::{
    EnhancePrompt, ProcessTaskRequest, ProcessTaskResponse,
};

#[async_trait(?Send)]
impl EnhanceApi for BackendClient {
    async fn process_task(&self, request: &ProcessTaskRequest) -> Result<ProcessTaskResponse, ApiError> {
        let url = self.config().endpoint::<EnhancePrompt>();
        self.post_json_for(&url, request).await
    }
}
