use super::workflow::ServiceToggleApi;
use crate::shared::api_utils::{ApiError, BackendClient};
use async_trait::async_trait;
use contracts::usecases::u103_service_toggle::{EnableRequest, EnableResponse, ServiceToggle};

#[async_trait(?Send)]
impl ServiceToggleApi for BackendClient {
    async fn set_enabled(&self, request: &EnableRequest) -> Result<EnableResponse, ApiError> {
        let url = self.config().endpoint::<ServiceToggle>();
        self.post_json_for(&url, request).await
    }
}
