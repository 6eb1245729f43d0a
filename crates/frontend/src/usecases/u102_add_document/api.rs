use super::workflow::AddDocumentApi;
use crate::shared::api_utils::{ApiError, BackendClient};
use async_trait::async_trait;
use contracts::usecases::u102_add_document::{AddDocument, AddDocumentRequest};

#[async_trait(?Send)]
impl AddDocumentApi for BackendClient {
    /// The response body is ignored; only the status matters.
    async fn add_document(&self, request: &AddDocumentRequest) -> Result<(), ApiError> {
        let url = self.config().endpoint::<AddDocument>();
        self.post_json(&url, request).await.map(|_| ())
    }
}
