//! API utilities for frontend-backend communication
//!
//! Resolves the API base, builds endpoint URLs and performs the JSON POST
//! round-trip shared by every use case.

use contracts::usecases::common::UseCaseMetadata;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

/// Build-time override of the API base, e.g. `PROMPT_ENHANCER_API_BASE=/api`.
const BUILD_API_BASE: Option<&str> = option_env!("PROMPT_ENHANCER_API_BASE");

/// Query parameter that overrides the API base at runtime.
const API_BASE_PARAM: &str = "api_base";

/// Failure of a single request/response cycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Server answered with a status outside 200..=299
    #[error("API Error: {status} {status_text}")]
    Http { status: u16, status_text: String },

    /// Request never produced a response
    #[error("{0}")]
    Network(String),

    /// Response body was not the expected JSON
    #[error("{0}")]
    Decode(String),

    /// Request body could not be built
    #[error("{0}")]
    Encode(String),
}

/// Fetch failures keep only the JS error message (`Failed to fetch`), not `TypeError: ...`.
fn network_error(err: gloo_net::Error) -> ApiError {
    let message = match err {
        gloo_net::Error::JsError(js) => js.message,
        other => other.to_string(),
    };
    ApiError::Network(message)
}

/// Where the backend lives.
///
/// An empty base keeps every endpoint relative to the page origin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiConfig {
    api_base: String,
}

impl ApiConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        let api_base = api_base.into();
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the base: `?api_base=` query parameter, then the build-time
    /// variable, then relative paths.
    pub fn load() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();

        let config = Self::resolve(Self::base_from_query(&search), BUILD_API_BASE);
        log::debug!("API base resolved to {:?}", config.api_base);
        config
    }

    fn resolve(runtime: Option<String>, build: Option<&str>) -> Self {
        match runtime {
            Some(base) => Self::new(base),
            None => Self::new(build.unwrap_or_default()),
        }
    }

    fn base_from_query(search: &str) -> Option<String> {
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        params.get(API_BASE_PARAM).cloned()
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Build a full API URL from a path starting with '/'
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    /// URL of a use case's endpoint
    pub fn endpoint<U: UseCaseMetadata>(&self) -> String {
        self.api_url(U::endpoint())
    }
}

/// Handle to the backend provided to the component tree through context.
#[derive(Debug, Clone, Default)]
pub struct BackendClient {
    config: ApiConfig,
}

impl BackendClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// POST `body` as JSON and return the response if its status is 2xx.
    pub async fn post_json<B: Serialize>(&self, url: &str, body: &B) -> Result<Response, ApiError> {
        log::debug!("POST {}", url);

        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(network_error)?;

        if !response.ok() {
            return Err(ApiError::Http {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        Ok(response)
    }

    /// POST `body` as JSON and decode the 2xx response body.
    pub async fn post_json_for<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.post_json(url, body).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}
