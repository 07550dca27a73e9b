//! HTTP client for the remote API
//!
//! Sends the token list as JSON and decodes the response. Every request is
//! bounded by the configured timeout.

use log::{debug, info};
use reqwest::Url;

use crate::api::types::{ApiResponse, SubmitRequest};
use crate::config::FormConfig;
use crate::error::ApiError;

/// Anything that can carry a submission to the remote API.
#[allow(async_fn_in_trait)]
pub trait SubmitTransport {
    /// Submit the tokens and wait for the single response.
    async fn submit(&self, data: &[String]) -> Result<ApiResponse, ApiError>;
}

/// `reqwest`-backed transport POSTing to a fixed endpoint.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl ApiClient {
    /// Create a client from configuration.
    pub fn new(config: &FormConfig) -> Result<Self, ApiError> {
        let endpoint = Url::parse(&config.endpoint_url)
            .map_err(|_| ApiError::InvalidEndpoint(config.endpoint_url.clone()))?;

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(ApiError::Http)?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl SubmitTransport for ApiClient {
    async fn submit(&self, data: &[String]) -> Result<ApiResponse, ApiError> {
        let body = SubmitRequest::new(data.to_vec());
        debug!("POST {} with {} tokens: {:?}", self.endpoint, body.data.len(), body.data);

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await
            .map_err(ApiError::Http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let decoded = response
            .json::<ApiResponse>()
            .await
            .map_err(ApiError::Decode)?;

        info!("Received response from {} ({})", self.endpoint, status);
        Ok(decoded)
    }
}
