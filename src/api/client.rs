//! Design service client.

use super::designs;
use super::DesignService;
use crate::config::ApiConfig;
use crate::design::{DesignPayload, DesignRequest};
use crate::error::SubmitError;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

/// Client for the `/api/designs` endpoint.
///
/// Makes exactly one attempt per call; retrying is left to the user.
#[derive(Debug, Clone)]
pub struct DesignClient {
    http: reqwest::Client,
    base_url: String,
}

impl DesignClient {
    /// Build a client from resolved API configuration.
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_timeout(&config.base_url, config.timeout())
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        Self {
            http: build_http_client(timeout),
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit one design request and return the service's JSON body.
    pub async fn create_design(
        &self,
        request: &DesignRequest,
    ) -> Result<DesignPayload, SubmitError> {
        debug!(base_url = %self.base_url, design_type = %request.design_type, "submitting design");
        let payload = designs::create(&self.http, &self.base_url, request).await?;
        info!(id = payload.id().unwrap_or("-"), "design request accepted");
        Ok(payload)
    }
}

#[async_trait]
impl DesignService for DesignClient {
    async fn create_design(&self, request: &DesignRequest) -> Result<DesignPayload, SubmitError> {
        DesignClient::create_design(self, request).await
    }
}

/// Build an HTTP client with timeout applied.
fn build_http_client(timeout: Duration) -> reqwest::Client {
    // Fall back to reqwest defaults if builder creation fails for any reason.
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
