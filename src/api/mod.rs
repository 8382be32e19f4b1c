//! HTTP client for the external design service.
//!
//! - `designs`: the `POST /api/designs` request helper
//! - `client`: connection setup and the [`DesignService`] implementation

use crate::design::{DesignPayload, DesignRequest};
use crate::error::SubmitError;
use async_trait::async_trait;

mod client;
mod designs;

pub use client::DesignClient;

/// Design submission interface used by intake.
///
/// Tests provide deterministic responses without network calls while the
/// production path uses [`DesignClient`].
#[async_trait]
pub trait DesignService: Send + Sync {
    async fn create_design(&self, request: &DesignRequest) -> Result<DesignPayload, SubmitError>;
}

/// Offline service that answers every request by echoing it back.
///
/// Backs `atelier preview`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoService;

#[async_trait]
impl DesignService for EchoService {
    async fn create_design(&self, request: &DesignRequest) -> Result<DesignPayload, SubmitError> {
        Ok(DesignPayload::from(request))
    }
}
