//! Design generation capability consumed by the renderer.

use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

use crate::design::{build_design_result, DesignPayload, DesignResult};
use crate::error::GenerateError;

/// Simulated generation time.
pub const DEFAULT_GENERATION_DELAY: Duration = Duration::from_secs(2);

/// Turns a submitted payload into a displayable design.
///
/// Implementations may take arbitrarily long; the renderer cancels a call
/// that a newer payload supersedes by dropping its future.
#[async_trait]
pub trait DesignGenerator: Send + Sync {
    async fn generate(&self, payload: &DesignPayload) -> Result<DesignResult, GenerateError>;
}

/// Stand-in generator: waits a fixed delay, then fills the mock templates.
/// Never fails.
#[derive(Debug, Clone, Copy)]
pub struct MockGenerator {
    delay: Duration,
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_GENERATION_DELAY)
    }
}

impl MockGenerator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl DesignGenerator for MockGenerator {
    async fn generate(&self, payload: &DesignPayload) -> Result<DesignResult, GenerateError> {
        debug!(delay_ms = self.delay.as_millis() as u64, "simulating design generation");
        sleep(self.delay).await;
        Ok(build_design_result(payload))
    }
}
