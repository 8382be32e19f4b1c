//! One intake and one renderer wired through a private bus.

use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

use crate::api::DesignService;
use crate::bus::DesignBus;
use crate::error::SubmitError;
use crate::generator::DesignGenerator;
use crate::intake::DesignIntake;
use crate::renderer::{DesignRenderer, RenderState};

/// Intake plus renderer sharing a `designSubmitted` bus.
///
/// The renderer subscribes before the intake can publish, so no submission
/// is ever missed.
pub struct DesignSession {
    bus: DesignBus,
    intake: DesignIntake,
    renderer: DesignRenderer,
}

impl DesignSession {
    /// Must be called inside a tokio runtime.
    pub fn new(service: Arc<dyn DesignService>, generator: Arc<dyn DesignGenerator>) -> Self {
        let bus = DesignBus::new();
        let renderer = DesignRenderer::spawn(&bus, generator);
        let intake = DesignIntake::new(service, bus.clone());
        Self {
            bus,
            intake,
            renderer,
        }
    }

    pub fn bus(&self) -> &DesignBus {
        &self.bus
    }

    pub fn intake(&self) -> &DesignIntake {
        &self.intake
    }

    pub fn intake_mut(&mut self) -> &mut DesignIntake {
        &mut self.intake
    }

    pub fn renderer(&self) -> &DesignRenderer {
        &self.renderer
    }

    /// Submit the current form. On success the returned handle resolves
    /// to the design this submission produces.
    pub async fn submit(&mut self) -> Result<PendingDesign, SubmitError> {
        let mut states = self.renderer.watch();
        states.mark_unchanged();
        let running = self.renderer.watch_running();
        self.intake.submit().await?;
        Ok(PendingDesign { states, running })
    }

    /// Submit the current form, then wait for the design it produces.
    pub async fn submit_and_wait(&mut self) -> Result<RenderState, SubmitError> {
        Ok(self.submit().await?.settled().await)
    }

    /// Stop the renderer; the last state stays readable.
    pub fn shutdown(&mut self) {
        self.renderer.shutdown();
    }
}

/// A broadcast design whose generation has not been observed yet.
pub struct PendingDesign {
    states: watch::Receiver<RenderState>,
    running: watch::Receiver<bool>,
}

impl PendingDesign {
    /// First settled renderer state (ready or error) after the broadcast.
    ///
    /// If the renderer shuts down first, resolves to its frozen state, which
    /// may still be `Empty` or `Loading`.
    pub async fn settled(self) -> RenderState {
        let Self {
            mut states,
            mut running,
        } = self;
        loop {
            tokio::select! {
                changed = states.changed() => {
                    if changed.is_err() {
                        debug!("renderer state channel closed before settling");
                        return states.borrow().clone();
                    }
                    let state = states.borrow_and_update().clone();
                    if state.is_settled() {
                        return state;
                    }
                }
                _ = async { running.wait_for(|running| !*running).await.is_ok() } => {
                    debug!("renderer stopped before settling");
                    return states.borrow().clone();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::EchoService;
    use crate::design::{DesignPayload, DesignRequest, Difficulty};
    use crate::generator::MockGenerator;
    use crate::intake::{FormField, IntakeStatus};
    use async_trait::async_trait;
    use std::time::Duration;

    fn fill(session: &mut DesignSession, height: &str) {
        let intake = session.intake_mut();
        intake.set_field(FormField::DesignType, "cocktail").unwrap();
        intake.set_field(FormField::Color, "#ff0000").unwrap();
        intake.set_field(FormField::Style, "fitted").unwrap();
        intake.set_field(FormField::Weight, "55.5").unwrap();
        intake.set_field(FormField::Height, height).unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn submit_and_wait_yields_generated_design() {
        let mut session = DesignSession::new(
            Arc::new(EchoService),
            Arc::new(MockGenerator::new(Duration::from_secs(2))),
        );
        fill(&mut session, "160");

        let state = session.submit_and_wait().await.unwrap();
        let result = state.result().expect("ready");
        assert_eq!(result.design_type, "cocktail");
        assert_eq!(result.height, 160.0);
        assert_eq!(result.making_details.measurements.bust, 88);
        assert_eq!(result.making_details.difficulty, Difficulty::Intermediate);
        assert_eq!(session.intake().status(), IntakeStatus::Success);
    }

    #[tokio::test(start_paused = true)]
    async fn second_submission_waits_for_its_own_design() {
        let mut session = DesignSession::new(
            Arc::new(EchoService),
            Arc::new(MockGenerator::new(Duration::from_millis(500))),
        );
        fill(&mut session, "160");
        session.submit_and_wait().await.unwrap();

        fill(&mut session, "200");
        let state = session.submit_and_wait().await.unwrap();
        assert_eq!(state.result().map(|r| r.height), Some(200.0));
    }

    struct Unavailable;

    #[async_trait]
    impl DesignService for Unavailable {
        async fn create_design(&self, _: &DesignRequest) -> Result<DesignPayload, SubmitError> {
            Err(SubmitError::Status {
                code: 503,
                body: "maintenance".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn submit_failure_leaves_renderer_empty() {
        let mut session = DesignSession::new(Arc::new(Unavailable), Arc::new(MockGenerator::default()));
        fill(&mut session, "160");

        let err = session.submit_and_wait().await.unwrap_err();
        assert_eq!(err.status_code(), Some(503));
        assert_eq!(session.renderer().state(), RenderState::Empty);
        assert!(session.intake().form().is_complete());
        session.shutdown();
        assert!(!session.renderer().is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn waiting_after_shutdown_returns_frozen_state() {
        let mut session = DesignSession::new(
            Arc::new(EchoService),
            Arc::new(MockGenerator::new(Duration::from_secs(2))),
        );
        session.shutdown();
        fill(&mut session, "170");

        let state = tokio::time::timeout(Duration::from_secs(3), session.submit_and_wait())
            .await
            .expect("resolves once the renderer has stopped")
            .unwrap();
        assert_eq!(state, RenderState::Empty);
        assert_eq!(session.intake().status(), IntakeStatus::Success);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_mid_generation_releases_waiter() {
        let mut session = DesignSession::new(
            Arc::new(EchoService),
            Arc::new(MockGenerator::new(Duration::from_secs(2))),
        );
        fill(&mut session, "170");
        let pending = session.submit().await.unwrap();

        let mut states = session.renderer().watch();
        states.wait_for(RenderState::is_loading).await.unwrap();
        session.shutdown();

        let state = tokio::time::timeout(Duration::from_secs(1), pending.settled())
            .await
            .expect("resolves once the renderer has stopped");
        assert_eq!(state, RenderState::Loading);
    }
}
