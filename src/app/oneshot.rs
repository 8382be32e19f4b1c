//! `atelier submit` / `atelier preview`: one design from command-line flags.

use crate::cli::DesignArgs;
use atelier::api::DesignService;
use atelier::generator::DesignGenerator;
use atelier::intake::SUBMITTING_LABEL;
use atelier::renderer::RenderState;
use atelier::session::DesignSession;
use atelier::tui::{settings, Renderer};
use std::sync::Arc;

pub(crate) async fn run_oneshot(
    renderer: &Renderer,
    service: Arc<dyn DesignService>,
    generator: Arc<dyn DesignGenerator>,
    design: &DesignArgs,
) -> Result<(), String> {
    let form = design.to_form().map_err(|err| err.to_string())?;
    let mut session = DesignSession::new(service, generator);
    session.intake_mut().fill(form);

    let state = generate(renderer, &mut session).await;
    session.shutdown();
    let state = state?;

    match &state {
        RenderState::Ready(result) if design.json => {
            let text = serde_json::to_string_pretty(result)
                .map_err(|err| format!("failed to encode design: {err}"))?;
            println!("{text}");
            Ok(())
        }
        RenderState::Ready(_) => {
            renderer.panel(&state);
            Ok(())
        }
        RenderState::Error { message, .. } => {
            if !design.json {
                renderer.panel(&state);
            }
            Err(message.clone())
        }
        RenderState::Empty | RenderState::Loading => {
            Err("renderer stopped before the design was ready".to_string())
        }
    }
}

/// Submit with a spinner, then wait for generation with another.
pub(crate) async fn generate(
    renderer: &Renderer,
    session: &mut DesignSession,
) -> Result<RenderState, String> {
    let mut progress = renderer.progress(SUBMITTING_LABEL);
    let submitted = session.submit().await;
    progress.finish();

    let pending = match submitted {
        Ok(pending) => pending,
        Err(err) => {
            renderer.intake_status(&session.intake().status());
            return Err(err.to_string());
        }
    };
    renderer.intake_status(&session.intake().status());

    let mut progress = renderer.progress(settings::TITLE_LOADING);
    let state = pending.settled().await;
    progress.finish();
    Ok(state)
}
