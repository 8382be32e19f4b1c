//! Interactive form loop (`atelier` with no subcommand).

use crate::app::oneshot::generate;
use atelier::api::DesignService;
use atelier::build_info::startup_metadata_line;
use atelier::generator::DesignGenerator;
use atelier::renderer::RenderState;
use atelier::session::DesignSession;
use atelier::tui::form_prompt::{confirm, fill_form};
use atelier::tui::{settings, Renderer};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

pub(crate) async fn run_interactive(
    renderer: &Renderer,
    service: Arc<dyn DesignService>,
    generator: Arc<dyn DesignGenerator>,
) -> Result<(), String> {
    renderer.header(&startup_metadata_line());
    let mut session = DesignSession::new(service, generator);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let io_err = |err: std::io::Error| format!("failed to read input: {err}");

    renderer.panel(&session.renderer().state());
    loop {
        eprintln!();
        renderer.section(settings::TITLE_FORM);
        // Fields kept from a failed submission are not asked again.
        let mut form = session.intake().form().clone();
        let complete = fill_form(&mut lines, renderer, &mut form)
            .await
            .map_err(io_err)?;
        session.intake_mut().fill(form);
        if !complete {
            eprintln!();
            break;
        }

        match generate(renderer, &mut session).await {
            Ok(state) => {
                renderer.panel(&state);
                if matches!(state, RenderState::Error { .. })
                    && confirm(&mut lines, renderer, settings::PROMPT_RETRY)
                        .await
                        .map_err(io_err)?
                {
                    session.renderer().dismiss_error();
                    renderer.panel(&session.renderer().state());
                }
            }
            Err(_) => {
                if confirm(&mut lines, renderer, settings::PROMPT_RETRY)
                    .await
                    .map_err(io_err)?
                {
                    continue;
                }
                break;
            }
        }

        if !confirm(&mut lines, renderer, settings::PROMPT_CONFIRM_AGAIN)
            .await
            .map_err(io_err)?
        {
            break;
        }
    }

    session.shutdown();
    Ok(())
}
