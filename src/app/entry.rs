//! Application entry orchestration for the atelier CLI.

use crate::app::init_flow::run_init_flow;
use crate::app::interactive::run_interactive;
use crate::app::logging::init_logging;
use crate::app::oneshot::run_oneshot;
use crate::cli::{Args, Command};
use atelier::api::{DesignClient, DesignService, EchoService};
use atelier::config::{load_config_with_diagnostics, validate_config, Config};
use atelier::generator::{DesignGenerator, MockGenerator};
use atelier::tui::Renderer;
use std::sync::Arc;
use tracing::debug;

/// Config plus warnings to show once the real renderer exists.
struct LoadedConfigState {
    config: Config,
    warnings: Vec<String>,
}

/// Top-level CLI entrypoint. Returns the process exit code.
pub(crate) async fn run(args: Args) -> i32 {
    init_logging();

    let bootstrap_renderer = Renderer::new(!args.no_color);
    if let Some(Command::Init { force }) = args.command.as_ref() {
        return exit_code(&bootstrap_renderer, run_init_flow(&bootstrap_renderer, *force));
    }

    let loaded = match load_config_state(&args) {
        Ok(state) => state,
        Err(msg) => {
            bootstrap_renderer.error(&msg);
            return 1;
        }
    };
    let config = loaded.config;
    let renderer = Renderer::new(config.display.color);
    Renderer::set_progress_enabled(config.display.progress);
    for warning in &loaded.warnings {
        renderer.warn(warning);
    }

    let generator: Arc<dyn DesignGenerator> =
        Arc::new(MockGenerator::new(config.generation.delay()));
    let outcome = match args.command {
        None => {
            let service: Arc<dyn DesignService> = Arc::new(DesignClient::new(&config.api));
            run_interactive(&renderer, service, generator).await
        }
        Some(Command::Submit(design)) => {
            let service: Arc<dyn DesignService> = Arc::new(DesignClient::new(&config.api));
            run_oneshot(&renderer, service, generator, &design).await
        }
        Some(Command::Preview(design)) => {
            run_oneshot(&renderer, Arc::new(EchoService), generator, &design).await
        }
        Some(Command::Init { .. }) => Ok(()),
    };
    exit_code(&renderer, outcome)
}

fn exit_code(renderer: &Renderer, outcome: Result<(), String>) -> i32 {
    match outcome {
        Ok(()) => 0,
        Err(msg) => {
            renderer.error(&msg);
            1
        }
    }
}

fn load_config_state(args: &Args) -> Result<LoadedConfigState, String> {
    let loaded =
        load_config_with_diagnostics(args.config.as_deref()).map_err(|err| err.to_string())?;
    match &loaded.source {
        Some(path) => debug!(path = %path.display(), "loaded config"),
        None => debug!("no config file found, using defaults"),
    }
    let mut config = loaded.config;
    apply_cli_overrides(args, &mut config).map_err(|err| err.to_string())?;

    Ok(LoadedConfigState {
        config,
        warnings: loaded.diagnostics.deprecations,
    })
}

/// Apply CLI overrides that intentionally outrank config files and env.
fn apply_cli_overrides(
    args: &Args,
    config: &mut Config,
) -> Result<(), atelier::error::ConfigError> {
    if let Some(url) = &args.base_url {
        config.api.base_url = url.clone();
    }
    if args.no_color {
        config.display.color = false;
    }
    validate_config(config)
}
