//! `atelier init`: write the default config to the per-user path.

use atelier::config::{initialize_default_global_config, GlobalConfigInitResult};
use atelier::tui::Renderer;

pub(crate) fn run_init_flow(renderer: &Renderer, force: bool) -> Result<(), String> {
    let result = initialize_default_global_config(force)
        .map_err(|e| format!("failed to initialize ~/.config/atelier: {e}"))?;
    report_init_result(renderer, &result);
    Ok(())
}

fn report_init_result(renderer: &Renderer, result: &GlobalConfigInitResult) {
    match result {
        GlobalConfigInitResult::Created { path } => {
            renderer.section("initialized atelier config");
            renderer.field("path", &path.display().to_string());
        }
        GlobalConfigInitResult::Overwritten { path, backup_path } => {
            renderer.section("reinitialized atelier config");
            renderer.field("path", &path.display().to_string());
            renderer.field("backup", &backup_path.display().to_string());
        }
        GlobalConfigInitResult::AlreadyInitialized { path } => {
            renderer.section("atelier config already initialized");
            renderer.field("path", &path.display().to_string());
            renderer.detail("run `atelier init --force` to rewrite it (a backup is kept)");
        }
    }
}
