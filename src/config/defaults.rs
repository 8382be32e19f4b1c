//! Default configuration constants.

use crate::generator::DEFAULT_GENERATION_DELAY;

/// Embedded default `atelier.toml` template written by `atelier init`.
pub(super) const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("../templates/atelier.toml");
/// Config file name looked up locally and under the global config dir.
pub(super) const CONFIG_FILE_NAME: &str = "atelier.toml";
/// Directory under the config root holding the global config.
pub(super) const CONFIG_DIR_NAME: &str = "atelier";
/// Design service used when nothing else is configured.
pub(super) const DEFAULT_BASE_URL: &str = "http://localhost:3000";
/// Timeout for design submissions.
pub(super) const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Simulated generation time, in the units `[generation] delay_ms` uses.
pub(super) const DEFAULT_DELAY_MS: u64 = DEFAULT_GENERATION_DELAY.as_millis() as u64;
