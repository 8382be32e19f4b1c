//! Environment override and legacy env-alias handling.
//!
//! Canonical `ATELIER_*` variables take precedence. The web front-end's
//! `NEXT_PUBLIC_BASE_URL` is accepted as a legacy alias for the base URL and
//! surfaced via diagnostics.

use crate::error::ConfigError;

use super::{Config, ConfigDiagnostics};

pub(super) const ENV_BASE_URL: &str = "ATELIER_BASE_URL";
pub(super) const ENV_LEGACY_BASE_URL: &str = "NEXT_PUBLIC_BASE_URL";
pub(super) const ENV_TIMEOUT_SECS: &str = "ATELIER_TIMEOUT_SECS";
pub(super) const ENV_DELAY_MS: &str = "ATELIER_DELAY_MS";

pub(super) fn apply_runtime_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(url) = env_with_legacy(env_lookup, ENV_BASE_URL, ENV_LEGACY_BASE_URL) {
        config.api.base_url = url;
    }
    if let Some(timeout) = non_empty(env_lookup, ENV_TIMEOUT_SECS) {
        let parsed = timeout.parse::<u64>().map_err(|_| {
            ConfigError::Invalid(format!(
                "invalid {ENV_TIMEOUT_SECS} value `{timeout}`: expected positive integer seconds"
            ))
        })?;
        // Zero would mean "no timeout" to reqwest.
        config.api.timeout_secs = parsed.max(1);
    }
    if let Some(delay) = non_empty(env_lookup, ENV_DELAY_MS) {
        config.generation.delay_ms = delay.parse::<u64>().map_err(|_| {
            ConfigError::Invalid(format!(
                "invalid {ENV_DELAY_MS} value `{delay}`: expected integer milliseconds"
            ))
        })?;
    }
    Ok(())
}

/// Resolve a value from canonical env var or, if absent, its legacy alias.
pub(super) fn env_with_legacy<FEnv>(
    env_lookup: &FEnv,
    canonical: &str,
    legacy: &str,
) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    non_empty(env_lookup, canonical).or_else(|| non_empty(env_lookup, legacy))
}

/// Record a diagnostic when only the legacy base-URL alias is set.
pub(super) fn collect_legacy_env_warnings<FEnv>(
    diagnostics: &mut ConfigDiagnostics,
    env_lookup: &FEnv,
) where
    FEnv: Fn(&str) -> Option<String>,
{
    if non_empty(env_lookup, ENV_BASE_URL).is_none()
        && non_empty(env_lookup, ENV_LEGACY_BASE_URL).is_some()
    {
        diagnostics.deprecations.push(format!(
            "Detected legacy env var `{ENV_LEGACY_BASE_URL}`. Use {ENV_BASE_URL} instead."
        ));
    }
}

fn non_empty<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
