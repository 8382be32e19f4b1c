//! Compile-time build metadata exposed to CLI surfaces.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// VCS commit hash captured at build time.
pub const GIT_COMMIT: &str = env!("ATELIER_BUILD_GIT_HASH");

/// Build timestamp captured at compile time.
pub const BUILD_TIMESTAMP: &str = env!("ATELIER_BUILD_TIMESTAMP");

/// Body of `atelier --version` after the binary name.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("ATELIER_BUILD_GIT_HASH"),
    "\nbuilt: ",
    env!("ATELIER_BUILD_TIMESTAMP")
);

/// Help trailer block that surfaces build metadata in `atelier --help`.
pub const HELP_BUILD_METADATA: &str = concat!(
    "Build metadata:\n  commit: ",
    env!("ATELIER_BUILD_GIT_HASH"),
    "\n  built: ",
    env!("ATELIER_BUILD_TIMESTAMP")
);

/// Concise metadata shown in the interactive banner.
pub fn startup_metadata_line() -> String {
    format!("v{VERSION} ({GIT_COMMIT}, built {BUILD_TIMESTAMP})")
}
