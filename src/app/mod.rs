//! Binary-local application orchestration.
//!
//! `entry` loads configuration and dispatches; the remaining modules each
//! own one command flow.

pub(crate) mod entry;
mod init_flow;
mod interactive;
mod logging;
mod oneshot;
