//! Terminal user-interface building blocks.
//!
//! Panel layout, spinner, prompts, and the output renderer live in separate
//! files so layout stays testable without a terminal.

pub mod form_prompt;
pub mod panels;
pub mod progress;
pub mod renderer;
pub mod settings;

pub use renderer::Renderer;
