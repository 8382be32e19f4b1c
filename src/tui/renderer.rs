//! Terminal output renderer for status messages and design panels.
//!
//! Status chatter goes to stderr; design panels go to stdout so they can be
//! piped or captured.

use crate::intake::IntakeStatus;
use crate::renderer::RenderState;
use crate::tui::panels::render_state_lines;
use crate::tui::progress::{set_progress_enabled, start_progress, ProgressHandle};
use crate::tui::settings;
use crossterm::style::Stylize;
use std::io::{self, Write};

/// Handles all terminal output formatting.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    /// Whether ANSI color/style output is enabled.
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn color(&self) -> bool {
        self.color
    }

    /// Globally enable/disable live progress spinners.
    pub fn set_progress_enabled(enabled: bool) {
        set_progress_enabled(enabled);
    }

    /// Start a spinner with a status label on stderr.
    pub fn progress(&self, label: &str) -> ProgressHandle {
        start_progress(label.to_string(), self.color)
    }

    /// Print the startup banner.
    pub fn header(&self, detail: &str) {
        if self.color {
            eprintln!(
                "{} {}",
                settings::LABEL_APP.with(settings::COLOR_APP_LABEL).bold(),
                detail.with(settings::COLOR_PROMPT_HINT),
            );
        } else {
            eprintln!("{} ({detail})", settings::LABEL_APP);
        }
    }

    /// Print a small section header.
    pub fn section(&self, title: &str) {
        if self.color {
            eprintln!(
                "{} {}",
                settings::GLYPH_SECTION_BULLET.with(settings::COLOR_SECTION_BULLET),
                title.with(settings::COLOR_SECTION_TITLE).bold()
            );
        } else {
            eprintln!("{title}:");
        }
    }

    /// Print a key/value line under a section.
    pub fn field(&self, key: &str, value: &str) {
        if self.color {
            eprintln!(
                "{}{} {}",
                settings::INDENT_1,
                format!("{key}:").with(settings::COLOR_FIELD_KEY),
                value.with(settings::COLOR_FIELD_VALUE),
            );
        } else {
            eprintln!("{}{key}: {value}", settings::INDENT_1);
        }
    }

    /// Print a simple indented detail line.
    pub fn detail(&self, text: &str) {
        if self.color {
            eprintln!("{}{}", settings::INDENT_1, text.with(settings::COLOR_PANEL_TEXT));
        } else {
            eprintln!("{}{text}", settings::INDENT_1);
        }
    }

    /// Print a field prompt without a trailing newline.
    pub fn prompt(&self, label: &str, hint: &str) {
        if self.color {
            eprint!(
                "{} {} {}{}",
                settings::PROMPT_SYMBOL.with(settings::COLOR_PROMPT_SYMBOL).bold(),
                label,
                format!("({hint})").with(settings::COLOR_PROMPT_HINT),
                settings::PROMPT_SPACER,
            );
        } else {
            eprint!("{} {label} ({hint}){}", settings::PROMPT_SYMBOL, settings::PROMPT_SPACER);
        }
        let _ = io::stderr().flush();
    }

    /// Print a yes/no question without a trailing newline.
    pub fn ask(&self, question: &str) {
        eprint!("{question}");
        let _ = io::stderr().flush();
    }

    pub fn success(&self, msg: &str) {
        if self.color {
            eprintln!(
                "{} {}",
                settings::GLYPH_SUCCESS.with(settings::COLOR_SUCCESS).bold(),
                msg.with(settings::COLOR_SUCCESS)
            );
        } else {
            eprintln!("{} {msg}", settings::GLYPH_SUCCESS_PLAIN);
        }
    }

    /// Print a warning (to stderr).
    pub fn warn(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", settings::LABEL_WARNING.with(settings::COLOR_WARNING).bold());
        } else {
            eprintln!("{} {msg}", settings::LABEL_WARNING);
        }
    }

    /// Print an error (to stderr).
    pub fn error(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", settings::LABEL_ERROR.with(settings::COLOR_ERROR).bold());
        } else {
            eprintln!("{} {msg}", settings::LABEL_ERROR);
        }
    }

    /// Print the banner for a finished submission, if it has one.
    pub fn intake_status(&self, status: &IntakeStatus) {
        match status {
            IntakeStatus::Success => {
                if let Some(msg) = status.message() {
                    self.success(msg);
                }
            }
            IntakeStatus::Error { message } => {
                if let Some(msg) = status.message() {
                    self.error(msg);
                }
                self.field("reason", message);
            }
            IntakeStatus::Idle | IntakeStatus::Submitting => {}
        }
    }

    /// Print the panel for a renderer state (to stdout).
    pub fn panel(&self, state: &RenderState) {
        let mut out = io::stdout().lock();
        for line in render_state_lines(state, self.color) {
            let _ = writeln!(out, "{line}");
        }
        let _ = out.flush();
    }
}
