//! Centralized, hardcoded UI settings for the terminal interface.
//!
//! This is the single place to tweak prompt strings, panel titles, glyphs,
//! colors, and spinner behavior.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Layout / indentation
// ---------------------------------------------------------------------------

pub const INDENT_1: &str = "  ";
pub const INDENT_2: &str = "    ";

// ---------------------------------------------------------------------------
// Prompt strings
// ---------------------------------------------------------------------------

pub const PROMPT_SYMBOL: &str = ">";
pub const PROMPT_SPACER: &str = " ";
pub const PROMPT_CONFIRM_AGAIN: &str = "Design another dress? [y/N] ";
pub const PROMPT_RETRY: &str = "Try again? [y/N] ";

// ---------------------------------------------------------------------------
// Panel titles / copy
// ---------------------------------------------------------------------------

pub const LABEL_APP: &str = "atelier";
pub const LABEL_WARNING: &str = "warning:";
pub const LABEL_ERROR: &str = "error:";

pub const TITLE_FORM: &str = "Design Your Dress";
pub const TITLE_EMPTY: &str = "Your Design Awaits";
pub const TEXT_EMPTY: &str =
    "Submit your design preferences in the form above to see your custom dress design here";
pub const TEXT_EMPTY_HINT: &str = "No design generated yet";
pub const TITLE_LOADING: &str = "Generating Your Design";
pub const TEXT_LOADING: &str = "Please wait while we create your perfect dress design...";
pub const TITLE_ERROR: &str = "Error";
pub const LABEL_TRY_AGAIN: &str = "Try Again";
pub const TITLE_SUMMARY: &str = "Your Custom Design";
pub const TITLE_FABRIC: &str = "Recommended Fabric";
pub const TITLE_INSTRUCTIONS: &str = "Making Instructions";

pub const GLYPH_SECTION_BULLET: &str = "•";
pub const GLYPH_TOOL_CHECK: &str = "☐";
pub const GLYPH_TOOL_CHECK_PLAIN: &str = "[ ]";
pub const GLYPH_SUCCESS: &str = "✓";
pub const GLYPH_SUCCESS_PLAIN: &str = "ok:";

// ---------------------------------------------------------------------------
// Spinner / progress
// ---------------------------------------------------------------------------

pub const PROGRESS_CLEAR_LINE: &str = "\r\x1b[2K";
pub const PROGRESS_FRAMES: [char; 4] = ['|', '/', '-', '\\'];
pub const PROGRESS_TICK_MS: u64 = 100;

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub const COLOR_APP_LABEL: Color = Color::Magenta;
pub const COLOR_PROMPT_SYMBOL: Color = Color::Magenta;
pub const COLOR_PROMPT_HINT: Color = Color::DarkGrey;

pub const COLOR_WARNING: Color = Color::Yellow;
pub const COLOR_ERROR: Color = Color::Red;
pub const COLOR_SUCCESS: Color = Color::Green;

pub const COLOR_SECTION_BULLET: Color = Color::DarkGrey;
pub const COLOR_SECTION_TITLE: Color = Color::Cyan;
pub const COLOR_PANEL_TEXT: Color = Color::DarkGrey;
pub const COLOR_FIELD_KEY: Color = Color::DarkGrey;
pub const COLOR_FIELD_VALUE: Color = Color::White;
pub const COLOR_TAG: Color = Color::DarkCyan;
pub const COLOR_COST: Color = Color::Green;
pub const COLOR_STEP_NUMBER: Color = Color::Magenta;

pub const COLOR_BADGE_BEGINNER: Color = Color::Green;
pub const COLOR_BADGE_INTERMEDIATE: Color = Color::Yellow;
pub const COLOR_BADGE_ADVANCED: Color = Color::Red;
pub const COLOR_BADGE_OTHER: Color = Color::Grey;

pub const COLOR_PROGRESS_FRAME: Color = Color::Magenta;
pub const COLOR_PROGRESS_LABEL: Color = Color::DarkGrey;
pub const COLOR_PROGRESS_ELAPSED: Color = Color::DarkGrey;

// ---------------------------------------------------------------------------
// Small helpers
// ---------------------------------------------------------------------------

/// Badge color for a difficulty label, matched case-insensitively.
pub fn difficulty_color(label: &str) -> Color {
    match label.to_ascii_lowercase().as_str() {
        "beginner" => COLOR_BADGE_BEGINNER,
        "intermediate" => COLOR_BADGE_INTERMEDIATE,
        "advanced" => COLOR_BADGE_ADVANCED,
        _ => COLOR_BADGE_OTHER,
    }
}

/// Checklist marker for required tools.
pub fn tool_marker(color: bool) -> &'static str {
    if color {
        GLYPH_TOOL_CHECK
    } else {
        GLYPH_TOOL_CHECK_PLAIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_badge_colors() {
        assert_eq!(difficulty_color("Beginner"), COLOR_BADGE_BEGINNER);
        assert_eq!(difficulty_color("INTERMEDIATE"), COLOR_BADGE_INTERMEDIATE);
        assert_eq!(difficulty_color("advanced"), COLOR_BADGE_ADVANCED);
        assert_eq!(difficulty_color("expert"), COLOR_BADGE_OTHER);
    }
}
