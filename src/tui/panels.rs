//! Text layout for the design display panels.
//!
//! Layout is kept separate from writing so every panel can be checked as
//! plain lines in tests.

use crate::design::DesignResult;
use crate::renderer::RenderState;
use crate::tui::settings;
use crossterm::style::{Color, Stylize};

/// Lines for whatever the renderer currently shows.
pub fn render_state_lines(state: &RenderState, color: bool) -> Vec<String> {
    match state {
        RenderState::Empty => empty_panel(color),
        RenderState::Loading => loading_panel(color),
        RenderState::Error { message, .. } => error_panel(message, color),
        RenderState::Ready(result) => design_panels(result, color),
    }
}

pub fn empty_panel(color: bool) -> Vec<String> {
    vec![
        title(settings::TITLE_EMPTY, color),
        text(settings::TEXT_EMPTY, color),
        text(settings::TEXT_EMPTY_HINT, color),
    ]
}

pub fn loading_panel(color: bool) -> Vec<String> {
    vec![
        title(settings::TITLE_LOADING, color),
        text(settings::TEXT_LOADING, color),
    ]
}

pub fn error_panel(message: &str, color: bool) -> Vec<String> {
    let action = format!("[{}]", settings::LABEL_TRY_AGAIN);
    vec![
        title(settings::TITLE_ERROR, color),
        format!("{}{}", settings::INDENT_1, paint(message, settings::COLOR_ERROR, color)),
        format!("{}{}", settings::INDENT_1, paint(&action, settings::COLOR_FIELD_VALUE, color)),
    ]
}

/// Summary, fabric and instruction panels separated by blank lines.
pub fn design_panels(result: &DesignResult, color: bool) -> Vec<String> {
    let mut lines = summary_panel(result, color);
    lines.push(String::new());
    lines.extend(fabric_panel(result, color));
    lines.push(String::new());
    lines.extend(instructions_panel(result, color));
    lines
}

pub fn summary_panel(result: &DesignResult, color: bool) -> Vec<String> {
    let plan = &result.making_details;
    vec![
        title(settings::TITLE_SUMMARY, color),
        text(
            &format!(
                "{} dress in {} style",
                capitalize_first(&result.design_type),
                result.style
            ),
            color,
        ),
        field("Photo", &result.design_photo, color),
        field("Color", &result.color, color),
        field("Style", &result.style, color),
        field(
            "Measurements",
            &format!("{}cm, {}kg", result.height, result.weight),
            color,
        ),
        field("Est. Time", &plan.estimated_time, color),
    ]
}

pub fn fabric_panel(result: &DesignResult, color: bool) -> Vec<String> {
    let fabric = &result.fabric_suggestion;
    let tags = fabric
        .characteristics
        .iter()
        .map(|c| paint(&format!("[{c}]"), settings::COLOR_TAG, color))
        .collect::<Vec<_>>()
        .join(" ");
    vec![
        title(settings::TITLE_FABRIC, color),
        format!(
            "{}{}",
            settings::INDENT_1,
            paint(&fabric.fabric_type, settings::COLOR_FIELD_VALUE, color)
        ),
        text(&fabric.description, color),
        format!("{}{} {tags}", settings::INDENT_1, key("Characteristics:", color)),
        format!(
            "{}{} {}",
            settings::INDENT_1,
            key("Estimated Fabric Cost:", color),
            paint(&format!("${}", fabric.estimated_cost), settings::COLOR_COST, color)
        ),
    ]
}

pub fn instructions_panel(result: &DesignResult, color: bool) -> Vec<String> {
    let plan = &result.making_details;
    let difficulty = plan.difficulty.label();
    let mut lines = vec![
        title(settings::TITLE_INSTRUCTIONS, color),
        format!(
            "{}{} {}",
            settings::INDENT_1,
            key("Difficulty Level:", color),
            badge(difficulty, settings::difficulty_color(difficulty), color)
        ),
        format!("{}{}", settings::INDENT_1, key("Required Tools:", color)),
    ];
    let marker = settings::tool_marker(color);
    lines.extend(
        plan.required_tools
            .iter()
            .map(|tool| format!("{}{marker} {tool}", settings::INDENT_2)),
    );

    lines.push(format!(
        "{}{}",
        settings::INDENT_1,
        key("Calculated Pattern Measurements:", color)
    ));
    lines.extend(plan.measurements.entries().iter().map(|(name, cm)| {
        format!(
            "{}{} {}",
            settings::INDENT_2,
            key(&format!("{name}:"), color),
            paint(&format!("{cm}cm"), settings::COLOR_FIELD_VALUE, color)
        )
    }));

    lines.push(format!(
        "{}{}",
        settings::INDENT_1,
        key("Step-by-Step Instructions:", color)
    ));
    lines.extend(plan.instructions.iter().enumerate().map(|(idx, step)| {
        format!(
            "{}{} {step}",
            settings::INDENT_2,
            paint(&format!("{}.", idx + 1), settings::COLOR_STEP_NUMBER, color)
        )
    }));

    lines.push(field("Estimated Completion Time", &plan.estimated_time, color));
    lines
}

/// Uppercase the first character only, leaving the rest untouched.
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn paint(value: &str, fg: Color, color: bool) -> String {
    if color {
        value.with(fg).to_string()
    } else {
        value.to_string()
    }
}

fn title(value: &str, color: bool) -> String {
    if color {
        format!(
            "{} {}",
            settings::GLYPH_SECTION_BULLET.with(settings::COLOR_SECTION_BULLET),
            value.with(settings::COLOR_SECTION_TITLE).bold()
        )
    } else {
        format!("{value}:")
    }
}

fn text(value: &str, color: bool) -> String {
    format!("{}{}", settings::INDENT_1, paint(value, settings::COLOR_PANEL_TEXT, color))
}

fn key(value: &str, color: bool) -> String {
    paint(value, settings::COLOR_FIELD_KEY, color)
}

fn field(name: &str, value: &str, color: bool) -> String {
    format!(
        "{}{} {}",
        settings::INDENT_1,
        key(&format!("{name}:"), color),
        paint(value, settings::COLOR_FIELD_VALUE, color)
    )
}

fn badge(value: &str, bg: Color, color: bool) -> String {
    if color {
        format!(" {value} ").black().on(bg).to_string()
    } else {
        format!("[{value}]")
    }
}
