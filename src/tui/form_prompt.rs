//! Line-based prompts for filling the design form.

use crate::intake::{FormField, FormState};
use crate::tui::renderer::Renderer;
use std::io;
use tokio::io::{AsyncBufRead, Lines};

/// Prompt for every empty field until each one holds a valid value.
///
/// Rejected input is reported and asked again. Returns `Ok(false)` when
/// input ends before the form is complete.
pub async fn fill_form<R>(
    lines: &mut Lines<R>,
    renderer: &Renderer,
    form: &mut FormState,
) -> io::Result<bool>
where
    R: AsyncBufRead + Unpin,
{
    for field in FormField::ALL {
        if !form.missing_fields().contains(&field.key()) {
            continue;
        }
        loop {
            renderer.prompt(field.label(), field.placeholder());
            let Some(line) = lines.next_line().await? else {
                return Ok(false);
            };
            match form.set_field(field, &line) {
                Ok(()) => break,
                Err(err) => renderer.warn(&err.to_string()),
            }
        }
    }
    Ok(true)
}

/// Ask a yes/no question; anything but `y`/`yes` (or end of input) is no.
pub async fn confirm<R>(lines: &mut Lines<R>, renderer: &Renderer, question: &str) -> io::Result<bool>
where
    R: AsyncBufRead + Unpin,
{
    renderer.ask(question);
    let answer = lines.next_line().await?.unwrap_or_default();
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
