//! Placeholder shown when the current tab has no tasks

use rnk::prelude::*;
use upnext_core::Tab;

use super::panel::{Span, blank, center_vertically, centered_line};
use crate::ui::theme::Theme;

const STARS: [&str; 4] = [
    "  ✦  ·  ✦     ·    ✦",
    "·    ✦    ·  ✦   ·  ",
    "  ·     ✦  ·    ✦  ·",
    "✦   ·  ✦    ·  ✦    ·",
];

pub fn render_empty_state(tab: Tab, width: usize, height: usize, theme: &Theme) -> Vec<Element> {
    let message = match tab {
        Tab::Active => "Nothing to do! Press 'a' to add a task.",
        Tab::Completed => "No completed tasks yet. Complete some tasks to see them here!",
    };

    let mut lines: Vec<Element> = STARS
        .iter()
        .map(|row| centered_line(vec![Span::new(*row, theme.text_subtle).dim()], width))
        .collect();
    lines.push(blank());
    lines.push(centered_line(
        vec![Span::new(message, theme.text_muted)],
        width,
    ));

    center_vertically(lines, height)
}
