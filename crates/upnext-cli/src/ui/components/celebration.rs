//! Milestone celebration

use rnk::prelude::*;

use super::panel::{Span, blank, center_vertically, centered_line};
use crate::ui::icons::Icons;
use crate::ui::theme::Theme;

const STARS: &str = "✨ ⭐ ✨ ⭐ ✨ ⭐ ✨";

pub fn render_celebration(message: &str, width: usize, height: usize, theme: &Theme) -> Vec<Element> {
    let banner = format!("{} MILESTONE! {}", Icons::PARTY, Icons::PARTY);
    let lines = vec![
        centered_line(vec![Span::new(STARS, theme.warn)], width),
        blank(),
        centered_line(vec![Span::new(banner, theme.highlight).bold()], width),
        blank(),
        centered_line(vec![Span::new(message, theme.accent_primary).bold()], width),
        blank(),
        centered_line(vec![Span::new(STARS, theme.warn)], width),
    ];
    center_vertically(lines, height)
}
