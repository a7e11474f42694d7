//! Status bar component

use rnk::prelude::*;
use upnext_core::Tab;

use super::panel::{Span, fit_spans, line};
use crate::ui::icons::Icons;
use crate::ui::theme::Theme;

/// Counts shown on the left, lifetime completions on the right
pub fn render_status_bar(
    tab: Tab,
    count: usize,
    total_completed: u64,
    last_error: Option<&str>,
    width: usize,
    theme: &Theme,
) -> Element {
    let noun = match tab {
        Tab::Active => "active",
        Tab::Completed => "completed",
    };
    let count_label = if count == 1 {
        format!("1 {} task", noun)
    } else {
        format!("{} {} tasks", count, noun)
    };
    let trophy = format!("{} {} total completed", Icons::TROPHY, total_completed);

    let mut left = vec![Span::new(count_label, theme.text_primary)];
    if let Some(error) = last_error {
        left.push(Span::new("  │  ", theme.border_subtle));
        left.push(Span::new(format!("save failed: {}", error), theme.err).bold());
    }

    let right = Span::new(trophy, theme.warn).bold();
    let left = fit_spans(left, width.saturating_sub(right.width() + 5));
    let left_width: usize = left.iter().map(Span::width).sum();
    let padding = width
        .saturating_sub(left_width + right.width() + 4)
        .max(1);

    let mut spans = vec![Span::raw("  ")];
    spans.extend(left);
    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(right);
    line(fit_spans(spans, width))
}
