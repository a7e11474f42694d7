//! Task table

use rnk::prelude::*;
use upnext_core::Priority;

use super::panel::{Span, fit_spans, line};
use crate::ui::formatting::pad_to_width;
use crate::ui::icons::Icons;
use crate::ui::theme::Theme;

const ICON_WIDTH: usize = 3;
const PRIORITY_WIDTH: usize = 5;
const AGE_WIDTH: usize = 10;
/// Cells reserved for icon, priority, age and padding
const RESERVED_WIDTH: usize = 35;

/// Widths of the variable text columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub task: usize,
    pub description: usize,
    pub context: usize,
}

impl ColumnWidths {
    /// Narrow defaults, widened proportionally on wide terminals
    pub fn for_width(width: usize) -> Self {
        let available = width.saturating_sub(RESERVED_WIDTH);
        if available > 60 {
            Self {
                task: available * 45 / 100,
                description: available * 30 / 100,
                context: available * 25 / 100,
            }
        } else {
            Self {
                task: 28,
                description: 18,
                context: 13,
            }
        }
    }
}

/// One table row, already formatted for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub checked: bool,
    pub priority: Priority,
    pub text: String,
    pub description: String,
    pub context: String,
    pub age: String,
}

/// Header, rule and the rows of the current window.
///
/// At most `max_rows` rows are drawn, starting at `offset` but moved down
/// when needed so the cursor row stays visible.
pub fn render_table(
    rows: &[TableRow],
    cursor: usize,
    offset: usize,
    max_rows: usize,
    width: usize,
    theme: &Theme,
) -> Vec<Element> {
    let widths = ColumnWidths::for_width(width);
    let mut lines = Vec::with_capacity(max_rows + 2);

    let header = vec![
        Span::new(pad_to_width("", ICON_WIDTH), theme.accent_primary),
        Span::new(pad_to_width("Pri", PRIORITY_WIDTH), theme.accent_primary).bold(),
        Span::new(pad_to_width("Task", widths.task + 2), theme.accent_primary).bold(),
        Span::new(
            pad_to_width("Description", widths.description + 2),
            theme.accent_primary,
        )
        .bold(),
        Span::new(pad_to_width("Context", widths.context + 2), theme.accent_primary).bold(),
        Span::new(pad_to_width("Age", AGE_WIDTH), theme.accent_primary).bold(),
    ];
    lines.push(line(fit_spans(header, width)));
    lines.push(Text::new("─".repeat(width)).color(theme.border).into_element());

    let start = window_start(cursor, offset, max_rows);
    for (index, row) in rows.iter().enumerate().skip(start).take(max_rows) {
        lines.push(render_row(row, index == cursor, widths, width, theme));
    }
    lines
}

fn window_start(cursor: usize, offset: usize, max_rows: usize) -> usize {
    if max_rows == 0 {
        return offset;
    }
    if cursor >= offset + max_rows {
        cursor + 1 - max_rows
    } else {
        offset.min(cursor)
    }
}

fn render_row(
    row: &TableRow,
    selected: bool,
    widths: ColumnWidths,
    width: usize,
    theme: &Theme,
) -> Element {
    let marker = if selected { "›" } else { " " };
    let icon = if row.checked {
        Icons::CHECKED
    } else {
        Icons::UNCHECKED
    };
    let description = if row.description.is_empty() {
        "-"
    } else {
        row.description.as_str()
    };

    let cell = |text: &str, cell_width: usize, color: Color| {
        let span = Span::new(pad_to_width(text, cell_width), color);
        if selected { span.bold() } else { span }
    };
    let text_color = if selected {
        theme.accent_secondary
    } else {
        theme.text_primary
    };

    let mut priority = Span::new(
        pad_to_width(&format!(" {}", Icons::priority(row.priority)), PRIORITY_WIDTH),
        theme.priority(row.priority),
    );
    if row.priority == Priority::High {
        priority = priority.bold();
    }

    let spans = vec![
        cell(&format!("{}{}", marker, icon), ICON_WIDTH, text_color),
        priority,
        cell(&row.text, widths.task + 2, text_color),
        cell(description, widths.description + 2, text_color),
        cell(&row.context, widths.context + 2, theme.text_muted),
        cell(&row.age, AGE_WIDTH, theme.text_muted),
    ];
    line(fit_spans(spans, width))
}
