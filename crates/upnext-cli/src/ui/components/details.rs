//! Panel with the full text of the selected task

use chrono::{DateTime, Utc};
use rnk::prelude::*;
use upnext_core::{ArchivedTodo, Priority, Todo, display_context};

use super::panel::{Span, boxed};
use crate::ui::formatting::format_age;
use crate::ui::icons::Icons;
use crate::ui::theme::Theme;

/// Where the selected task sits in the visible list
#[derive(Debug, Clone, Copy)]
pub struct ListPosition {
    pub index: usize,
    pub total: usize,
}

pub fn render_active_details(
    item: &Todo,
    position: ListPosition,
    cwd: &str,
    now: DateTime<Utc>,
    width: usize,
    theme: &Theme,
) -> Vec<Element> {
    let mut rows = vec![
        vec![Span::new(
            format!("Task {} of {}", position.index + 1, position.total),
            theme.text_muted,
        )],
        Vec::new(),
        vec![Span::new(item.text.clone(), theme.accent_primary).bold()],
    ];
    push_description(&mut rows, &item.description, theme);
    rows.push(Vec::new());

    rows.push(vec![
        priority_span(item.priority, theme),
        separator(theme),
        Span::new(
            format!("Created: {}", format_age(item.created, now)),
            theme.text_muted,
        ),
        separator(theme),
        Span::new(display_context(&item.context, cwd), theme.accent_secondary),
    ]);

    boxed(rows, width, theme.accent_primary)
}

pub fn render_completed_details(
    item: &ArchivedTodo,
    position: ListPosition,
    cwd: &str,
    now: DateTime<Utc>,
    width: usize,
    theme: &Theme,
) -> Vec<Element> {
    let mut rows = vec![
        vec![Span::new(
            format!("Completed task {} of {}", position.index + 1, position.total),
            theme.text_muted,
        )],
        Vec::new(),
        vec![
            Span::new(format!("{} ", Icons::DONE), theme.ok),
            Span::new(item.text.clone(), theme.accent_primary).bold(),
        ],
    ];
    push_description(&mut rows, &item.description, theme);
    rows.push(Vec::new());

    rows.push(vec![
        Span::new(
            format!("Completed: {}", format_age(item.completed, now)),
            theme.ok,
        ),
        separator(theme),
        Span::new(
            format!("Created: {}", format_age(item.created, now)),
            theme.text_muted,
        ),
        separator(theme),
        Span::new(display_context(&item.context, cwd), theme.accent_secondary),
    ]);

    rows.push(Vec::new());
    rows.push(vec![Span::new(
        "Press 'u' to move back to active tasks",
        theme.text_muted,
    )]);

    boxed(rows, width, theme.accent_primary)
}

fn push_description(rows: &mut Vec<Vec<Span>>, description: &str, theme: &Theme) {
    if description.is_empty() {
        return;
    }
    rows.push(Vec::new());
    rows.push(vec![Span::new("Description:", theme.text_muted).bold()]);
    rows.push(vec![Span::new(description.to_string(), theme.text_primary)]);
}

fn priority_span(priority: Priority, theme: &Theme) -> Span {
    Span::new(
        format!("{} {} priority", Icons::priority(priority), priority.label()),
        theme.priority(priority),
    )
}

fn separator(theme: &Theme) -> Span {
    Span::new("  •  ", theme.text_subtle)
}
