//! Full-screen composition of a session
//!
//! Top to bottom: header, tabs, main area, spacer, help bar, status bar.
//! The screen always fills exactly `height` rows so the status bar sits on
//! the last line.

use chrono::{DateTime, Utc};
use rnk::prelude::*;
use upnext_core::{Mode, Session, Tab, display_context};

use super::components::panel::blank;
use super::components::{
    ListPosition, TabCounts, TableRow, render_active_details, render_celebration,
    render_completed_details, render_empty_state, render_full_help, render_header,
    render_help_bar, render_input_form, render_status_bar, render_table, render_tabs,
};
use super::formatting::format_age;
use super::theme::Theme;

// Alias rnk's Box to avoid conflict with std::boxed::Box
use rnk::prelude::Box as RnkBox;

/// Rows above the main area: header box, blank, tabs, blank
const TOP_ROWS: usize = 6;
/// Table header and rule
const TABLE_CHROME_ROWS: usize = 2;

/// Render the whole screen as one column element
pub fn render_screen(
    session: &Session,
    width: u16,
    height: u16,
    now: DateTime<Utc>,
    theme: &Theme,
) -> Element {
    let mut column = RnkBox::new().flex_direction(FlexDirection::Column);
    for row in screen_lines(session, width as usize, height as usize, now, theme) {
        column = column.child(row);
    }
    column.into_element()
}

/// One element per screen row
pub fn screen_lines(
    session: &Session,
    width: usize,
    height: usize,
    now: DateTime<Utc>,
    theme: &Theme,
) -> Vec<Element> {
    let mut lines = render_header(width, theme);
    lines.push(blank());
    lines.push(render_tabs(
        session.tab(),
        TabCounts {
            active: session.visible_todos().len(),
            completed: session.visible_archive().len(),
        },
        session.show_all(),
        session.cwd(),
        width,
        theme,
    ));
    lines.push(blank());

    let show_help_bar = !matches!(session.mode(), Mode::Help | Mode::Input(_));
    let footer_rows = if show_help_bar { 2 } else { 1 };
    let main_height = height.saturating_sub(TOP_ROWS + footer_rows);

    let mut main = main_area(session, width, main_height, now, theme);
    main.truncate(main_height);
    let used = lines.len() + main.len();
    lines.extend(main);

    for _ in used..height.saturating_sub(footer_rows) {
        lines.push(blank());
    }

    if show_help_bar {
        lines.push(render_help_bar(session.keymap(), width, theme));
    }
    lines.push(render_status_bar(
        session.tab(),
        session.visible_len(),
        session.dataset().stats.total_completed,
        session.last_error(),
        width,
        theme,
    ));
    lines
}

fn main_area(
    session: &Session,
    width: usize,
    height: usize,
    now: DateTime<Utc>,
    theme: &Theme,
) -> Vec<Element> {
    match session.mode() {
        Mode::Celebration { message } => render_celebration(message, width, height, theme),
        Mode::Help => render_full_help(session.keymap(), width, height, theme),
        Mode::Input(form) => {
            let form_lines = render_input_form(form, width, theme);
            let table_rows = height
                .saturating_sub(form_lines.len() + 1 + TABLE_CHROME_ROWS)
                .min(session.page_size());

            let mut lines = Vec::new();
            if table_rows > 0 {
                lines.extend(table(session, table_rows, width, now, theme));
                lines.push(blank());
            }
            lines.extend(form_lines);
            lines
        }
        Mode::Normal | Mode::Confirm => {
            if session.visible_len() == 0 {
                return render_empty_state(session.tab(), width, height, theme);
            }

            let table_rows = height
                .saturating_sub(TABLE_CHROME_ROWS)
                .min(session.page_size());
            let mut lines = table(session, table_rows, width, now, theme);

            let details = details(session, width, now, theme);
            if lines.len() + 1 + details.len() <= height {
                lines.push(blank());
                lines.extend(details);
            }
            lines
        }
    }
}

fn table(
    session: &Session,
    max_rows: usize,
    width: usize,
    now: DateTime<Utc>,
    theme: &Theme,
) -> Vec<Element> {
    let rows = table_rows(session, now);
    render_table(
        &rows,
        session.cursor(),
        session.scroll_offset(),
        max_rows,
        width,
        theme,
    )
}

/// Rows for the current tab; completed rows show their completion age
fn table_rows(session: &Session, now: DateTime<Utc>) -> Vec<TableRow> {
    let cwd = session.cwd();
    match session.tab() {
        Tab::Active => session
            .visible_todos()
            .into_iter()
            .map(|item| TableRow {
                checked: false,
                priority: item.priority,
                text: item.text.clone(),
                description: item.description.clone(),
                context: display_context(&item.context, cwd),
                age: format_age(item.created, now),
            })
            .collect(),
        Tab::Completed => session
            .visible_archive()
            .into_iter()
            .map(|item| TableRow {
                checked: true,
                priority: item.priority,
                text: item.text.clone(),
                description: item.description.clone(),
                context: display_context(&item.context, cwd),
                age: format_age(item.completed, now),
            })
            .collect(),
    }
}

fn details(session: &Session, width: usize, now: DateTime<Utc>, theme: &Theme) -> Vec<Element> {
    let position = ListPosition {
        index: session.cursor(),
        total: session.visible_len(),
    };
    if let Some(item) = session.selected_todo() {
        return render_active_details(item, position, session.cwd(), now, width, theme);
    }
    if let Some(item) = session.selected_archived() {
        return render_completed_details(item, position, session.cwd(), now, width, theme);
    }
    Vec::new()
}
