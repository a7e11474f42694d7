//! Add-task dialog

use rnk::prelude::*;
use upnext_core::Priority;
use upnext_core::session::{AddForm, FormField, TextField};

use super::panel::{Span, boxed};
use crate::ui::formatting::{pad_to_width, tail_to_width};
use crate::ui::icons::Icons;
use crate::ui::theme::Theme;

const LABEL_WIDTH: usize = 12;
const FIELD_WIDTH: usize = 40;
const MIN_DIALOG_WIDTH: usize = 30;

pub fn render_input_form(form: &AddForm, width: usize, theme: &Theme) -> Vec<Element> {
    let dialog_width = width.saturating_sub(10).max(MIN_DIALOG_WIDTH).min(width);

    let mut title_row = vec![label("Task:", form.focus == FormField::Title, theme)];
    title_row.extend(field_spans(&form.title, form.focus == FormField::Title, theme));

    let mut description_row = vec![label(
        "Description:",
        form.focus == FormField::Description,
        theme,
    )];
    description_row.extend(field_spans(
        &form.description,
        form.focus == FormField::Description,
        theme,
    ));

    let mut priority_row = vec![label("Priority:", form.focus == FormField::Priority, theme)];
    priority_row.extend(priority_selector(
        form.priority,
        form.focus == FormField::Priority,
        theme,
    ));

    let rows = vec![
        vec![Span::new(format!("{} Add New Task", Icons::SPARKLES), theme.accent_primary).bold()],
        Vec::new(),
        title_row,
        Vec::new(),
        description_row,
        Vec::new(),
        priority_row,
        Vec::new(),
        vec![Span::new(
            "tab: next field • enter: submit • esc: cancel",
            theme.text_muted,
        )],
    ];

    boxed(rows, dialog_width, theme.accent_primary)
}

fn label(text: &str, focused: bool, theme: &Theme) -> Span {
    let padded = pad_to_width(text, LABEL_WIDTH);
    if focused {
        Span::new(padded, theme.highlight).bold()
    } else {
        Span::new(padded, theme.text_muted)
    }
}

fn field_spans(field: &TextField, focused: bool, theme: &Theme) -> Vec<Span> {
    let prompt = Span::new(
        "> ",
        if focused {
            theme.highlight
        } else {
            theme.text_subtle
        },
    );

    if field.is_empty() {
        let placeholder = Span::new(field.placeholder(), theme.text_subtle);
        return if focused {
            vec![prompt, Span::new("█", theme.highlight), placeholder]
        } else {
            vec![prompt, placeholder]
        };
    }

    if !focused {
        return vec![prompt, Span::new(field.value(), theme.text_primary)];
    }

    let (before, after) = field.split_at_cursor();
    let before = Span::new(tail_to_width(&before, FIELD_WIDTH), theme.text_primary);
    let mut rest = after.chars();
    match rest.next() {
        Some(under_cursor) => vec![
            prompt,
            before,
            Span::new(under_cursor.to_string(), theme.highlight).bold(),
            Span::new(rest.as_str().to_string(), theme.text_primary),
        ],
        None => vec![prompt, before, Span::new("█", theme.highlight)],
    }
}

fn priority_selector(selected: Priority, focused: bool, theme: &Theme) -> Vec<Span> {
    let mut spans = Vec::new();
    for priority in Priority::ALL {
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        if priority == selected {
            let color = if focused {
                theme.highlight
            } else {
                theme.accent_primary
            };
            spans.push(Span::new(format!("[{}]", priority.label()), color).bold());
        } else {
            spans.push(Span::new(
                format!(" {} ", priority.label()),
                theme.priority(priority),
            ));
        }
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::{Theme, ThemeKind};
    use upnext_core::Key;

    fn text(spans: &[Span]) -> String {
        spans.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_placeholder_when_empty() {
        let theme = Theme::for_kind(ThemeKind::NoColor);
        let form = AddForm::new(Priority::Medium);
        assert_eq!(
            text(&field_spans(&form.title, true, &theme)),
            "> █What needs to be done?"
        );
        assert_eq!(
            text(&field_spans(&form.description, false, &theme)),
            "> Optional description..."
        );
    }

    #[test]
    fn test_cursor_inside_value() {
        let theme = Theme::for_kind(ThemeKind::NoColor);
        let mut form = AddForm::new(Priority::Medium);
        form.title.set_value("milk");
        form.title.handle_key(Key::Left);
        let spans = field_spans(&form.title, true, &theme);
        assert_eq!(text(&spans), "> milk");
        assert_eq!(spans[2].text, "k");
    }

    #[test]
    fn test_priority_selector_marks_selection() {
        let theme = Theme::for_kind(ThemeKind::NoColor);
        assert_eq!(
            text(&priority_selector(Priority::High, true, &theme)),
            " Low   Medium  [High]"
        );
    }
}
