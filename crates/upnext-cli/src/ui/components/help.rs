//! Help bar and full help screen

use rnk::prelude::*;
use upnext_core::session::KeyMap;

use super::panel::{Span, blank, center_vertically, fit_spans, line};
use crate::ui::formatting::{display_width, pad_left};
use crate::ui::icons::Icons;
use crate::ui::theme::Theme;

const KEY_COLUMN_WIDTH: usize = 18;

/// One-line summary of the most used keys
pub fn render_help_bar(keymap: &KeyMap, width: usize, theme: &Theme) -> Element {
    let mut spans = vec![Span::raw(" ")];
    for (i, binding) in keymap.short_help().into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::new(" • ", theme.border_subtle));
        }
        spans.push(Span::new(binding.keys_label(), theme.accent_secondary).bold());
        spans.push(Span::new(format!(" {}", binding.help), theme.text_muted));
    }
    line(fit_spans(spans, width))
}

/// Full key reference, centered in the main area
pub fn render_full_help(keymap: &KeyMap, width: usize, height: usize, theme: &Theme) -> Vec<Element> {
    let rows: Vec<(String, String)> = keymap
        .help_rows()
        .into_iter()
        .map(|(keys, desc)| (pad_left(&keys, KEY_COLUMN_WIDTH), format!("  {}", desc)))
        .collect();

    let block_width = rows
        .iter()
        .map(|(keys, desc)| display_width(keys) + display_width(desc))
        .max()
        .unwrap_or(0);
    let indent = Span::raw(" ".repeat(width.saturating_sub(block_width) / 2));

    let title = format!("{}  Keyboard Shortcuts", Icons::KEYBOARD);
    let mut lines = vec![
        line(vec![
            indent.clone(),
            Span::new(title, theme.accent_primary).bold(),
        ]),
        blank(),
    ];
    for (keys, desc) in rows {
        lines.push(line(fit_spans(
            vec![
                indent.clone(),
                Span::new(keys, theme.accent_secondary).bold(),
                Span::new(desc, theme.text_primary),
            ],
            width,
        )));
    }
    lines.push(blank());
    lines.push(line(vec![
        indent,
        Span::new(close_hint(keymap), theme.text_muted),
    ]));

    center_vertically(lines, height)
}

fn close_hint(keymap: &KeyMap) -> String {
    format!(
        "Press {}, {} or {} to close",
        keymap.help.keys_label(),
        keymap.quit.keys_label(),
        keymap.confirm.keys_label()
    )
}
