//! Tab strip with the context indicator

use rnk::prelude::*;
use std::path::Path;
use upnext_core::Tab;

use super::panel::{Span, fit_spans, line};
use crate::ui::icons::Icons;
use crate::ui::theme::Theme;

pub struct TabCounts {
    pub active: usize,
    pub completed: usize,
}

pub fn render_tabs(
    tab: Tab,
    counts: TabCounts,
    show_all: bool,
    cwd: &str,
    width: usize,
    theme: &Theme,
) -> Element {
    let tab_span = |label: String, selected: bool| {
        if selected {
            Span::new(label, theme.accent_primary).bold()
        } else {
            Span::new(label, theme.text_muted)
        }
    };

    let mut spans = vec![
        tab_span(format!(" Active ({}) ", counts.active), tab == Tab::Active),
        Span::raw(" "),
        tab_span(
            format!(" Completed ({}) ", counts.completed),
            tab == Tab::Completed,
        ),
    ];

    if let Some(indicator) = context_indicator(show_all, cwd) {
        spans.push(Span::new(indicator, theme.accent_secondary));
    }

    line(fit_spans(spans, width))
}

fn context_indicator(show_all: bool, cwd: &str) -> Option<String> {
    if show_all {
        return Some(format!("  {} showing all tasks", Icons::GLOBAL));
    }
    if cwd.is_empty() {
        return None;
    }
    let short = Path::new(cwd)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cwd.to_string());
    Some(format!("  {} {}", Icons::FOLDER, short))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_indicator() {
        assert_eq!(
            context_indicator(true, "/home/me/work").as_deref(),
            Some("  🌐 showing all tasks")
        );
        assert_eq!(
            context_indicator(false, "/home/me/work").as_deref(),
            Some("  📁 work")
        );
        assert_eq!(context_indicator(false, "/").as_deref(), Some("  📁 /"));
        assert_eq!(context_indicator(false, ""), None);
    }
}
