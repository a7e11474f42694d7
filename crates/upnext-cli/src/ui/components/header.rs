//! Title box

use rnk::prelude::*;

use super::panel::{Span, boxed};
use crate::ui::icons::Icons;
use crate::ui::theme::Theme;

pub fn render_header(width: usize, theme: &Theme) -> Vec<Element> {
    let title = vec![
        Span::new(format!("{} upnext", Icons::LOGO), theme.accent_primary).bold(),
        Span::new(" - what's next?", theme.text_muted),
    ];
    boxed(vec![title], width, theme.border)
}
