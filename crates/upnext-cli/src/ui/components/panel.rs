//! Styled text runs and rounded boxes
//!
//! Every screen section is a list of single-line elements so the screen
//! can count rows and pin the status bar to the bottom.

use rnk::prelude::*;

use crate::ui::formatting::{display_width, truncate_to_width};

// Alias rnk's Box to avoid conflict with std::boxed::Box
use rnk::prelude::Box as RnkBox;

/// A run of text with one style
#[derive(Clone, Debug)]
pub struct Span {
    pub text: String,
    color: Option<Color>,
    bold: bool,
    dim: bool,
}

impl Span {
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            bold: false,
            dim: false,
        }
    }

    pub fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            color: Some(color),
            ..Self::raw(text)
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn width(&self) -> usize {
        display_width(&self.text)
    }

    fn with_text(&self, text: String) -> Self {
        Self {
            text,
            ..self.clone()
        }
    }

    pub fn into_element(self) -> Element {
        let mut text = Text::new(self.text);
        if let Some(color) = self.color {
            text = text.color(color);
        }
        if self.bold {
            text = text.bold();
        }
        if self.dim {
            text = text.dim();
        }
        text.into_element()
    }
}

/// One screen row built from spans
pub fn line(spans: Vec<Span>) -> Element {
    let mut row = RnkBox::new().flex_direction(FlexDirection::Row);
    for span in spans {
        row = row.child(span.into_element());
    }
    row.into_element()
}

/// An empty row
pub fn blank() -> Element {
    Text::new(" ").into_element()
}

/// A row with `spans` centered within `width` cells
pub fn centered_line(spans: Vec<Span>, width: usize) -> Element {
    let spans = fit_spans(spans, width);
    let used: usize = spans.iter().map(Span::width).sum();
    let mut row = vec![Span::raw(" ".repeat(width.saturating_sub(used) / 2))];
    row.extend(spans);
    line(row)
}

/// Cut spans so their total width stays within `max_width`
pub fn fit_spans(spans: Vec<Span>, max_width: usize) -> Vec<Span> {
    let total: usize = spans.iter().map(Span::width).sum();
    if total <= max_width {
        return spans;
    }

    let mut out = Vec::new();
    let mut remaining = max_width;
    for span in spans {
        if remaining == 0 {
            break;
        }
        if span.width() <= remaining {
            remaining -= span.width();
            out.push(span);
        } else {
            let cut = truncate_to_width(&span.text, remaining);
            remaining = 0;
            out.push(span.with_text(cut));
        }
    }
    out
}

/// Draw `rows` inside a rounded border `width` cells wide
pub fn boxed(rows: Vec<Vec<Span>>, width: usize, border: Color) -> Vec<Element> {
    let width = width.max(6);
    let inner = width - 4;
    let rule = "─".repeat(width - 2);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(Text::new(format!("╭{}╮", rule)).color(border).into_element());

    for spans in rows {
        let mut spans = fit_spans(spans, inner);
        let used: usize = spans.iter().map(Span::width).sum();
        let mut row = vec![Span::new("│ ", border)];
        row.append(&mut spans);
        row.push(Span::raw(" ".repeat(inner - used)));
        row.push(Span::new(" │", border));
        lines.push(line(row));
    }

    lines.push(Text::new(format!("╰{}╯", rule)).color(border).into_element());
    lines
}

/// Rows of the given height, with `content` centered vertically
pub fn center_vertically(content: Vec<Element>, height: usize) -> Vec<Element> {
    let top = height.saturating_sub(content.len()) / 2;
    let mut lines: Vec<Element> = (0..top).map(|_| blank()).collect();
    lines.extend(content);
    lines
}
