//! Terminal-safe theming (light/dark + no-color)
//!
//! Color palettes based on Catppuccin (https://catppuccin.com/)
//! - Dark theme: Catppuccin Mocha
//! - Light theme: Catppuccin Latte

use rnk::prelude::Color;
use std::sync::OnceLock;
use upnext_core::Priority;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeKind {
    Dark,
    Light,
    NoColor,
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub text_primary: Color,
    pub text_muted: Color,
    pub text_subtle: Color,

    pub accent_primary: Color,
    pub accent_secondary: Color,
    pub highlight: Color,

    pub border: Color,
    pub border_subtle: Color,

    pub ok: Color,
    pub warn: Color,
    pub err: Color,

    pub priority_high: Color,
    pub priority_medium: Color,
    pub priority_low: Color,
}

impl Theme {
    pub fn priority(&self, priority: Priority) -> Color {
        match priority {
            Priority::High => self.priority_high,
            Priority::Medium => self.priority_medium,
            Priority::Low => self.priority_low,
        }
    }

    pub fn for_kind(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Dark => dark_theme(),
            ThemeKind::Light => light_theme(),
            ThemeKind::NoColor => no_color_theme(),
        }
    }
}

static THEME: OnceLock<Theme> = OnceLock::new();

pub fn current_theme() -> &'static Theme {
    THEME.get_or_init(|| {
        let kind = detect_theme_kind(
            std::env::var_os("NO_COLOR").is_some(),
            std::env::var("UPNEXT_THEME").ok().as_deref(),
            std::env::var("COLORFGBG").ok().as_deref(),
        );
        Theme::for_kind(kind)
    })
}

/// Pick a palette from `NO_COLOR`, `UPNEXT_THEME` and `COLORFGBG`
pub fn detect_theme_kind(
    no_color: bool,
    requested: Option<&str>,
    colorfgbg: Option<&str>,
) -> ThemeKind {
    if no_color {
        return ThemeKind::NoColor;
    }

    if let Some(v) = requested {
        match v.to_ascii_lowercase().as_str() {
            "light" => return ThemeKind::Light,
            "dark" => return ThemeKind::Dark,
            "none" | "no" | "off" => return ThemeKind::NoColor,
            _ => {}
        }
    }

    // Heuristic: COLORFGBG=fg;bg where bg>=7 often means light bg
    if let Some(cfgbg) = colorfgbg {
        if let Some(bg) = cfgbg.split(';').last().and_then(|s| s.parse::<u8>().ok()) {
            if bg >= 7 {
                return ThemeKind::Light;
            }
        }
    }

    ThemeKind::Dark
}

fn dark_theme() -> Theme {
    // Catppuccin Mocha palette
    Theme {
        text_primary: Color::Rgb(205, 214, 244), // #cdd6f4
        text_muted: Color::Rgb(108, 112, 134),   // #6c7086
        text_subtle: Color::Rgb(88, 91, 112),    // #585b70

        accent_primary: Color::Rgb(203, 166, 247),   // #cba6f7 (mauve)
        accent_secondary: Color::Rgb(137, 180, 250), // #89b4fa (blue)
        highlight: Color::Rgb(245, 194, 231),        // #f5c2e7 (pink)

        border: Color::Rgb(88, 91, 112),        // #585b70
        border_subtle: Color::Rgb(69, 71, 90),  // #45475a

        ok: Color::Rgb(166, 227, 161),   // #a6e3a1 (green)
        warn: Color::Rgb(249, 226, 175), // #f9e2af (yellow)
        err: Color::Rgb(243, 139, 168),  // #f38ba8 (red)

        priority_high: Color::Rgb(243, 139, 168),   // #f38ba8 (red)
        priority_medium: Color::Rgb(249, 226, 175), // #f9e2af (yellow)
        priority_low: Color::Rgb(166, 227, 161),    // #a6e3a1 (green)
    }
}

fn light_theme() -> Theme {
    // Catppuccin Latte palette
    Theme {
        text_primary: Color::Rgb(76, 79, 105),  // #4c4f69
        text_muted: Color::Rgb(108, 111, 133),  // #6c6f85
        text_subtle: Color::Rgb(140, 143, 161), // #8c8fa1

        accent_primary: Color::Rgb(136, 57, 239),   // #8839ef (mauve)
        accent_secondary: Color::Rgb(30, 102, 245), // #1e66f5 (blue)
        highlight: Color::Rgb(234, 118, 203),       // #ea76cb (pink)

        border: Color::Rgb(140, 143, 161),        // #8c8fa1
        border_subtle: Color::Rgb(172, 176, 190), // #acb0be

        ok: Color::Rgb(64, 160, 43),   // #40a02b (green)
        warn: Color::Rgb(223, 142, 29), // #df8e1d (yellow)
        err: Color::Rgb(210, 15, 57),  // #d20f39 (red)

        priority_high: Color::Rgb(210, 15, 57),    // #d20f39 (red)
        priority_medium: Color::Rgb(223, 142, 29), // #df8e1d (yellow)
        priority_low: Color::Rgb(64, 160, 43),     // #40a02b (green)
    }
}

fn no_color_theme() -> Theme {
    Theme {
        text_primary: Color::White,
        text_muted: Color::White,
        text_subtle: Color::White,

        accent_primary: Color::White,
        accent_secondary: Color::White,
        highlight: Color::White,

        border: Color::White,
        border_subtle: Color::White,

        ok: Color::White,
        warn: Color::White,
        err: Color::White,

        priority_high: Color::White,
        priority_medium: Color::White,
        priority_low: Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_color_wins() {
        assert_eq!(
            detect_theme_kind(true, Some("light"), Some("0;15")),
            ThemeKind::NoColor
        );
    }

    #[test]
    fn test_explicit_theme() {
        assert_eq!(detect_theme_kind(false, Some("LIGHT"), None), ThemeKind::Light);
        assert_eq!(detect_theme_kind(false, Some("off"), None), ThemeKind::NoColor);
        assert_eq!(
            detect_theme_kind(false, Some("dark"), Some("0;15")),
            ThemeKind::Dark
        );
    }

    #[test]
    fn test_colorfgbg_heuristic() {
        assert_eq!(detect_theme_kind(false, None, Some("0;15")), ThemeKind::Light);
        assert_eq!(detect_theme_kind(false, None, Some("15;0")), ThemeKind::Dark);
        assert_eq!(detect_theme_kind(false, Some("weird"), None), ThemeKind::Dark);
    }
}
