//! Glyphs used by the interactive list

use upnext_core::Priority;

pub struct Icons;

impl Icons {
    // === Application ===
    pub const LOGO: &'static str = "⚡";
    pub const TROPHY: &'static str = "🏆";

    // === Rows ===
    pub const UNCHECKED: &'static str = "○";
    pub const CHECKED: &'static str = "●";
    pub const DONE: &'static str = "✓";

    // === Context ===
    pub const GLOBAL: &'static str = "🌐";
    pub const FOLDER: &'static str = "📁";

    // === Priority ===
    pub const PRIORITY_HIGH: &'static str = "▲";
    pub const PRIORITY_MEDIUM: &'static str = "◆";
    pub const PRIORITY_LOW: &'static str = "▽";

    // === Decorations ===
    pub const SPARKLES: &'static str = "✨";
    pub const PARTY: &'static str = "🎉";
    pub const KEYBOARD: &'static str = "⌨️";

    pub fn priority(priority: Priority) -> &'static str {
        match priority {
            Priority::High => Self::PRIORITY_HIGH,
            Priority::Medium => Self::PRIORITY_MEDIUM,
            Priority::Low => Self::PRIORITY_LOW,
        }
    }
}
