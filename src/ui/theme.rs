use crossterm::style::Color;

/// Design tokens for deploy-site terminal output.
///
/// Only 5 semantic colors; every icon comes from this module.
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PROGRESS: &str = "●";
    pub const SKIPPED: &str = "○";
    pub const UPLOAD: &str = "↑";
    pub const DEPLOY: &str = "📦";
    pub const CDN: &str = "📡";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const PROGRESS: &str = "[..]";
    pub const SKIPPED: &str = "[ ]";
    pub const UPLOAD: &str = "[^]";
    pub const DEPLOY: &str = "[DEPLOY]";
    pub const CDN: &str = "[CDN]";
}
