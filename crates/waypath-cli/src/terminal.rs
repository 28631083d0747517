//! Terminal styling and color utilities.
//!
//! Colors are only emitted when stdout is an interactive terminal that has
//! not opted out through `NO_COLOR` or `TERM=dumb`.

use std::io::IsTerminal;

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bright bold white for headings and location names.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for menu numbering and secondary text.
    pub const GRAY: &str = "\x1b[90m";
    /// Green for totals.
    pub const GREEN: &str = "\x1b[32m";
    /// Red for failures.
    pub const RED: &str = "\x1b[31m";
}

/// A collection of resolved color codes, either actual ANSI sequences
/// or empty strings when color is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub heading: &'static str,
    pub muted: &'static str,
    pub total: &'static str,
    pub error: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            heading: colors::WHITE_BOLD,
            muted: colors::GRAY,
            total: colors::GREEN,
            error: colors::RED,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            heading: "",
            muted: "",
            total: "",
            error: "",
        }
    }

    /// Create a palette based on terminal capabilities.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check if stdout should receive ANSI color codes.
///
/// This function respects:
/// - The `NO_COLOR` environment variable (https://no-color.org/)
/// - The `TERM=dumb` convention for non-capable terminals
/// - Redirected output (pipes and files never get colors)
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    std::io::stdout().is_terminal()
}
