//! Terminal colors for lg output
//!
//! Detection respects terminal capabilities and user preferences: `NO_COLOR`
//! wins over everything, `FORCE_COLOR` re-enables colors for piped output,
//! and dumb terminals or non-TTY stdout disable them.

use std::io::IsTerminal;

use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSupport {
    None,
    Enabled,
}

impl ColorSupport {
    /// Detect color support from environment and terminal capabilities.
    #[must_use]
    pub fn detect() -> Self {
        // https://no-color.org/
        if std::env::var("NO_COLOR").is_ok() {
            return Self::None;
        }

        if std::env::var("FORCE_COLOR").is_ok() {
            return Self::Enabled;
        }

        if !std::io::stdout().is_terminal() {
            return Self::None;
        }

        if std::env::var("TERM").is_ok_and(|term| term == "dumb") {
            return Self::None;
        }

        Self::Enabled
    }

    #[must_use]
    pub const fn enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

/// A safe-as-written status word.
#[must_use]
pub fn safe(text: &str, support: ColorSupport) -> String {
    if support.enabled() {
        text.green().bold().to_string()
    } else {
        text.to_string()
    }
}

/// A safe-after-dampening status word.
#[must_use]
pub fn dampened(text: &str, support: ColorSupport) -> String {
    if support.enabled() {
        text.yellow().to_string()
    } else {
        text.to_string()
    }
}

/// An unsafe status word.
#[must_use]
pub fn danger(text: &str, support: ColorSupport) -> String {
    if support.enabled() {
        text.red().bold().to_string()
    } else {
        text.to_string()
    }
}

/// De-emphasized text, used for skipped-line notices.
#[must_use]
pub fn dim(text: &str, support: ColorSupport) -> String {
    if support.enabled() {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}
