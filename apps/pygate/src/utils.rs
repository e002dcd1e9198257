//! Shared terminal helpers for stderr message prefixes.
//!
//! Color is applied only when `NO_COLOR` is unset; JSON payloads on stdout
//! are never colored, so these prefixes are stderr-only.

use owo_colors::OwoColorize;

fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Prefix for fatal messages before a non-zero exit.
pub fn error_prefix() -> String {
    if colors_enabled() {
        "✖ error:".red().bold().to_string()
    } else {
        "✖ error:".to_string()
    }
}

/// Prefix for advisory messages (degraded runs, fallbacks).
pub fn note_prefix() -> String {
    if colors_enabled() {
        "▲ note:".yellow().bold().to_string()
    } else {
        "▲ note:".to_string()
    }
}

/// Prefix for informational messages.
pub fn info_prefix() -> String {
    if colors_enabled() {
        "◆ info:".blue().bold().to_string()
    } else {
        "◆ info:".to_string()
    }
}
