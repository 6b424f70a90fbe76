//! Formatting utilities for CLI output.
//!
//! Diagnostics printed on stderr by the binary. The report itself is never
//! styled.

/// ANSI escape codes used for diagnostics
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Dim text
    pub const DIM: &'static str = "\x1b[2m";
    /// Red color
    pub const RED: &'static str = "\x1b[31m";
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Formats hints with muted styling
pub fn format_hint(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}
