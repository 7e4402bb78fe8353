//! ANSI styling for command output.
//!
//! The session renders escape sequences itself, so output is always
//! styled regardless of where the process's own stdout points.

pub const BOLD: &str = "1";
pub const BLUE: &str = "34";
pub const GREEN: &str = "32";

/// Wrap `text` in the SGR code `code` followed by a reset.
pub fn paint(code: &str, text: &str) -> String {
    format!("\x1b[{}m{}\x1b[0m", code, text)
}
