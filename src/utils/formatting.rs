//! Formatting utilities used for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Pad to `width` terminal columns; `visible` is the text without escapes.
pub fn pad_visible(rendered: &str, visible: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(visible);
    format!("{}{}", rendered, " ".repeat(width.saturating_sub(w)))
}

pub fn pad_right(s: &str, width: usize) -> String {
    pad_visible(s, s, width)
}
