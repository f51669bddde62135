/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Placeholder printed for blank cells.
pub const BLANK_MARK: &str = "-";

/// Blank cell values are shown as a grey dash, everything else unchanged.
pub fn colorize_cell(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}{BLANK_MARK}{RESET}")
    } else {
        value.to_string()
    }
}

/// Colour for a remaining-views count: red at the last view, yellow
/// close to the limit.
pub fn color_for_remaining(left: u32) -> &'static str {
    match left {
        0 | 1 => RED,
        2 => YELLOW,
        _ => GREEN,
    }
}
