//! ANSI-aware text measurement, truncation, and padding.
//!
//! ANSI escape codes are preserved in output but never count toward display
//! width, so pre-styled cell content lines up with plain cells.

use console::{measure_text_width, pad_str, Alignment};

use crate::types::Align;

/// Returns the display width of a string, ignoring ANSI escape codes.
///
/// ```rust
/// use tabledata_render::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Truncates a string from the end to fit within a maximum display width.
///
/// ```rust
/// use tabledata_render::truncate_end;
///
/// assert_eq!(truncate_end("Hello World", 8, "…"), "Hello W…");
/// assert_eq!(truncate_end("Short", 10, "…"), "Short");
/// ```
pub fn truncate_end(s: &str, max_width: usize, ellipsis: &str) -> String {
    if measure_text_width(s) <= max_width {
        return s.to_string();
    }

    let ellipsis_width = measure_text_width(ellipsis);
    if max_width <= ellipsis_width {
        return truncate_to_display_width(ellipsis, max_width);
    }

    let mut result = truncate_to_display_width(s, max_width - ellipsis_width);
    result.push_str(ellipsis);
    result
}

/// Pads a string on the left (right-aligns). Never truncates.
pub fn pad_left(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Right, None).into_owned()
}

/// Pads a string on the right (left-aligns). Never truncates.
pub fn pad_right(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Left, None).into_owned()
}

/// Centers a string; odd leftover space goes on the right.
pub fn pad_center(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Center, None).into_owned()
}

/// Truncates then pads a cell so it occupies exactly `width` columns.
///
/// ```rust
/// use tabledata_render::{fit_cell, Align};
///
/// assert_eq!(fit_cell("42", 5, Align::Right), "   42");
/// assert_eq!(fit_cell("Fornecedor", 6, Align::Left), "Forne…");
/// ```
pub fn fit_cell(s: &str, width: usize, align: Align) -> String {
    let truncated = truncate_end(s, width, "…");
    match align {
        Align::Left => pad_right(&truncated, width),
        Align::Right => pad_left(&truncated, width),
        Align::Center => pad_center(&truncated, width),
    }
}

/// Keeps characters from the start while they fit, copying escape sequences.
fn truncate_to_display_width(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if measure_text_width(s) <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let mut in_escape = false;

    for c in s.chars() {
        if c == '\x1b' {
            result.push(c);
            in_escape = true;
            continue;
        }
        if in_escape {
            result.push(c);
            // CSI sequences end with a letter or '~'
            if c.is_ascii_alphabetic() || c == '~' {
                in_escape = false;
            }
            continue;
        }

        let char_width = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if current_width + char_width > max_width {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
