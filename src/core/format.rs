//! Fixed-layout log line formatting
//!
//! A formatted entry is `MM/DD/YYYY HH:MM:SS.mm <message>`. Every numeric
//! field is left-padded with zeros to its target width and never truncated.
//!
//! Note on milliseconds: the field is padded to width 2, not 3. Values of
//! 100 or more milliseconds render with all three digits (padding never
//! truncates), but sub-10ms values come out as two characters ("04" for
//! 4ms). This matches every observed revision of the original utility and
//! is kept as documented behavior rather than silently changed.

use chrono::{Datelike, Timelike};

/// Left-pad the decimal rendering of `value` with `pad` to `width`
/// characters. Values already at or beyond `width` are returned unmodified.
pub fn pad_left(width: usize, pad: char, value: u32) -> String {
    let mut s = value.to_string();
    while s.len() < width {
        s.insert(0, pad);
    }
    s
}

/// Format the date portion: `MM/DD/YYYY`.
pub fn format_date<T: Datelike>(timestamp: &T) -> String {
    format!(
        "{}/{}/{}",
        pad_left(2, '0', timestamp.month()),
        pad_left(2, '0', timestamp.day()),
        timestamp.year()
    )
}

/// Format the time portion: `HH:MM:SS.mm` (two-digit millisecond padding).
pub fn format_time<T: Timelike>(timestamp: &T) -> String {
    format!(
        "{}:{}:{}.{}",
        pad_left(2, '0', timestamp.hour()),
        pad_left(2, '0', timestamp.minute()),
        pad_left(2, '0', timestamp.second()),
        pad_left(2, '0', timestamp.nanosecond() / 1_000_000)
    )
}

/// Produce the full formatted line for a message at the given timestamp.
///
/// Pure function: deterministic given its inputs, no side effects.
pub fn format_entry<T: Datelike + Timelike>(message: &str, timestamp: &T) -> String {
    format!(
        "{} {} {}",
        format_date(timestamp),
        format_time(timestamp),
        message
    )
}
