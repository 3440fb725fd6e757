//! Display-width measurement.
//!
//! Width here is the count of Unicode scalar values in a string — not its
//! byte length, and not its terminal cell width (wide CJK glyphs count as
//! one). Grid layout only needs widths that are consistent between the
//! fitter and the renderer, and codepoint counting gives that without any
//! assumptions about the output device.

/// Display width of a single item.
///
/// # Example
///
/// ```rust
/// use colgrid::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("héllo"), 5); // codepoints, not bytes
/// assert_eq!(display_width(""), 0);
/// ```
pub fn display_width(s: &str) -> usize {
    s.chars().count()
}

/// Display widths of every item, parallel to the input.
pub fn display_widths<S: AsRef<str>>(items: &[S]) -> Vec<usize> {
    items.iter().map(|s| display_width(s.as_ref())).collect()
}
