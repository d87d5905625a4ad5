//! Padding helpers for fixed-width text columns.
//!
//! Padding is advisory: text at or beyond the requested width is returned
//! unchanged, never truncated, since identifiers may legitimately exceed the
//! nominal column width. Widths count `char`s, not terminal display columns.
//!
//! Both functions accept `&str` or `Option<&str>`; `None` pads as an empty
//! string.
//!
//! ```rust
//! use dbreportlib::pad::{pad_left, pad_right};
//!
//! assert_eq!(pad_right("id", 5), "id   ");
//! assert_eq!(pad_left("42", 5), "   42");
//! assert_eq!(pad_right(None, 3), "   ");
//! assert_eq!(pad_right("identifier", 4), "identifier");
//! ```

/// Append spaces until `text` is `width` chars long.
pub fn pad_right<'a>(text: impl Into<Option<&'a str>>, width: usize) -> String {
    let text = text.into().unwrap_or_default();
    let fill = width.saturating_sub(text.chars().count());
    let mut padded = String::with_capacity(text.len() + fill);
    padded.push_str(text);
    padded.push_str(&" ".repeat(fill));
    padded
}

/// Prepend spaces until `text` is `width` chars long.
pub fn pad_left<'a>(text: impl Into<Option<&'a str>>, width: usize) -> String {
    let text = text.into().unwrap_or_default();
    let fill = width.saturating_sub(text.chars().count());
    let mut padded = String::with_capacity(text.len() + fill);
    padded.push_str(&" ".repeat(fill));
    padded.push_str(text);
    padded
}
