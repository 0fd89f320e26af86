//! core::text
//!
//! Small ASCII text helpers shared by the parsers.

/// Collapse every run of whitespace into a single space.
///
/// Leading and trailing whitespace is removed.
///
/// # Example
///
/// ```
/// use objectid::core::text::condense_whitespace;
///
/// assert_eq!(condense_whitespace("  {iso(1)\t\n  3 }  "), "{iso(1) 3 }");
/// ```
pub fn condense_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_lower(c: char) -> bool {
    c.is_ascii_lowercase()
}

/// True for characters allowed inside an identifier: ASCII letters, digits and `-`.
pub fn is_identifier_char(c: char) -> bool {
    is_letter(c) || is_digit(c) || c == '-'
}
