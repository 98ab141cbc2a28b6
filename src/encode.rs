//! Value escaping for quoted output.
//!
//! [`encode`] is the inverse of the scanner's string decoding, restricted to
//! the escapes it emits: printable ASCII passes through, `"` and `\` are
//! backslash-escaped, and everything else becomes `\uXXXX` with four
//! lowercase hex digits (characters outside the Basic Multilingual Plane
//! emit a surrogate pair). The encoder deliberately never emits the `\r`,
//! `\n`, `\t` shorthand escapes the scanner accepts: control characters
//! always take the `\uXXXX` form.
//!
//! The one exception is script values: a carriage return, newline or tab
//! inside a value whose trimmed content starts with `@` is written
//! literally, preserving the script's own formatting.

use std::fmt::Write as _;

/// Returns `true` when `value` is script source: its content after leading
/// whitespace starts with `@`.
///
/// # Examples
///
/// ```rust
/// use grif_data::is_script_value;
///
/// assert!(is_script_value("@say hello"));
/// assert!(is_script_value("  @say hello"));
/// assert!(!is_script_value("say @loud"));
/// ```
#[must_use]
pub fn is_script_value(value: &str) -> bool {
    value.trim_start().starts_with('@')
}

/// Escapes `value` for emission inside a quoted string.
///
/// Decoding the result with
/// [`Scanner::read_quoted_string`](crate::Scanner::read_quoted_string)
/// yields `value` back exactly, for arbitrary Unicode and control
/// characters.
///
/// # Examples
///
/// ```rust
/// use grif_data::encode;
///
/// assert_eq!(encode("a\"b"), "a\\\"b");
/// assert_eq!(encode("line\nbreak"), "line\\u000abreak");
/// assert_eq!(encode("@scripts\nkeep breaks"), "@scripts\nkeep breaks");
/// ```
#[must_use]
pub fn encode(value: &str) -> String {
    let script = is_script_value(value);
    let mut result = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' | '\\' => {
                result.push('\\');
                result.push(c);
            }
            '\x20'..='\x7e' => result.push(c),
            '\r' | '\n' | '\t' if script => result.push(c),
            _ => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    // Infallible: writing into a String cannot fail.
                    let _ = write!(result, "\\u{unit:04x}");
                }
            }
        }
    }
    result
}
