//! The narrow interface to the script formatter.
//!
//! Values whose trimmed content starts with `@` are source code in an
//! embedded scripting language. The core never interprets that source; it
//! only routes it through a [`ScriptFormatter`]: pretty-printing for the
//! human-editable dialect and load-time display, compression for compact
//! JSON output.

use crate::Result;

/// Formats embedded script source.
///
/// Both operations may fail (the script engine may reject the source); how
/// a failure is handled depends on where the call sits: loading and
/// GRIF-dialect export recover by keeping the raw text, JSON-dialect export
/// propagates by default. See
/// [`FormatErrorPolicy`](crate::FormatErrorPolicy).
pub trait ScriptFormatter {
    /// Renders `script` for human reading.
    ///
    /// Multi-line output destined for GRIF-dialect export should indent
    /// every line with leading whitespace; the exporter indents the first
    /// line itself when the formatter does not.
    ///
    /// # Errors
    ///
    /// Implementations return [`Error::Format`](crate::Error::Format) (or
    /// any other variant) when the script cannot be parsed.
    fn pretty(&self, script: &str) -> Result<String>;

    /// Renders `script` as a single compact line.
    ///
    /// # Errors
    ///
    /// As for [`ScriptFormatter::pretty`].
    fn compress(&self, script: &str) -> Result<String>;
}

/// A formatter that returns script text unchanged and never fails.
///
/// The right choice when no script engine is attached, and a convenient
/// identity in tests.
///
/// # Examples
///
/// ```rust
/// use grif_data::{PassthroughFormatter, ScriptFormatter};
///
/// let formatter = PassthroughFormatter;
/// assert_eq!(formatter.pretty("@say hi").unwrap(), "@say hi");
/// assert_eq!(formatter.compress("@say hi").unwrap(), "@say hi");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct PassthroughFormatter;

impl ScriptFormatter for PassthroughFormatter {
    fn pretty(&self, script: &str) -> Result<String> {
        Ok(script.to_string())
    }

    fn compress(&self, script: &str) -> Result<String> {
        Ok(script.to_string())
    }
}
