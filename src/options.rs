//! Configuration options for export.
//!
//! This module provides types to customize output:
//!
//! - [`OutputMode`]: which dialect the exporter writes
//! - [`FormatErrorPolicy`]: what happens when the script formatter fails
//! - [`ExportOptions`]: the two combined, with per-mode defaults
//!
//! ## Examples
//!
//! ```rust
//! use grif_data::{ExportOptions, FormatErrorPolicy, OutputMode};
//!
//! // Human-editable output; formatter failures fall back to raw text.
//! let options = ExportOptions::grif();
//! assert_eq!(options.mode, OutputMode::Grif);
//! assert_eq!(options.on_format_error, FormatErrorPolicy::Fallback);
//!
//! // Strict JSON output; formatter failures abort the export.
//! let options = ExportOptions::json();
//! assert_eq!(options.on_format_error, FormatErrorPolicy::Propagate);
//!
//! // Either default can be overridden explicitly.
//! let options = ExportOptions::json().with_format_error_policy(FormatErrorPolicy::Fallback);
//! ```

/// The dialect an export writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Line-oriented, unescaped, favors hand editing.
    #[default]
    Grif,
    /// Quote-delimited, escaped, valid JSON object.
    Json,
}

/// What to do when the script formatter fails on a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatErrorPolicy {
    /// Keep the unformatted value and continue (logged as a warning).
    Fallback,
    /// Abort the export with [`Error::Format`](crate::Error::Format).
    Propagate,
}

/// Configuration for one export call.
///
/// Constructed per mode so each mode carries its conventional error policy;
/// the policy stays overridable so the difference is a visible choice
/// rather than a hidden code path.
#[derive(Clone, Debug)]
pub struct ExportOptions {
    pub mode: OutputMode,
    pub on_format_error: FormatErrorPolicy,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::grif()
    }
}

impl ExportOptions {
    /// Options for GRIF-dialect output: formatter failures fall back to the
    /// unformatted value so a save never aborts over cosmetics.
    #[must_use]
    pub fn grif() -> Self {
        ExportOptions {
            mode: OutputMode::Grif,
            on_format_error: FormatErrorPolicy::Fallback,
        }
    }

    /// Options for JSON-dialect output: formatter failures propagate, since
    /// compression affects the emitted text's size contract.
    #[must_use]
    pub fn json() -> Self {
        ExportOptions {
            mode: OutputMode::Json,
            on_format_error: FormatErrorPolicy::Propagate,
        }
    }

    /// Overrides the script-formatter error policy.
    #[must_use]
    pub fn with_format_error_policy(mut self, policy: FormatErrorPolicy) -> Self {
        self.on_format_error = policy;
        self
    }
}
