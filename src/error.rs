//! Error types for GRIF loading and saving.
//!
//! All failures surface as the single [`Error`] enum. Parse failures carry
//! the character offset into the input and, when one had already been read
//! for the failing entry, the key name: hand-edited data files are the
//! common input, so errors must point at the offending spot.
//!
//! ## Error Categories
//!
//! - **NotFound**: the input file does not exist
//! - **Malformed**: a grammar violation in the input text (wrong delimiter,
//!   unterminated string, bad escape, unexpected end of input)
//! - **Io**: directory creation or file read/write failure
//! - **Format**: a script-formatter failure that was configured to propagate
//!
//! ## Examples
//!
//! ```rust
//! use grif_data::{parse_document, Document, Error};
//!
//! let result: Result<Document, Error> = parse_document("{\"key\" \"value\"}");
//! assert!(result.is_err());
//!
//! if let Err(err) = result {
//!     // The message names the key and the character offset.
//!     eprintln!("load failed: {}", err);
//! }
//! ```

use std::path::Path;
use thiserror::Error;

/// Represents all possible errors that can occur while loading or saving
/// GRIF data.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The input file does not exist.
    #[error("file not found: {0}")]
    NotFound(String),

    /// The input text violates the grammar of its dialect.
    ///
    /// `index` is a character offset into the input. `key` is present when
    /// the failing entry's key had already been parsed.
    #[error("malformed input at offset {index}{}: {msg}", key_context(.key))]
    Malformed {
        index: usize,
        key: Option<String>,
        msg: String,
    },

    /// IO error during reading or writing.
    #[error("IO error: {0}")]
    Io(String),

    /// A script formatter failure surfaced under
    /// [`FormatErrorPolicy::Propagate`](crate::FormatErrorPolicy::Propagate).
    #[error("script formatting failed: {0}")]
    Format(String),
}

fn key_context(key: &Option<String>) -> String {
    match key {
        Some(key) => format!(" (key \"{key}\")"),
        None => String::new(),
    }
}

impl Error {
    /// Creates a not-found error for a missing input file.
    pub fn not_found(path: &Path) -> Self {
        Error::NotFound(path.display().to_string())
    }

    /// Creates a malformed-input error at a character offset.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use grif_data::Error;
    ///
    /// let err = Error::malformed(17, "expected a quote");
    /// assert!(err.to_string().contains("offset 17"));
    /// ```
    pub fn malformed(index: usize, msg: impl Into<String>) -> Self {
        Error::Malformed {
            index,
            key: None,
            msg: msg.into(),
        }
    }

    /// Attaches a key name to a malformed-input error for context.
    ///
    /// Other variants are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use grif_data::Error;
    ///
    /// let err = Error::malformed(4, "expected \":\"").with_key("room.1.desc");
    /// assert!(err.to_string().contains("room.1.desc"));
    /// ```
    #[must_use]
    pub fn with_key(self, key: &str) -> Self {
        match self {
            Error::Malformed { index, msg, .. } => Error::Malformed {
                index,
                key: Some(key.to_string()),
                msg,
            },
            other => other,
        }
    }

    /// Creates an I/O error for file reading/writing failures.
    pub fn io(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    /// Creates a script-formatting error.
    pub fn format(msg: impl Into<String>) -> Self {
        Error::Format(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
