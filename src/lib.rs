//! # grif_data
//!
//! Persistence layer for GRIF overlay stores: converts between an
//! in-memory key→value mapping and two textual representations.
//!
//! ## The Two Dialects
//!
//! - **GRIF**: permissive and line-oriented. Keys on their own lines,
//!   values tab-indented beneath, comments before the document, no quoting
//!   or escaping. Made to be edited by hand.
//! - **JSON**: strict and quote-delimited. Every saved document is a valid
//!   JSON object with deterministic, comparator-ordered entries.
//!
//! Loading auto-detects the dialect; saving picks one via
//! [`ExportOptions`].
//!
//! ## Key Features
//!
//! - **Deterministic output**: entries always save in comparator order,
//!   case-insensitive, numeric-aware (`item.2` before `item.10`), with the
//!   wildcard segments `*`, `?`, `#` sorting first
//! - **Script-aware**: values starting with `@` are source in an embedded
//!   scripting language, routed through a caller-supplied
//!   [`ScriptFormatter`] for pretty-printing or compression
//! - **Two-phase loading**: a document parses completely before a single
//!   entry is inserted, so a malformed file never half-populates a store
//! - **Narrow collaborator seams**: the store and the script engine sit
//!   behind the [`OverlayStore`] and [`ScriptFormatter`] traits
//!
//! ## Quick Start
//!
//! ```rust
//! use indexmap::IndexMap;
//! use grif_data::{load_from_str, export_to_string, ExportOptions, PassthroughFormatter};
//!
//! let mut store: IndexMap<String, String> = IndexMap::new();
//!
//! load_from_str(
//!     "room.1.name\n\tDusty Cellar\nroom.1.dark\n\ttrue\n",
//!     &mut store,
//!     &PassthroughFormatter,
//! )
//! .unwrap();
//!
//! assert_eq!(store.get("room.1.name").map(String::as_str), Some("Dusty Cellar"));
//!
//! let text = export_to_string(&store, &ExportOptions::json(), &PassthroughFormatter).unwrap();
//! assert!(text.starts_with("{\n"));
//! ```
//!
//! ## File Surface
//!
//! [`load_from_file`] and [`save_to_file`] wrap the string surface with
//! existence checks, parent-directory creation and whole-file IO.
//! [`save_overlay_to_file`] writes only the store's top-layer keys: the
//! usual shape for saving a game session on top of immutable base data.
//!
//! ## Format Reference
//!
//! See the [`format`] module for the full syntax of both dialects.

pub mod de;
pub mod encode;
pub mod entry;
pub mod error;
pub mod format;
pub mod options;
pub mod order;
pub mod scan;
pub mod ser;
pub mod script;
pub mod store;

pub use de::{detect_dialect, parse_document, Dialect, DialectParser, GrifParser, JsonParser};
pub use encode::{encode, is_script_value};
pub use entry::{Document, Entry};
pub use error::{Error, Result};
pub use options::{ExportOptions, FormatErrorPolicy, OutputMode};
pub use order::compare_keys;
pub use scan::Scanner;
pub use ser::Exporter;
pub use script::{PassthroughFormatter, ScriptFormatter};
pub use store::OverlayStore;

use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Parses `text` and inserts every entry into `store`.
///
/// Existing data is not cleared; duplicate keys overwrite, last one wins.
/// Insertion happens only after the whole document has parsed, so a parse
/// error leaves `store` untouched. Script values are pretty-printed through
/// `formatter` on the way in, best effort: a formatter failure keeps the
/// raw text and never fails the load.
///
/// # Examples
///
/// ```rust
/// use indexmap::IndexMap;
/// use grif_data::{load_from_str, PassthroughFormatter};
///
/// let mut store: IndexMap<String, String> = IndexMap::new();
/// load_from_str("{\"k\": \"v\"}", &mut store, &PassthroughFormatter).unwrap();
/// assert_eq!(store.get("k").map(String::as_str), Some("v"));
/// ```
///
/// # Errors
///
/// Returns [`Error::Malformed`] when the text violates its dialect's
/// grammar.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn load_from_str<S, F>(text: &str, store: &mut S, formatter: &F) -> Result<()>
where
    S: OverlayStore + ?Sized,
    F: ScriptFormatter + ?Sized,
{
    let document = parse_document(text)?;
    debug!(entries = document.len(), "parsed document");
    for entry in document {
        let value = if is_script_value(&entry.value) {
            match formatter.pretty(&entry.value) {
                Ok(formatted) => formatted,
                Err(err) => {
                    warn!(key = %entry.key, error = %err, "script formatting failed, keeping raw text");
                    entry.value
                }
            }
        } else {
            entry.value
        };
        store.set(&entry.key, &value);
    }
    Ok(())
}

/// Reads the file at `path` and loads its contents into `store`.
///
/// # Errors
///
/// Returns [`Error::NotFound`] when the file does not exist,
/// [`Error::Io`] when it cannot be read, and any error of
/// [`load_from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn load_from_file<S, F>(path: impl AsRef<Path>, store: &mut S, formatter: &F) -> Result<()>
where
    S: OverlayStore + ?Sized,
    F: ScriptFormatter + ?Sized,
{
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::not_found(path));
    }
    let text = fs::read_to_string(path).map_err(|e| Error::io(e.to_string()))?;
    load_from_str(&text, store, formatter)
}

/// Exports every key in `store` to text.
///
/// # Errors
///
/// Returns [`Error::Format`] when a script formatter fails under
/// [`FormatErrorPolicy::Propagate`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn export_to_string<S, F>(store: &S, options: &ExportOptions, formatter: &F) -> Result<String>
where
    S: OverlayStore + ?Sized,
    F: ScriptFormatter + ?Sized,
{
    Exporter::new(options.clone(), formatter).export(store, store.keys())
}

/// Exports only the store's overlay (top-layer) keys to text.
///
/// # Errors
///
/// As for [`export_to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn export_overlay_to_string<S, F>(
    store: &S,
    options: &ExportOptions,
    formatter: &F,
) -> Result<String>
where
    S: OverlayStore + ?Sized,
    F: ScriptFormatter + ?Sized,
{
    Exporter::new(options.clone(), formatter).export(store, store.overlay_keys())
}

/// Exports every key in `store` and writes the result to `path`, creating
/// the parent directory if absent and overwriting any existing file.
///
/// # Errors
///
/// Returns [`Error::Io`] on directory-creation or write failure, and any
/// error of [`export_to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn save_to_file<S, F>(
    path: impl AsRef<Path>,
    store: &S,
    options: &ExportOptions,
    formatter: &F,
) -> Result<()>
where
    S: OverlayStore + ?Sized,
    F: ScriptFormatter + ?Sized,
{
    let text = export_to_string(store, options, formatter)?;
    write_text(path.as_ref(), &text)
}

/// Exports only the store's overlay keys and writes the result to `path`.
///
/// # Errors
///
/// As for [`save_to_file`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn save_overlay_to_file<S, F>(
    path: impl AsRef<Path>,
    store: &S,
    options: &ExportOptions,
    formatter: &F,
) -> Result<()>
where
    S: OverlayStore + ?Sized,
    F: ScriptFormatter + ?Sized,
{
    let text = export_overlay_to_string(store, options, formatter)?;
    write_text(path.as_ref(), &text)
}

fn write_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| Error::io(e.to_string()))?;
        }
    }
    debug!(path = %path.display(), bytes = text.len(), "writing data file");
    fs::write(path, text).map_err(|e| Error::io(e.to_string()))
}
