//! Export of store contents to text.
//!
//! [`Exporter`] walks a key set, sorts it with
//! [`compare_keys`](crate::compare_keys) so output is deterministic, and
//! renders each entry in one of two modes:
//!
//! - [`OutputMode::Grif`]: the human-editable dialect. Keys sit on their own
//!   line, values on a tab-indented line beneath, verbatim. Script values
//!   are pretty-printed through the [`ScriptFormatter`] so hand editors see
//!   structured source.
//! - [`OutputMode::Json`]: the strict dialect. One `"key": "value"` entry
//!   per line inside `{ }`, all strings escaped, script values compressed to
//!   a single line to keep the output compact.
//!
//! Whether a script-formatter failure aborts the export or falls back to
//! the unformatted value is an explicit per-call policy in
//! [`ExportOptions`], not an accident of the code path; the defaults differ
//! by mode (fall back in GRIF, propagate in JSON).
//!
//! ## Examples
//!
//! ```rust
//! use indexmap::IndexMap;
//! use grif_data::{ExportOptions, Exporter, PassthroughFormatter};
//!
//! let mut store: IndexMap<String, String> = IndexMap::new();
//! store.insert("item.10".into(), "lantern".into());
//! store.insert("item.2".into(), "rope".into());
//!
//! let text = Exporter::new(ExportOptions::grif(), &PassthroughFormatter)
//!     .export(&store, vec!["item.10".into(), "item.2".into()])
//!     .unwrap();
//! // item.2 sorts before item.10
//! assert_eq!(text, "item.2\n\trope\nitem.10\n\tlantern\n");
//! ```

use tracing::warn;

use crate::encode::{encode, is_script_value};
use crate::options::{ExportOptions, FormatErrorPolicy, OutputMode};
use crate::order::compare_keys;
use crate::script::ScriptFormatter;
use crate::store::OverlayStore;
use crate::Result;

/// Renders store entries as GRIF or JSON dialect text.
///
/// Created with a formatter for script values and the options controlling
/// mode and error policy; consumed by [`Exporter::export`].
pub struct Exporter<'a, F: ScriptFormatter + ?Sized> {
    output: String,
    options: ExportOptions,
    formatter: &'a F,
}

impl<'a, F: ScriptFormatter + ?Sized> Exporter<'a, F> {
    pub fn new(options: ExportOptions, formatter: &'a F) -> Self {
        Exporter {
            output: String::with_capacity(256),
            options,
            formatter,
        }
    }

    /// Sorts `keys` and renders the corresponding store values.
    ///
    /// Keys absent from the store render as empty values; callers normally
    /// pass a key set obtained from the store itself.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`](crate::Error::Format) when a script
    /// formatter fails under [`FormatErrorPolicy::Propagate`].
    pub fn export<S>(mut self, store: &S, mut keys: Vec<String>) -> Result<String>
    where
        S: OverlayStore + ?Sized,
    {
        keys.sort_by(|a, b| compare_keys(a, b));
        if self.options.mode == OutputMode::Json {
            self.output.push_str("{\n");
        }
        let mut first = true;
        for key in &keys {
            let value = store.get(key).unwrap_or_default();
            match self.options.mode {
                OutputMode::Grif => self.write_grif_entry(key, &value)?,
                OutputMode::Json => {
                    if !first {
                        self.output.push_str(",\n");
                    }
                    self.write_json_entry(key, &value)?;
                }
            }
            first = false;
        }
        if self.options.mode == OutputMode::Json {
            self.output.push_str("\n}");
        }
        Ok(self.output)
    }

    fn write_grif_entry(&mut self, key: &str, value: &str) -> Result<()> {
        self.output.push_str(key);
        self.output.push('\n');
        if is_script_value(value) {
            let formatted = self.format_script(key, value, |f, v| f.pretty(v))?;
            // A value line must start with whitespace or it would read back
            // as a key.
            if !formatted.starts_with(['\t', ' ']) {
                self.output.push('\t');
            }
            self.output.push_str(&formatted);
        } else {
            self.output.push('\t');
            self.output.push_str(value);
        }
        self.output.push('\n');
        Ok(())
    }

    fn write_json_entry(&mut self, key: &str, value: &str) -> Result<()> {
        self.output.push('\t');
        self.output.push('"');
        self.output.push_str(&encode(key));
        self.output.push_str("\": \"");
        if is_script_value(value) {
            let compact = self.format_script(key, value, |f, v| f.compress(v))?;
            self.output.push_str(&encode(&compact));
        } else {
            self.output.push_str(&encode(value));
        }
        self.output.push('"');
        Ok(())
    }

    /// Applies a formatter operation under the configured error policy.
    fn format_script(
        &self,
        key: &str,
        value: &str,
        op: impl Fn(&F, &str) -> Result<String>,
    ) -> Result<String> {
        match op(self.formatter, value) {
            Ok(formatted) => Ok(formatted),
            Err(err) => match self.options.on_format_error {
                FormatErrorPolicy::Propagate => Err(err),
                FormatErrorPolicy::Fallback => {
                    warn!(key, error = %err, "script formatting failed, writing value unformatted");
                    Ok(value.to_string())
                }
            },
        }
    }
}
