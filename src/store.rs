//! The narrow interface to the overlay store.
//!
//! The layered store this crate persists lives elsewhere; the core only
//! needs to read values, write values, and obtain two key sets. That
//! surface is [`OverlayStore`]. Layer semantics (shadowing, fallback) are
//! entirely the store's business.
//!
//! For tests and simple callers a plain [`IndexMap`]`<String, String>`
//! implements the trait as a single-layer store where every key is local.

use indexmap::IndexMap;

/// A layered key→value store, seen through the persistence core's eyes.
///
/// Key sets come back unordered; the exporter sorts them itself with
/// [`compare_keys`](crate::compare_keys).
pub trait OverlayStore {
    /// Returns the value for `key`, if present.
    fn get(&self, key: &str) -> Option<String>;

    /// Writes `value` under `key`, overwriting any previous value.
    fn set(&mut self, key: &str, value: &str);

    /// All keys, across every layer.
    fn keys(&self) -> Vec<String>;

    /// Keys defined in the top (local) layer only, excluding anything
    /// inherited from base layers.
    fn overlay_keys(&self) -> Vec<String>;
}

/// A single-layer store: every key belongs to the overlay.
impl OverlayStore for IndexMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        IndexMap::get(self, key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.insert(key.to_string(), value.to_string());
    }

    fn keys(&self) -> Vec<String> {
        IndexMap::keys(self).cloned().collect()
    }

    fn overlay_keys(&self) -> Vec<String> {
        IndexMap::keys(self).cloned().collect()
    }
}
