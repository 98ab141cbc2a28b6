//! Parsed entries and the ordered document they form.
//!
//! A parse produces a [`Document`]: the flat, insertion-ordered sequence of
//! key/value pairs read from the text. The document is an intermediate
//! buffer only: parsers fill it completely before any caller state is
//! touched, so a failed load never leaves a store half-populated.

/// A single key/value pair read from a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Case-insensitive, dot-segmented key (e.g. `room.3.desc`).
    pub key: String,
    /// Arbitrary string value; script source when it starts with `@`.
    pub value: String,
}

impl Entry {
    /// Creates an entry from a key and value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Entry {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// An ordered sequence of entries as read from text.
///
/// Input order is preserved here so that duplicate keys resolve
/// last-one-wins at insertion time; export order is decided separately by
/// [`compare_keys`](crate::compare_keys).
///
/// # Examples
///
/// ```rust
/// use grif_data::parse_document;
///
/// let doc = parse_document("intro\n\tWelcome.\n").unwrap();
/// assert_eq!(doc.len(), 1);
/// assert_eq!(doc.iter().next().unwrap().key, "intro");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document(Vec<Entry>);

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Document(Vec::new())
    }

    /// Appends an entry, preserving input order.
    pub fn push(&mut self, entry: Entry) {
        self.0.push(entry);
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the document holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the entries in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.0.iter()
    }
}

impl IntoIterator for Document {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Entry> for Document {
    fn from_iter<T: IntoIterator<Item = Entry>>(iter: T) -> Self {
        Document(Vec::from_iter(iter))
    }
}
