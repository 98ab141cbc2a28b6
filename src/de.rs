//! Dialect detection and parsing.
//!
//! Two front ends share the [`Scanner`] but read different grammars:
//!
//! - **GRIF dialect** ([`GrifParser`]): permissive and line-oriented. A line
//!   not beginning with whitespace is a key; following lines that begin with
//!   a tab or space continue the value. Text is taken verbatim: no quoting,
//!   no escapes. Any text is a valid GRIF document.
//! - **JSON dialect** ([`JsonParser`]): strict and quote-delimited. Entries
//!   are `"key": "value"`, separated by commas or semicolons, wrapped in
//!   `{ }`, with comments and whitespace allowed between all tokens.
//!
//! [`detect_dialect`] picks between them by peeking at the first significant
//! character, and [`parse_document`] dispatches accordingly. Parsing is
//! single-pass with no backtracking; a grammar violation aborts the whole
//! parse before any entry reaches a store.
//!
//! ## Examples
//!
//! ```rust
//! use grif_data::{parse_document, Dialect, detect_dialect};
//!
//! let grif = "intro\n\tWelcome, adventurer.\n";
//! assert_eq!(detect_dialect(grif), Dialect::Grif);
//! assert_eq!(parse_document(grif).unwrap().len(), 1);
//!
//! let json = "{\"intro\": \"Welcome, adventurer.\"}";
//! assert_eq!(detect_dialect(json), Dialect::Json);
//! assert_eq!(parse_document(json).unwrap().len(), 1);
//! ```

use crate::{Document, Entry, Error, Result, Scanner};

/// The two textual dialects a document can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Line-oriented, verbatim, human-editable.
    Grif,
    /// Quote-delimited, escaped, JSON-compatible.
    Json,
}

/// Determines the dialect of `text` by pure lookahead.
///
/// The first character past leading whitespace and comments decides: `{`
/// selects [`Dialect::Json`], anything else (including empty input) selects
/// [`Dialect::Grif`].
#[must_use]
pub fn detect_dialect(text: &str) -> Dialect {
    let mut scanner = Scanner::new(text);
    scanner.skip_insignificant();
    match scanner.peek() {
        Some('{') => Dialect::Json,
        _ => Dialect::Grif,
    }
}

/// A dialect front end: text in, ordered entries out.
///
/// Both implementations drop empty-key sentinel entries, so every entry in
/// a returned [`Document`] has a non-empty key.
pub trait DialectParser {
    /// Parses `text` into an ordered sequence of entries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Malformed`] on any grammar violation; no partial
    /// document is returned.
    fn parse(&self, text: &str) -> Result<Document>;
}

/// Parses `text` in whichever dialect [`detect_dialect`] selects.
///
/// # Errors
///
/// Returns [`Error::Malformed`] on any grammar violation.
pub fn parse_document(text: &str) -> Result<Document> {
    match detect_dialect(text) {
        Dialect::Grif => GrifParser.parse(text),
        Dialect::Json => JsonParser.parse(text),
    }
}

/// Front end for the line-oriented GRIF dialect.
pub struct GrifParser;

impl DialectParser for GrifParser {
    fn parse(&self, text: &str) -> Result<Document> {
        let mut scanner = Scanner::new(text);
        // Whitespace and comments are insignificant before the first entry
        // only; after that every character belongs to a key or value.
        scanner.skip_insignificant();
        let mut document = Document::new();
        while !scanner.at_end() {
            let entry = read_grif_entry(&mut scanner);
            if !entry.key.is_empty() {
                document.push(entry);
            }
        }
        Ok(document)
    }
}

/// Reads one key line plus its continuation lines, verbatim.
///
/// Blank lines come back as empty-key sentinels for the caller to skip.
fn read_grif_entry(scanner: &mut Scanner) -> Entry {
    let mut key = String::new();
    while let Some(c) = scanner.peek() {
        if c == '\r' || c == '\n' {
            scanner.skip_line_terminators();
            break;
        }
        key.push(c);
        scanner.bump();
    }
    let mut value = String::new();
    let mut needs_space = false;
    while matches!(scanner.peek(), Some('\t') | Some(' ')) {
        if needs_space {
            value.push(' ');
        }
        while matches!(scanner.peek(), Some('\t') | Some(' ')) {
            scanner.bump();
        }
        while let Some(c) = scanner.peek() {
            if c == '\r' || c == '\n' {
                break;
            }
            value.push(c);
            scanner.bump();
        }
        needs_space = true;
        scanner.skip_line_terminators();
    }
    Entry::new(key, value)
}

/// Front end for the quote-delimited JSON dialect.
pub struct JsonParser;

impl DialectParser for JsonParser {
    fn parse(&self, text: &str) -> Result<Document> {
        let mut scanner = Scanner::new(text);
        scanner.skip_insignificant();
        if scanner.peek() != Some('{') {
            return Err(Error::malformed(
                scanner.pos(),
                "expected \"{\" to open the document",
            ));
        }
        scanner.bump();
        let mut document = Document::new();
        loop {
            if scanner.peek() == Some('}') {
                scanner.bump();
                break;
            }
            if scanner.at_end() {
                break;
            }
            let (key, value) = read_json_entry(&mut scanner)?;
            if !key.is_empty() {
                document.push(Entry::new(key, value));
            }
        }
        Ok(document)
    }
}

/// Reads one `"key": "value"` entry, attaching the key to any error raised
/// after the key has been read.
///
/// Returns an empty key when the closing `}` is reached instead of an
/// entry; the brace is left for the caller.
fn read_json_entry(scanner: &mut Scanner) -> Result<(String, String)> {
    let mut key = String::new();
    match read_json_entry_inner(scanner, &mut key) {
        Ok(value) => Ok((key, value)),
        Err(err) if !key.is_empty() => Err(err.with_key(&key)),
        Err(err) => Err(err),
    }
}

fn read_json_entry_inner(scanner: &mut Scanner, key: &mut String) -> Result<String> {
    scanner.skip_insignificant();
    while matches!(scanner.peek(), Some(',') | Some(';')) {
        scanner.bump();
        scanner.skip_insignificant();
    }
    match scanner.peek() {
        Some('}') => return Ok(String::new()),
        Some('"') => {}
        Some(c) => {
            return Err(Error::malformed(
                scanner.pos(),
                format!("invalid character \"{c}\", expected a quote"),
            ))
        }
        None => return Err(Error::malformed(scanner.pos(), "unexpected end of input")),
    }
    *key = scanner.read_quoted_string()?;
    scanner.skip_insignificant();
    match scanner.peek() {
        Some(':') => {
            scanner.bump();
        }
        Some(c) => {
            return Err(Error::malformed(
                scanner.pos(),
                format!("invalid character \"{c}\", expected \":\""),
            ))
        }
        None => return Err(Error::malformed(scanner.pos(), "unexpected end of input")),
    }
    scanner.skip_insignificant();
    match scanner.peek() {
        Some('"') => {}
        Some(c) => {
            return Err(Error::malformed(
                scanner.pos(),
                format!("invalid character \"{c}\", expected a quote"),
            ))
        }
        None => return Err(Error::malformed(scanner.pos(), "unexpected end of input")),
    }
    let value = scanner.read_quoted_string()?;
    scanner.skip_insignificant();
    match scanner.peek() {
        Some(',') | Some(';') | Some('}') => {}
        Some(c) => {
            return Err(Error::malformed(
                scanner.pos(),
                format!("invalid character \"{c}\", expected \",\" or \"}}\""),
            ))
        }
        None => return Err(Error::malformed(scanner.pos(), "unexpected end of input")),
    }
    while matches!(scanner.peek(), Some(',') | Some(';')) {
        scanner.bump();
        scanner.skip_insignificant();
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(doc: &Document) -> Vec<(&str, &str)> {
        doc.iter()
            .map(|e| (e.key.as_str(), e.value.as_str()))
            .collect()
    }

    #[test]
    fn grif_continuation_lines_join_with_spaces() {
        let doc = parse_document("key1\n\tline one\n\tline two\n").unwrap();
        assert_eq!(pairs(&doc), vec![("key1", "line one line two")]);
    }

    #[test]
    fn grif_accepts_space_indented_continuations_and_crlf() {
        let doc = parse_document("key1\r\n  value text\r\nkey2\r\n\tother\r\n").unwrap();
        assert_eq!(pairs(&doc), vec![("key1", "value text"), ("key2", "other")]);
    }

    #[test]
    fn grif_key_without_value_is_kept() {
        let doc = parse_document("flag.on\nnext\n\tv\n").unwrap();
        assert_eq!(pairs(&doc), vec![("flag.on", ""), ("next", "v")]);
    }

    #[test]
    fn grif_blank_lines_between_entries_are_skipped() {
        let doc = parse_document("a\n\t1\n\nb\n\t2\n").unwrap();
        assert_eq!(pairs(&doc), vec![("a", "1"), ("b", "2")]);
    }

    #[test]
    fn grif_takes_text_verbatim() {
        let doc = parse_document("k\n\tno \\n escapes \"here\"\n").unwrap();
        assert_eq!(pairs(&doc), vec![("k", "no \\n escapes \"here\"")]);
    }

    #[test]
    fn json_trailing_comma_and_semicolons_accepted() {
        let doc = parse_document("{\"k1\":\"v1\",\"k2\":\"v2\",}").unwrap();
        assert_eq!(pairs(&doc), vec![("k1", "v1"), ("k2", "v2")]);

        let doc = parse_document("{\"k\":\"v\";}").unwrap();
        assert_eq!(pairs(&doc), vec![("k", "v")]);
    }

    #[test]
    fn json_comments_between_tokens() {
        let doc =
            parse_document("{ // header\n\"k\" /* mid */ : \"v\" ,\n/* tail */ }").unwrap();
        assert_eq!(pairs(&doc), vec![("k", "v")]);
    }

    #[test]
    fn json_missing_colon_reports_key_and_offset() {
        let err = parse_document("{\"k\" \"v\"}").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("\"k\""), "missing key in: {msg}");
        assert!(msg.contains("offset 5"), "missing offset in: {msg}");
    }

    #[test]
    fn json_unterminated_document_reports_end_of_input() {
        let err = parse_document("{\"k\":\"v\"").unwrap_err();
        assert!(err.to_string().contains("unexpected end of input"));
    }

    #[test]
    fn json_empty_key_is_dropped_and_parsing_continues() {
        let doc = parse_document("{\"\":\"ignored\",\"k\":\"v\"}").unwrap();
        assert_eq!(pairs(&doc), vec![("k", "v")]);
    }

    #[test]
    fn json_empty_object_parses() {
        assert!(parse_document("{}").unwrap().is_empty());
        assert!(parse_document("{\n}").unwrap().is_empty());
    }

    #[test]
    fn dialect_detection_ignores_leading_comments() {
        assert_eq!(detect_dialect("// note\n{\"a\":\"b\"}"), Dialect::Json);
        assert_eq!(detect_dialect("/* x */ key\n\tvalue\n"), Dialect::Grif);
        assert_eq!(detect_dialect(""), Dialect::Grif);
    }

    #[test]
    fn empty_input_parses_to_empty_document() {
        assert!(parse_document("").unwrap().is_empty());
        assert!(parse_document("   \n\n").unwrap().is_empty());
    }
}
