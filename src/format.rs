//! GRIF Data Format Reference
//!
//! This module documents the two textual dialects this crate reads and
//! writes. Both describe the same thing: a flat mapping of dotted,
//! case-insensitive keys to string values: and differ only in syntax.
//!
//! # Dialect Detection
//!
//! The first significant character of the input decides the dialect.
//! Whitespace, `//` line comments and `/* */` block comments are skipped;
//! if the next character is `{` the input is read as the JSON dialect,
//! otherwise as the GRIF dialect.
//!
//! # The GRIF Dialect
//!
//! Line-oriented and verbatim, made for hand editing:
//!
//! ```text
//! room.1.name
//! 	Dusty Cellar
//! room.1.desc
//! 	A low stone room. Cobwebs hang from
//! 	every beam.
//! on.look
//! 	@script(...)
//! ```
//!
//! **Rules**:
//!
//! - A line that does not begin with a tab or space is a key. The whole
//!   line is the key, verbatim.
//! - Lines immediately following that begin with a tab or space continue
//!   the value: the leading whitespace run is stripped and continuation
//!   lines are joined with a single space. `room.1.desc` above reads as
//!   `"A low stone room. Cobwebs hang from every beam."`.
//! - `\r`, `\n` and `\r\n` all terminate lines.
//! - Blank lines between entries are ignored.
//! - No escape processing of any kind: characters are taken as they are.
//! - Comments are only recognized before the first entry.
//!
//! # The JSON Dialect
//!
//! Quote-delimited and strict; every document is a valid JSON object:
//!
//! ```text
//! {
//! 	"room.1.desc": "A low stone room.",
//! 	"on.look": "@script(...)"
//! }
//! ```
//!
//! **Rules**:
//!
//! - Entries are `"key": "value"`, separated by `,` or `;` (any number,
//!   trailing allowed: a tolerance beyond standard JSON).
//! - Whitespace and comments may appear between any two tokens.
//! - The document ends at `}` or end of input.
//! - Strings decode the escapes `\n`, `\r`, `\t`, `\"`, `\\`, `\/` and
//!   `\uXXXX` (four hex digits, one UTF-16 code unit; surrogate pairs
//!   combine).
//!
//! # String Encoding on Output
//!
//! Emitted strings escape `"` and `\`, pass printable ASCII
//! (`0x20`–`0x7E`) through, and write every other character as `\uXXXX`
//! with four lowercase hex digits. The shorthand escapes are accepted on
//! input but never produced. Inside script values, `\r`, `\n` and `\t` are
//! written literally so the script keeps its shape.
//!
//! # Script Values
//!
//! A value whose content after leading whitespace starts with `@` is script
//! source. GRIF-dialect export pretty-prints it (best effort); JSON-dialect
//! export compresses it to one line. The script language itself is outside
//! this crate.
//!
//! # Key Ordering
//!
//! Exports always write entries in comparator order (see
//! [`compare_keys`](crate::compare_keys)), never insertion order:
//! case-insensitive, wildcard segments `*` < `?` < `#` ahead of everything,
//! numeric segments in numeric order: so `item.2` precedes `item.10` and
//! `item.*` precedes both.

// This module contains only documentation; no implementation code
