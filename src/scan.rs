//! Low-level cursor over raw input text.
//!
//! [`Scanner`] is the shared lexing layer under both dialect parsers. It
//! tracks a character offset (the offset reported in error messages),
//! skips insignificant text (whitespace, `//` line comments, `/* */` block
//! comments) and decodes quoted string literals with their escape grammar.
//!
//! ## Escape grammar
//!
//! Inside a quoted string, `\n`, `\r`, `\t`, `\"`, `\\` and `\/` decode to
//! their literal characters. `\uXXXX` decodes exactly four hex digits
//! (either case) to one UTF-16 code unit; a high surrogate must be followed
//! by a `\uXXXX` low surrogate and the pair decodes to one character. Any
//! other escape, a truncated or non-hex `\uXXXX`, an unpaired surrogate, or
//! end of input before the closing quote is a fatal [`Error::Malformed`].
//!
//! ## Examples
//!
//! ```rust
//! use grif_data::Scanner;
//!
//! let mut scanner = Scanner::new("  /* header */ \"a\\tb\"");
//! scanner.skip_insignificant();
//! assert_eq!(scanner.read_quoted_string().unwrap(), "a\tb");
//! ```

use crate::{Error, Result};

/// A cursor over input text, indexed by character.
///
/// Positions are character offsets, not byte offsets, so they line up with
/// what a person sees in an editor when chasing down a parse error.
#[derive(Debug, Clone)]
pub struct Scanner {
    chars: Vec<char>,
    pos: usize,
}

impl Scanner {
    /// Creates a scanner positioned at the start of `input`.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Scanner {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    /// Returns the current character offset.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns `true` when the cursor has consumed all input.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Returns the character under the cursor without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    /// Consumes and returns the character under the cursor.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    /// Consumes every consecutive `\r` and `\n` under the cursor.
    pub fn skip_line_terminators(&mut self) {
        while matches!(self.peek(), Some('\r') | Some('\n')) {
            self.pos += 1;
        }
    }

    /// Advances past whitespace, `//` line comments and `/* */` block
    /// comments, in any order and combination, until no more progress is
    /// made.
    ///
    /// An unterminated block comment consumes the rest of the input.
    pub fn skip_insignificant(&mut self) {
        loop {
            let before = self.pos;
            while self.peek().is_some_and(char::is_whitespace) {
                self.pos += 1;
            }
            if self.peek() == Some('/') && self.peek_at(1) == Some('/') {
                self.pos += 2;
                while let Some(c) = self.bump() {
                    if c == '\n' {
                        break;
                    }
                }
            }
            if self.peek() == Some('/') && self.peek_at(1) == Some('*') {
                self.pos += 2;
                loop {
                    if self.at_end() {
                        break;
                    }
                    if self.peek() == Some('*') && self.peek_at(1) == Some('/') {
                        self.pos += 2;
                        break;
                    }
                    self.pos += 1;
                }
            }
            if self.pos == before {
                break;
            }
        }
    }

    /// Reads a quoted string literal, decoding escapes.
    ///
    /// The cursor must be on the opening `"`; on success it is left just
    /// past the closing `"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Malformed`] on an unknown escape, a bad `\uXXXX`
    /// sequence, or end of input before the closing quote.
    pub fn read_quoted_string(&mut self) -> Result<String> {
        debug_assert_eq!(self.peek(), Some('"'), "cursor must be on the opening quote");
        self.pos += 1;
        let mut result = String::new();
        loop {
            let c = self
                .bump()
                .ok_or_else(|| Error::malformed(self.pos, "unexpected end of input"))?;
            match c {
                '"' => return Ok(result),
                '\\' => {
                    let esc = self
                        .bump()
                        .ok_or_else(|| Error::malformed(self.pos, "unexpected end of input"))?;
                    match esc {
                        'n' => result.push('\n'),
                        'r' => result.push('\r'),
                        't' => result.push('\t'),
                        '"' | '\\' | '/' => result.push(esc),
                        'u' => result.push(self.read_unicode_escape()?),
                        other => {
                            return Err(Error::malformed(
                                self.pos,
                                format!("unexpected escaped character \"\\{other}\""),
                            ))
                        }
                    }
                }
                other => result.push(other),
            }
        }
    }

    /// Decodes the `XXXX` tail of a `\uXXXX` escape, combining surrogate
    /// pairs into one character.
    fn read_unicode_escape(&mut self) -> Result<char> {
        let unit = self.read_hex4()?;
        match unit {
            0xD800..=0xDBFF => {
                // High surrogate: the low half must follow immediately.
                if self.peek() != Some('\\') || self.peek_at(1) != Some('u') {
                    return Err(Error::malformed(
                        self.pos,
                        "unpaired surrogate in \\u escape",
                    ));
                }
                self.pos += 2;
                let low = self.read_hex4()?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(Error::malformed(
                        self.pos,
                        "unpaired surrogate in \\u escape",
                    ));
                }
                let code =
                    0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
                char::from_u32(code)
                    .ok_or_else(|| Error::malformed(self.pos, "invalid \\u escape"))
            }
            0xDC00..=0xDFFF => Err(Error::malformed(
                self.pos,
                "unpaired surrogate in \\u escape",
            )),
            _ => char::from_u32(u32::from(unit))
                .ok_or_else(|| Error::malformed(self.pos, "invalid \\u escape")),
        }
    }

    fn read_hex4(&mut self) -> Result<u16> {
        if self.pos + 4 > self.chars.len() {
            return Err(Error::malformed(
                self.pos,
                "truncated \\u escape, expected 4 hexadecimal digits",
            ));
        }
        let mut value: u16 = 0;
        for _ in 0..4 {
            let c = self.chars[self.pos];
            let digit = c.to_digit(16).ok_or_else(|| {
                Error::malformed(
                    self.pos,
                    format!("invalid hexadecimal digit \"{c}\" in \\u escape"),
                )
            })?;
            value = (value << 4) | digit as u16;
            self.pos += 1;
        }
        Ok(value)
    }
}
