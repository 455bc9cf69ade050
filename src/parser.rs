//! Line parser for `.properties` text.
//!
//! This module provides the [`Parser`], a single-pass scanner that turns
//! input text into an ordered sequence of [`Entry`] values, one per logical
//! line.
//!
//! ## Overview
//!
//! - **Single pass, no backtracking**: a small tagged state machine drives
//!   the scan of each logical line
//! - **Continuation lines**: a trailing unescaped backslash joins the next
//!   physical line, whose leading whitespace is skipped
//! - **Exact locations**: offsets, lines and columns are counted over the
//!   untransformed input, so continued lines keep their own line numbers
//! - **Lossless capture**: original text and line terminators can be kept
//!   for byte-for-byte round trips
//!
//! ## Usage
//!
//! Most users should go through [`parse_to_array`](crate::parse_to_array):
//!
//! ```rust
//! use properties_parser::{parse_to_array, ParseOptions};
//!
//! let entries = parse_to_array("a = 1\nb : 2\nc 3", ParseOptions::default()).unwrap();
//! let pairs: Vec<_> = entries
//!     .iter()
//!     .map(|e| (e.key.as_deref().unwrap(), e.element.as_deref().unwrap()))
//!     .collect();
//! assert_eq!(pairs, vec![("a", "1"), ("b", "2"), ("c", "3")]);
//! ```
//!
//! The parser is also an iterator, which stops after the first error:
//!
//! ```rust
//! use properties_parser::{ParseOptions, Parser};
//!
//! let keys: Vec<_> = Parser::new("x=1\n# note\ny=2", ParseOptions::default())
//!     .filter_map(Result::ok)
//!     .filter_map(|e| e.key)
//!     .collect();
//! assert_eq!(keys, vec!["x", "y"]);
//! ```

use crate::entry::{Entry, Location, Position};
use crate::escape::unescape;
use crate::{Error, ParseOptions, Result};

/// Scanner states within one logical line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    LineStart,
    InComment,
    InKey,
    /// Between key and element; `delimited` once `=` or `:` has been seen.
    InSeparator { delimited: bool },
    InElement,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LineKind {
    Blank,
    Comment,
    Property,
}

#[inline]
fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\x0C')
}

#[inline]
fn is_terminator(ch: char) -> bool {
    matches!(ch, '\n' | '\r')
}

/// The `.properties` line parser.
///
/// Yields one [`Entry`] per logical line, including blank and comment lines;
/// filtering on [`ParseOptions::all`] happens in [`parse`].
pub struct Parser<'a> {
    input: &'a str,
    cursor: Position,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    /// Creates a parser positioned at the start of `input`.
    #[must_use]
    pub fn new(input: &'a str, options: ParseOptions) -> Self {
        Parser {
            input,
            cursor: Position::default(),
            options,
        }
    }

    /// The position the next entry will start at.
    #[must_use]
    pub fn position(&self) -> Position {
        self.cursor
    }

    fn at_end(&self) -> bool {
        self.cursor.offset >= self.input.len()
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.cursor.offset..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.input[self.cursor.offset..].chars().nth(1)
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.cursor.offset += ch.len_utf8();
        match ch {
            // CR of a CRLF pair; the LF closes the line
            '\r' if self.peek_char() == Some('\n') => self.cursor.column += 1,
            '\r' | '\n' => {
                self.cursor.line += 1;
                self.cursor.column = 1;
            }
            _ => self.cursor.column += 1,
        }
        Some(ch)
    }

    /// Consumes a `\n`, `\r\n` or `\r` terminator if one is next.
    fn take_terminator(&mut self) -> Option<&'a str> {
        let input = self.input;
        let start = self.cursor.offset;
        match self.peek_char()? {
            '\n' => {
                self.next_char();
            }
            '\r' => {
                self.next_char();
                if self.peek_char() == Some('\n') {
                    self.next_char();
                }
            }
            _ => return None,
        }
        Some(&input[start..self.cursor.offset])
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if is_whitespace(ch) {
                self.next_char();
            } else {
                break;
            }
        }
    }

    /// Copies one escape pair into `buf` untouched, validating `\uXXXX`.
    fn take_escape(&mut self, buf: &mut String, entry_start: Position) -> Result<()> {
        let escape_start = self.cursor;
        self.next_char();
        buf.push('\\');

        let Some(escaped) = self.next_char() else {
            return Ok(());
        };
        buf.push(escaped);

        if escaped == 'u' {
            for _ in 0..4 {
                match self.peek_char() {
                    Some(digit) if digit.is_ascii_hexdigit() => {
                        self.next_char();
                        buf.push(digit);
                    }
                    _ => {
                        let sequence = &self.input[escape_start.offset..self.cursor.offset];
                        return Err(Error::malformed_unicode_escape(
                            escape_start,
                            entry_start,
                            sequence,
                        ));
                    }
                }
            }
        }

        Ok(())
    }

    /// Parses the next logical line, or returns `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedUnicodeEscape`] if the line contains a `\u`
    /// escape without four hexadecimal digits.
    pub fn next_entry(&mut self) -> Result<Option<Entry>> {
        if self.at_end() {
            return Ok(None);
        }

        let start = self.cursor;
        let mut state = State::LineStart;
        let mut kind = LineKind::Blank;
        let mut key = String::new();
        let mut element = String::new();

        let (end, eol) = loop {
            let Some(ch) = self.peek_char() else {
                break (self.cursor, None);
            };

            if is_terminator(ch) {
                let end = self.cursor;
                break (end, self.take_terminator());
            }

            // Continuation: backslash right before a terminator or end of input.
            if ch == '\\' && state != State::InComment {
                match self.peek_second() {
                    None => {
                        self.next_char();
                        continue;
                    }
                    Some(next) if is_terminator(next) => {
                        self.next_char();
                        self.take_terminator();
                        self.skip_whitespace();
                        continue;
                    }
                    Some(_) => {}
                }
            }

            match state {
                State::LineStart => match ch {
                    c if is_whitespace(c) => {
                        self.next_char();
                    }
                    '#' | '!' => {
                        kind = LineKind::Comment;
                        state = State::InComment;
                        self.next_char();
                    }
                    _ => {
                        kind = LineKind::Property;
                        state = State::InKey;
                    }
                },
                State::InComment => {
                    self.next_char();
                }
                State::InKey => match ch {
                    '\\' => self.take_escape(&mut key, start)?,
                    '=' | ':' => {
                        self.next_char();
                        state = State::InSeparator { delimited: true };
                    }
                    c if is_whitespace(c) => {
                        self.next_char();
                        state = State::InSeparator { delimited: false };
                    }
                    c => {
                        self.next_char();
                        key.push(c);
                    }
                },
                State::InSeparator { delimited } => match ch {
                    c if is_whitespace(c) => {
                        self.next_char();
                    }
                    '=' | ':' if !delimited => {
                        self.next_char();
                        state = State::InSeparator { delimited: true };
                    }
                    _ => state = State::InElement,
                },
                State::InElement => match ch {
                    '\\' => self.take_escape(&mut element, start)?,
                    c => {
                        self.next_char();
                        element.push(c);
                    }
                },
            }
        };

        let mut entry = match kind {
            LineKind::Property => Entry::property(unescape(&key)?, unescape(&element)?),
            LineKind::Blank | LineKind::Comment => Entry::blank(),
        };

        if self.options.original {
            entry.original = Some(self.input[start.offset..end.offset].to_string());
        }
        if self.options.eol {
            entry.eol = Some(eol.map(str::to_string));
        }
        if self.options.location {
            entry.location = Some(Location { start, end });
        }

        tracing::trace!(line = start.line, ?kind, "scanned logical line");
        Ok(Some(entry))
    }
}

impl Iterator for Parser<'_> {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_entry() {
            Ok(entry) => entry.map(Ok),
            Err(err) => {
                // Stop after the first failure.
                self.cursor = Position::locate(self.input, self.input.len());
                Some(Err(err))
            }
        }
    }
}

/// Parses `input` into entries, dropping blank and comment lines unless
/// `options.all` is set.
///
/// # Errors
///
/// Fails on the first malformed `\u` escape; no partial result is returned.
pub fn parse(input: &str, options: ParseOptions) -> Result<Vec<Entry>> {
    let mut parser = Parser::new(input, options);
    let mut entries = Vec::new();
    let mut skipped = 0usize;

    while let Some(entry) = parser.next_entry()? {
        if options.all || entry.is_property() {
            entries.push(entry);
        } else {
            skipped += 1;
        }
    }

    tracing::debug!(
        entries = entries.len(),
        skipped,
        bytes = input.len(),
        "parsed properties input"
    );
    Ok(entries)
}
