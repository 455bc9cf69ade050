//! Backslash escaping for keys and elements.
//!
//! Decoding understands the full set of `.properties` escapes, including
//! `\uXXXX`. Encoding is narrower: it only escapes the
//! characters that would otherwise change how a line is read back, and
//! leaves non-ASCII text as-is instead of emitting `\uXXXX`.
//!
//! | Source | Decoded |
//! |--------|---------|
//! | `\\`   | `\`     |
//! | `\n` `\r` `\t` `\f` | newline, carriage return, tab, form feed |
//! | `\=` `\:` `\ ` | `=`, `:`, space |
//! | `\uXXXX` | the UTF-16 code unit `XXXX` |
//! | `\x` (anything else) | `x` |
//!
//! ```rust
//! use properties_parser::escape::{escape, unescape, Role};
//!
//! assert_eq!(unescape(r"a\tb\u0041").unwrap(), "a\tbA");
//! assert_eq!(escape("a key", Role::Key), r"a\ key");
//! assert_eq!(escape("a = b", Role::Element), "a = b");
//! ```

use crate::entry::Position;
use crate::{Error, Result};
use std::iter::Peekable;
use std::str::CharIndices;

/// Which half of a property line a string is escaped for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Key,
    Element,
}

/// Decodes backslash escapes in raw source text.
///
/// A lone backslash at the very end of `raw` is dropped. High/low surrogate
/// pairs written as two `\u` escapes combine into one character; an unpaired
/// surrogate becomes U+FFFD.
///
/// # Errors
///
/// Returns [`Error::MalformedUnicodeEscape`] when `\u` is not followed by
/// four hexadecimal digits. The reported position is relative to `raw`.
pub fn unescape(raw: &str) -> Result<String> {
    if !raw.contains('\\') {
        return Ok(raw.to_string());
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.char_indices().peekable();

    while let Some((index, ch)) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        match chars.next() {
            None => {}
            Some((_, 'u')) => {
                let unit = read_code_unit(&mut chars).ok_or_else(|| malformed(raw, index))?;
                out.push(decode_code_unit(unit, &mut chars));
            }
            Some((_, 'n')) => out.push('\n'),
            Some((_, 'r')) => out.push('\r'),
            Some((_, 't')) => out.push('\t'),
            Some((_, 'f')) => out.push('\x0C'),
            Some((_, other)) => {
                if !matches!(other, '\\' | '=' | ':' | ' ' | '#' | '!') {
                    tracing::trace!(escape = %other, "undefined escape decoded literally");
                }
                out.push(other);
            }
        }
    }

    Ok(out)
}

/// Escapes a logical string so it reads back unchanged in the given role.
///
/// Keys additionally escape `=`, `:` and space, which would otherwise end
/// the key.
#[must_use]
pub fn escape(logical: &str, role: Role) -> String {
    let mut out = String::with_capacity(logical.len() + logical.len() / 8);

    for ch in logical.chars() {
        match (role, ch) {
            (Role::Key, '=') => out.push_str("\\="),
            (Role::Key, ':') => out.push_str("\\:"),
            (Role::Key, ' ') => out.push_str("\\ "),
            (_, '\\') => out.push_str("\\\\"),
            (_, '\x0C') => out.push_str("\\f"),
            (_, '\n') => out.push_str("\\n"),
            (_, '\r') => out.push_str("\\r"),
            (_, '\t') => out.push_str("\\t"),
            (_, other) => out.push(other),
        }
    }

    out
}

/// Collapses doubled backslashes (`\\` to `\`) and nothing else.
///
/// Applied when folding entries into a properties map, after the parser has
/// already decoded every other escape.
#[must_use]
pub fn unescape_backslashes(input: &str) -> String {
    input.replace("\\\\", "\\")
}

/// Reads the four hex digits of a `\u` escape.
fn read_code_unit(chars: &mut Peekable<CharIndices<'_>>) -> Option<u16> {
    let mut unit: u16 = 0;
    for _ in 0..4 {
        let digit = chars.peek().and_then(|(_, c)| c.to_digit(16))?;
        chars.next();
        unit = (unit << 4) | digit as u16;
    }
    Some(unit)
}

fn decode_code_unit(unit: u16, chars: &mut Peekable<CharIndices<'_>>) -> char {
    if (0xD800..=0xDBFF).contains(&unit) {
        // A high surrogate only pairs with an immediately following `\uDC00..\uDFFF`.
        let mut lookahead = chars.clone();
        if let (Some((_, '\\')), Some((_, 'u'))) = (lookahead.next(), lookahead.next()) {
            if let Some(low @ 0xDC00..=0xDFFF) = read_code_unit(&mut lookahead) {
                *chars = lookahead;
                let combined =
                    0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
                return char::from_u32(combined).unwrap_or(char::REPLACEMENT_CHARACTER);
            }
        }
        return char::REPLACEMENT_CHARACTER;
    }

    char::from_u32(u32::from(unit)).unwrap_or(char::REPLACEMENT_CHARACTER)
}

fn malformed(raw: &str, index: usize) -> Error {
    let sequence: String = raw[index..].chars().take(6).collect();
    Error::malformed_unicode_escape(
        Position::locate(raw, index),
        Position::default(),
        &sequence,
    )
}
