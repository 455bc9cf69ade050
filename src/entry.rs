//! Parsed entries and source locations.
//!
//! An [`Entry`] is one logical line of a `.properties` file: a property, a
//! comment or a blank line. Optional fields (`original`, `eol`, `location`)
//! are only filled in when the matching parse option is switched on, so the
//! same type serves both compact key/value listings and lossless round trips.
//!
//! ```rust
//! use properties_parser::{parse_to_array, ParseOptions};
//!
//! let entries = parse_to_array("# header\nname = Alice\n", true).unwrap();
//!
//! assert_eq!(entries.len(), 2);
//! assert!(entries[0].is_blank_or_comment());
//! assert_eq!(entries[1].key.as_deref(), Some("name"));
//! assert_eq!(entries[1].eol, Some(Some("\n".to_string())));
//! ```

use serde::{Deserialize, Deserializer, Serialize};

/// A point in the source text.
///
/// `offset` is a 0-based byte offset into the input; `line` and `column` are
/// 1-based, with `column` counted in characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Default for Position {
    fn default() -> Self {
        Position {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

impl Position {
    /// Computes the position of a byte offset within `text`.
    ///
    /// `\n`, `\r\n` and `\r` each count as one line terminator. An offset
    /// past the end of `text` is clamped to its length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use properties_parser::Position;
    ///
    /// let pos = Position::locate("a = 1\r\nb = 2", 8);
    /// assert_eq!((pos.line, pos.column), (2, 2));
    /// ```
    #[must_use]
    pub fn locate(text: &str, offset: usize) -> Self {
        let mut position = Position::default();
        let mut chars = text.char_indices().peekable();

        while let Some((index, ch)) = chars.next() {
            if index >= offset {
                break;
            }
            position.offset = index + ch.len_utf8();
            match ch {
                '\r' if matches!(chars.peek(), Some((_, '\n'))) => {
                    // the '\n' half closes the line
                    position.column += 1;
                }
                '\r' | '\n' => {
                    position.line += 1;
                    position.column = 1;
                }
                _ => position.column += 1,
            }
        }

        position
    }
}

/// The span a logical line occupies in the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub start: Position,
    pub end: Position,
}

/// One logical line of a `.properties` file.
///
/// `key` and `element` are both `Some` for property lines and both `None` for
/// comments and blank lines.
///
/// `eol` is doubly optional: `None` means the terminator was not recorded,
/// `Some(None)` means the line was the last one and had no terminator. The
/// distinction matters when stringifying, where an absent `eol` falls back
/// to the configured default while `Some(None)` writes nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub key: Option<String>,
    pub element: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,

    /// Separator override used only when stringifying.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sep: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub eol: Option<Option<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// Keeps an explicit `null` distinct from a missing field.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl Entry {
    /// Creates a property entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use properties_parser::Entry;
    ///
    /// let entry = Entry::property("user.name", "Alice");
    /// assert!(entry.is_property());
    /// ```
    #[must_use]
    pub fn property(key: impl Into<String>, element: impl Into<String>) -> Self {
        Entry {
            key: Some(key.into()),
            element: Some(element.into()),
            ..Default::default()
        }
    }

    /// Creates a blank (or comment) entry with no key and no element.
    #[must_use]
    pub fn blank() -> Self {
        Entry::default()
    }

    /// Attaches original source text to this entry.
    #[must_use]
    pub fn with_original(mut self, original: impl Into<String>) -> Self {
        self.original = Some(original.into());
        self
    }

    /// Attaches a line terminator; `None` records "no terminator".
    #[must_use]
    pub fn with_eol(mut self, eol: Option<&str>) -> Self {
        self.eol = Some(eol.map(str::to_string));
        self
    }

    /// Attaches a separator override for stringification.
    #[must_use]
    pub fn with_sep(mut self, sep: impl Into<String>) -> Self {
        self.sep = Some(sep.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn is_property(&self) -> bool {
        self.key.is_some() && self.element.is_some()
    }

    #[inline]
    #[must_use]
    pub fn is_blank_or_comment(&self) -> bool {
        self.key.is_none()
    }
}
