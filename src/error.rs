//! Error types for `.properties` parsing.
//!
//! The format is permissive: every line is either a property, a comment or a
//! blank line, so the parser has no general syntax-error path. The one input
//! it refuses is a `\u` escape that is not followed by four hexadecimal
//! digits. That failure carries the exact source position so editors and
//! linters can point at the offending sequence.
//!
//! ## Examples
//!
//! ```rust
//! use properties_parser::{parse_to_array, Error, ParseOptions};
//!
//! let result = parse_to_array("greeting = caf\\u00e", ParseOptions::default());
//!
//! match result {
//!     Err(Error::MalformedUnicodeEscape { position, .. }) => {
//!         assert_eq!(position.line, 1);
//!         assert_eq!(position.column, 15);
//!     }
//!     other => panic!("expected a malformed escape, got {:?}", other),
//! }
//! ```

use crate::entry::Position;
use thiserror::Error;

/// Represents all possible errors that can occur while parsing or writing
/// `.properties` content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A `\u` escape without four valid hexadecimal digits.
    ///
    /// `position` points at the backslash that opens the escape and
    /// `entry_start` at the first character of the logical line containing it.
    #[error(
        "Malformed unicode escape {sequence:?} at line {}, column {} (offset {})",
        position.line,
        position.column,
        position.offset
    )]
    MalformedUnicodeEscape {
        position: Position,
        entry_start: Position,
        sequence: String,
    },

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates a malformed unicode escape error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use properties_parser::{Error, Position};
    ///
    /// let at = Position { offset: 4, line: 1, column: 5 };
    /// let err = Error::malformed_unicode_escape(at, Position::default(), "\\u12");
    /// assert!(err.to_string().contains("line 1, column 5"));
    /// ```
    pub fn malformed_unicode_escape(
        position: Position,
        entry_start: Position,
        sequence: &str,
    ) -> Self {
        Error::MalformedUnicodeEscape {
            position,
            entry_start,
            sequence: sequence.to_string(),
        }
    }

    /// Creates an I/O error for reader/writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the source position associated with this error, if any.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        match self {
            Error::MalformedUnicodeEscape { position, .. } => Some(*position),
            Error::Io(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
