//! The `.properties` format as accepted by this crate
//!
//! This module documents the grammar implemented by [`Parser`](crate::Parser).
//! It contains no code.
//!
//! # Lines
//!
//! Input is split on `\n`, `\r\n` and `\r`. A physical line whose last
//! character is an unescaped backslash continues onto the next physical line:
//! the backslash and terminator are removed and leading whitespace of the next
//! line is skipped. The joined result is a *logical line*; each logical line
//! yields exactly one entry.
//!
//! ```text
//! fruits = apple, \
//!          banana, \
//!          cherry
//! ```
//!
//! parses to a single entry whose element is `apple, banana, cherry`.
//!
//! Whitespace means space, tab or form feed.
//!
//! # Line kinds
//!
//! | Kind | Rule | Entry |
//! |------|------|-------|
//! | Blank | empty or whitespace only | `key: None, element: None` |
//! | Comment | first non-whitespace char is `#` or `!` | `key: None, element: None` |
//! | Property | anything else | `key: Some, element: Some` |
//!
//! Comment lines never continue, even when they end in a backslash.
//!
//! # Property lines
//!
//! ```text
//! key [ws] [= | :] [ws] element
//! ```
//!
//! - Leading whitespace is skipped.
//! - The key runs up to the first unescaped `=`, `:` or whitespace.
//! - The separator is that `=`/`:` with optional whitespace around it, or a
//!   run of whitespace alone. Only one `=`/`:` is consumed: `a = = b` has the
//!   element `= b`.
//! - The element is the rest of the logical line. Trailing whitespace is kept.
//! - A line with no separator has an empty element: `key` is `key = ""`.
//!
//! # Escapes
//!
//! | Source | Value |
//! |--------|-------|
//! | `\\` | `\` |
//! | `\n`, `\r`, `\t`, `\f` | newline, carriage return, tab, form feed |
//! | `\=`, `\:`, `\ ` | `=`, `:`, space |
//! | `\uXXXX` | the UTF-16 code unit; surrogate pairs combine |
//! | `\` + other | the other character |
//!
//! `\u` without four hexadecimal digits fails the whole parse with
//! [`Error::MalformedUnicodeEscape`](crate::Error::MalformedUnicodeEscape).
//!
//! When writing, only `\`, newline, carriage return, tab and form feed are
//! escaped in elements, plus `=`, `:` and space in keys. Non-ASCII text is
//! written as-is, never as `\uXXXX`.
//!
//! # Locations
//!
//! Offsets are 0-based byte offsets into the input. Lines and columns are
//! 1-based; columns count characters. A logical line's span runs from the
//! start of its first physical line to just before its final terminator.
//! Continued lines keep their own line numbers.
//!
//! # Namespaces
//!
//! When folding entries into a map with namespace mode on, keys split on `.`:
//!
//! ```text
//! db = primary
//! db.host = localhost
//! ```
//!
//! becomes `{"db": {"": "primary", "host": "localhost"}}`.
