//! Writing entries and properties back to `.properties` text.
//!
//! This module provides the [`Stringifier`], which accumulates output for
//! either an entry sequence or a [`Properties`] map.
//!
//! ## Overview
//!
//! - **Round trips**: an entry carrying `original` text is written verbatim,
//!   so parsing with [`ParseOptions::lossless`](crate::ParseOptions::lossless)
//!   and stringifying reproduces the input byte-for-byte
//! - **Per-entry overrides**: an entry's own `sep`/`eol` win over the options
//! - **Escaping**: keys and elements written from data are escaped so they
//!   read back unchanged
//!
//! ## Usage
//!
//! ```rust
//! use properties_parser::{parse_to_array, stringify_from_entries, ParseOptions, StringifyOptions};
//!
//! let input = "# db\r\nhost = localhost\nport: 5432";
//! let entries = parse_to_array(input, ParseOptions::lossless()).unwrap();
//! assert_eq!(stringify_from_entries(&entries, StringifyOptions::default()), input);
//! ```
//!
//! Nested namespaces are not written by
//! [`stringify_from_properties`](crate::stringify_from_properties); flatten
//! them first with [`Properties::flatten`].

use crate::escape::{escape, Role};
use crate::{Entry, Properties, PropertyValue, StringifyOptions};

/// Input accepted by [`stringify`](crate::stringify).
#[derive(Clone, Copy, Debug)]
pub enum Source<'a> {
    Entries(&'a [Entry]),
    Properties(&'a Properties),
}

impl<'a> From<&'a [Entry]> for Source<'a> {
    fn from(entries: &'a [Entry]) -> Self {
        Source::Entries(entries)
    }
}

impl<'a> From<&'a Vec<Entry>> for Source<'a> {
    fn from(entries: &'a Vec<Entry>) -> Self {
        Source::Entries(entries)
    }
}

impl<'a> From<&'a Properties> for Source<'a> {
    fn from(properties: &'a Properties) -> Self {
        Source::Properties(properties)
    }
}

/// Accumulates `.properties` text.
pub struct Stringifier {
    output: String,
    options: StringifyOptions,
}

impl Stringifier {
    /// Creates an empty stringifier writing with `options`.
    #[must_use]
    pub fn new(options: StringifyOptions) -> Self {
        Stringifier {
            output: String::with_capacity(256),
            options,
        }
    }

    /// Consumes the stringifier, returning the text written so far.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.output
    }

    /// Writes one entry followed by its line terminator.
    pub fn write_entry(&mut self, entry: &Entry) {
        let sep = match entry.sep.as_deref() {
            Some(sep) if !sep.is_empty() => sep,
            _ => self.options.sep.as_str(),
        };
        let eol = match &entry.eol {
            Some(eol) => eol.as_deref().unwrap_or(""),
            None => self.options.eol.as_str(),
        };

        if let Some(original) = &entry.original {
            self.output.push_str(original);
        } else if let (Some(key), Some(element)) = (&entry.key, &entry.element) {
            self.output.push_str(&escape(key, Role::Key));
            self.output.push_str(sep);
            self.output.push_str(&escape(element, Role::Element));
        }

        self.output.push_str(eol);
    }

    /// Writes one `key<sep>element<eol>` line.
    pub fn write_property(&mut self, key: &str, element: &str) {
        self.output.push_str(&escape(key, Role::Key));
        self.output.push_str(&self.options.sep);
        self.output.push_str(&escape(element, Role::Element));
        self.output.push_str(&self.options.eol);
    }

    pub fn write_entries(&mut self, entries: &[Entry]) {
        for entry in entries {
            self.write_entry(entry);
        }
    }

    /// Writes every scalar of a flat map, in insertion order.
    ///
    /// Nested namespaces are skipped with a warning.
    pub fn write_properties(&mut self, properties: &Properties) {
        for (key, value) in properties {
            match value {
                PropertyValue::Scalar(element) => self.write_property(key, element),
                PropertyValue::Namespace(_) => {
                    tracing::warn!(key = %key, "skipping nested namespace; flatten before stringifying");
                }
            }
        }
    }

    pub fn write_source(&mut self, source: Source<'_>) {
        match source {
            Source::Entries(entries) => self.write_entries(entries),
            Source::Properties(properties) => self.write_properties(properties),
        }
    }
}
