//! # properties_parser
//!
//! A parser and stringifier for the `.properties` configuration format that
//! keeps enough information to write a file back exactly as it was read.
//!
//! ## What is a `.properties` file?
//!
//! A line-oriented key/value format with `#`/`!` comments, `=`, `:` or
//! whitespace separators, backslash escapes and trailing-backslash
//! continuation lines:
//!
//! ```text
//! # Database settings
//! db.host = localhost
//! db.port : 5432
//! greeting = Hello, \
//!            World
//! ```
//!
//! ## Key Features
//!
//! - **Lossless**: entries can carry their original text and line terminator,
//!   so unchanged files round-trip byte-for-byte
//! - **Located**: every entry can report its source span (offset, line, column)
//! - **Namespaces**: dotted keys optionally fold into nested maps
//! - **Ordered**: maps keep source order for deterministic output
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use properties_parser::{parse_to_properties, stringify, StringifyOptions};
//!
//! let props = parse_to_properties("name = Alice\nrole: admin", false).unwrap();
//! assert_eq!(props.get("name").and_then(|v| v.as_str()), Some("Alice"));
//!
//! let text = stringify(&props, StringifyOptions::new().with_eol("\n"));
//! assert_eq!(text, "name = Alice\nrole = admin\n");
//! ```
//!
//! ### Entries and Round Trips
//!
//! ```rust
//! use properties_parser::{parse_to_array, stringify, ParseOptions, StringifyOptions};
//!
//! let input = "# comment\r\nkey = value \\\n   continued\n";
//! let entries = parse_to_array(input, ParseOptions::lossless()).unwrap();
//!
//! assert_eq!(entries.len(), 2);
//! assert_eq!(entries[1].element.as_deref(), Some("value continued"));
//! assert_eq!(stringify(&entries, StringifyOptions::default()), input);
//! ```
//!
//! ### Namespaces
//!
//! ```rust
//! use properties_parser::{parse_to_properties, properties};
//!
//! let props = parse_to_properties("foo = bar\nfoo.qux = quux", true).unwrap();
//! assert_eq!(props, properties!({ "foo": { "": "bar", "qux": "quux" } }));
//! ```
//!
//! ## Format Reference
//!
//! See the [`grammar`] module for the accepted syntax.

pub mod entry;
pub mod error;
pub mod escape;
pub mod grammar;
pub mod macros;
pub mod map;
pub mod options;
pub mod parser;
pub mod project;
pub mod stringify;
pub mod value;

pub use entry::{Entry, Location, Position};
pub use error::{Error, Result};
pub use map::Properties;
pub use options::{Flag, ParseOptions, PropertiesOptions, StringifyOptions, Toggles};
pub use parser::Parser;
pub use stringify::{Source, Stringifier};
pub use value::PropertyValue;

use std::io;

/// Parse `.properties` text into an ordered list of entries.
///
/// Blank and comment lines are only included when `options.all` is set.
/// `options` accepts a [`ParseOptions`], a `bool` (all flags on/off) or
/// [`Toggles`].
///
/// # Examples
///
/// ```rust
/// use properties_parser::{parse_to_array, ParseOptions};
///
/// let entries = parse_to_array("\n# comment\nk = v", ParseOptions::default()).unwrap();
/// assert_eq!(entries.len(), 1);
///
/// let entries = parse_to_array("\n# comment\nk = v", ParseOptions::new().with_all(true)).unwrap();
/// assert_eq!(entries.len(), 3);
/// assert!(entries[0].key.is_none());
/// ```
///
/// # Errors
///
/// Returns [`Error::MalformedUnicodeEscape`] if any `\u` escape lacks four
/// hexadecimal digits.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_to_array(input: &str, options: impl Into<ParseOptions>) -> Result<Vec<Entry>> {
    parser::parse(input, options.into())
}

/// Parse `.properties` text straight into a [`Properties`] map.
///
/// Equivalent to [`parse_to_array`] with default options followed by
/// [`array_to_properties`].
///
/// # Examples
///
/// ```rust
/// use properties_parser::parse_to_properties;
///
/// let props = parse_to_properties("a = 1\na = 2", false).unwrap();
/// assert_eq!(props.get("a").and_then(|v| v.as_str()), Some("2"));
/// ```
///
/// # Errors
///
/// Returns [`Error::MalformedUnicodeEscape`] if any `\u` escape lacks four
/// hexadecimal digits.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_to_properties(
    input: &str,
    options: impl Into<PropertiesOptions>,
) -> Result<Properties> {
    let entries = parser::parse(input, ParseOptions::default())?;
    Ok(array_to_properties(&entries, options))
}

/// Fold parsed entries into a [`Properties`] map.
///
/// Blank and comment entries are ignored and later keys overwrite earlier
/// ones. With `namespace` on, dotted keys become nested maps.
#[must_use]
pub fn array_to_properties(entries: &[Entry], options: impl Into<PropertiesOptions>) -> Properties {
    project::project(entries, options.into())
}

/// Stringify either an entry list or a [`Properties`] map.
///
/// # Examples
///
/// ```rust
/// use properties_parser::{properties, stringify, Entry, StringifyOptions};
///
/// let options = StringifyOptions::new().with_eol("\n");
///
/// let entries = vec![Entry::property("k", "v")];
/// assert_eq!(stringify(&entries, options.clone()), "k = v\n");
///
/// let props = properties!({ "k": "v" });
/// assert_eq!(stringify(&props, options), "k = v\n");
/// ```
#[must_use]
pub fn stringify<'a>(input: impl Into<Source<'a>>, options: StringifyOptions) -> String {
    let mut stringifier = Stringifier::new(options);
    stringifier.write_source(input.into());
    stringifier.into_inner()
}

/// Stringify entries, preferring each entry's original text when present.
#[must_use]
pub fn stringify_from_entries(entries: &[Entry], options: StringifyOptions) -> String {
    let mut stringifier = Stringifier::new(options);
    stringifier.write_entries(entries);
    stringifier.into_inner()
}

/// Stringify a flat [`Properties`] map in insertion order.
///
/// Nested namespaces are skipped; call [`Properties::flatten`] first to
/// include them.
#[must_use]
pub fn stringify_from_properties(properties: &Properties, options: StringifyOptions) -> String {
    let mut stringifier = Stringifier::new(options);
    stringifier.write_properties(properties);
    stringifier.into_inner()
}

/// Read `.properties` text from an I/O stream into a [`Properties`] map.
///
/// # Examples
///
/// ```rust
/// use properties_parser::from_reader;
/// use std::io::Cursor;
///
/// let props = from_reader(Cursor::new(b"x = 1\ny = 2"), false).unwrap();
/// assert_eq!(props.len(), 2);
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails or the input is not UTF-8, and
/// [`Error::MalformedUnicodeEscape`] for bad `\u` escapes.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R, options: impl Into<PropertiesOptions>) -> Result<Properties>
where
    R: io::Read,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    parse_to_properties(&string, options)
}

/// Write entries or properties to an I/O stream.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<'a, W>(
    mut writer: W,
    input: impl Into<Source<'a>>,
    options: StringifyOptions,
) -> Result<()>
where
    W: io::Write,
{
    let text = stringify(input, options);
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
