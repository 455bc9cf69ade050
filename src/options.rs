//! Options for parsing and stringifying.
//!
//! Three option sets exist, one per operation:
//!
//! - [`ParseOptions`]: which extra data [`parse_to_array`](crate::parse_to_array) records
//! - [`PropertiesOptions`]: how entries fold into a [`Properties`](crate::Properties) map
//! - [`StringifyOptions`]: separator and line terminator used when writing
//!
//! The two flag sets can also be built from loosely-typed [`Toggles`]: `true`
//! turns every recognized flag on, and a map holding an empty-string key sets
//! the default for every flag it does not list.
//!
//! ## Examples
//!
//! ```rust
//! use properties_parser::{ParseOptions, Toggles};
//!
//! // Everything on
//! let options = ParseOptions::from(true);
//! assert!(options.all && options.original && options.eol && options.location);
//!
//! // Everything on except location
//! let toggles = Toggles::explicit([("", true), ("location", false)]);
//! let options = ParseOptions::from(toggles);
//! assert!(options.all && !options.location);
//!
//! // Typed builder
//! let options = ParseOptions::new().with_all(true).with_eol(true);
//! assert!(options.all && !options.original);
//! ```

use indexmap::IndexMap;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Flag names understood by [`ParseOptions`].
pub const PARSE_OPTION_NAMES: [&str; 4] = ["all", "original", "eol", "location"];

/// Flag names understood by [`PropertiesOptions`].
pub const PROPERTIES_OPTION_NAMES: [&str; 1] = ["namespace"];

/// Loosely-typed option flags, as they would arrive from JSON or a CLI.
///
/// Deserializes from either a boolean or an object. Object entries whose
/// value is not a boolean are kept as [`Flag::Ignored`].
///
/// ```rust
/// use properties_parser::Toggles;
///
/// let toggles: Toggles = serde_json::from_str(r#"{"": true, "eol": false}"#).unwrap();
/// assert_eq!(toggles, Toggles::explicit([("", true), ("eol", false)]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Toggles {
    /// `false` turns every flag off, `true` turns every flag on.
    Switch(bool),
    /// Per-flag settings; the `""` key, if it holds a boolean, is the default.
    Explicit(IndexMap<String, Flag>),
}

/// One entry of [`Toggles::Explicit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Flag {
    Set(bool),
    /// Any non-boolean value. Never read.
    Ignored,
}

impl Flag {
    #[must_use]
    pub const fn as_bool(self) -> Option<bool> {
        match self {
            Flag::Set(on) => Some(on),
            Flag::Ignored => None,
        }
    }
}

impl<'de> Deserialize<'de> for Flag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Set(bool),
            Other(IgnoredAny),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Set(on) => Flag::Set(on),
            Raw::Other(_) => Flag::Ignored,
        })
    }
}

impl From<bool> for Flag {
    fn from(on: bool) -> Self {
        Flag::Set(on)
    }
}

impl Default for Toggles {
    fn default() -> Self {
        Toggles::Switch(false)
    }
}

impl Toggles {
    /// Builds explicit toggles from `(name, value)` pairs.
    #[must_use]
    pub fn explicit<'a>(flags: impl IntoIterator<Item = (&'a str, bool)>) -> Self {
        Toggles::Explicit(
            flags
                .into_iter()
                .map(|(name, on)| (name.to_string(), Flag::Set(on)))
                .collect(),
        )
    }
}

/// Resolves `toggles` against a list of recognized flag names.
///
/// Every recognized name appears exactly once in the result, in the order of
/// `recognized`. Unrecognized names in `toggles` are ignored.
///
/// ```rust
/// use properties_parser::options::{normalize, Toggles, PARSE_OPTION_NAMES};
///
/// let flags = normalize(&Toggles::explicit([("all", true), ("bogus", true)]), &PARSE_OPTION_NAMES);
/// assert_eq!(flags.get("all"), Some(&true));
/// assert_eq!(flags.get("eol"), Some(&false));
/// assert!(flags.get("bogus").is_none());
/// ```
#[must_use]
pub fn normalize(toggles: &Toggles, recognized: &[&'static str]) -> IndexMap<&'static str, bool> {
    match toggles {
        Toggles::Switch(on) => recognized.iter().map(|name| (*name, *on)).collect(),
        Toggles::Explicit(flags) => {
            let read = |name: &str| flags.get(name).and_then(|flag| flag.as_bool());
            let fallback = read("").unwrap_or(false);
            recognized
                .iter()
                .map(|name| (*name, read(*name).unwrap_or(fallback)))
                .collect()
        }
    }
}

fn flag(flags: &IndexMap<&'static str, bool>, name: &str) -> bool {
    flags.get(name).copied().unwrap_or(false)
}

/// Controls what [`parse_to_array`](crate::parse_to_array) records per entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Keep blank and comment lines.
    pub all: bool,
    /// Record the exact source text of each logical line.
    pub original: bool,
    /// Record the line terminator following each logical line.
    pub eol: bool,
    /// Record the source span of each logical line.
    pub location: bool,
}

impl ParseOptions {
    /// Creates options with every flag off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that keep everything needed to reproduce the input exactly.
    ///
    /// ```rust
    /// use properties_parser::ParseOptions;
    ///
    /// let options = ParseOptions::lossless();
    /// assert!(options.all && options.original && options.eol);
    /// assert!(!options.location);
    /// ```
    #[must_use]
    pub fn lossless() -> Self {
        ParseOptions {
            all: true,
            original: true,
            eol: true,
            location: false,
        }
    }

    #[must_use]
    pub fn with_all(mut self, all: bool) -> Self {
        self.all = all;
        self
    }

    #[must_use]
    pub fn with_original(mut self, original: bool) -> Self {
        self.original = original;
        self
    }

    #[must_use]
    pub fn with_eol(mut self, eol: bool) -> Self {
        self.eol = eol;
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: bool) -> Self {
        self.location = location;
        self
    }
}

impl From<&Toggles> for ParseOptions {
    fn from(toggles: &Toggles) -> Self {
        let flags = normalize(toggles, &PARSE_OPTION_NAMES);
        ParseOptions {
            all: flag(&flags, "all"),
            original: flag(&flags, "original"),
            eol: flag(&flags, "eol"),
            location: flag(&flags, "location"),
        }
    }
}

impl From<Toggles> for ParseOptions {
    fn from(toggles: Toggles) -> Self {
        ParseOptions::from(&toggles)
    }
}

impl From<bool> for ParseOptions {
    fn from(on: bool) -> Self {
        ParseOptions::from(Toggles::Switch(on))
    }
}

impl From<Option<Toggles>> for ParseOptions {
    fn from(toggles: Option<Toggles>) -> Self {
        toggles.map(ParseOptions::from).unwrap_or_default()
    }
}

/// Controls how entries fold into a [`Properties`](crate::Properties) map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PropertiesOptions {
    /// Split keys on `.` into nested namespaces.
    pub namespace: bool,
}

impl PropertiesOptions {
    /// Creates options producing a flat map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_namespace(mut self, namespace: bool) -> Self {
        self.namespace = namespace;
        self
    }
}

impl From<&Toggles> for PropertiesOptions {
    fn from(toggles: &Toggles) -> Self {
        let flags = normalize(toggles, &PROPERTIES_OPTION_NAMES);
        PropertiesOptions {
            namespace: flag(&flags, "namespace"),
        }
    }
}

impl From<Toggles> for PropertiesOptions {
    fn from(toggles: Toggles) -> Self {
        PropertiesOptions::from(&toggles)
    }
}

impl From<bool> for PropertiesOptions {
    fn from(on: bool) -> Self {
        PropertiesOptions::from(Toggles::Switch(on))
    }
}

impl From<Option<Toggles>> for PropertiesOptions {
    fn from(toggles: Option<Toggles>) -> Self {
        toggles.map(PropertiesOptions::from).unwrap_or_default()
    }
}

/// Separator and line terminator used when writing `.properties` text.
///
/// ```rust
/// use properties_parser::StringifyOptions;
///
/// let options = StringifyOptions::default();
/// assert_eq!(options.sep, " = ");
/// assert_eq!(options.eol, "\r\n");
///
/// let options = StringifyOptions::new().with_sep("=").with_eol("\n");
/// assert_eq!(options.sep, "=");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringifyOptions {
    pub sep: String,
    pub eol: String,
}

impl Default for StringifyOptions {
    fn default() -> Self {
        StringifyOptions {
            sep: " = ".to_string(),
            eol: "\r\n".to_string(),
        }
    }
}

impl StringifyOptions {
    /// Creates default options (`" = "` separator, CRLF line endings).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the key/element separator. An empty separator keeps the default.
    #[must_use]
    pub fn with_sep(mut self, sep: impl Into<String>) -> Self {
        let sep = sep.into();
        if !sep.is_empty() {
            self.sep = sep;
        }
        self
    }

    /// Sets the line terminator. An empty terminator keeps the default.
    #[must_use]
    pub fn with_eol(mut self, eol: impl Into<String>) -> Self {
        let eol = eol.into();
        if !eol.is_empty() {
            self.eol = eol;
        }
        self
    }
}
