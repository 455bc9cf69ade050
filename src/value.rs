//! Values stored in a [`Properties`] map.
//!
//! A flat map only ever holds [`PropertyValue::Scalar`]. With namespace mode
//! on, dotted keys become nested [`PropertyValue::Namespace`] maps:
//!
//! ```rust
//! use properties_parser::{parse_to_properties, PropertyValue};
//!
//! let props = parse_to_properties("db.host = localhost\ndb.port = 5432", true).unwrap();
//!
//! let db = props.get("db").and_then(PropertyValue::as_namespace).unwrap();
//! assert_eq!(db.get("host").and_then(|v| v.as_str()), Some("localhost"));
//! assert_eq!(props.get_path("db.port").and_then(|v| v.as_str()), Some("5432"));
//! ```
//!
//! Serialized with serde, scalars become strings and namespaces become
//! objects, matching the JSON shape other `.properties` tooling produces.

use crate::Properties;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A property element, or a namespace of further properties.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropertyValue {
    Scalar(String),
    Namespace(Properties),
}

impl Default for PropertyValue {
    fn default() -> Self {
        PropertyValue::Scalar(String::new())
    }
}

impl PropertyValue {
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, PropertyValue::Scalar(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_namespace(&self) -> bool {
        matches!(self, PropertyValue::Namespace(_))
    }

    /// If the value is a scalar, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use properties_parser::{Properties, PropertyValue};
    ///
    /// assert_eq!(PropertyValue::from("on").as_str(), Some("on"));
    /// assert_eq!(PropertyValue::from(Properties::new()).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Scalar(s) => Some(s),
            PropertyValue::Namespace(_) => None,
        }
    }

    /// If the value is a namespace, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_namespace(&self) -> Option<&Properties> {
        match self {
            PropertyValue::Namespace(map) => Some(map),
            PropertyValue::Scalar(_) => None,
        }
    }

    #[inline]
    pub fn as_namespace_mut(&mut self) -> Option<&mut Properties> {
        match self {
            PropertyValue::Namespace(map) => Some(map),
            PropertyValue::Scalar(_) => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Scalar(s) => f.write_str(s),
            PropertyValue::Namespace(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}: {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl Serialize for PropertyValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PropertyValue::Scalar(s) => serializer.serialize_str(s),
            PropertyValue::Namespace(map) => map.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for PropertyValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> serde::de::Visitor<'de> for ValueVisitor {
            type Value = PropertyValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or a map of properties")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(PropertyValue::Scalar(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(PropertyValue::Scalar(value))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut properties = Properties::new();
                while let Some((key, value)) = map.next_entry::<String, PropertyValue>()? {
                    properties.insert(key, value);
                }
                Ok(PropertyValue::Namespace(properties))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Scalar(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Scalar(value.to_string())
    }
}

impl From<Properties> for PropertyValue {
    fn from(value: Properties) -> Self {
        PropertyValue::Namespace(value)
    }
}

impl TryFrom<PropertyValue> for String {
    type Error = PropertyValue;

    fn try_from(value: PropertyValue) -> Result<Self, Self::Error> {
        match value {
            PropertyValue::Scalar(s) => Ok(s),
            other => Err(other),
        }
    }
}
