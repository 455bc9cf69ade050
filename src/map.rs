//! Ordered map of property keys to values.
//!
//! [`Properties`] wraps an [`IndexMap`] so iteration follows the order keys
//! first appeared in the source. Re-assigning a key keeps its original slot.
//!
//! ## Examples
//!
//! ```rust
//! use properties_parser::{Properties, PropertyValue};
//!
//! let mut map = Properties::new();
//! map.insert("name".to_string(), PropertyValue::from("Alice"));
//! map.insert("role".to_string(), PropertyValue::from("admin"));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use crate::PropertyValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An insertion-ordered map of property keys to [`PropertyValue`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties(IndexMap<String, PropertyValue>);

impl Properties {
    /// Creates an empty `Properties` map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use properties_parser::Properties;
    ///
    /// let map = Properties::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Properties(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Properties(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair, returning the previous value for `key`.
    ///
    /// An existing key keeps its position in iteration order.
    pub fn insert(&mut self, key: String, value: PropertyValue) -> Option<PropertyValue> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut PropertyValue> {
        self.0.get_mut(key)
    }

    /// Returns the value for `key`, inserting `default()` first if absent.
    pub fn get_or_insert_with(
        &mut self,
        key: String,
        default: impl FnOnce() -> PropertyValue,
    ) -> &mut PropertyValue {
        self.0.entry(key).or_insert_with(default)
    }

    /// Looks up a dot-separated path through nested namespaces.
    ///
    /// A path ending on a namespace resolves to that namespace's `""` value
    /// when it has one, mirroring how a `foo` key coexists with `foo.bar`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use properties_parser::{parse_to_properties, PropertiesOptions};
    ///
    /// let props = parse_to_properties(
    ///     "foo = bar\nfoo.qux = quux",
    ///     PropertiesOptions::new().with_namespace(true),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(props.get_path("foo.qux").and_then(|v| v.as_str()), Some("quux"));
    /// assert_eq!(props.get_path("foo").and_then(|v| v.as_str()), Some("bar"));
    /// assert!(props.get_path("foo.missing").is_none());
    /// ```
    #[must_use]
    pub fn get_path(&self, path: &str) -> Option<&PropertyValue> {
        let mut segments = path.split('.');
        let mut current = self.get(segments.next()?)?;

        for segment in segments {
            current = current.as_namespace()?.get(segment)?;
        }

        match current {
            PropertyValue::Namespace(map) => map.get("").or(Some(current)),
            PropertyValue::Scalar(_) => Some(current),
        }
    }

    /// Re-joins nested namespaces into dotted keys.
    ///
    /// The `""` entry of a namespace maps back to the namespace's own key.
    /// A flat map is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use properties_parser::{properties, Properties};
    ///
    /// let nested = properties!({ "foo": { "": "bar", "qux": "quux" } });
    /// let flat = nested.flatten();
    ///
    /// let keys: Vec<_> = flat.keys().cloned().collect();
    /// assert_eq!(keys, vec!["foo", "foo.qux"]);
    /// ```
    #[must_use]
    pub fn flatten(&self) -> Properties {
        let mut flat = Properties::with_capacity(self.len());
        flatten_into(&mut flat, None, self);
        flat
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, PropertyValue> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, PropertyValue> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, PropertyValue> {
        self.0.iter()
    }
}

fn flatten_into(flat: &mut Properties, prefix: Option<&str>, map: &Properties) {
    for (key, value) in map.iter() {
        let path = match (prefix, key.is_empty()) {
            (Some(prefix), true) => prefix.to_string(),
            (Some(prefix), false) => format!("{}.{}", prefix, key),
            (None, _) => key.clone(),
        };
        match value {
            PropertyValue::Scalar(_) => {
                flat.insert(path, value.clone());
            }
            PropertyValue::Namespace(inner) => flatten_into(flat, Some(&path), inner),
        }
    }
}

impl<'a> IntoIterator for &'a Properties {
    type Item = (&'a String, &'a PropertyValue);
    type IntoIter = indexmap::map::Iter<'a, String, PropertyValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Properties {
    type Item = (String, PropertyValue);
    type IntoIter = indexmap::map::IntoIter<String, PropertyValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, PropertyValue)> for Properties {
    fn from_iter<T: IntoIterator<Item = (String, PropertyValue)>>(iter: T) -> Self {
        Properties(IndexMap::from_iter(iter))
    }
}

impl From<HashMap<String, String>> for Properties {
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter()
            .map(|(key, value)| (key, PropertyValue::Scalar(value)))
            .collect()
    }
}

impl From<Properties> for HashMap<String, PropertyValue> {
    fn from(map: Properties) -> Self {
        map.0.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first_position() {
        let mut map = Properties::new();
        map.insert("a".to_string(), PropertyValue::from("1"));
        map.insert("b".to_string(), PropertyValue::from("2"));
        assert!(map
            .insert("a".to_string(), PropertyValue::from("3"))
            .is_some());

        let entries: Vec<_> = map
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str().unwrap()))
            .collect();
        assert_eq!(entries, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_get_or_insert_with() {
        let mut map = Properties::new();
        map.get_or_insert_with("ns".to_string(), || {
            PropertyValue::Namespace(Properties::new())
        });
        let existing = map.get_or_insert_with("ns".to_string(), || PropertyValue::from("x"));
        assert!(existing.is_namespace());
    }

    #[test]
    fn test_flatten_nested() {
        let mut c = Properties::new();
        c.insert("d".to_string(), PropertyValue::from("1"));
        let mut b = Properties::new();
        b.insert(String::new(), PropertyValue::from("0"));
        b.insert("c".to_string(), PropertyValue::Namespace(c));
        let mut root = Properties::new();
        root.insert("top".to_string(), PropertyValue::from("t"));
        root.insert("b".to_string(), PropertyValue::Namespace(b));

        let flat = root.flatten();
        let entries: Vec<_> = flat
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str().unwrap()))
            .collect();
        assert_eq!(entries, vec![("top", "t"), ("b", "0"), ("b.c.d", "1")]);
    }

    #[test]
    fn test_get_path_walks_namespaces() {
        let mut inner = Properties::new();
        inner.insert("port".to_string(), PropertyValue::from("80"));
        let mut root = Properties::new();
        root.insert("http".to_string(), PropertyValue::Namespace(inner));

        assert_eq!(root.get_path("http.port").and_then(|v| v.as_str()), Some("80"));
        assert!(root.get_path("http").unwrap().is_namespace());
        assert!(root.get_path("http.port.x").is_none());
        assert!(root.get_path("ftp").is_none());
    }

    #[test]
    fn test_from_hash_map() {
        let mut source = HashMap::new();
        source.insert("k".to_string(), "v".to_string());
        let map = Properties::from(source);
        assert_eq!(map.get("k").and_then(|v| v.as_str()), Some("v"));
    }

    #[test]
    fn test_serde_transparent() {
        let map: Properties = serde_json::from_str(r#"{"a":"1","b":{"":"2","c":"3"}}"#).unwrap();
        assert_eq!(map.get_path("b").and_then(|v| v.as_str()), Some("2"));
        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            r#"{"a":"1","b":{"":"2","c":"3"}}"#
        );
    }
}
