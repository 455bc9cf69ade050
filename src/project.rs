//! Folding parsed entries into a [`Properties`] map.
//!
//! Blank and comment entries are skipped. Keys and elements have doubled
//! backslashes collapsed before they are stored. Later duplicates overwrite
//! earlier ones.
//!
//! With namespace mode, `a.b.c = v` is stored as `{a: {b: {c: v}}}`. A key
//! that is later used as a namespace prefix keeps its scalar under the `""`
//! key of the new namespace. A key written after its namespace replaces it.
//!
//! ```rust
//! use properties_parser::{array_to_properties, properties, Entry};
//!
//! let entries = vec![Entry::property("foo", "bar"), Entry::property("foo.qux", "quux")];
//! let props = array_to_properties(&entries, true);
//!
//! assert_eq!(props, properties!({ "foo": { "": "bar", "qux": "quux" } }));
//!
//! let entries = vec![Entry::property("foo.qux", "quux"), Entry::property("foo", "bar")];
//! assert_eq!(array_to_properties(&entries, true), properties!({ "foo": "bar" }));
//! ```

use crate::escape::unescape_backslashes;
use crate::{Entry, Properties, PropertiesOptions, PropertyValue};

/// Folds `entries` into a properties map.
#[must_use]
pub fn project(entries: &[Entry], options: PropertiesOptions) -> Properties {
    let mut properties = Properties::with_capacity(entries.len());

    for entry in entries {
        let (Some(key), Some(element)) = (&entry.key, &entry.element) else {
            continue;
        };

        let key = unescape_backslashes(key);
        let element = unescape_backslashes(element);

        if options.namespace {
            insert_namespaced(&mut properties, &key, element);
        } else {
            properties.insert(key, PropertyValue::Scalar(element));
        }
    }

    properties
}

fn insert_namespaced(properties: &mut Properties, key: &str, element: String) {
    let mut segments: Vec<&str> = key.split('.').collect();
    // `split` always yields at least one segment
    let last = segments.pop().unwrap_or_default();

    let mut current = properties;
    for segment in segments {
        let slot = current.get_or_insert_with(segment.to_string(), || {
            PropertyValue::Namespace(Properties::new())
        });

        if let PropertyValue::Scalar(scalar) = slot {
            tracing::debug!(namespace = segment, key, "moving scalar under empty key");
            let mut namespace = Properties::new();
            namespace.insert(String::new(), PropertyValue::Scalar(std::mem::take(scalar)));
            *slot = PropertyValue::Namespace(namespace);
        }

        let Some(namespace) = slot.as_namespace_mut() else {
            return;
        };
        current = namespace;
    }

    if let Some(PropertyValue::Namespace(_)) = current.get(last) {
        tracing::debug!(namespace = last, key, "scalar replaces namespace");
    }
    current.insert(last.to_string(), PropertyValue::Scalar(element));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties;

    fn flat() -> PropertiesOptions {
        PropertiesOptions::default()
    }

    fn namespaced() -> PropertiesOptions {
        PropertiesOptions::new().with_namespace(true)
    }

    #[test]
    fn test_skips_blank_and_comment_entries() {
        let entries = vec![Entry::blank(), Entry::property("k", "v"), Entry::blank()];
        assert_eq!(project(&entries, flat()), properties!({ "k": "v" }));
    }

    #[test]
    fn test_last_write_wins() {
        let entries = vec![Entry::property("a", "1"), Entry::property("a", "2")];
        assert_eq!(project(&entries, flat()), properties!({ "a": "2" }));
    }

    #[test]
    fn test_flat_keeps_dots() {
        let entries = vec![Entry::property("a.b", "1")];
        assert_eq!(project(&entries, flat()), properties!({ "a.b": "1" }));
    }

    #[test]
    fn test_collapses_doubled_backslashes() {
        let entries = vec![Entry::property("c:\\\\dir", "a\\\\b\\n")];
        assert_eq!(
            project(&entries, flat()),
            properties!({ "c:\\dir": "a\\b\\n" })
        );
    }

    #[test]
    fn test_namespace_nesting() {
        let entries = vec![
            Entry::property("db.host", "localhost"),
            Entry::property("db.port", "5432"),
            Entry::property("app.name", "demo"),
        ];
        assert_eq!(
            project(&entries, namespaced()),
            properties!({
                "db": { "host": "localhost", "port": "5432" },
                "app": { "name": "demo" }
            })
        );
    }

    #[test]
    fn test_namespace_collision_scalar_first() {
        let entries = vec![Entry::property("foo", "bar"), Entry::property("foo.qux", "quux")];
        assert_eq!(
            project(&entries, namespaced()),
            properties!({ "foo": { "": "bar", "qux": "quux" } })
        );
    }

    #[test]
    fn test_namespace_collision_namespace_first() {
        let entries = vec![Entry::property("foo.qux", "quux"), Entry::property("foo", "bar")];
        assert_eq!(project(&entries, namespaced()), properties!({ "foo": "bar" }));
    }

    #[test]
    fn test_namespace_deep_collision() {
        let entries = vec![
            Entry::property("a.b", "1"),
            Entry::property("a.b.c.d", "2"),
        ];
        assert_eq!(
            project(&entries, namespaced()),
            properties!({ "a": { "b": { "": "1", "c": { "d": "2" } } } })
        );
    }

    #[test]
    fn test_namespace_empty_segments() {
        let entries = vec![Entry::property("a..b", "1"), Entry::property("", "root")];
        assert_eq!(
            project(&entries, namespaced()),
            properties!({ "a": { "": { "b": "1" } }, "": "root" })
        );
    }

    #[test]
    fn test_namespace_replaced_then_reopened() {
        let entries = vec![
            Entry::property("a.b.c", "1"),
            Entry::property("a.b", "2"),
            Entry::property("a.b.d", "3"),
        ];
        assert_eq!(
            project(&entries, namespaced()),
            properties!({ "a": { "b": { "": "2", "d": "3" } } })
        );
    }

    #[test]
    fn test_namespace_overwrite_scalar_leaf() {
        let entries = vec![Entry::property("a.b", "1"), Entry::property("a.b", "2")];
        assert_eq!(
            project(&entries, namespaced()),
            properties!({ "a": { "b": "2" } })
        );
    }
}
