/// Builds a [`Properties`](crate::Properties) map from a JSON-like literal.
///
/// Nested braces become namespaces; any other value goes through
/// [`PropertyValue::from`](crate::PropertyValue).
///
/// ```rust
/// use properties_parser::{properties, PropertyValue};
///
/// let props = properties!({
///     "name": "Alice",
///     "db": { "": "primary", "port": "5432" }
/// });
///
/// assert_eq!(props.get_path("db.port").and_then(PropertyValue::as_str), Some("5432"));
/// ```
#[macro_export]
macro_rules! properties {
    // Handle a nested namespace
    (@value { $($inner:tt)* }) => {
        $crate::PropertyValue::Namespace($crate::properties!({ $($inner)* }))
    };

    // Handle a scalar
    (@value $value:expr) => {
        $crate::PropertyValue::from($value)
    };

    // Handle empty map
    ({}) => {
        $crate::Properties::new()
    };

    // Handle non-empty map
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut map = $crate::Properties::new();
        $(
            map.insert($key.to_string(), $crate::properties!(@value $value));
        )*
        map
    }};
}
