use properties_parser::{
    array_to_properties, from_reader, parse_to_array, parse_to_properties, properties, stringify,
    stringify_from_entries, stringify_from_properties, to_writer, Entry, Error, ParseOptions,
    Properties, PropertiesOptions, PropertyValue, StringifyOptions, Toggles,
};
use std::collections::HashMap;

const CONFIG: &str = "\
# Application settings
app.name = Inventory
app.version = 2.1

! Database
db.url = jdbc:postgresql://localhost/inventory
db.user : admin
db.password   s3cr3t

greeting = Hello, \\
           World!
path = C:\\\\Program Files\\\\App
";

#[test]
fn test_parse_config_file() {
    let entries = parse_to_array(CONFIG, false).unwrap();
    let pairs: Vec<(&str, &str)> = entries
        .iter()
        .map(|e| (e.key.as_deref().unwrap(), e.element.as_deref().unwrap()))
        .collect();

    assert_eq!(
        pairs,
        vec![
            ("app.name", "Inventory"),
            ("app.version", "2.1"),
            ("db.url", "jdbc:postgresql://localhost/inventory"),
            ("db.user", "admin"),
            ("db.password", "s3cr3t"),
            ("greeting", "Hello, World!"),
            ("path", "C:\\Program Files\\App"),
        ]
    );
}

#[test]
fn test_parse_config_keeps_everything_with_all() {
    let entries = parse_to_array(CONFIG, ParseOptions::new().with_all(true)).unwrap();
    assert_eq!(entries.len(), 11);
    assert_eq!(entries.iter().filter(|e| e.is_blank_or_comment()).count(), 4);
}

#[test]
fn test_round_trip_config_file() {
    let entries = parse_to_array(CONFIG, ParseOptions::lossless()).unwrap();
    assert_eq!(stringify_from_entries(&entries, StringifyOptions::default()), CONFIG);
    assert_eq!(stringify(&entries, StringifyOptions::default()), CONFIG);
}

#[test]
fn test_round_trip_mixed_terminators() {
    let input = "a=1\r\nb=2\rc=3\nd=4";
    let entries = parse_to_array(input, true).unwrap();
    let eols: Vec<_> = entries.iter().map(|e| e.eol.clone()).collect();

    assert_eq!(
        eols,
        vec![
            Some(Some("\r\n".to_string())),
            Some(Some("\r".to_string())),
            Some(Some("\n".to_string())),
            Some(None),
        ]
    );
    assert_eq!(stringify_from_entries(&entries, StringifyOptions::default()), input);
}

#[test]
fn test_filtering() {
    let input = "\n# comment\nk = v";

    let entries = parse_to_array(input, ParseOptions::default()).unwrap();
    assert_eq!(entries, vec![Entry::property("k", "v")]);

    let entries = parse_to_array(input, ParseOptions::new().with_all(true)).unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].key, None);
    assert_eq!(entries[0].element, None);
    assert_eq!(entries[1].key, None);
    assert_eq!(entries[1].element, None);
}

#[test]
fn test_continuation() {
    let entries = parse_to_array("k = a\\\n   b", ParseOptions::new().with_location(true)).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].element.as_deref(), Some("ab"));

    let location = entries[0].location.unwrap();
    assert!(location.end.line > location.start.line);
}

#[test]
fn test_last_write_wins() {
    let props = parse_to_properties("a = 1\na = 2", false).unwrap();
    assert_eq!(props, properties!({ "a": "2" }));
}

#[test]
fn test_namespace_collision() {
    let entries = vec![Entry::property("foo", "bar"), Entry::property("foo.qux", "quux")];
    let props = array_to_properties(&entries, PropertiesOptions::new().with_namespace(true));
    assert_eq!(props, properties!({ "foo": { "": "bar", "qux": "quux" } }));
}

#[test]
fn test_namespace_replaced_by_later_key() {
    let entries = vec![Entry::property("foo.qux", "quux"), Entry::property("foo", "bar")];
    let props = array_to_properties(&entries, PropertiesOptions::new().with_namespace(true));
    assert_eq!(props, properties!({ "foo": "bar" }));
    assert_eq!(
        serde_json::to_string(&props).unwrap(),
        r#"{"foo":"bar"}"#
    );
}

#[test]
fn test_namespaced_config() {
    let props = parse_to_properties(CONFIG, true).unwrap();

    assert_eq!(
        props.get_path("db.user").and_then(PropertyValue::as_str),
        Some("admin")
    );
    assert_eq!(
        props.get_path("app.version").and_then(PropertyValue::as_str),
        Some("2.1")
    );
    assert!(props.get("db").is_some_and(PropertyValue::is_namespace));
    assert!(props.get_path("db.missing").is_none());
}

#[test]
fn test_idempotence() {
    let input = "b = 2\na : 1\nkey\\ with\\ spaces = tab\\tvalue\nempty\n";
    let first = parse_to_properties(input, false).unwrap();
    let text = stringify_from_properties(&first, StringifyOptions::default());
    let second = parse_to_properties(&text, false).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_stringify_from_properties_options() {
    let props = properties!({ "a": "1", "b": "2" });
    assert_eq!(
        stringify_from_properties(&props, StringifyOptions::default()),
        "a = 1\r\nb = 2\r\n"
    );
    assert_eq!(
        stringify_from_properties(&props, StringifyOptions::new().with_sep(": ").with_eol("\n")),
        "a: 1\nb: 2\n"
    );
}

#[test]
fn test_stringify_from_entries_without_original() {
    let entries = parse_to_array("# c\n\nk:v\nother = x", true).unwrap();
    let stripped: Vec<Entry> = entries
        .into_iter()
        .map(|mut e| {
            e.original = None;
            e.eol = None;
            e
        })
        .collect();

    assert_eq!(
        stringify_from_entries(&stripped, StringifyOptions::new().with_eol("\n")),
        "\n\nk = v\nother = x\n"
    );
}

#[test]
fn test_edited_entry_round_trip() {
    let input = "# keep me\nhost = localhost\nport = 80\n";
    let mut entries = parse_to_array(input, ParseOptions::lossless()).unwrap();

    let port = entries
        .iter_mut()
        .find(|e| e.key.as_deref() == Some("port"))
        .unwrap();
    port.element = Some("8080".to_string());
    port.original = None;

    assert_eq!(
        stringify_from_entries(&entries, StringifyOptions::default()),
        "# keep me\nhost = localhost\nport = 8080\n"
    );
}

#[test]
fn test_option_toggles() {
    let toggles = Toggles::explicit([("", true), ("location", false)]);
    let entries = parse_to_array("k = v", &toggles).unwrap();
    assert_eq!(entries[0].original.as_deref(), Some("k = v"));
    assert_eq!(entries[0].eol, Some(None));
    assert_eq!(entries[0].location, None);

    let entries = parse_to_array("# c\nk = v", Toggles::explicit([("all", true)])).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].original, None);
}

#[test]
fn test_toggles_from_json() {
    let toggles: Toggles = serde_json::from_str(r#"{"": true, "eol": false}"#).unwrap();
    let options = ParseOptions::from(&toggles);
    assert!(options.all && options.original && options.location);
    assert!(!options.eol);

    let toggles: Toggles = serde_json::from_str("true").unwrap();
    assert!(PropertiesOptions::from(toggles).namespace);
}

#[test]
fn test_toggles_from_json_with_foreign_keys() {
    let toggles: Toggles = serde_json::from_str(r#"{"all": true, "sep": " = "}"#).unwrap();
    let entries = parse_to_array("# c\nk = v", &toggles).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].original, None);

    let toggles: Toggles = serde_json::from_str(r#"{"": "yes", "eol": true}"#).unwrap();
    let options = ParseOptions::from(&toggles);
    assert_eq!(options, ParseOptions::new().with_eol(true));
}

#[test]
fn test_malformed_unicode_escape() {
    let err = parse_to_array("ok = 1\nbad = \\u12G4", false).unwrap_err();
    let Error::MalformedUnicodeEscape { position, entry_start, .. } = &err else {
        panic!("unexpected error: {err:?}");
    };
    assert_eq!(position.line, 2);
    assert_eq!(position.column, 7);
    assert_eq!(entry_start.line, 2);
    assert_eq!(entry_start.column, 1);
    assert!(err.to_string().contains("line 2"));

    assert!(parse_to_properties("k = \\u00", false).is_err());
}

#[test]
fn test_unicode_escapes() {
    let props = parse_to_properties("greeting = \\u00e9t\\u00E9 \\uD83D\\uDE00", false).unwrap();
    assert_eq!(
        props.get("greeting").and_then(PropertyValue::as_str),
        Some("été 😀")
    );

    // Non-ASCII text is written back as-is.
    let text = stringify_from_properties(&props, StringifyOptions::new().with_eol("\n"));
    assert_eq!(text, "greeting = été 😀\n");
}

#[test]
fn test_hash_map_conversions() {
    let mut map = HashMap::new();
    map.insert("k".to_string(), "v".to_string());

    let props = Properties::from(map);
    assert_eq!(props.get("k").and_then(PropertyValue::as_str), Some("v"));

    let back: HashMap<String, PropertyValue> = props.into();
    assert_eq!(back.get("k"), Some(&PropertyValue::from("v")));
}

#[test]
fn test_reader_and_writer() {
    let props = from_reader(CONFIG.as_bytes(), true).unwrap();
    let flat = props.flatten();

    let mut buffer = Vec::new();
    to_writer(&mut buffer, &flat, StringifyOptions::new().with_eol("\n")).unwrap();
    let text = String::from_utf8(buffer).unwrap();

    assert!(text.starts_with("app.name = Inventory\napp.version = 2.1\n"));
    assert_eq!(from_reader(text.as_bytes(), true).unwrap(), props);
}
