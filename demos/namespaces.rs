//! Folding dotted keys into nested namespaces.
//!
//! Run with: cargo run --example namespaces

use properties_parser::{parse_to_properties, stringify_from_properties, PropertyValue, StringifyOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let input = "\
db = primary
db.host = db.example.org
db.port = 5432
db.pool.size = 10
app.name = Demo
";

    let props = parse_to_properties(input, true)?;

    // A key that is also a namespace keeps its value under ""
    println!("db       = {}", props.get("db").map(ToString::to_string).unwrap_or_default());
    println!("db.port  = {:?}", props.get_path("db.port").and_then(PropertyValue::as_str));
    println!("db.pool  = {:?}", props.get_path("db.pool.size").and_then(PropertyValue::as_str));

    // JSON view of the tree
    println!("\n{}", serde_json::to_string_pretty(&props)?);

    // Flatten before writing; nested namespaces are not written directly
    let text = stringify_from_properties(&props.flatten(), StringifyOptions::new().with_eol("\n"));
    assert_eq!(text, input);
    println!("\n{}", text);

    Ok(())
}
