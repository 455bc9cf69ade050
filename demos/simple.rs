//! Basic `.properties` parsing and writing.
//!
//! Run with: cargo run --example simple

use properties_parser::{parse_to_properties, stringify_from_properties, PropertyValue, StringifyOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let input = "\
# Server settings
host = localhost
port: 8080
motd = Welcome, \\
       friend!
";

    // Parse to a flat map
    let props = parse_to_properties(input, false)?;
    for (key, value) in &props {
        println!("{} => {}", key, value);
    }

    assert_eq!(props.get("port").and_then(PropertyValue::as_str), Some("8080"));
    assert_eq!(props.get("motd").and_then(PropertyValue::as_str), Some("Welcome, friend!"));

    // Write it back out with Unix line endings
    let text = stringify_from_properties(&props, StringifyOptions::new().with_eol("\n"));
    println!("\nRewritten:\n{}", text);

    Ok(())
}
