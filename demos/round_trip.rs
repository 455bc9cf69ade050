//! Editing one value while keeping the rest of a file byte-for-byte.
//!
//! Run with: cargo run --example round_trip

use properties_parser::{parse_to_array, stringify_from_entries, ParseOptions, StringifyOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let input = "# Generated file, do not reformat\r\n\
                 name   :   demo\r\n\
                 ! spacing below is intentional\r\n\
                 \r\n\
                 version = 1.0\r\n";

    let mut entries = parse_to_array(input, ParseOptions::lossless().with_location(true))?;

    // Unchanged entries reproduce the input exactly
    assert_eq!(stringify_from_entries(&entries, StringifyOptions::default()), input);
    println!("✓ Lossless round-trip successful");

    for entry in entries.iter_mut() {
        if entry.key.as_deref() == Some("version") {
            if let Some(location) = entry.location {
                println!(
                    "Updating version at line {}, column {}",
                    location.start.line, location.start.column
                );
            }
            entry.element = Some("1.1".to_string());
            entry.original = None;
        }
    }

    let output = stringify_from_entries(&entries, StringifyOptions::default());
    println!("\n{}", output);
    assert!(output.contains("name   :   demo\r\n"));
    assert!(output.ends_with("version = 1.1\r\n"));

    Ok(())
}
