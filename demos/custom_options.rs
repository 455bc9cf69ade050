//! Controlling what the parser records and how output is formatted.
//!
//! Run with: cargo run --example custom_options

use properties_parser::{
    parse_to_array, stringify, ParseOptions, StringifyOptions, Toggles,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let input = "# comment\nkey = value\n\nother: thing";

    // Default: properties only, no extras
    let entries = parse_to_array(input, ParseOptions::default())?;
    println!("Default ({} entries):", entries.len());
    for entry in &entries {
        println!("  {:?}", entry);
    }

    // Builder style
    let options = ParseOptions::new().with_all(true).with_location(true);
    let entries = parse_to_array(input, options)?;
    println!("\nWith blanks, comments and locations ({} entries):", entries.len());
    for entry in &entries {
        if let Some(location) = entry.location {
            println!(
                "  line {}: {:?}",
                location.start.line,
                entry.key.as_deref().unwrap_or("<blank or comment>")
            );
        }
    }

    // Toggles, as they would come from a JSON config: "" sets the default
    let toggles: Toggles = serde_json::from_str(r#"{ "": true, "location": false }"#)?;
    let entries = parse_to_array(input, &toggles)?;
    println!("\nFrom toggles: {:?}", entries[1]);

    // Output separator and line ending
    let options = StringifyOptions::new().with_sep(": ").with_eol("\n");
    let text = stringify(&parse_to_array(input, false)?, options);
    println!("\nCustom separator:\n{}", text);

    Ok(())
}
