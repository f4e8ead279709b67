//! Walkthrough of the safe-wrapper toolkit.

use std::io::{self, Write};

use fptour_interop::{find_index, get_or_else_with, match_option, parse};
use serde_json::{Value, json};

pub const HEADER: &str = "##################### Interoperability #####################";

struct Item {
    id: u32,
}

pub fn print(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{HEADER}")?;

    let items = [Item { id: 1 }, Item { id: 2 }];
    let value_found = find_index(&items, |o| o.id == 1);
    let no_value_found = find_index(&items, |o| o.id == 42);

    let describe = match_option(
        || "No value found!".to_string(),
        |index: usize| format!("Index found: {index}"),
    );
    writeln!(out, "{}", describe(value_found))?;
    writeln!(out, "{}", describe(no_value_found))?;

    let parsable = parse(r#"{"key":"abc"}"#);
    let non_parsable = parse("{key:abc}");
    if let Err(err) = &non_parsable {
        tracing::debug!(error = %err, "expected parse failure");
    }
    let with_default = get_or_else_with(|| -> Value { json!({}) });

    writeln!(out, "Successful parsing {}", with_default(parsable))?;
    writeln!(out, "Parsing with error {}", with_default(non_parsable))?;

    Ok(())
}
