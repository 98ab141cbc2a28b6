//! Load a data file and print its entries in export order.
//!
//! Run with: `cargo run --example inspect -- path/to/data.grif`

use grif_data::{compare_keys, detect_dialect, parse_document, is_script_value};

fn main() {
    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: inspect <file>");
            std::process::exit(2);
        }
    };

    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("cannot read {path}: {err}");
            std::process::exit(1);
        }
    };

    println!("dialect: {:?}", detect_dialect(&text));

    let document = match parse_document(&text) {
        Ok(document) => document,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let mut entries: Vec<_> = document.iter().collect();
    entries.sort_by(|a, b| compare_keys(&a.key, &b.key));
    for entry in entries {
        let marker = if is_script_value(&entry.value) { "@" } else { " " };
        println!("{marker} {} = {:?}", entry.key, entry.value);
    }
}
