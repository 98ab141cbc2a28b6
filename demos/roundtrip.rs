//! Build a small world, save it in both dialects, and load it back.
//!
//! Run with: `cargo run --example roundtrip`

use indexmap::IndexMap;
use grif_data::{
    export_to_string, load_from_file, save_to_file, ExportOptions, OverlayStore,
    PassthroughFormatter,
};

fn main() -> grif_data::Result<()> {
    let mut store: IndexMap<String, String> = IndexMap::new();
    store.set("game.title", "The Sunken Vault");
    store.set("room.1.name", "Dusty Cellar");
    store.set("room.1.desc", "A low stone room. Cobwebs hang from every beam.");
    store.set("room.2.name", "Wine Vault");
    store.set("item.2", "coil of rope");
    store.set("item.10", "brass lantern");
    store.set("on.start", "@say Welcome to the vault.");

    println!("--- GRIF dialect ---");
    println!(
        "{}",
        export_to_string(&store, &ExportOptions::grif(), &PassthroughFormatter)?
    );

    println!("--- JSON dialect ---");
    println!(
        "{}",
        export_to_string(&store, &ExportOptions::json(), &PassthroughFormatter)?
    );

    let path = std::env::temp_dir().join("grif_demo").join("world.grif");
    save_to_file(&path, &store, &ExportOptions::grif(), &PassthroughFormatter)?;

    let mut reloaded: IndexMap<String, String> = IndexMap::new();
    load_from_file(&path, &mut reloaded, &PassthroughFormatter)?;
    println!(
        "reloaded {} entries from {}",
        reloaded.len(),
        path.display()
    );

    Ok(())
}
