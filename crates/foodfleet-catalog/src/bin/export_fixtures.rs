//! # Fixture Exporter
//!
//! Writes the built-in demo catalog to a JSON file, as a starting point for
//! a custom `FOODFLEET_CATALOG_PATH` catalog.
//!
//! ## Usage
//! ```bash
//! # Write ./catalog.json (default)
//! cargo run -p foodfleet-catalog --bin export-fixtures
//!
//! # Specify output path
//! cargo run -p foodfleet-catalog --bin export-fixtures -- --out ./data/catalog.json
//!
//! # Print to stdout instead
//! cargo run -p foodfleet-catalog --bin export-fixtures -- --stdout
//! ```

use std::env;
use std::path::Path;

use foodfleet_catalog::{Catalog, StaticCatalog};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut out_path = String::from("./catalog.json");
    let mut to_stdout = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--out" | "-o" => {
                if i + 1 < args.len() {
                    out_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--stdout" => to_stdout = true,
            "--help" | "-h" => {
                println!("FoodFleet Fixture Exporter");
                println!();
                println!("Usage: export-fixtures [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -o, --out <PATH>   Output file (default: ./catalog.json)");
                println!("      --stdout       Print the catalog instead of writing a file");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let catalog = StaticCatalog::fixture();

    if to_stdout {
        println!("{}", catalog.to_json()?);
        return Ok(());
    }

    let path = Path::new(&out_path);
    if path.exists() {
        println!("⚠ {} already exists", path.display());
        println!("  Delete it first to regenerate.");
        return Ok(());
    }

    catalog.write_to(path)?;

    println!("✓ Wrote {} restaurants to {}", catalog.restaurants().len(), path.display());
    Ok(())
}
