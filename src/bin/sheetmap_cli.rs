//! CLI tool for sheetmap - turns a sheet CSV export into a GeoJSON point layer
//!
//! Usage:
//!   sheetmap_cli <input.csv>                 # GeoJSON to stdout
//!   sheetmap_cli <input.csv> -o out.geojson  # GeoJSON to a file
//!
//! Rows without usable coordinates are reported on stderr.

#![allow(clippy::exit)]

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use sheetmap::csv::parse_rows;
use sheetmap::error::Result;
use sheetmap::layer::{build_layer, LayerOptions};

const USAGE: &str = "Usage: sheetmap_cli <input.csv> [-o output.geojson]";

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let (input, output) = match args.as_slice() {
        [input] => (input, None),
        [input, flag, output] if flag == "-o" => (input, Some(output)),
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(Path::new(input), output.map(Path::new)) {
        eprintln!("sheetmap_cli: {input}: {e}");
        std::process::exit(1);
    }
}

fn run(input: &Path, output: Option<&Path>) -> Result<()> {
    let rows = parse_rows(&fs::read_to_string(input)?)?;
    let layer = build_layer(&rows, &LayerOptions::default());
    for skipped in &layer.skipped {
        eprintln!("skipped data row {}: {}", skipped.row + 1, skipped.reason);
    }

    let json = serde_json::to_string_pretty(&layer.to_geojson())?;
    match output {
        Some(path) => {
            fs::write(path, &json)?;
            eprintln!("wrote {} ({} points)", path.display(), layer.len());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}
