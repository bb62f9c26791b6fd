//! jpegprobe CLI - JPEG marker structure inspector.
//!
//! Walks the marker stream of a JPEG file and prints one line per
//! structural marker (code, name, offset, action) without decoding any
//! pixel data. Useful for triaging malformed files before handing them to
//! a real decoder.

use clap::Parser;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;

use jpegprobe_rs::MarkerScanner;
use jpegprobe_rs::report::format_record;

/// Inspect the marker structure of a JPEG file
#[derive(Parser)]
#[command(name = "jpegprobe")]
#[command(author = "jpegprobe-rs contributors")]
#[command(version)]
#[command(about = "Report the marker structure of a JPEG file without decoding it", long_about = None)]
#[command(after_help = "EXAMPLES:
    jpegprobe image.jpg
    jpegprobe --terse image.jpg

OUTPUT COLUMNS:
    marker code (hex), symbolic name, byte offset, segment length or action

The scan stops at the first structural problem; every marker located up to
that point is still printed.

For more information, visit: https://github.com/rad-medica/jpegprobe-rs")]
struct Cli {
    /// Path to the JPEG file to inspect
    input: PathBuf,

    /// Print bare marker codes without symbolic names
    #[arg(short, long)]
    terse: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = probe_file(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn probe_file(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    println!("File: {:?}", cli.input);
    println!("Size: {} bytes", fs::metadata(&cli.input)?.len());
    println!();

    let source = BufReader::new(File::open(&cli.input)?);
    let mut scanner = MarkerScanner::new(source);
    scanner.scan(|record| println!("{}", format_record(record, !cli.terse)))?;

    Ok(())
}
