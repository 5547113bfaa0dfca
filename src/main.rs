use freightdoc::{DocumentRecord, ExportError, ExportKind, PipelineBuilder};
use std::env;
use std::fs;
use std::path::Path;

/// A simple CLI that renders a document record JSON file to PDF or XML.
fn main() -> Result<(), ExportError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if !(3..=5).contains(&args.len()) {
        eprintln!("Renders a bill of lading or CMR consignment note to PDF or XML.");
        eprintln!();
        eprintln!(
            "Usage: {} <path/to/record.json> <pdf|xml> [output-dir] [path/to/config.json]",
            program_name(&args)
        );
        eprintln!();
        eprintln!("The record carries a \"kind\" of \"billOfLading\" or \"roadConsignmentNote\".");
        eprintln!("Set RUST_LOG=debug for layout details.");
        std::process::exit(1);
    }

    let record_path = &args[1];
    let kind: ExportKind = match args[2].parse() {
        Ok(kind) => kind,
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(2);
        }
    };
    let output_dir = args.get(3).map(String::as_str).unwrap_or(".");

    println!("Loading record from {}", record_path);
    let record: DocumentRecord = serde_json::from_str(&fs::read_to_string(record_path)?)?;

    let mut builder = PipelineBuilder::new();
    if let Some(config_path) = args.get(4) {
        println!("Loading configuration from {}", config_path);
        builder = builder.with_config_file(config_path)?;
    }
    let pipeline = builder.build()?;

    let artifact = pipeline.export(&record, kind)?;
    let path = artifact.write_to_dir(Path::new(output_dir))?;

    println!("Successfully generated {}", path.display());
    Ok(())
}

/// Name to print in the usage text; the OS may hand over an empty argument list.
fn program_name(args: &[String]) -> &str {
    args.first().map(String::as_str).unwrap_or("freightdoc")
}
