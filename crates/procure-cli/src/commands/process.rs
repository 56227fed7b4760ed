//! Process command - convert a single request file.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use procure_core::batch;
use procure_core::{Clock, Record, RequestParser};

use super::load_config;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file with one request per line
    #[arg(required = true)]
    input: PathBuf,

    /// Output file
    #[arg(required = true)]
    output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON array of records
    Json,
    /// Plain text listing
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let parser = RequestParser::with_clock(config.extraction.clock());

    info!("Processing file: {}", args.input.display());

    let records = match args.format {
        OutputFormat::Json => {
            let summary = batch::run(&args.input, &args.output, &parser, config.output.pretty)?;
            summary.records
        }
        OutputFormat::Text => {
            let requests = batch::read_requests(&args.input)?;
            let today = parser.clock().today();
            let records: Vec<Record> = requests.iter().map(|r| parser.parse_at(r, today)).collect();
            let listing: Vec<String> = requests
                .iter()
                .zip(&records)
                .map(|(request, record)| format_record_text(request, record))
                .collect();
            fs::write(&args.output, listing.join("\n"))?;
            records.len()
        }
    };

    println!(
        "{} Wrote {} records to {}",
        style("✓").green(),
        records,
        args.output.display()
    );

    Ok(())
}

fn show<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn format_record_text(request: &str, record: &Record) -> String {
    let mut output = String::new();

    output.push_str(&format!("Request: {}\n", request.trim()));
    output.push_str(&format!("  Material: {}\n", show(record.material_name)));
    match (&record.quantity, record.unit) {
        (Some(quantity), Some(unit)) => {
            output.push_str(&format!("  Quantity: {} {}\n", quantity, unit));
        }
        _ => output.push_str("  Quantity: -\n"),
    }
    output.push_str(&format!("  Project:  {}\n", show(record.project_name.as_deref())));
    output.push_str(&format!("  Location: {}\n", show(record.location)));
    output.push_str(&format!("  Urgency:  {}\n", record.urgency));
    output.push_str(&format!("  Deadline: {}\n", show(record.deadline)));

    output
}
