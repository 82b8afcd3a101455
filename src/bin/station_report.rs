//! Print per-station sampling summaries for one characteristic

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use water_quality_map::importers::csv_importer::DEFAULT_FILE_PREFIX;
use water_quality_map::importers::{load_records, CsvImporter};
use water_quality_map::services::StationService;

#[derive(Parser)]
#[command(name = "station-report")]
#[command(about = "Summarize water quality sampling history per monitoring station", long_about = None)]
struct Cli {
    /// Directory containing resultphyschem*.csv files
    #[arg(long, env = "DATA_DIR", default_value = ".")]
    data_dir: PathBuf,

    /// File name prefix of the result files
    #[arg(long, env = "FILE_PREFIX", default_value = DEFAULT_FILE_PREFIX)]
    prefix: String,

    /// Characteristic to summarize (defaults to the first one alphabetically)
    #[arg(long)]
    characteristic: Option<String>,

    /// List the available characteristics and exit
    #[arg(long)]
    list: bool,

    /// Print summaries as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let importer = CsvImporter::with_prefix(&cli.data_dir, cli.prefix.clone());
    let service = StationService::new(load_records(&importer)?);
    info!("Loaded {} records", service.record_count());

    if cli.list {
        for name in service.characteristics() {
            println!("{name}");
        }
        return Ok(());
    }

    let characteristic = match cli.characteristic.as_deref().or(service.default_characteristic()) {
        Some(c) => c.to_string(),
        None => {
            println!("No sample records found in {}", cli.data_dir.display());
            return Ok(());
        }
    };

    if !service.has_characteristic(&characteristic) {
        return Err(format!("Unknown characteristic: {characteristic}").into());
    }

    let stations = service.summarize(&characteristic);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&stations)?);
        return Ok(());
    }

    println!("Characteristic: {characteristic}");
    println!("Stations: {}\n", stations.len());
    println!(
        "{:<28} {:<40} {:>8} {:<10} {:<10} {:>5}",
        "Station", "Organization", "Samples", "First", "Last", "Gaps"
    );
    for s in &stations {
        println!(
            "{:<28} {:<40} {:>8} {:<10} {:<10} {:>5}",
            s.station_id,
            truncate(&s.organization, 40),
            s.sample_count,
            s.first_sample.format("%Y-%m-%d").to_string(),
            s.last_sample.format("%Y-%m-%d").to_string(),
            s.gap_count
        );
    }

    let total_gaps: usize = stations.iter().map(|s| s.gap_count).sum();
    println!("\nTotal gaps > 30 days: {total_gaps}");

    Ok(())
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        value.to_string()
    } else {
        let mut out: String = value.chars().take(width - 3).collect();
        out.push_str("...");
        out
    }
}
