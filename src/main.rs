//! Storm Impact CLI
//!
//! Generates a severe-weather impact report from the NOAA storm events
//! dataset: ranked fatalities, injuries and economic damage by event type,
//! with SVG charts and a markdown write-up.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use storm_impact::commands::{execute_report, validate_args, validate_data_url, ReportArgs};
use storm_impact::dataset::DatasetClient;
use storm_impact::utils::config::{
    DEFAULT_DATASET_PATH, DEFAULT_TOP_CATEGORIES, SCHEMA_VERSION, STORM_DATA_URL,
};

/// Storm Impact - severe weather impact analysis
#[derive(Parser, Debug)]
#[command(name = "storm-impact")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the full impact report
    Report {
        /// Local dataset path (downloaded here when absent)
        #[arg(short, long, default_value = DEFAULT_DATASET_PATH)]
        input: PathBuf,

        /// Remote dataset location
        #[arg(long, env = "STORM_DATA_URL", default_value = STORM_DATA_URL)]
        url: String,

        /// Output directory for the summary, charts and report
        #[arg(short, long, default_value = "report")]
        output: PathBuf,

        /// Number of categories per ranking (ties at the boundary may add more)
        #[arg(long, default_value_t = DEFAULT_TOP_CATEGORIES)]
        top: usize,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Download the dataset archive
    Fetch {
        /// Path to save the archive to
        #[arg(short, long, default_value = DEFAULT_DATASET_PATH)]
        output: PathBuf,

        /// Remote dataset location
        #[arg(long, env = "STORM_DATA_URL", default_value = STORM_DATA_URL)]
        url: String,
    },

    /// Validate a summary JSON file
    Validate {
        /// Path to summary JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Report {
            input,
            url,
            output,
            top,
            summary,
        } => {
            let args = ReportArgs {
                input,
                data_url: url,
                output_dir: output,
                top,
                print_summary: summary,
            };

            validate_args(&args)?;
            execute_report(args)?;
        }

        Commands::Fetch { output, url } => {
            validate_data_url(&url)?;
            let client = DatasetClient::new(url)?;
            let bytes = client.download_to(&output)?;
            println!("Downloaded {} bytes to {}", bytes, output.display());
        }

        Commands::Validate { file } => {
            validate_summary_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Validate a summary JSON file
///
/// **Private** - internal command implementation
fn validate_summary_file(file_path: PathBuf) -> Result<()> {
    use storm_impact::output::read_summary;

    println!("Validating summary: {}", file_path.display());

    let summary = read_summary(&file_path)?;

    println!("✓ Valid summary JSON");
    println!("  Version: {}", summary.version);
    println!("  Dataset: {}", summary.dataset);
    println!("  Records: {} loaded, {} retained", summary.records_loaded, summary.records_retained);
    println!("  Fatality categories: {}", summary.top_fatalities.len());
    println!("  Injury categories: {}", summary.top_injuries.len());
    println!("  Economic rows: {}", summary.economic_damage.len());

    Ok(())
}

/// Display schema information
///
/// **Private** - internal command implementation
fn display_schema(show_details: bool) {
    println!("Storm Impact Summary Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string           - Schema version (e.g., '1.0.0')");
        println!("  dataset: string           - Source dataset path");
        println!("  records_loaded: number    - Rows read from the dataset");
        println!("  records_retained: number  - Rows with measurable impact");
        println!("  top_fatalities: array     - Categories ranked by fatalities");
        println!("    event_type: string      - Category label");
        println!("    total: number           - Summed fatalities");
        println!("  top_injuries: array       - Categories ranked by injuries");
        println!("  economic_damage: array    - Long-format damage rows");
        println!("    event_type: string      - Category label");
        println!("    damage_type: string     - 'Property' or 'Crop'");
        println!("    amount_billions: number - Damage in billions USD (2 dp)");
        println!("  generated_at: string      - RFC 3339 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
///
/// **Private** - internal command implementation
fn display_version() {
    println!("Storm Impact v{}", env!("CARGO_PKG_VERSION"));
    println!("Summary Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Severe weather impact analysis for the NOAA storm events dataset.");
}
