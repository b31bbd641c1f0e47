//! Report command implementation.
//!
//! The report command:
//! 1. Ensures the dataset is present (downloading it if absent)
//! 2. Reads and converts the CSV rows
//! 3. Filters out records without measurable impact
//! 4. Scales damage values by their exponent codes
//! 5. Aggregates by event type and ranks the categories
//! 6. Writes the JSON summary, charts and markdown report

use crate::aggregator::{aggregate_by_event_type, economic_breakdown, top_by, EventSummary};
use crate::dataset::{ensure_dataset, read_records};
use crate::output::{
    generate_bar_chart, generate_grouped_bar_chart, generate_markdown_report,
    generate_text_summary, write_summary, write_svg, CategoryTotal, ChartConfig, ChartFiles,
    ImpactSummary,
};
use crate::transform::{retain_records, scale_damages};
use crate::utils::config::{MAX_TOP_CATEGORIES, SCHEMA_VERSION};
use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Local dataset path (downloaded here when absent)
    pub input: PathBuf,

    /// Remote location to fetch the dataset from
    pub data_url: String,

    /// Directory receiving summary.json, the charts and report.md
    pub output_dir: PathBuf,

    /// Nominal number of categories per ranking
    pub top: usize,

    /// Print a text summary to stdout
    pub print_summary: bool,
}

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Dataset download failures
/// * CSV read errors
/// * File write errors
pub fn execute_report(args: ReportArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Generating storm impact report");
    info!("Dataset: {}", args.input.display());

    // Step 1: Make sure the dataset exists locally
    info!("Step 1/6: Checking dataset cache...");
    let downloaded = ensure_dataset(&args.input, &args.data_url)
        .context("Failed to acquire the storm events dataset")?;
    if downloaded {
        info!("Dataset downloaded from {}", args.data_url);
    }

    // Step 2: Read records
    info!("Step 2/6: Reading records...");
    let records = read_records(&args.input).context("Failed to read the dataset")?;
    let records_loaded = records.len() as u64;

    // Step 3: Retention filter
    info!("Step 3/6: Filtering records without measurable impact...");
    let retained = retain_records(&records);
    let records_retained = retained.len() as u64;
    info!("{} of {} records retained", records_retained, records_loaded);

    // Step 4: Damage scaling
    info!("Step 4/6: Scaling damage values...");
    let scaled = scale_damages(&retained);

    // Step 5: Aggregate and rank
    info!("Step 5/6: Aggregating {} records by event type...", scaled.len());
    let summaries = aggregate_by_event_type(&scaled);
    debug!("{} distinct event categories", summaries.len());

    let top_fatalities = top_by(&summaries, args.top, |s| s.fatalities);
    let top_injuries = top_by(&summaries, args.top, |s| s.injuries);
    let economic = economic_breakdown(&summaries, args.top);

    let summary = ImpactSummary {
        version: SCHEMA_VERSION.to_string(),
        dataset: args.input.display().to_string(),
        records_loaded,
        records_retained,
        top_fatalities: to_category_totals(&top_fatalities, |s| s.fatalities),
        top_injuries: to_category_totals(&top_injuries, |s| s.injuries),
        economic_damage: economic,
        generated_at: Utc::now().to_rfc3339(),
    };

    // Step 6: Write outputs
    info!("Step 6/6: Writing output files...");

    let json_path = args.output_dir.join("summary.json");
    write_summary(&summary, &json_path).context("Failed to write summary JSON")?;
    info!("✓ Summary written to: {}", json_path.display());

    let charts = ChartFiles::default();
    write_charts(&summary, &args, &charts)?;

    let report_path = args.output_dir.join("report.md");
    let markdown = generate_markdown_report(&summary, &charts);
    std::fs::write(&report_path, markdown).context("Failed to write markdown report")?;
    info!("✓ Report written to: {}", report_path.display());

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("STORM IMPACT SUMMARY");
        println!("{}", "=".repeat(80));
        println!("{}", generate_text_summary(&summary, 10));
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Report completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Render and write the three bar charts
///
/// **Private** - internal helper for execute_report
fn write_charts(summary: &ImpactSummary, args: &ReportArgs, charts: &ChartFiles) -> Result<()> {
    let fatalities_rows: Vec<(String, f64)> = summary
        .top_fatalities
        .iter()
        .map(|r| (r.event_type.clone(), r.total as f64))
        .collect();
    let svg = generate_bar_chart(
        &fatalities_rows,
        &ChartConfig::new("Fatalities by Event Type", "Fatalities"),
    )
    .context("Failed to generate the fatalities chart")?;
    write_svg(&svg, args.output_dir.join(&charts.fatalities))?;

    let injuries_rows: Vec<(String, f64)> = summary
        .top_injuries
        .iter()
        .map(|r| (r.event_type.clone(), r.total as f64))
        .collect();
    let svg = generate_bar_chart(
        &injuries_rows,
        &ChartConfig::new("Injuries by Event Type", "Injuries"),
    )
    .context("Failed to generate the injuries chart")?;
    write_svg(&svg, args.output_dir.join(&charts.injuries))?;

    // Long-format rows come in Property/Crop pairs per category
    let economic_rows: Vec<(String, f64, f64)> = summary
        .economic_damage
        .chunks(2)
        .filter(|pair| pair.len() == 2)
        .map(|pair| {
            (
                pair[0].event_type.clone(),
                pair[0].amount_billions,
                pair[1].amount_billions,
            )
        })
        .collect();
    let svg = generate_grouped_bar_chart(
        &economic_rows,
        ("Property", "Crop"),
        &ChartConfig::new("Economic Damage by Event Type", "Billions USD").with_precision(2),
    )
    .context("Failed to generate the economic damage chart")?;
    write_svg(&svg, args.output_dir.join(&charts.economic))?;

    info!("✓ Charts written to: {}", args.output_dir.display());

    Ok(())
}

/// Project ranked summaries into (category, count) rows
fn to_category_totals<F>(summaries: &[EventSummary], total: F) -> Vec<CategoryTotal>
where
    F: Fn(&EventSummary) -> u64,
{
    summaries
        .iter()
        .map(|s| CategoryTotal {
            event_type: s.event_type.clone(),
            total: total(s),
        })
        .collect()
}

/// Validate a dataset URL
///
/// **Public** - shared by the report and fetch commands
pub fn validate_data_url(url: &str) -> Result<()> {
    if url.is_empty() {
        anyhow::bail!("Dataset URL cannot be empty");
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        anyhow::bail!("Dataset URL must start with http:// or https://");
    }

    Ok(())
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    validate_data_url(&args.data_url)?;

    if args.top == 0 {
        anyhow::bail!("top must be greater than 0");
    }

    if args.top > MAX_TOP_CATEGORIES {
        anyhow::bail!("top is too large (max {})", MAX_TOP_CATEGORIES);
    }

    Ok(())
}
