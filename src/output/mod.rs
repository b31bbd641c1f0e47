//! Output writers for the report artifacts.
//!
//! This module handles writing data to disk in various formats:
//! - JSON impact summaries
//! - SVG bar charts
//! - Markdown report with prose

pub mod charts;
pub mod json;
pub mod report;
pub mod schema;

// Re-export main types and functions
pub use charts::{generate_bar_chart, generate_grouped_bar_chart, write_svg, ChartConfig};
pub use json::{read_summary, write_summary};
pub use report::{generate_markdown_report, generate_text_summary, ChartFiles};
pub use schema::{CategoryTotal, ImpactSummary};
