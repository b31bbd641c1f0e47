//! Storm Impact
//!
//! Severe weather impact analysis for the NOAA storm events dataset.
//! Aggregates fatalities, injuries and economic damage by event category
//! and renders the results as a report.
//!
//! This crate provides the core implementation for the
//! `storm-impact` CLI tool.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install storm-impact
//! storm-impact report --summary
//! ```

pub mod aggregator;
pub mod commands;
pub mod dataset;
pub mod output;
pub mod transform;
pub mod utils;
