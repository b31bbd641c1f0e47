//! Output JSON schema definitions for the impact summary.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use crate::aggregator::economic::DamageBreakdown;
use serde::{Deserialize, Serialize};

/// Top-level impact summary written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactSummary {
    /// Schema version for compatibility checking
    pub version: String,

    /// Dataset the summary was computed from (path or URL)
    pub dataset: String,

    /// Rows read from the dataset
    pub records_loaded: u64,

    /// Rows surviving the retention filter
    pub records_retained: u64,

    /// Top categories by summed fatalities (boundary ties included)
    pub top_fatalities: Vec<CategoryTotal>,

    /// Top categories by summed injuries (boundary ties included)
    pub top_injuries: Vec<CategoryTotal>,

    /// Long-format economic damage rows for the selected categories
    pub economic_damage: Vec<DamageBreakdown>,

    /// Timestamp when the summary was generated (RFC 3339)
    pub generated_at: String,
}

/// A (category, count) pair for the health-impact rankings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// Event category, verbatim from the source
    pub event_type: String,

    /// Summed count for this category
    pub total: u64,
}
