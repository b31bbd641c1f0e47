//! Per-category aggregation.
//!
//! Groups records by their verbatim event type and computes four independent
//! sums over each group. Grouping is case-sensitive by design: the source
//! vocabulary is not canonicalized, because merging near-duplicate labels
//! would change the reported rankings.

use crate::transform::damage::DamageRecord;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Summed impact figures for one event category.
///
/// **Public** - built once per run, immutable after construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSummary {
    /// Event category, verbatim from the source
    pub event_type: String,

    /// Summed fatalities across the group
    pub fatalities: u64,

    /// Summed injuries across the group
    pub injuries: u64,

    /// Summed scaled property damage (dollars)
    pub property_damage: f64,

    /// Summed scaled crop damage (dollars)
    pub crop_damage: f64,
}

impl EventSummary {
    /// Combined economic total, used only for selecting categories
    /// (property and crop are always reported separately)
    pub fn combined_damage(&self) -> f64 {
        self.property_damage + self.crop_damage
    }
}

/// Group records by event type and sum each impact measure independently
///
/// **Public** - main entry point for aggregation
///
/// # Returns
/// One summary per distinct event type, sorted by label for reproducible
/// output (ranking applies its own order downstream)
pub fn aggregate_by_event_type(records: &[DamageRecord]) -> Vec<EventSummary> {
    let mut groups: HashMap<&str, EventSummary> = HashMap::new();

    for record in records {
        let entry = groups
            .entry(record.event_type.as_str())
            .or_insert_with(|| EventSummary {
                event_type: record.event_type.clone(),
                fatalities: 0,
                injuries: 0,
                property_damage: 0.0,
                crop_damage: 0.0,
            });

        entry.fatalities += record.fatalities;
        entry.injuries += record.injuries;
        entry.property_damage += record.scaled_property_damage;
        entry.crop_damage += record.scaled_crop_damage;
    }

    let mut summaries: Vec<EventSummary> = groups.into_values().collect();
    summaries.sort_by(|a, b| a.event_type.cmp(&b.event_type));

    debug!(
        "Aggregated {} records into {} categories",
        records.len(),
        summaries.len()
    );

    summaries
}
