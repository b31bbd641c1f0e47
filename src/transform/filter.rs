//! Retention filtering.
//!
//! Most rows in the source record no measurable impact at all; they carry no
//! information for the rankings and are dropped before aggregation.

use crate::dataset::schema::StormRecord;
use crate::utils::config::UNKNOWN_EVENT_TYPE;
use log::debug;

/// Retention predicate: does this record carry any measurable impact?
///
/// **Public** - a record is kept iff its event type is not the unknown-marker
/// sentinel and at least one of fatalities, injuries, property damage or crop
/// damage is strictly positive.
pub fn has_measurable_impact(record: &StormRecord) -> bool {
    record.event_type != UNKNOWN_EVENT_TYPE
        && (record.fatalities > 0
            || record.injuries > 0
            || record.property_damage > 0.0
            || record.crop_damage > 0.0)
}

/// Filter the record set down to records with measurable impact
///
/// **Public** - pure pass, input untouched; output order follows input order
/// (downstream grouping is order-independent)
pub fn retain_records(records: &[StormRecord]) -> Vec<StormRecord> {
    let retained: Vec<StormRecord> = records
        .iter()
        .filter(|r| has_measurable_impact(r))
        .cloned()
        .collect();

    debug!(
        "Retained {} of {} records ({} dropped)",
        retained.len(),
        records.len(),
        records.len() - retained.len()
    );

    retained
}
