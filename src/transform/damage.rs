//! Scaled-damage computation.
//!
//! Applies the normalized scale-code multipliers to the raw damage
//! magnitudes, producing a parallel derived record set. The input records are
//! not mutated and no currency rounding happens mid-pipeline.

use crate::dataset::schema::StormRecord;
use crate::transform::scale::multiplier;
use log::debug;

/// A record with its damage fields resolved to absolute dollar amounts.
///
/// **Public** - the unit consumed by aggregation
#[derive(Debug, Clone, PartialEq)]
pub struct DamageRecord {
    pub event_type: String,
    pub fatalities: u64,
    pub injuries: u64,

    /// `property_damage × multiplier(property_scale)`
    pub scaled_property_damage: f64,

    /// `crop_damage × multiplier(crop_scale)`
    pub scaled_crop_damage: f64,
}

/// Compute scaled damage values for a set of retained records
///
/// **Public** - main entry point for damage scaling
pub fn scale_damages(records: &[StormRecord]) -> Vec<DamageRecord> {
    debug!("Scaling damage values for {} records", records.len());

    records.iter().map(scale_record).collect()
}

/// Derive a single damage-scaled record
///
/// **Private** - internal conversion
fn scale_record(record: &StormRecord) -> DamageRecord {
    DamageRecord {
        event_type: record.event_type.clone(),
        fatalities: record.fatalities,
        injuries: record.injuries,
        scaled_property_damage: record.property_damage * multiplier(&record.property_scale),
        scaled_crop_damage: record.crop_damage * multiplier(&record.crop_scale),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(prop: f64, prop_scale: &str, crop: f64, crop_scale: &str) -> StormRecord {
        StormRecord {
            event_type: "TORNADO".to_string(),
            fatalities: 0,
            injuries: 0,
            property_damage: prop,
            property_scale: prop_scale.to_string(),
            crop_damage: crop,
            crop_scale: crop_scale.to_string(),
        }
    }

    #[test]
    fn test_scaling_applies_both_multipliers() {
        let scaled = scale_damages(&[record(2.0, "M", 1.0, "K")]);

        assert_eq!(scaled[0].scaled_property_damage, 2_000_000.0);
        assert_eq!(scaled[0].scaled_crop_damage, 1_000.0);
    }

    #[test]
    fn test_empty_scale_code_keeps_magnitude() {
        let scaled = scale_damages(&[record(3.5, "", 0.0, "")]);

        assert_eq!(scaled[0].scaled_property_damage, 3.5);
        assert_eq!(scaled[0].scaled_crop_damage, 0.0);
    }

    #[test]
    fn test_input_not_mutated() {
        let input = vec![record(1.0, "K", 0.0, "")];
        let before = input.clone();

        let _ = scale_damages(&input);

        assert_eq!(input, before);
    }
}
