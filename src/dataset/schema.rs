//! Row types for the storm events CSV.
//!
//! The source file carries 37 columns; the analysis consumes exactly six of
//! them (plus the event type label). Everything else is ignored by serde.

use serde::Deserialize;

/// One row of the storm events CSV, as deserialized by the `csv` crate.
///
/// **Public** - produced by the reader, converted to [`StormRecord`]
///
/// Numeric count columns are read as `f64` because the source writes them
/// with a decimal point (`"0"`, `"15"`, occasionally `"2.00"`).
#[derive(Debug, Clone, Deserialize)]
pub struct RawStormRow {
    /// Free-text event category label (hundreds of raw variants)
    #[serde(rename = "EVTYPE")]
    pub event_type: String,

    #[serde(rename = "FATALITIES")]
    pub fatalities: f64,

    #[serde(rename = "INJURIES")]
    pub injuries: f64,

    /// Property damage magnitude, to be scaled by the PROPDMGEXP code
    #[serde(rename = "PROPDMG")]
    pub property_damage: f64,

    /// Property damage scale code (K, M, B, H, digits, empty, stray symbols)
    #[serde(rename = "PROPDMGEXP", default)]
    pub property_scale: String,

    /// Crop damage magnitude, to be scaled by the CROPDMGEXP code
    #[serde(rename = "CROPDMG")]
    pub crop_damage: f64,

    /// Crop damage scale code (same inconsistent vocabulary, plus `?`)
    #[serde(rename = "CROPDMGEXP", default)]
    pub crop_scale: String,
}

/// A storm event record in domain form.
///
/// **Public** - the unit flowing through filter and damage scaling
#[derive(Debug, Clone, PartialEq)]
pub struct StormRecord {
    /// Event category, kept verbatim from the source (no canonicalization)
    pub event_type: String,

    /// Number of fatalities attributed to the event
    pub fatalities: u64,

    /// Number of injuries attributed to the event
    pub injuries: u64,

    /// Raw property damage magnitude (unscaled)
    pub property_damage: f64,

    /// Raw property damage scale code
    pub property_scale: String,

    /// Raw crop damage magnitude (unscaled)
    pub crop_damage: f64,

    /// Raw crop damage scale code
    pub crop_scale: String,
}

impl From<RawStormRow> for StormRecord {
    fn from(row: RawStormRow) -> Self {
        Self {
            event_type: row.event_type,
            // Counts are integral in the source; truncate toward zero
            fatalities: row.fatalities as u64,
            injuries: row.injuries as u64,
            property_damage: row.property_damage,
            property_scale: row.property_scale,
            crop_damage: row.crop_damage,
            crop_scale: row.crop_scale,
        }
    }
}
