//! Economic damage selection and reshaping.
//!
//! Categories are selected by their combined property + crop total, but the
//! two components are never merged for display: each selected category yields
//! one `Property` row and one `Crop` row, rescaled to billions of dollars.

use crate::aggregator::ranking::top_by;
use crate::aggregator::summary::EventSummary;
use crate::utils::config::BILLION;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Damage component tag for the long-format economic table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageType {
    Property,
    Crop,
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DamageType::Property => write!(f, "Property"),
            DamageType::Crop => write!(f, "Crop"),
        }
    }
}

/// One long-format row of the economic damage table.
///
/// **Public** - ready for direct bar-chart rendering (category axis, value
/// axis, damage type as the fill grouping)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageBreakdown {
    /// Event category, verbatim from the source
    pub event_type: String,

    /// Which damage component this row carries
    pub damage_type: DamageType,

    /// Damage amount in billions of dollars, rounded to 2 decimal places
    pub amount_billions: f64,
}

/// Build the long-format economic table for the top `n` categories
///
/// **Public** - selection uses the combined total; output keeps property and
/// crop separate. Boundary ties at rank `n` are included.
pub fn economic_breakdown(summaries: &[EventSummary], n: usize) -> Vec<DamageBreakdown> {
    let selected = top_by(summaries, n, |s| s.combined_damage());

    let mut rows = Vec::with_capacity(selected.len() * 2);
    for summary in &selected {
        rows.push(DamageBreakdown {
            event_type: summary.event_type.clone(),
            damage_type: DamageType::Property,
            amount_billions: to_billions(summary.property_damage),
        });
        rows.push(DamageBreakdown {
            event_type: summary.event_type.clone(),
            damage_type: DamageType::Crop,
            amount_billions: to_billions(summary.crop_damage),
        });
    }

    rows
}

/// Rescale a dollar amount to billions, rounded to 2 decimal places
///
/// **Private** - rounding happens only here, at the display boundary
fn to_billions(amount: f64) -> f64 {
    (amount / BILLION * 100.0).round() / 100.0
}
