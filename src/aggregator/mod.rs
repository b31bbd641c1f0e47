//! Aggregation of damage-scaled records into per-category summaries
//! and ranked selections.
//!
//! This module transforms the cleaned record set into:
//! - Per-event-type sums (fatalities, injuries, property, crop)
//! - Top-N selections with inclusive boundary ties
//! - The long-format economic damage table

pub mod economic;
pub mod ranking;
pub mod summary;

// Re-export main types and functions
pub use economic::{economic_breakdown, DamageBreakdown, DamageType};
pub use ranking::top_by;
pub use summary::{aggregate_by_event_type, EventSummary};
