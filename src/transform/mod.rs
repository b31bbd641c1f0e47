//! Record cleaning: scale-code normalization, retention filtering,
//! and damage scaling.
//!
//! These stages are pure functions over the record set; the raw input is
//! never mutated.

pub mod damage;
pub mod filter;
pub mod scale;

// Re-export main types and functions
pub use damage::{scale_damages, DamageRecord};
pub use filter::{retain_records, has_measurable_impact};
pub use scale::{classify, multiplier, ScaleRule};
