//! Dataset acquisition and reading.
//!
//! This module handles:
//! - Downloading the storm events archive when it is absent locally
//! - Decompressing and deserializing the CSV into domain records

pub mod fetch;
pub mod reader;
pub mod schema;

// Re-export main types and functions
pub use fetch::{ensure_dataset, DatasetClient};
pub use reader::read_records;
pub use schema::{RawStormRow, StormRecord};
