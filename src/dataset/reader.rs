//! Reading the storm events CSV from disk.
//!
//! The published archive is a bzip2-compressed CSV; an already-decompressed
//! file is also accepted (useful for tests and manual inspection). The format
//! is chosen by file extension.

use crate::dataset::schema::{RawStormRow, StormRecord};
use crate::utils::error::DatasetError;
use bzip2::read::BzDecoder;
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Read all storm records from a CSV or CSV.bz2 file
///
/// **Public** - main entry point for dataset loading
///
/// # Arguments
/// * `path` - Path to the dataset (`.bz2` triggers decompression)
///
/// # Returns
/// All rows in file order, converted to domain records
///
/// # Errors
/// * `DatasetError::OpenFailed` - file cannot be opened
/// * `DatasetError::CsvError` - a row fails to deserialize
/// * `DatasetError::Empty` - the file holds no data rows
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<StormRecord>, DatasetError> {
    let path = path.as_ref();

    info!("Reading dataset: {}", path.display());

    let file = File::open(path)?;
    let reader: Box<dyn Read> = if is_bzip2(path) {
        debug!("Decompressing bzip2 stream");
        Box::new(BzDecoder::new(file))
    } else {
        Box::new(file)
    };

    let mut csv_reader = csv::Reader::from_reader(BufReader::new(reader));

    let mut records = Vec::new();
    for row in csv_reader.deserialize::<RawStormRow>() {
        records.push(StormRecord::from(row?));
    }

    if records.is_empty() {
        return Err(DatasetError::Empty);
    }

    info!("Loaded {} records", records.len());

    Ok(records)
}

/// Check whether a path names a bzip2-compressed file
///
/// **Private** - extension sniffing only, no magic-byte inspection
fn is_bzip2(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("bz2"))
        .unwrap_or(false)
}
