//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while downloading the dataset
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("server returned {0}")]
    HttpStatus(String),

    #[error("IO error while saving dataset: {0}")]
    IoError(#[from] std::io::Error),
}

/// Errors that can occur while reading the dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("failed to open dataset file: {0}")]
    OpenFailed(#[from] std::io::Error),

    #[error("CSV deserialization failed: {0}")]
    CsvError(#[from] csv::Error),

    #[error("dataset contains no rows")]
    Empty,
}

/// Errors that can occur during chart generation
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("no data to chart")]
    EmptyData,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("invalid output path: {0}")]
    InvalidPath(String),
}
