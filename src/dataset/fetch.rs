//! HTTP download of the storm events archive.
//!
//! The dataset lives at a fixed remote location and is cached on disk after
//! the first download. There is no retry policy: a failed fetch is fatal.

use crate::utils::config::DEFAULT_FETCH_TIMEOUT;
use crate::utils::error::FetchError;
use log::{debug, info};
use reqwest::blocking::Client;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// HTTP client for fetching the dataset archive
pub struct DatasetClient {
    client: Client,
    url: String,
}

impl DatasetClient {
    /// Create a new dataset client
    pub fn new(url: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(DEFAULT_FETCH_TIMEOUT)
            .build()
            .map_err(FetchError::RequestFailed)?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Download the archive to the given path
    ///
    /// **Public** - streams the response body straight to disk
    ///
    /// # Returns
    /// Number of bytes written
    pub fn download_to(&self, path: impl AsRef<Path>) -> Result<u64, FetchError> {
        let path = path.as_ref();

        info!("Downloading dataset from: {}", self.url);

        let mut response = self.client.get(&self.url).send()?;

        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status().to_string()));
        }

        if let Some(parent) = path.parent() {
            if !parent.exists() && !parent.as_os_str().is_empty() {
                debug!("Creating parent directories: {}", parent.display());
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        let bytes = response
            .copy_to(&mut writer)
            .map_err(FetchError::RequestFailed)?;

        info!(
            "Dataset saved to {} ({:.1} MB)",
            path.display(),
            bytes as f64 / (1024.0 * 1024.0)
        );

        Ok(bytes)
    }
}

/// Make sure the dataset exists locally, downloading it if absent
///
/// **Public** - fetch-if-absent cache semantics used by the report command
///
/// # Arguments
/// * `path` - Local path the dataset should live at
/// * `url` - Remote location to fetch from when the file is missing
///
/// # Returns
/// `true` if a download happened, `false` if the cached file was used
pub fn ensure_dataset(path: impl AsRef<Path>, url: &str) -> Result<bool, FetchError> {
    let path = path.as_ref();

    if path.exists() {
        debug!("Using cached dataset: {}", path.display());
        return Ok(false);
    }

    let client = DatasetClient::new(url)?;
    client.download_to(path)?;

    Ok(true)
}
