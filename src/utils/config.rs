//! Configuration and constants for the CLI.

use std::time::Duration;

/// Default timeout for the dataset download (the archive is ~47 MB)
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(300);

/// Current output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Fixed remote location of the storm events archive
pub const STORM_DATA_URL: &str =
    "https://d396qusza40orc.cloudfront.net/repdata%2Fdata%2FStormData.csv.bz2";

/// Default local path for the cached dataset
pub const DEFAULT_DATASET_PATH: &str = "StormData.csv.bz2";

/// Sentinel event type marking an unknown event in the source data
pub const UNKNOWN_EVENT_TYPE: &str = "?";

/// Number of categories shown in each ranking (ties at the boundary may add more)
pub const DEFAULT_TOP_CATEGORIES: usize = 15;

/// Upper bound on the --top argument
pub const MAX_TOP_CATEGORIES: usize = 1000;

/// Divisor for reporting economic damage in billions of dollars
pub const BILLION: f64 = 1_000_000_000.0;
