//! Pipeline orchestration
//!
//! [`TimeZoneDownloader`] wires the three stages together in strict
//! sequence: fetch, filter, write. Any error aborts the run before the
//! next stage, so a failed fetch or filter never produces output. There
//! are no orchestration-level retries (retrying is internal to the fetch
//! stage) and no resumption; a failed run is simply re-invoked.

use crate::config::Config;
use crate::error::Result;
use crate::fetch::fetch_dataset;
use crate::filter::apply_filters;
use crate::writer::write_csv;
use std::path::PathBuf;

/// Single-shot downloader for the timezone dataset
pub struct TimeZoneDownloader {
    config: Config,
}

impl TimeZoneDownloader {
    /// Create a downloader from a validated configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this downloader was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the fetch -> filter -> write pipeline once.
    ///
    /// Returns the path of the written CSV file, or `None` when filtering
    /// left no records to write (an explicit non-error outcome).
    pub async fn execute(&self) -> Result<Option<PathBuf>> {
        // Fresh client per run; dropped (and connections released) on every
        // exit path when this function returns.
        let client = reqwest::Client::builder().build()?;

        let dataset = fetch_dataset(&client, &self.config.download_url, &self.config.retry).await?;

        let filtered = apply_filters(&dataset, &self.config.filter);

        write_csv(
            &filtered,
            &self.config.output_file_directory,
            &self.config.output_file_name,
        )
    }
}
