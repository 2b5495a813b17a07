//! Configuration types for timezone-dl
//!
//! All fields carry serde defaults so a partial configuration (or none at
//! all) deserializes into something runnable. The defaults reproduce the
//! documented behavior of the tool: the public timezones.json dataset,
//! output into the current working directory, and a retry policy of three
//! attempts with a 200ms exponential backoff base.

use crate::filter::FilterCriteria;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Default dataset endpoint.
///
/// Deployment can override this via the `TIMEZONE_DL_URL` environment
/// variable (resolved by the CLI layer, not here).
pub const DEFAULT_DOWNLOAD_URL: &str =
    "https://raw.githubusercontent.com/dmfilipenko/timezones.json/master/timezones.json";

/// Default output file name
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "time_zone_output.csv";

/// Main configuration for [`TimeZoneDownloader`](crate::TimeZoneDownloader)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// URL of the JSON dataset to download
    #[serde(default = "default_download_url")]
    pub download_url: Url,

    /// Optional filter criteria applied to the fetched records
    #[serde(default)]
    pub filter: FilterCriteria,

    /// Directory the CSV file is written into (default: current working directory)
    #[serde(default = "default_output_file_directory")]
    pub output_file_directory: PathBuf,

    /// Name of the CSV file to write (default: "time_zone_output.csv")
    #[serde(default = "default_output_file_name")]
    pub output_file_name: String,

    /// Retry policy for transient HTTP failures
    #[serde(default)]
    pub retry: RetryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            download_url: default_download_url(),
            filter: FilterCriteria::default(),
            output_file_directory: default_output_file_directory(),
            output_file_name: default_output_file_name(),
            retry: RetryConfig::default(),
        }
    }
}

impl Config {
    /// Validate the configuration, returning `Error::Config` on the first
    /// problem found.
    pub fn validate(&self) -> crate::error::Result<()> {
        if !matches!(self.download_url.scheme(), "http" | "https") {
            return Err(crate::error::Error::config(format!(
                "download_url must be http or https, got scheme '{}'",
                self.download_url.scheme()
            )));
        }
        if self.output_file_name.is_empty() {
            return Err(crate::error::Error::config(
                "output_file_name must not be empty",
            ));
        }
        if self.output_file_name.contains(std::path::MAIN_SEPARATOR) {
            return Err(crate::error::Error::config(
                "output_file_name must be a bare file name, not a path",
            ));
        }
        if !self.retry.backoff_multiplier.is_finite() || self.retry.backoff_multiplier < 1.0 {
            return Err(crate::error::Error::config(format!(
                "retry.backoff_multiplier must be >= 1.0, got {}",
                self.retry.backoff_multiplier
            )));
        }
        Ok(())
    }

    /// Full path of the output file (`output_file_directory/output_file_name`)
    pub fn output_path(&self) -> PathBuf {
        self.output_file_directory.join(&self.output_file_name)
    }
}

/// Retry configuration for transient HTTP failures
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of retries after the initial attempt (default: 3)
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Delay before the first retry (default: 200 milliseconds)
    #[serde(default = "default_initial_delay", with = "duration_millis_serde")]
    pub initial_delay: Duration,

    /// Maximum delay between retries (default: 10 seconds)
    #[serde(default = "default_max_delay", with = "duration_millis_serde")]
    pub max_delay: Duration,

    /// Multiplier for exponential backoff (default: 2.0)
    #[serde(default = "default_backoff_multiplier")]
    pub backoff_multiplier: f64,

    /// Add random jitter to delays (default: false, keeping the backoff
    /// schedule deterministic for a single-shot tool)
    #[serde(default)]
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(10),
            backoff_multiplier: 2.0,
            jitter: false,
        }
    }
}

// The constant is a valid URL; parsing it cannot fail.
#[allow(clippy::expect_used)]
fn default_download_url() -> Url {
    Url::parse(DEFAULT_DOWNLOAD_URL).expect("default download URL is valid")
}

fn default_output_file_directory() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn default_output_file_name() -> String {
    DEFAULT_OUTPUT_FILE_NAME.to_string()
}

fn default_max_retries() -> u32 {
    3
}

fn default_initial_delay() -> Duration {
    Duration::from_millis(200)
}

fn default_max_delay() -> Duration {
    Duration::from_secs(10)
}

fn default_backoff_multiplier() -> f64 {
    2.0
}

// Duration serialization helper (milliseconds)
mod duration_millis_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
