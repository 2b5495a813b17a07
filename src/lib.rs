//! # timezone-dl
//!
//! Single-purpose downloader for the public timezones.json dataset:
//! fetch the JSON dataset over HTTP (with bounded retry on transient
//! server errors), optionally filter the records by name and/or UTC
//! offset, and write the result as a CSV file.
//!
//! The tool is single-shot and stateless: every run fetches the dataset
//! fresh, holds it fully in memory, and discards it after the write. An
//! empty filter result skips the write entirely — that is a documented
//! outcome, not an error.
//!
//! ## Quick Start
//!
//! ```no_run
//! use timezone_dl::{Config, FilterCriteria, TimeZoneDownloader};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config {
//!         filter: FilterCriteria {
//!             offset: Some(12),
//!             ..Default::default()
//!         },
//!         ..Default::default()
//!     };
//!
//!     let downloader = TimeZoneDownloader::new(config)?;
//!     match downloader.execute().await? {
//!         Some(path) => println!("written to {}", path.display()),
//!         None => println!("no matching records, nothing written"),
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Pipeline orchestration
pub mod downloader;
/// Error types
pub mod error;
/// HTTP retrieval of the dataset
pub mod fetch;
/// Record filtering
pub mod filter;
/// Retry logic with exponential backoff
pub mod retry;
/// Core data types
pub mod types;
/// CSV serialization
pub mod writer;

// Re-export commonly used types
pub use config::{Config, DEFAULT_DOWNLOAD_URL, DEFAULT_OUTPUT_FILE_NAME, RetryConfig};
pub use downloader::TimeZoneDownloader;
pub use error::{Error, Result};
pub use filter::{FilterCriteria, apply_filters};
pub use types::{Dataset, TimeZoneRecord};
pub use writer::write_csv;
