//! Command-line entry point for timezone-dl.
//!
//! Flag names keep underscores (`--output_file_directory`) because they
//! are an existing contract surface for scripted callers.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use timezone_dl::{Config, FilterCriteria, TimeZoneDownloader};
use tracing_subscriber::EnvFilter;
use url::Url;

/// Environment variable overriding the dataset endpoint
const URL_ENV_VAR: &str = "TIMEZONE_DL_URL";

#[derive(Parser)]
#[command(
    name = "timezone-dl",
    version,
    about = "Download the timezones.json dataset, filter it, and export CSV"
)]
struct Cli {
    /// Return only the time zone whose name matches the supplied string
    /// (case-insensitive exact match)
    #[arg(long = "match", value_name = "STRING")]
    match_name: Option<String>,

    /// Return only the time zones whose UTC offset matches the supplied
    /// value, compared by absolute value (12 matches UTC+12 and UTC-12)
    #[arg(long, value_name = "INTEGER", allow_negative_numbers = true)]
    offset: Option<i64>,

    /// Directory to write the output file to (default: current working directory)
    #[arg(long = "output_file_directory", value_name = "PATH")]
    output_file_directory: Option<PathBuf>,

    /// Name of the file to write (default: time_zone_output.csv)
    #[arg(long = "output_file_name", value_name = "STRING")]
    output_file_name: Option<String>,
}

impl Cli {
    fn into_config(self) -> timezone_dl::Result<Config> {
        let mut config = Config {
            filter: FilterCriteria {
                name: self.match_name,
                offset: self.offset,
            },
            ..Config::default()
        };
        if let Some(directory) = self.output_file_directory {
            config.output_file_directory = directory;
        }
        if let Some(name) = self.output_file_name {
            config.output_file_name = name;
        }
        if let Ok(url) = std::env::var(URL_ENV_VAR) {
            config.download_url = Url::parse(&url).map_err(|e| {
                timezone_dl::Error::config(format!("{URL_ENV_VAR} is not a valid URL: {e}"))
            })?;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> timezone_dl::Result<()> {
    let config = cli.into_config()?;
    let downloader = TimeZoneDownloader::new(config)?;

    match downloader.execute().await? {
        Some(path) => tracing::info!(path = %path.display(), "done"),
        None => tracing::info!("no records matched the filters, no file written"),
    }
    Ok(())
}
