//! Carsome-Scraper: a one-shot car listing harvester
//!
//! This crate fetches paginated used-car listing pages from carsome.my,
//! extracts structured attributes for each advertised car, and writes the
//! aggregated records to a timestamped CSV file.

pub mod config;
pub mod output;
pub mod record;
pub mod scraper;
pub mod site;

use thiserror::Error;

/// Main error type for scrape operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Missing required listing field: {field}")]
    MissingField { field: &'static str },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No records to persist")]
    NoRecords,
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for scrape operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use record::ListingRecord;
pub use crate::scraper::{run_scrape, RunSummary, Runner};
pub use site::{CarsomeAdapter, SiteAdapter};
