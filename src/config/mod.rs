//! Configuration module for Carsome-Scraper
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. All settings have defaults, so a config file is optional.
//!
//! # Example
//!
//! ```no_run
//! use carsome_scraper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Scraping {}", config.site.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{ClientConfig, Config, OutputConfig, PageErrorPolicy, RunConfig, SiteConfig};

// Re-export parser functions
pub use parser::{default_config, load_config};
