use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use carsome_scraper::config::load_config;
///
/// let config = load_config(Path::new("config.toml")).unwrap();
/// println!("Target: {}", config.site.base_url);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    // Read the configuration file
    let content = std::fs::read_to_string(path)?;

    // Parse TOML; unspecified fields fall back to their defaults
    let config: Config = toml::from_str(&content)?;

    // Validate the configuration
    validate(&config)?;

    Ok(config)
}

/// Returns the built-in default configuration, validated
///
/// Used when the CLI is invoked without a config file. The defaults reproduce
/// the original batch job: carsome.my Myvi listings, 5 second page delay,
/// `car_<timestamp>.csv` in the working directory.
pub fn default_config() -> Result<Config, ConfigError> {
    let config = Config::default();
    validate(&config)?;
    Ok(config)
}
