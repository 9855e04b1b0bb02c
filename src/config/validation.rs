use crate::config::types::{ClientConfig, Config, OutputConfig, RunConfig, SiteConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_client_config(&config.client)?;
    validate_run_config(&config.run)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the target site configuration
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "base-url must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if config.page_param.is_empty() {
        return Err(ConfigError::Validation(
            "page-param cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates the HTTP client configuration
fn validate_client_config(config: &ClientConfig) -> Result<(), ConfigError> {
    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "connect-timeout-secs must be >= 1, got {}",
            config.connect_timeout_secs
        )));
    }

    if config.connect_timeout_secs > config.timeout_secs {
        return Err(ConfigError::Validation(format!(
            "connect-timeout-secs ({}) cannot exceed timeout-secs ({})",
            config.connect_timeout_secs, config.timeout_secs
        )));
    }

    Ok(())
}

/// Validates the run behavior configuration
fn validate_run_config(config: &RunConfig) -> Result<(), ConfigError> {
    // An hour between pages would mean a misplaced unit somewhere
    if config.page_delay_ms > 3_600_000 {
        return Err(ConfigError::Validation(format!(
            "page-delay-ms must be <= 3600000, got {}",
            config.page_delay_ms
        )));
    }

    Ok(())
}

/// Validates the output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.directory.is_empty() {
        return Err(ConfigError::Validation(
            "output directory cannot be empty".to_string(),
        ));
    }

    if config.file_prefix.is_empty() {
        return Err(ConfigError::Validation(
            "file-prefix cannot be empty".to_string(),
        ));
    }

    if config.log_path.is_empty() {
        return Err(ConfigError::Validation(
            "log-path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
