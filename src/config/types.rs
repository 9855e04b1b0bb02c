use serde::Deserialize;

/// Main configuration structure for Carsome-Scraper
///
/// Every field carries a default, so the scraper runs with no config file at
/// all; a TOML file only needs to name the sections it wants to change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Target site configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Base listing URL, fetched as-is for page discovery
    #[serde(rename = "base-url", default = "default_base_url")]
    pub base_url: String,

    /// Query parameter carrying the page number
    #[serde(rename = "page-param", default = "default_page_param")]
    pub page_param: String,
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// User-agent header sent with every request. The site rejects default
    /// client signatures, so this must look like a real browser.
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Total request timeout in seconds
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connect timeout in seconds
    #[serde(
        rename = "connect-timeout-secs",
        default = "default_connect_timeout_secs"
    )]
    pub connect_timeout_secs: u64,
}

/// Run behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    /// Fixed courtesy delay between result pages (milliseconds)
    #[serde(rename = "page-delay-ms", default = "default_page_delay_ms")]
    pub page_delay_ms: u64,

    /// What to do when a result page cannot be fetched
    #[serde(rename = "on-page-error", default)]
    pub on_page_error: PageErrorPolicy,
}

/// Policy applied when a result page fetch fails mid-run
///
/// The initial discovery fetch is not governed by this policy: without page 1
/// there is no page count, and the run aborts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageErrorPolicy {
    /// Log the failure and continue with the next page
    #[default]
    Skip,
    /// Terminate the run with an error
    Abort,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory the CSV file is written into
    #[serde(default = "default_output_directory")]
    pub directory: String,

    /// Filename prefix, followed by a 14-digit timestamp and `.csv`
    #[serde(rename = "file-prefix", default = "default_file_prefix")]
    pub file_prefix: String,

    /// Path of the append-only run log
    #[serde(rename = "log-path", default = "default_log_path")]
    pub log_path: String,
}

fn default_base_url() -> String {
    "https://www.carsome.my/buy-car/perodua/myvi".to_string()
}

fn default_page_param() -> String {
    "pageNo".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/125.0.0.0 Safari/537.36"
        .to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_page_delay_ms() -> u64 {
    5000
}

fn default_output_directory() -> String {
    ".".to_string()
}

fn default_file_prefix() -> String {
    "car_".to_string()
}

fn default_log_path() -> String {
    "scraping.log".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_param: default_page_param(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            page_delay_ms: default_page_delay_ms(),
            on_page_error: PageErrorPolicy::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
            file_prefix: default_file_prefix(),
            log_path: default_log_path(),
        }
    }
}
