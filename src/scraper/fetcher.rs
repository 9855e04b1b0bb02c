//! HTTP fetcher for result pages
//!
//! This module handles all HTTP requests for the scraper:
//! - Building an HTTP client with a browser-like user agent and explicit
//!   timeouts
//! - Building per-page URLs from the configured base URL
//! - One GET per result page, parsed into a traversable document

use crate::config::{ClientConfig, SiteConfig};
use crate::{Result, ScrapeError};
use reqwest::Client;
use scraper::Html;
use std::time::Duration;
use url::Url;

/// Builds the HTTP client used for every fetch of a run
///
/// The user agent comes from configuration and defaults to a realistic
/// desktop browser string (carsome.my rejects requests that identify as a
/// programmatic client).
///
/// # Arguments
///
/// * `config` - The HTTP client configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(ScrapeError)` - Failed to build client
pub fn build_http_client(config: &ClientConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()?;
    Ok(client)
}

/// Builds the URL for one result page
///
/// Without a page index the base URL is returned untouched (the discovery
/// fetch); with one, the configured page parameter is appended as a query
/// pair, e.g. `?pageNo=3`.
pub fn page_url(site: &SiteConfig, page: Option<u32>) -> Result<Url> {
    let mut url = Url::parse(&site.base_url)?;
    if let Some(n) = page {
        url.query_pairs_mut()
            .append_pair(&site.page_param, &n.to_string());
    }
    Ok(url)
}

/// Fetches one result page and parses it into a document
///
/// Any transport error or non-success HTTP status is an error. The run is a
/// one-shot batch job with no retry layer, so the caller decides whether a
/// failed page aborts the run or is skipped.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `site` - The target site configuration
/// * `page` - Page index, or `None` for the untargeted discovery fetch
///
/// # Returns
///
/// * `Ok(Html)` - The parsed page
/// * `Err(ScrapeError)` - Transport failure or non-success status
pub async fn fetch_page(client: &Client, site: &SiteConfig, page: Option<u32>) -> Result<Html> {
    let url = page_url(site, page)?;

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|source| ScrapeError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(|source| ScrapeError::Http {
        url: url.to_string(),
        source,
    })?;

    tracing::info!(%url, "Opened webpage");
    Ok(Html::parse_document(&body))
}
