//! Run orchestration
//!
//! The [`Runner`] drives a complete scrape as a sequential state machine:
//! discover the page count from the untargeted fetch, iterate every result
//! page, extract listings through the site adapter, and persist the
//! accumulated records once at the end.

use crate::config::{Config, PageErrorPolicy};
use crate::output::{output_filename, write_records};
use crate::record::ListingRecord;
use crate::scraper::fetcher::{build_http_client, fetch_page};
use crate::site::{CarsomeAdapter, SiteAdapter};
use crate::Result;
use chrono::Local;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;

/// What a completed run produced
#[derive(Debug)]
pub struct RunSummary {
    /// Number of result pages visited
    pub pages: u32,
    /// Number of listings extracted across all pages
    pub listings: usize,
    /// Path of the CSV file, or `None` when zero listings were collected
    /// and nothing was written
    pub output_path: Option<PathBuf>,
}

/// Sequential scrape driver
///
/// Owns the HTTP client, the accumulating record set, and the site adapter.
/// Generic over [`SiteAdapter`] so the run loop never touches markup details.
pub struct Runner<A: SiteAdapter> {
    config: Config,
    client: Client,
    adapter: A,
}

impl<A: SiteAdapter> Runner<A> {
    /// Creates a runner from a validated configuration
    pub fn new(config: Config, adapter: A) -> Result<Self> {
        let client = build_http_client(&config.client)?;
        Ok(Self {
            config,
            client,
            adapter,
        })
    }

    /// Runs the scrape end to end
    ///
    /// # Run flow
    ///
    /// 1. Compute the timestamped output path from the current wall clock
    /// 2. Fetch the untargeted page and discover the page count (a failure
    ///    here aborts: without page 1 there is nothing to iterate)
    /// 3. For each page 1..=max: fetch, extract every listing, then pause for
    ///    the configured delay. A failed page fetch is skipped or aborts the
    ///    run per the `on-page-error` policy; a skipped page moves on without
    ///    pausing, and a malformed listing always aborts.
    /// 4. Persist the records; when zero were collected no file is written.
    pub async fn run(&self) -> Result<RunSummary> {
        let output_path = output_filename(&self.config.output, Local::now());

        let max_page = {
            let first = fetch_page(&self.client, &self.config.site, None).await?;
            self.adapter.discover_max_page(&first)
        };
        tracing::info!(max_page, "Max page number is {}", max_page);

        let mut records: Vec<ListingRecord> = Vec::new();
        let delay = Duration::from_millis(self.config.run.page_delay_ms);

        for page in 1..=max_page {
            match fetch_page(&self.client, &self.config.site, Some(page)).await {
                Ok(document) => {
                    let page_records = self.adapter.extract_listings(&document)?;
                    tracing::info!(
                        page,
                        listings = page_records.len(),
                        "Completed scraping page {}",
                        page
                    );
                    records.extend(page_records);

                    // Courtesy delay after a completed page, not after the
                    // last one and not after a failed fetch
                    if page < max_page {
                        tokio::time::sleep(delay).await;
                    }
                }
                Err(e) => match self.config.run.on_page_error {
                    PageErrorPolicy::Abort => return Err(e),
                    PageErrorPolicy::Skip => {
                        tracing::warn!(page, error = %e, "Failed to retrieve page, skipping");
                    }
                },
            }
        }

        if records.is_empty() {
            tracing::warn!("No car data collected, nothing to write");
            return Ok(RunSummary {
                pages: max_page,
                listings: 0,
                output_path: None,
            });
        }

        write_records(&records, &output_path)?;
        tracing::info!(
            path = %output_path.display(),
            records = records.len(),
            "Data has been written to output file"
        );

        Ok(RunSummary {
            pages: max_page,
            listings: records.len(),
            output_path: Some(output_path),
        })
    }
}

/// Runs a complete scrape with the carsome.my adapter
///
/// This is the main entry point used by the CLI.
///
/// # Arguments
///
/// * `config` - The validated run configuration
///
/// # Returns
///
/// * `Ok(RunSummary)` - The run finished; check `output_path` for the file
/// * `Err(ScrapeError)` - The run aborted on a fatal condition
pub async fn run_scrape(config: Config) -> Result<RunSummary> {
    let runner = Runner::new(config, CarsomeAdapter::new())?;
    runner.run().await
}
