//! Scrape engine: page fetching and run orchestration
//!
//! This module contains the moving parts of a run:
//! - HTTP fetching with explicit timeouts
//! - Per-page URL construction
//! - The sequential fetch/extract/persist loop

mod fetcher;
mod runner;

pub use fetcher::{build_http_client, fetch_page, page_url};
pub use runner::{run_scrape, RunSummary, Runner};
