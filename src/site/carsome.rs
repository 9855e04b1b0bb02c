//! Adapter for the carsome.my listing markup
//!
//! Selectors target the `mod-*` class names carsome ships today. They are
//! positional and brittle on purpose: a markup change should fail loudly
//! rather than silently produce shifted columns.

use crate::record::{ListingRecord, NONE_SENTINEL};
use crate::site::SiteAdapter;
use crate::{Result, ScrapeError};
use scraper::{ElementRef, Html, Selector};

/// Extracts pagination and listing data from carsome.my result pages
pub struct CarsomeAdapter {
    pagination_button: Selector,
    listing_block: Selector,
    title: Selector,
    other_details: Selector,
    other_span: Selector,
    price: Selector,
    instalment: Selector,
}

impl Default for CarsomeAdapter {
    fn default() -> Self {
        // Static selectors, known valid
        Self {
            pagination_button: Selector::parse("li.mod-pagination__item button").unwrap(),
            listing_block: Selector::parse("div.mod-b-card__footer").unwrap(),
            title: Selector::parse("a.mod-b-card__title").unwrap(),
            other_details: Selector::parse("div.mod-b-card__car-other").unwrap(),
            other_span: Selector::parse("span").unwrap(),
            price: Selector::parse("div.mod-card__price__total").unwrap(),
            instalment: Selector::parse("div.mod-tooltipMonthPay").unwrap(),
        }
    }
}

impl CarsomeAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extracts the six fields of a single listing block
    ///
    /// Title, price and monthly instalment are required; the three
    /// "other details" spans (mileage, transmission, location in document
    /// order) fall back to the `"None"` sentinel when absent.
    fn extract_fields(&self, block: ElementRef<'_>) -> Result<ListingRecord> {
        let car_name = block
            .select(&self.title)
            .next()
            .ok_or(ScrapeError::MissingField { field: "car_name" })?
            .text()
            .collect::<String>()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        let (car_mileage, car_transmission, car_location) =
            match block.select(&self.other_details).next() {
                Some(other) => {
                    let mut spans = other
                        .select(&self.other_span)
                        .map(|s| s.text().collect::<String>().trim().to_string());
                    (
                        spans.next().unwrap_or_else(|| NONE_SENTINEL.to_string()),
                        spans.next().unwrap_or_else(|| NONE_SENTINEL.to_string()),
                        spans.next().unwrap_or_else(|| NONE_SENTINEL.to_string()),
                    )
                }
                None => (
                    NONE_SENTINEL.to_string(),
                    NONE_SENTINEL.to_string(),
                    NONE_SENTINEL.to_string(),
                ),
            };

        let car_price = block
            .select(&self.price)
            .next()
            .ok_or(ScrapeError::MissingField { field: "car_price" })?
            .text()
            .collect::<String>()
            .trim()
            .to_string();

        let car_monthly_instalment = block
            .select(&self.instalment)
            .next()
            .ok_or(ScrapeError::MissingField {
                field: "car_monthly_instalment",
            })?
            .text()
            .collect::<String>()
            .trim()
            .to_string();

        let record = ListingRecord {
            car_name,
            car_mileage,
            car_transmission,
            car_location,
            car_price,
            car_monthly_instalment,
        };

        tracing::info!(?record, "Extracted listing");
        Ok(record)
    }
}

impl SiteAdapter for CarsomeAdapter {
    fn discover_max_page(&self, page: &Html) -> u32 {
        // Arrow and ellipsis buttons have non-numeric text and are skipped
        page.select(&self.pagination_button)
            .filter_map(|button| {
                let text = button.text().collect::<String>();
                let text = text.trim();
                if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
                    text.parse::<u32>().ok()
                } else {
                    None
                }
            })
            .max()
            .unwrap_or(1)
    }

    fn extract_listings(&self, page: &Html) -> Result<Vec<ListingRecord>> {
        page.select(&self.listing_block)
            .map(|block| self.extract_fields(block))
            .collect()
    }
}
