//! Site adapter abstraction
//!
//! All coupling to a site's markup (class names, element positions) lives
//! behind the [`SiteAdapter`] trait, so supporting a restyled or additional
//! site means writing a new adapter, not touching the run loop.

mod carsome;

pub use carsome::CarsomeAdapter;

use crate::record::ListingRecord;
use crate::Result;
use scraper::Html;

/// Turns a raw parsed page into pagination and listing data
pub trait SiteAdapter {
    /// Returns the highest page index advertised by the page's pagination
    /// control, or 1 when no numeric controls are present (single-page
    /// result set).
    fn discover_max_page(&self, page: &Html) -> u32;

    /// Extracts every listing block on the page into flat records, in
    /// document order.
    ///
    /// A listing missing one of its required fields is an error; optional
    /// fields degrade to the `"None"` sentinel instead.
    fn extract_listings(&self, page: &Html) -> Result<Vec<ListingRecord>>;
}
