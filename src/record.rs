//! The flat record extracted from one car advertisement

use serde::{Deserialize, Serialize};

/// Placeholder written when an optional listing field is absent, so every
/// record carries all six columns.
pub const NONE_SENTINEL: &str = "None";

/// One car advertisement, flattened for CSV output
///
/// Field declaration order is the output column order: the CSV header row is
/// derived from it via serde, so reordering fields changes the file format.
/// `car_name`, `car_price` and `car_monthly_instalment` are always genuine
/// values (extraction fails if the source element is missing); the other three
/// degrade to [`NONE_SENTINEL`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub car_name: String,
    pub car_mileage: String,
    pub car_transmission: String,
    pub car_location: String,
    pub car_price: String,
    pub car_monthly_instalment: String,
}

impl ListingRecord {
    /// The canonical column names, in output order
    pub const FIELDS: [&'static str; 6] = [
        "car_name",
        "car_mileage",
        "car_transmission",
        "car_location",
        "car_price",
        "car_monthly_instalment",
    ];
}
