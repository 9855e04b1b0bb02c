//! Output module: CSV persistence and output file naming

mod csv_sink;

pub use csv_sink::write_records;

use crate::config::OutputConfig;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// Computes the output path for a run started at `now`
///
/// The filename is `<prefix><YYYYMMDDHHMMSS>.csv` inside the configured
/// output directory, e.g. `car_20240315091230.csv`.
pub fn output_filename(config: &OutputConfig, now: DateTime<Local>) -> PathBuf {
    let stamp = now.format("%Y%m%d%H%M%S");
    Path::new(&config.directory).join(format!("{}{}.csv", config.file_prefix, stamp))
}
