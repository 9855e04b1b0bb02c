use crate::record::ListingRecord;
use crate::{Result, ScrapeError};
use std::path::Path;

/// Writes the collected records to a CSV file
///
/// One header row (column names in record field order) followed by one row
/// per record, in run order. The header comes from the first record's schema
/// via serde, so every row shares the same six columns by construction.
///
/// # Arguments
///
/// * `records` - The run's accumulated records; must be non-empty (the
///   orchestrator guards the empty case and never calls this)
/// * `path` - Destination file, created or truncated
///
/// # Returns
///
/// * `Ok(())` - File written and flushed
/// * `Err(ScrapeError::NoRecords)` - Called with an empty record set
/// * `Err(ScrapeError)` - CSV or IO failure
pub fn write_records(records: &[ListingRecord], path: &Path) -> Result<()> {
    if records.is_empty() {
        return Err(ScrapeError::NoRecords);
    }

    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(name: &str) -> ListingRecord {
        ListingRecord {
            car_name: name.to_string(),
            car_mileage: "45,000 km".to_string(),
            car_transmission: "Automatic".to_string(),
            car_location: "Selangor".to_string(),
            car_price: "RM 45,800".to_string(),
            car_monthly_instalment: "RM 512/month".to_string(),
        }
    }

    #[test]
    fn test_write_records_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cars.csv");

        let records = vec![sample_record("Myvi 1.5 AV"), sample_record("Myvi 1.3 G")];
        write_records(&records, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], ListingRecord::FIELDS.join(","));
        assert!(lines[1].starts_with("Myvi 1.5 AV,"));
        assert!(lines[2].starts_with("Myvi 1.3 G,"));
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cars.csv");

        write_records(&[sample_record("Myvi")], &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let row: ListingRecord = reader.deserialize().next().unwrap().unwrap();
        assert_eq!(row.car_mileage, "45,000 km");
    }

    #[test]
    fn test_empty_record_set_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cars.csv");

        let result = write_records(&[], &path);
        assert!(matches!(result, Err(ScrapeError::NoRecords)));
        assert!(!path.exists());
    }
}
