use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::DailyRecord;

/// Load daily records from a CSV file, sorted ascending by date.
///
/// Expected columns: date, open, high, low, close, volume, index_open,
/// index_high, index_low, index_close, outstanding_shares.
pub fn load_records(path: &Path) -> Result<Vec<DailyRecord>> {
    let reader = csv::Reader::from_path(path)?;
    let records = decode_records(reader)?;

    debug!(
        "Loaded {} daily records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

/// Rows may appear in any order in the source; the result is always
/// date-sorted. Duplicate dates are a data error, not a tie to break:
/// the metrics stage relies on one record per trading day.
fn decode_records<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<DailyRecord>> {
    let mut records = reader
        .deserialize()
        .collect::<std::result::Result<Vec<DailyRecord>, _>>()?;

    records.sort_by_key(|r| r.date);

    for pair in records.windows(2) {
        if pair[0].date == pair[1].date {
            return Err(Error::Data(format!("duplicate date {}", pair[0].date)));
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn parse(csv_text: &str) -> Result<Vec<DailyRecord>> {
        decode_records(csv::Reader::from_reader(csv_text.as_bytes()))
    }

    const HEADER: &str = "date,open,high,low,close,volume,index_open,index_high,index_low,index_close,outstanding_shares\n";

    #[test]
    fn test_decode_row() {
        let text =
            format!("{HEADER}2024-01-02,100,105,98,104,3500,10000,10100,9950,10050,40000\n");
        let records = parse(&text).unwrap();

        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(r.high, 105.0);
        assert_eq!(r.volume, 3500.0);
        assert_eq!(r.idx_close, 10050.0);
        assert_eq!(r.outstanding_shares, 40000.0);
    }

    #[test]
    fn test_rows_are_sorted_by_date() {
        let text = format!(
            "{HEADER}2024-01-03,100,105,98,104,3500,10000,10100,9950,10050,40000\n\
             2024-01-02,100,105,98,104,3500,10000,10100,9950,10050,40000\n"
        );
        let records = parse(&text).unwrap();

        assert!(records[0].date < records[1].date);
    }

    #[test]
    fn test_duplicate_date_is_rejected() {
        let text = format!(
            "{HEADER}2024-01-02,100,105,98,104,3500,10000,10100,9950,10050,40000\n\
             2024-01-02,101,106,99,105,3600,10000,10100,9950,10050,40000\n"
        );

        assert!(matches!(parse(&text).unwrap_err(), Error::Data(_)));
    }

    #[test]
    fn test_malformed_field_is_rejected() {
        let text =
            format!("{HEADER}2024-01-02,abc,105,98,104,3500,10000,10100,9950,10050,40000\n");

        assert!(matches!(parse(&text).unwrap_err(), Error::Csv(_)));
    }
}
