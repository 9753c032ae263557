use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day for one stock, paired with the reference index.
///
/// Decoded straight from the 11-column daily CSV. Dates must be unique
/// within a sequence; the pipeline processes records in ascending date
/// order regardless of file order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Trading date (YYYY-MM-DD in the CSV)
    pub date: NaiveDate,

    /// Opening price
    pub open: f64,

    /// Highest price
    pub high: f64,

    /// Lowest price
    pub low: f64,

    /// Closing price
    pub close: f64,

    /// Trading volume in trading units (1000-share lots)
    pub volume: f64,

    /// Reference index opening value on the same date
    #[serde(rename = "index_open")]
    pub idx_open: f64,

    /// Reference index high
    #[serde(rename = "index_high")]
    pub idx_high: f64,

    /// Reference index low
    #[serde(rename = "index_low")]
    pub idx_low: f64,

    /// Reference index close
    #[serde(rename = "index_close")]
    pub idx_close: f64,

    /// Shares outstanding as of that date
    pub outstanding_shares: f64,
}
