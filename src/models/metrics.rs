use serde::{Deserialize, Serialize};

use super::DailyRecord;

/// Derived per-day ratios, all expressed as percentages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DayMetrics {
    /// Intraday spread: ((high - low) / low) * 100
    pub amplitude: f64,

    /// Stock amplitude minus index amplitude
    pub amplitude_diff: f64,

    /// Close-to-close change vs. the previous record: ((close - prev) / prev) * 100.
    /// Exactly 0 for the first record in a sequence.
    pub price_change: f64,

    /// Stock price change minus index price change
    pub price_diff: f64,

    /// Turnover rate: (volume / outstanding_shares) * 100
    pub turnover: f64,
}

/// A daily record together with its derived metrics.
///
/// Produced as a fresh value per day; the raw record is never enriched
/// in place, so downstream stages share nothing mutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedDay {
    pub record: DailyRecord,
    pub metrics: DayMetrics,
}
