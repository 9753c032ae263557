use crate::error::{Error, Result};
use crate::models::{DailyRecord, DayMetrics, EnrichedDay};

/// Compute derived metrics for a date-sorted sequence of daily records.
///
/// The input must already be sorted ascending by date (the CSV loader
/// guarantees this); the output has the same length and order.
///
/// `price_change` compares against the immediately preceding record in the
/// sequence, not a calendar-day lookback, so non-trading days are skipped
/// implicitly. The first record has no predecessor and gets a price change
/// of exactly 0.
///
/// # Errors
/// Returns [`Error::Data`] when a divisor is invalid: `low <= 0`,
/// `index_low <= 0`, `outstanding_shares <= 0`, or a previous close of 0.
/// A bad record fails the whole batch; skipping it would break the
/// sequence-adjacency assumption above.
pub fn compute_metrics(records: &[DailyRecord]) -> Result<Vec<EnrichedDay>> {
    let mut enriched = Vec::with_capacity(records.len());
    let mut prev_close: Option<f64> = None;
    let mut prev_idx_close: Option<f64> = None;

    for record in records {
        if record.low <= 0.0 {
            return Err(Error::Data(format!(
                "non-positive low {} on {}",
                record.low, record.date
            )));
        }
        if record.idx_low <= 0.0 {
            return Err(Error::Data(format!(
                "non-positive index low {} on {}",
                record.idx_low, record.date
            )));
        }
        if record.outstanding_shares <= 0.0 {
            return Err(Error::Data(format!(
                "non-positive outstanding shares {} on {}",
                record.outstanding_shares, record.date
            )));
        }

        let amplitude = (record.high - record.low) / record.low * 100.0;
        let idx_amplitude = (record.idx_high - record.idx_low) / record.idx_low * 100.0;
        let amplitude_diff = amplitude - idx_amplitude;

        let (price_change, idx_price_change) = match (prev_close, prev_idx_close) {
            (Some(prev), Some(idx_prev)) => {
                if prev == 0.0 {
                    return Err(Error::Data(format!(
                        "zero previous close before {}",
                        record.date
                    )));
                }
                if idx_prev == 0.0 {
                    return Err(Error::Data(format!(
                        "zero previous index close before {}",
                        record.date
                    )));
                }
                (
                    (record.close - prev) / prev * 100.0,
                    (record.idx_close - idx_prev) / idx_prev * 100.0,
                )
            }
            // First record in the sequence: defined as 0, not approximated.
            _ => (0.0, 0.0),
        };
        let price_diff = price_change - idx_price_change;

        let turnover = record.volume / record.outstanding_shares * 100.0;

        enriched.push(EnrichedDay {
            record: record.clone(),
            metrics: DayMetrics {
                amplitude,
                amplitude_diff,
                price_change,
                price_diff,
                turnover,
            },
        });

        prev_close = Some(record.close);
        prev_idx_close = Some(record.idx_close);
    }

    Ok(enriched)
}
