use crate::constants::{
    AMPLITUDE_DIFF_THRESHOLD, AMPLITUDE_THRESHOLD, PRICE_CHANGE_THRESHOLD, PRICE_DIFF_THRESHOLD,
    TURNOVER_THRESHOLD, VOLUME_FLOOR,
};
use crate::models::EnrichedDay;

/// Flag days with unusual trading activity.
///
/// A day is flagged when any one of the three conditions holds:
/// 1. amplitude > 9% and amplitude_diff > 5% and volume >= 3000
/// 2. price_change > 6% and price_diff > 4% and volume >= 3000
/// 3. turnover > 10% and volume >= 3000
///
/// Ratio thresholds are strict `>`, the volume floor is `>=`. That
/// asymmetry comes from the regulatory text and is preserved exactly.
/// Pure per-day evaluation; output length equals input length.
pub fn flag_unusual(days: &[EnrichedDay]) -> Vec<bool> {
    days.iter()
        .map(|day| {
            let m = &day.metrics;
            let volume_ok = day.record.volume >= VOLUME_FLOOR;

            let cond1 = m.amplitude > AMPLITUDE_THRESHOLD
                && m.amplitude_diff > AMPLITUDE_DIFF_THRESHOLD
                && volume_ok;
            let cond2 = m.price_change > PRICE_CHANGE_THRESHOLD
                && m.price_diff > PRICE_DIFF_THRESHOLD
                && volume_ok;
            let cond3 = m.turnover > TURNOVER_THRESHOLD && volume_ok;

            cond1 || cond2 || cond3
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DailyRecord, DayMetrics};
    use chrono::NaiveDate;

    fn day(metrics: DayMetrics, volume: f64) -> EnrichedDay {
        EnrichedDay {
            record: DailyRecord {
                date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                open: 100.0,
                high: 101.0,
                low: 99.0,
                close: 100.0,
                volume,
                idx_open: 10000.0,
                idx_high: 10050.0,
                idx_low: 9950.0,
                idx_close: 10000.0,
                outstanding_shares: 100000.0,
            },
            metrics,
        }
    }

    fn quiet() -> DayMetrics {
        DayMetrics {
            amplitude: 2.0,
            amplitude_diff: 1.0,
            price_change: 1.0,
            price_diff: 0.5,
            turnover: 1.0,
        }
    }

    #[test]
    fn test_amplitude_rule() {
        let m = DayMetrics {
            amplitude: 9.5,
            amplitude_diff: 5.5,
            ..quiet()
        };
        assert_eq!(flag_unusual(&[day(m, 3000.0)]), vec![true]);
    }

    #[test]
    fn test_price_change_rule() {
        let m = DayMetrics {
            price_change: 6.5,
            price_diff: 4.5,
            ..quiet()
        };
        assert_eq!(flag_unusual(&[day(m, 5000.0)]), vec![true]);
    }

    #[test]
    fn test_turnover_rule() {
        let m = DayMetrics {
            turnover: 10.5,
            ..quiet()
        };
        assert_eq!(flag_unusual(&[day(m, 3000.0)]), vec![true]);
    }

    #[test]
    fn test_ratio_thresholds_are_strict() {
        // Exactly at the threshold does not flag.
        let m = DayMetrics {
            amplitude: 9.0,
            amplitude_diff: 5.0,
            price_change: 6.0,
            price_diff: 4.0,
            turnover: 10.0,
        };
        assert_eq!(flag_unusual(&[day(m, 5000.0)]), vec![false]);
    }

    #[test]
    fn test_volume_floor_is_inclusive() {
        let m = DayMetrics {
            turnover: 10.5,
            ..quiet()
        };
        assert_eq!(flag_unusual(&[day(m, 3000.0)]), vec![true]);
        assert_eq!(flag_unusual(&[day(m, 2999.0)]), vec![false]);
    }

    #[test]
    fn test_one_flag_per_day() {
        let days = vec![
            day(quiet(), 5000.0),
            day(
                DayMetrics {
                    turnover: 12.0,
                    ..quiet()
                },
                5000.0,
            ),
            day(quiet(), 5000.0),
        ];
        assert_eq!(flag_unusual(&days), vec![false, true, false]);
    }
}
