//! Rule thresholds and window sizes
//!
//! Simplified from the TWSE "公告或通知注意交易資訊暨處置作業要點"
//! (Articles 2 and 6). The thresholds are reproduced as given by that
//! simplification and must not be "corrected" against the full regulation.

/// Intraday amplitude threshold in percent (rule 1, strict `>`)
pub const AMPLITUDE_THRESHOLD: f64 = 9.0;

/// Amplitude difference vs. the index in percent (rule 1, strict `>`)
pub const AMPLITUDE_DIFF_THRESHOLD: f64 = 5.0;

/// Daily price change threshold in percent (rule 2, strict `>`)
pub const PRICE_CHANGE_THRESHOLD: f64 = 6.0;

/// Price change difference vs. the index in percent (rule 2, strict `>`)
pub const PRICE_DIFF_THRESHOLD: f64 = 4.0;

/// Turnover rate threshold in percent (rule 3, strict `>`)
pub const TURNOVER_THRESHOLD: f64 = 10.0;

/// Volume floor in trading units, shared by all three rules.
/// Inclusive (`>=`), unlike the ratio thresholds above.
pub const VOLUME_FLOOR: f64 = 3000.0;

/// Consecutive flagged days required by disposition rule A
pub const CONSECUTIVE_DAYS: usize = 3;

/// Trailing window size for disposition rule B
pub const TEN_DAY_WINDOW: usize = 10;

/// Flagged days required inside the 10-day window (rule B)
pub const TEN_DAY_COUNT: usize = 6;

/// Trailing window size for disposition rule C
pub const THIRTY_DAY_WINDOW: usize = 30;

/// Flagged days required inside the 30-day window (rule C)
pub const THIRTY_DAY_COUNT: usize = 12;

/// TWSE daily limit-up report (TWT43U), JSON response
pub const TWSE_LIMIT_UP_URL: &str = "https://www.twse.com.tw/exchangeReport/TWT43U";
