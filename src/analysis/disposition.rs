use chrono::NaiveDate;

use crate::constants::{
    CONSECUTIVE_DAYS, TEN_DAY_COUNT, TEN_DAY_WINDOW, THIRTY_DAY_COUNT, THIRTY_DAY_WINDOW,
};

/// Count flagged days in the trailing window of `size` days ending at `i`,
/// inclusive. The window start clamps to 0, so early days are evaluated
/// against the shorter window that actually exists.
fn count_in_window(flags: &[bool], i: usize, size: usize) -> usize {
    let start = i.saturating_sub(size - 1);
    flags[start..=i].iter().filter(|&&f| f).count()
}

/// Decide on which dates the stock becomes a disposition stock.
///
/// `dates` and `flags` are parallel, chronologically ordered sequences. A
/// day triggers when any of:
/// - rule A: this day and the two before it are all flagged;
/// - rule B: at least 6 flagged days within the trailing 10 days;
/// - rule C: at least 12 flagged days within the trailing 30 days.
///
/// Rules are checked in A, B, C order and a day is emitted at most once;
/// later rules are skipped after the first match. The result is a strictly
/// increasing subsequence of `dates`.
pub fn evaluate_disposition(dates: &[NaiveDate], flags: &[bool]) -> Vec<NaiveDate> {
    debug_assert_eq!(dates.len(), flags.len());

    let mut triggers = Vec::new();
    for i in 0..flags.len() {
        if i + 1 >= CONSECUTIVE_DAYS && flags[i + 1 - CONSECUTIVE_DAYS..=i].iter().all(|&f| f) {
            triggers.push(dates[i]);
            continue;
        }
        if count_in_window(flags, i, TEN_DAY_WINDOW) >= TEN_DAY_COUNT {
            triggers.push(dates[i]);
            continue;
        }
        if count_in_window(flags, i, THIRTY_DAY_WINDOW) >= THIRTY_DAY_COUNT {
            triggers.push(dates[i]);
        }
    }
    triggers
}
