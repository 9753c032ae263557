use std::path::Path;

use chrono::NaiveDate;

use crate::analysis::{compute_metrics, evaluate_disposition, flag_unusual};
use crate::error::Result;
use crate::models::DailyRecord;
use crate::services;

pub fn run(csv: &Path) {
    match check(csv) {
        Ok(days) => {
            if days.is_empty() {
                println!("✅ No disposition days found");
                return;
            }
            for day in days {
                println!("{} becomes a disposition stock", day.format("%Y-%m-%d"));
            }
        }
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn check(csv: &Path) -> Result<Vec<NaiveDate>> {
    let records = services::load_records(csv)?;
    run_pipeline(&records)
}

/// Full disposition pipeline over date-sorted records: derive metrics,
/// flag unusual days, evaluate the windowed disposition rules.
pub fn run_pipeline(records: &[DailyRecord]) -> Result<Vec<NaiveDate>> {
    let enriched = compute_metrics(records)?;
    let flags = flag_unusual(&enriched);
    let dates: Vec<NaiveDate> = enriched.iter().map(|day| day.record.date).collect();

    Ok(evaluate_disposition(&dates, &flags))
}
