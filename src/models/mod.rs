mod daily_record;
mod limit_up;
mod metrics;

pub use daily_record::DailyRecord;
pub use limit_up::LimitUpStock;
pub use metrics::{DayMetrics, EnrichedDay};
