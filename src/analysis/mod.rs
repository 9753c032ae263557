//! Disposition-stock computation core
//!
//! Three pure stages in dependency order: derive per-day metrics from raw
//! records, flag days with unusual trading activity, then apply the
//! windowed disposition rules to the flag sequence. Each stage produces a
//! fresh sequence; none of them does I/O.

mod disposition;
mod flags;
mod metrics;

pub use disposition::evaluate_disposition;
pub use flags::flag_unusual;
pub use metrics::compute_metrics;
