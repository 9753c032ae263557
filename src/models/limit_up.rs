use serde::{Deserialize, Serialize};

/// One entry from the TWSE daily limit-up report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitUpStock {
    pub stock_no: String,
    pub stock_name: String,
}
