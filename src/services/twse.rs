use chrono::{NaiveDate, Utc};
use serde_json::Value;
use tracing::{debug, info};

use crate::constants::TWSE_LIMIT_UP_URL;
use crate::error::{Error, Result};
use crate::models::LimitUpStock;

/// Client for the TWSE exchange report endpoints.
///
/// Independent of the disposition pipeline; it only retrieves the daily
/// limit-up stock list (report TWT43U).
pub struct TwseClient {
    base_url: String,
    client: reqwest::Client,
}

impl TwseClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(TWSE_LIMIT_UP_URL.to_string())
    }

    /// Create a client against a non-default endpoint (used by tests).
    pub fn with_base_url(base_url: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self { base_url, client })
    }

    /// Fetch the limit-up stock list for `date` (defaults to today).
    ///
    /// # Errors
    /// [`Error::Fetch`] on transport failure, [`Error::Api`] when the
    /// payload's `stat` field is not `"OK"`.
    pub async fn fetch_limit_up(&self, date: Option<NaiveDate>) -> Result<Vec<LimitUpStock>> {
        let date = date.unwrap_or_else(|| Utc::now().date_naive());
        let url = format!(
            "{}?response=json&date={}",
            self.base_url,
            date.format("%Y%m%d")
        );

        debug!("Fetching limit-up list: url={}", url);
        let payload: Value = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let stocks = extract_limit_up(&payload)?;
        info!("Fetched {} limit-up stocks for {}", stocks.len(), date);
        Ok(stocks)
    }
}

/// Pull stock number/name pairs out of a TWT43U payload.
///
/// The report returns rows as string arrays; the first two cells are the
/// stock number and name. Rows with fewer than two cells are skipped, as
/// the reference consumer does.
fn extract_limit_up(payload: &Value) -> Result<Vec<LimitUpStock>> {
    let stat = payload.get("stat").and_then(Value::as_str);
    if stat != Some("OK") {
        return Err(Error::Api(stat.map(str::to_string)));
    }

    let rows = payload
        .get("data")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let mut stocks = Vec::new();
    for row in rows {
        let cells = row.as_array().map(Vec::as_slice).unwrap_or_default();
        if let [no, name, ..] = cells {
            stocks.push(LimitUpStock {
                stock_no: no.as_str().unwrap_or_default().to_string(),
                stock_name: name.as_str().unwrap_or_default().to_string(),
            });
        }
    }
    Ok(stocks)
}
