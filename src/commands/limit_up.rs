use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::models::LimitUpStock;
use crate::services::TwseClient;

pub fn run(date: Option<String>) {
    match fetch(date) {
        Ok(stocks) => {
            if stocks.is_empty() {
                println!("No limit-up stocks reported");
                return;
            }
            for stock in stocks {
                println!("{} {}", stock.stock_no, stock.stock_name);
            }
        }
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn fetch(date: Option<String>) -> Result<Vec<LimitUpStock>> {
    let date = date
        .map(|d| {
            NaiveDate::parse_from_str(&d, "%Y%m%d")
                .map_err(|e| Error::Parse(format!("invalid date {:?}: {}", d, e)))
        })
        .transpose()?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let client = TwseClient::new()?;
        client.fetch_limit_up(date).await
    })
}
