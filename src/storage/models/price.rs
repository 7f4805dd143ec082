use crate::domain_types::PriceRecord;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// 日線價格數據行
///
/// 對應 daily_prices 表：價格欄位為 DOUBLE PRECISION，成交量為
/// BIGINT，(ticker, date) 唯一。由上游數據管線寫入，本服務唯讀。
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DailyPrice {
    pub date: NaiveDate,
    pub ticker: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
    pub created_at: DateTime<Utc>,
}

impl From<DailyPrice> for PriceRecord {
    fn from(row: DailyPrice) -> Self {
        PriceRecord {
            date: row.date,
            ticker: row.ticker,
            open: row.open,
            high: row.high,
            low: row.low,
            close: row.close,
            volume: row.volume,
        }
    }
}
