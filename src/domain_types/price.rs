use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 單一交易日的原始價格記錄
///
/// 由外部數據庫提供，本服務視為唯讀輸入；同一股票代號內日期唯一。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub date: NaiveDate,
    pub ticker: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
}

/// 附加滾動統計的價格記錄
///
/// 衍生欄位在每次請求時重新計算，不落地保存。窗口未滿前
/// 衍生值為 None，序列化為 JSON null。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedPriceRecord {
    pub date: NaiveDate,
    pub ticker: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
    pub ma20: Option<f64>,
    pub ma50: Option<f64>,
    #[serde(rename = "avg_20day_volume")]
    pub avg_volume20: Option<f64>,
}

impl EnrichedPriceRecord {
    /// 由原始記錄加上三個衍生值組裝
    pub fn from_record(
        record: &PriceRecord,
        ma20: Option<f64>,
        ma50: Option<f64>,
        avg_volume20: Option<f64>,
    ) -> Self {
        Self {
            date: record.date,
            ticker: record.ticker.clone(),
            open: record.open,
            high: record.high,
            low: record.low,
            close: record.close,
            volume: record.volume,
            ma20,
            ma50,
            avg_volume20,
        }
    }
}
