use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 股票估值摘要行
///
/// 對應 stock_summaries 表，每個股票代號一行，由上游批次任務
/// 預先計算；本服務原樣轉發給儀表板，不做二次計算。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct StockSummary {
    pub ticker: String,
    /// 摘要的計算基準日
    pub as_of_date: NaiveDate,
    pub latest_price: f64,
    pub week_52_low: f64,
    pub week_52_high: f64,
    /// 最新價在 52 週區間內的相對位置（0 為最低點，1 為最高點）
    pub price_position: f64,
    pub avg_volume: f64,
    pub weekly_return: f64,
    pub monthly_return: f64,
    pub yearly_return: f64,
}
