use anyhow::Result;
use sqlx::PgPool;

use crate::storage::models::{DailyPrice, StockSummary};

/// 股票數據存取接口
///
/// 查詢處理器透過本接口讀取外部數據庫，測試時以替身實現替換。
#[async_trait::async_trait]
pub trait StockDataRepository: Send + Sync {
    /// 獲取指定股票的全部日線價格，按日期升序
    ///
    /// 未知股票代號返回空序列，不視為存取層錯誤。
    async fn fetch_price_series(&self, ticker: &str) -> Result<Vec<DailyPrice>>;

    /// 獲取指定股票的估值摘要；無匹配行時返回 None
    async fn fetch_summary(&self, ticker: &str) -> Result<Option<StockSummary>>;
}

/// PostgreSQL 股票數據存取實現
pub struct PgStockDataRepository {
    pool: PgPool,
}

impl PgStockDataRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl StockDataRepository for PgStockDataRepository {
    async fn fetch_price_series(&self, ticker: &str) -> Result<Vec<DailyPrice>> {
        let rows = sqlx::query_as::<_, DailyPrice>(
            r#"
            SELECT date, ticker, open, high, low, close, volume, created_at
            FROM daily_prices
            WHERE ticker = $1
            ORDER BY date ASC
            "#,
        )
        .bind(ticker)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn fetch_summary(&self, ticker: &str) -> Result<Option<StockSummary>> {
        let summary = sqlx::query_as::<_, StockSummary>(
            r#"
            SELECT ticker, as_of_date, latest_price, week_52_low, week_52_high,
                   price_position, avg_volume, weekly_return, monthly_return, yearly_return
            FROM stock_summaries
            WHERE ticker = $1
            "#,
        )
        .bind(ticker)
        .fetch_optional(&self.pool)
        .await?;

        Ok(summary)
    }
}
