use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use tracing::debug;

use crate::api::error::ApiError;
use crate::api::rest::AppState;
use crate::domain_types::{check_series_integrity, enrich_series, EnrichedPriceRecord, PriceRecord};
use crate::storage::models::StockSummary;

/// 圖表數據區塊
///
/// 價格圖與成交量圖讀同一份附加記錄的不同欄位，兩個陣列內容一致。
#[derive(Debug, Serialize)]
pub struct StockChartData {
    pub price_data: Vec<EnrichedPriceRecord>,
    pub volume_data: Vec<EnrichedPriceRecord>,
}

/// 股票數據回應
#[derive(Debug, Serialize)]
pub struct StockDataResponse {
    pub data: StockChartData,
    pub summary: StockSummary,
}

/// 獲取指定股票的完整歷史數據與估值摘要
///
/// 流程：股票代號正規化為大寫後，並發讀取價格序列與估值摘要；
/// 任一查詢失敗、序列為空或摘要缺失都整體失敗，不返回部分結果。
/// 序列通過完整性檢查後計算滾動統計並組裝回應。
pub async fn get_stock_data(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
) -> Result<Json<StockDataResponse>, ApiError> {
    // 查詢以大寫為準，調用方大小寫不敏感
    let ticker = ticker.to_uppercase();

    // 兩個查詢互不依賴，並發執行
    let (price_rows, summary) = tokio::try_join!(
        state.repository.fetch_price_series(&ticker),
        state.repository.fetch_summary(&ticker),
    )?;

    // 摘要缺失或序列為空時儀表板無法渲染，視為整體失敗
    let summary = summary.ok_or_else(|| ApiError::MissingSummary(ticker.clone()))?;
    if price_rows.is_empty() {
        return Err(ApiError::EmptyPriceSeries(ticker));
    }

    let series: Vec<PriceRecord> = price_rows.into_iter().map(PriceRecord::from).collect();

    // 排序或唯一性被破壞的序列會污染平均值，先拒絕
    check_series_integrity(&series).map_err(|source| ApiError::CorruptSeries {
        ticker: ticker.clone(),
        source,
    })?;

    let enriched = enrich_series(&series);
    debug!("股票 {} 共 {} 筆日線數據完成滾動統計", ticker, enriched.len());

    Ok(Json(StockDataResponse {
        data: StockChartData {
            price_data: enriched.clone(),
            volume_data: enriched,
        },
        summary,
    }))
}
