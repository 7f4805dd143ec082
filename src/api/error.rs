use crate::domain_types::SeriesError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

/// 股票數據請求週期的錯誤類型
///
/// 三類失敗（存取層錯誤、數據缺失、序列損壞）對客戶端一律收斂為
/// 同一個 500 回應；內部原因只寫入日誌，不洩漏給瀏覽器端。
#[derive(Error, Debug)]
pub enum ApiError {
    /// 數據庫查詢失敗（連線、超時、查詢錯誤）
    #[error("數據庫查詢失敗: {0}")]
    Store(#[from] anyhow::Error),

    /// 查無任何價格行
    #[error("股票 {0} 沒有任何價格數據")]
    EmptyPriceSeries(String),

    /// 查無估值摘要行
    #[error("股票 {0} 沒有估值摘要")]
    MissingSummary(String),

    /// 價格序列違反排序或唯一性前置條件
    #[error("股票 {ticker} 的價格序列損壞: {source}")]
    CorruptSeries {
        ticker: String,
        #[source]
        source: SeriesError,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // 內部原因只記錄，回應體統一
        error!("股票數據請求失敗: {}", self);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": "Failed to fetch stock data" })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    async fn response_parts(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_every_variant_maps_to_opaque_500() {
        tokio_test::block_on(async {
            let variants = vec![
                ApiError::Store(anyhow::anyhow!("connection refused")),
                ApiError::EmptyPriceSeries("AAPL".to_string()),
                ApiError::MissingSummary("AAPL".to_string()),
                ApiError::CorruptSeries {
                    ticker: "AAPL".to_string(),
                    source: SeriesError::DuplicateDate(
                        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                    ),
                },
            ];

            for err in variants {
                let (status, body) = response_parts(err).await;
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(
                    body,
                    serde_json::json!({ "error": "Failed to fetch stock data" })
                );
            }
        });
    }
}
