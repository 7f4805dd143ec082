//! 價格序列前置條件檢查
//!
//! 移動平均假設輸入序列按日期嚴格遞增且無重複；不滿足時平均值
//! 會被悄悄污染，因此在計算前整段掃描並拒絕違規序列。

use crate::domain_types::price::PriceRecord;
use chrono::NaiveDate;
use thiserror::Error;

/// 序列完整性錯誤
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeriesError {
    #[error("序列日期順序錯誤: {previous} 之後出現 {current}")]
    OutOfOrder {
        previous: NaiveDate,
        current: NaiveDate,
    },

    #[error("序列日期重複: {0}")]
    DuplicateDate(NaiveDate),
}

/// 檢查序列是否按日期嚴格遞增且無重複
///
/// 日曆缺口（非交易日）不視為錯誤，平均以位置而非日曆計算。
/// 返回第一個違規處的錯誤；空序列與單筆序列視為有效。
pub fn check_series_integrity(series: &[PriceRecord]) -> Result<(), SeriesError> {
    for pair in series.windows(2) {
        let previous = pair[0].date;
        let current = pair[1].date;

        if current == previous {
            return Err(SeriesError::DuplicateDate(current));
        }
        if current < previous {
            return Err(SeriesError::OutOfOrder { previous, current });
        }
    }

    Ok(())
}
