//! 滾動統計計算
//!
//! 針對日線序列計算趨勢指標：收盤價的 20 日與 50 日簡單移動平均，
//! 以及成交量的 20 日平均。純計算，無 I/O、無狀態。

use crate::domain_types::price::{EnrichedPriceRecord, PriceRecord};

/// 收盤價短期移動平均窗口
pub const MA_SHORT_WINDOW: usize = 20;
/// 收盤價長期移動平均窗口
pub const MA_LONG_WINDOW: usize = 50;
/// 成交量平均窗口
pub const VOLUME_WINDOW: usize = 20;

/// 計算整列數值的後向簡單移動平均
///
/// 位置 `i` 的結果取 `[i - window + 1, i]` 共 `window` 筆樣本的算術平均；
/// 歷史不足一個完整窗口時為 `None`，不退化為較短窗口的近似值。
/// 以滑動窗口維護累計和，單次遍歷完成。
pub fn sma_column(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut averages = vec![None; values.len()];

    if window == 0 || values.len() < window {
        return averages;
    }

    let mut running_sum: f64 = values[..window].iter().sum();
    averages[window - 1] = Some(running_sum / window as f64);

    for i in window..values.len() {
        running_sum += values[i] - values[i - window];
        averages[i] = Some(running_sum / window as f64);
    }

    averages
}

/// 為整段價格序列附加滾動統計
///
/// 輸出與輸入等長、同序、逐筆對應；原始欄位原樣保留。
/// 空序列返回空結果。調用方須保證序列按日期嚴格遞增且無重複
/// （見 [`crate::domain_types::series::check_series_integrity`]）。
pub fn enrich_series(series: &[PriceRecord]) -> Vec<EnrichedPriceRecord> {
    let closes: Vec<f64> = series.iter().map(|record| record.close).collect();
    let volumes: Vec<f64> = series.iter().map(|record| record.volume as f64).collect();

    let ma20 = sma_column(&closes, MA_SHORT_WINDOW);
    let ma50 = sma_column(&closes, MA_LONG_WINDOW);
    let avg_volume20 = sma_column(&volumes, VOLUME_WINDOW);

    series
        .iter()
        .enumerate()
        .map(|(i, record)| {
            EnrichedPriceRecord::from_record(record, ma20[i], ma50[i], avg_volume20[i])
        })
        .collect()
}
