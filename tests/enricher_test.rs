use chrono::{Duration, NaiveDate};
use rstest::rstest;
use stockboard_server::domain_types::{
    enrich_series, PriceRecord, MA_LONG_WINDOW, MA_SHORT_WINDOW, VOLUME_WINDOW,
};

// Helper function to build a daily series from closes and volumes
fn build_series(closes: &[f64], volumes: &[i64]) -> Vec<PriceRecord> {
    assert_eq!(closes.len(), volumes.len());
    let start = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();

    closes
        .iter()
        .zip(volumes)
        .enumerate()
        .map(|(i, (close, volume))| PriceRecord {
            date: start + Duration::days(i as i64),
            ticker: "AAPL".to_string(),
            open: close - 0.5,
            high: close + 1.0,
            low: close - 1.0,
            close: *close,
            volume: *volume,
        })
        .collect()
}

#[test]
fn test_rolling_fields_null_until_window_fills() {
    // 25 筆固定價量，足以填滿 20 日窗口但不足 50 日
    let closes = vec![100.0; 25];
    let volumes = vec![1_000i64; 25];
    let enriched = enrich_series(&build_series(&closes, &volumes));

    assert_eq!(enriched.len(), 25);

    for record in &enriched[..19] {
        assert_eq!(record.ma20, None);
        assert_eq!(record.ma50, None);
        assert_eq!(record.avg_volume20, None);
    }

    for record in &enriched[19..] {
        assert_eq!(record.ma20, Some(100.0));
        assert_eq!(record.avg_volume20, Some(1_000.0));
        // 25 筆不足 50 日窗口
        assert_eq!(record.ma50, None);
    }
}

#[test]
fn test_ma20_is_arithmetic_mean_of_trailing_window() {
    let closes: Vec<f64> = (1..=20).map(|i| i as f64).collect();
    let volumes = vec![500i64; 20];
    let enriched = enrich_series(&build_series(&closes, &volumes));

    // (1 + 2 + ... + 20) / 20 = 10.5
    assert_eq!(enriched[19].ma20, Some(10.5));
    assert_eq!(enriched[18].ma20, None);
}

#[test]
fn test_ma50_fills_at_fiftieth_record() {
    let closes = vec![10.0; 55];
    let volumes = vec![100i64; 55];
    let enriched = enrich_series(&build_series(&closes, &volumes));

    assert_eq!(enriched[48].ma50, None);
    assert_eq!(enriched[49].ma50, Some(10.0));
    assert_eq!(enriched[54].ma50, Some(10.0));
}

#[test]
fn test_enrichment_preserves_length_order_and_fields() {
    let closes: Vec<f64> = (0..30).map(|i| 150.0 + i as f64).collect();
    let volumes: Vec<i64> = (0..30).map(|i| 2_000_000 + i as i64 * 10_000).collect();
    let series = build_series(&closes, &volumes);
    let enriched = enrich_series(&series);

    assert_eq!(enriched.len(), series.len());
    for (original, enriched) in series.iter().zip(&enriched) {
        assert_eq!(enriched.date, original.date);
        assert_eq!(enriched.ticker, original.ticker);
        assert_eq!(enriched.open, original.open);
        assert_eq!(enriched.high, original.high);
        assert_eq!(enriched.low, original.low);
        assert_eq!(enriched.close, original.close);
        assert_eq!(enriched.volume, original.volume);
    }
}

#[test]
fn test_empty_series_enriches_to_empty() {
    let enriched = enrich_series(&[]);
    assert!(enriched.is_empty());
}

#[rstest]
#[case(1)]
#[case(19)]
#[case(20)]
#[case(21)]
#[case(49)]
#[case(50)]
fn test_window_boundaries(#[case] len: usize) {
    let closes: Vec<f64> = (0..len).map(|i| 100.0 + i as f64).collect();
    let volumes = vec![1_000i64; len];
    let enriched = enrich_series(&build_series(&closes, &volumes));

    let last = enriched.last().unwrap();
    assert_eq!(last.ma20.is_some(), len >= MA_SHORT_WINDOW);
    assert_eq!(last.ma50.is_some(), len >= MA_LONG_WINDOW);
    assert_eq!(last.avg_volume20.is_some(), len >= VOLUME_WINDOW);
}
