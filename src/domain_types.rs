pub mod indicators;
pub mod price;
pub mod series;

pub use indicators::{enrich_series, sma_column, MA_LONG_WINDOW, MA_SHORT_WINDOW, VOLUME_WINDOW};
pub use price::{EnrichedPriceRecord, PriceRecord};
pub use series::{check_series_integrity, SeriesError};
