// 重新導出子模塊
pub mod stock_data;

// 重新導出常用類型
pub use stock_data::StockDataRepository;

// 重新導出具體實現
pub use stock_data::PgStockDataRepository;
