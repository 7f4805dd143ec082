// api.rs - API服務模組，宣告子模組
//
// API服務模組提供對外接口，讓儀表板前端取得股票數據，實現：
// - RESTful API接口
// - 請求週期錯誤映射
// - API路由和處理器

/// REST API實現
pub mod rest;
/// 請求週期錯誤類型
pub mod error;
/// API路由定義
pub mod routes;
/// API處理器模組
pub mod handlers;

pub use error::ApiError;
pub use rest::{AppState, RestApi};
