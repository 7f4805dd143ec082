// 模組定義
pub mod api;
pub mod config;
pub mod domain_types;
pub mod storage;
