pub mod price;
pub mod summary;

// 重新匯出常用模型類型
pub use price::*;
pub use summary::*;
