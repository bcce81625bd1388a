//! 导出模块
//!
//! 除了 `.out` 文本输出之外的附加报告格式

#[cfg(feature = "exporter-json")]
pub mod json;
