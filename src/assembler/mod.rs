//! SQL 语句还原模块
//!
//! 提供日志行分类、语句拼接、参数提取与占位符替换

pub mod cursor;
pub mod io;
pub mod parser;
pub mod patterns;
pub mod types;

// 重新导出核心类型和函数
pub use cursor::{Cursor, EndOfInput, LineSequence, ScanResult};
pub use parser::{LogAssembler, resolve_placeholders};
pub use patterns::LinePatterns;
pub use types::{LineSpan, ParameterBinding, ParsedStatement, ResolvedStatement};
