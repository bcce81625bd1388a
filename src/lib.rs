//! # SQL Log Assembler
//!
//! 从 ORM（默认 Hibernate）调试日志中还原带实际参数值的 SQL 语句。
//!
//! 日志中 SQL 语句文本使用 `?` 占位符，绑定的参数值随后由参数绑定器逐行输出：
//!
//! ```text
//!     select
//!         u.name from users u where u.id=? and u.status=?
//! 2024-01-01 10:00:00,001 TRACE [org.hibernate.type.descriptor.sql.BasicBinder] binding parameter [1] as [BIGINT] - [7]
//! 2024-01-01 10:00:00,001 TRACE [org.hibernate.type.descriptor.sql.BasicBinder] binding parameter [2] as [VARCHAR] - [ACTIVE]
//! ```
//!
//! 还原结果：
//!
//! ```text
//!     select
//!         u.name from users u where u.id=7 and u.status='ACTIVE'
//! ```
//!
//! ## 模块
//!
//! - [`assembler`]：行分类、语句拼接、参数提取与占位符替换
//! - [`config`]：TOML 配置
//! - [`app`]：命令行工作流程
//! - [`logging`]：tracing 日志初始化（`logging` feature）
//! - [`export`]：附加报告（`exporter-json` feature）

pub mod app;
pub mod assembler;
pub mod config;
pub mod error;
pub mod export;

#[cfg(feature = "logging")]
pub mod logging;

pub use assembler::{
    LineSequence, LogAssembler, ParameterBinding, ResolvedStatement,
    resolve_placeholders,
};
pub use config::Config;
pub use error::{AssemblerError, Result};
