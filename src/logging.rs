//! 日志初始化和配置模块
//!
//! 这个模块提供了统一的日志初始化功能，使用 tracing 库。
//! 控制台输出写到 stderr，避免和命令行的正常输出混在一起；
//! 配置了日志目录时，同时按天滚动写入日志文件。

use crate::config::LogConfig;
use std::io;
use std::str::FromStr;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Registry,
    fmt::{self, time::SystemTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// 日志文件名前缀
const LOG_FILE_PREFIX: &str = "sql-assembler";

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("IO错误: {0}")]
    Io(#[from] io::Error),
    #[error("日志配置错误: {0}")]
    Config(String),
}

/// 日志初始化结果
pub type LogResult<T> = Result<T, LogError>;

/// 把配置中的级别字符串解析为 `tracing::Level`
pub fn parse_level(level: &str) -> LogResult<Level> {
    Level::from_str(level)
        .map_err(|_| LogError::Config(format!("无效的日志级别: {level}")))
}

/// 初始化日志系统
///
/// - `RUST_LOG` 存在时优先使用，否则使用配置中的级别
/// - `enable_stdout` 为真时输出到控制台（stderr）
/// - `log_dir` 非空时按天滚动写入该目录
///
/// 返回文件写入器的 guard，调用方需要持有它直到程序退出，
/// 否则缓冲中的日志可能丢失。重复初始化不视为错误，返回 `Ok(None)`。
///
/// # Examples
///
/// ```no_run
/// use sql_log_assembler::config::LogConfig;
/// use sql_log_assembler::logging::init_logging;
///
/// let _guard = init_logging(&LogConfig::default()).unwrap();
/// ```
pub fn init_logging(config: &LogConfig) -> LogResult<Option<WorkerGuard>> {
    let level = parse_level(&config.level)?;
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let console_layer = config.enable_stdout.then(|| {
        fmt::layer()
            .with_writer(io::stderr)
            .with_timer(SystemTime)
            .with_target(true)
            .with_ansi(true)
    });

    let (file_layer, guard) = if config.log_dir.is_empty() {
        (None, None)
    } else {
        std::fs::create_dir_all(&config.log_dir)?;
        let file_appender =
            tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_PREFIX);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        let layer = fmt::layer()
            .with_writer(non_blocking)
            .with_timer(SystemTime)
            .with_target(true)
            .with_ansi(false); // 文件中不使用颜色
        (Some(layer), Some(guard))
    };

    let subscriber = Registry::default()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer);

    // 尝试初始化，如果失败说明已经初始化过了
    match subscriber.try_init() {
        Ok(()) => {
            tracing::debug!("日志系统初始化完成，级别: {}", level);
            Ok(guard)
        }
        Err(_) => Ok(None),
    }
}
