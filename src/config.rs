//! 配置管理模块
//!
//! 提供统一的配置文件读取和管理功能

use crate::assembler::patterns::{
    DEFAULT_BINDER_MARKER, DEFAULT_NULL_TOKEN, DEFAULT_STATEMENT_START,
    DEFAULT_VARCHAR_TAG,
};
use crate::error::{AssemblerError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 未显式指定配置文件时，在当前目录查找的文件名
pub const DEFAULT_CONFIG_FILE: &str = "sql-assembler.toml";

/// 主配置结构体
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
    /// 语句还原配置
    #[serde(default)]
    pub assembler: AssemblerConfig,
    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// 是否启用控制台输出
    pub enable_stdout: bool,
    /// 日志输出目录，为空时不写日志文件
    pub log_dir: String,
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enable_stdout: true,
            log_dir: String::new(),
            level: "info".to_string(),
        }
    }
}

/// 语句还原配置，默认值对应 Hibernate 的调试日志
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblerConfig {
    /// 语句起始行正则
    pub statement_start: String,
    /// 参数绑定日志行中包含的 logger 名称
    pub binder_marker: String,
    /// 需要加单引号的类型标签
    pub varchar_tag: String,
    /// 表示 SQL NULL 的值
    pub null_token: String,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            statement_start: DEFAULT_STATEMENT_START.to_string(),
            binder_marker: DEFAULT_BINDER_MARKER.to_string(),
            varchar_tag: DEFAULT_VARCHAR_TAG.to_string(),
            null_token: DEFAULT_NULL_TOKEN.to_string(),
        }
    }
}

/// 输出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// 输出文件后缀，追加在输入文件名之后
    pub suffix: String,
    /// JSON Lines 报告路径（需要 exporter-json feature）
    pub json_report: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { suffix: "out".to_string(), json_report: None }
    }
}

impl Config {
    /// 从文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// 从字符串加载配置
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// 加载配置：优先使用给定路径，其次当前目录下的默认配置文件，都没有时使用默认值
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(DEFAULT_CONFIG_FILE)
            }
            None => Ok(Self::default()),
        }
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<()> {
        match self.log.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(AssemblerError::config(format!(
                    "无效的日志级别: {}",
                    self.log.level
                )));
            }
        }

        regex::Regex::new(&self.assembler.statement_start)?;

        if self.assembler.binder_marker.is_empty() {
            return Err(AssemblerError::config("binder_marker 不能为空"));
        }

        if self.output.suffix.is_empty() {
            return Err(AssemblerError::config("输出文件后缀不能为空"));
        }

        if !cfg!(feature = "exporter-json") && self.output.json_report.is_some()
        {
            #[cfg(feature = "logging")]
            tracing::warn!("未启用 exporter-json feature，json_report 配置将被忽略");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        // 测试无效日志级别
        config.log.level = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log.level = "info".to_string();
        config.assembler.statement_start = "[".to_string();
        assert!(config.validate().is_err());

        config.assembler = AssemblerConfig::default();
        config.assembler.binder_marker.clear();
        assert!(config.validate().unwrap_err().is_config_error());

        config.assembler = AssemblerConfig::default();
        config.output.suffix.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed_config: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.log.level, parsed_config.log.level);
        assert_eq!(
            config.assembler.binder_marker,
            parsed_config.assembler.binder_marker
        );
        assert_eq!(config.output.suffix, parsed_config.output.suffix);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::from_str(
            r#"
[assembler]
varchar_tag = "NVARCHAR"
"#,
        )
        .unwrap();
        assert_eq!(config.assembler.varchar_tag, "NVARCHAR");
        assert_eq!(config.assembler.null_token, "null");
        assert_eq!(config.log.level, "info");
        assert_eq!(config.output.suffix, "out");
    }

    #[test]
    fn test_default_log_config_writes_no_files() {
        let log = LogConfig::default();
        assert!(log.log_dir.is_empty());
        assert!(log.enable_stdout);
    }
}
