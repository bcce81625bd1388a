//! 错误类型定义
//!
//! 这个模块定义了库中使用的所有错误类型，使用 thiserror 提供丰富的错误信息。
//! 注意：输入耗尽（`EndOfInput`）不属于这里的错误，它只是解析循环的终止信号，
//! 定义在 `assembler::cursor` 中。

/// SQL 语句还原器的结果类型
pub type Result<T> = std::result::Result<T, AssemblerError>;

/// SQL 语句还原错误类型
#[derive(Debug, thiserror::Error)]
pub enum AssemblerError {
    /// IO错误
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    /// 正则表达式错误
    #[error("正则表达式错误: {0}")]
    Regex(#[from] regex::Error),

    /// 构造错误：既没有提供行列表也没有提供原始字符串
    #[error("构造错误: {0}")]
    Construction(String),

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),

    /// TOML 反序列化错误
    #[error("配置文件解析错误: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML 序列化错误
    #[error("配置文件序列化错误: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// JSON 序列化错误（仅在启用 exporter-json feature 时可用）
    #[cfg(feature = "exporter-json")]
    #[error("JSON序列化错误: {0}")]
    Json(#[from] serde_json::Error),
}

impl AssemblerError {
    /// 创建一个构造错误
    pub fn construction<S: Into<String>>(message: S) -> Self {
        Self::Construction(message.into())
    }

    /// 创建一个配置错误
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// 检查是否为 IO 错误
    pub fn is_io_error(&self) -> bool {
        matches!(self, AssemblerError::Io(_))
    }

    /// 检查是否为构造错误
    pub fn is_construction_error(&self) -> bool {
        matches!(self, AssemblerError::Construction(_))
    }

    /// 检查是否为配置错误
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            AssemblerError::Config(_)
                | AssemblerError::TomlDe(_)
                | AssemblerError::Regex(_)
        )
    }
}
