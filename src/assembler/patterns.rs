//! 行分类规则
//!
//! 三类行：
//! - 语句起始行：不以数字开头，去掉行尾空白后以 `select` 结尾；
//! - 绑定日志行：包含 ORM 参数绑定器的 logger 名称；
//! - 绑定明细：绑定日志行中的 `binding parameter [<序号>] as [<类型>] - [<值>]`。

use crate::assembler::types::ParameterBinding;
use crate::config::AssemblerConfig;
use crate::error::Result;
use lazy_static::lazy_static;
use regex::Regex;

/// 默认的语句起始行正则
pub const DEFAULT_STATEMENT_START: &str = r"^[^\d].*select\s*$";
/// Hibernate 参数绑定器的 logger 名称
pub const DEFAULT_BINDER_MARKER: &str =
    "org.hibernate.type.descriptor.sql.BasicBinder";
/// 需要加单引号的类型标签
pub const DEFAULT_VARCHAR_TAG: &str = "VARCHAR";
/// 表示 SQL NULL 的值
pub const DEFAULT_NULL_TOKEN: &str = "null";

lazy_static! {
    static ref STATEMENT_START_RE: Regex =
        Regex::new(DEFAULT_STATEMENT_START).unwrap();
    static ref BINDING_DETAIL_RE: Regex =
        Regex::new(r"binding parameter \[(\d+)\] as \[(.*)\] - \[(.*)\]")
            .unwrap();
}

/// 一组行分类规则
#[derive(Debug, Clone)]
pub struct LinePatterns {
    statement_start: Regex,
    binder_marker: String,
    varchar_tag: String,
    null_token: String,
}

impl Default for LinePatterns {
    fn default() -> Self {
        Self {
            statement_start: STATEMENT_START_RE.clone(),
            binder_marker: DEFAULT_BINDER_MARKER.to_string(),
            varchar_tag: DEFAULT_VARCHAR_TAG.to_string(),
            null_token: DEFAULT_NULL_TOKEN.to_string(),
        }
    }
}

impl LinePatterns {
    /// 根据配置构造，语句起始正则无法编译时返回错误
    pub fn from_config(config: &AssemblerConfig) -> Result<Self> {
        let statement_start = if config.statement_start == DEFAULT_STATEMENT_START
        {
            STATEMENT_START_RE.clone()
        } else {
            Regex::new(&config.statement_start)?
        };
        Ok(Self {
            statement_start,
            binder_marker: config.binder_marker.clone(),
            varchar_tag: config.varchar_tag.clone(),
            null_token: config.null_token.clone(),
        })
    }

    pub fn is_statement_start(&self, line: &str) -> bool {
        self.statement_start.is_match(line)
    }

    pub fn is_binder_entry(&self, line: &str) -> bool {
        line.contains(self.binder_marker.as_str())
    }

    /// 解析绑定明细；不匹配时返回 `None`，调用方直接跳过该行
    pub fn parse_binding(&self, line: &str) -> Option<ParameterBinding> {
        let caps = BINDING_DETAIL_RE.captures(line)?;
        let ordinal = caps.get(1)?.as_str();
        let type_name = caps.get(2)?.as_str();
        let value = caps.get(3)?.as_str();
        Some(ParameterBinding {
            ordinal: ordinal.to_string(),
            type_name: type_name.to_string(),
            value: value.to_string(),
            literal: self.format_literal(type_name, value),
        })
    }

    /// 把绑定值格式化为 SQL 字面量
    ///
    /// 只有 VARCHAR 且不是 null 的值会加单引号，其余原样输出。
    /// 不做任何转义。
    pub fn format_literal(&self, type_name: &str, value: &str) -> String {
        if type_name == self.varchar_tag && value != self.null_token {
            format!("'{value}'")
        } else {
            value.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BINDER: &str = "2024-01-01 10:00:00,123 TRACE [org.hibernate.type.descriptor.sql.BasicBinder] (main)";

    #[test]
    fn test_statement_start() {
        let p = LinePatterns::default();
        assert!(p.is_statement_start("    select"));
        assert!(p.is_statement_start("Hibernate: select  \t"));
        assert!(p.is_statement_start(" select"));

        // 以数字开头的是带时间戳的日志行
        assert!(!p.is_statement_start("2024-01-01 DEBUG [SQL] select"));
        assert!(!p.is_statement_start("    select id from t"));
        assert!(!p.is_statement_start("    SELECT"));
        assert!(!p.is_statement_start(""));
    }

    #[test]
    fn test_binder_entry() {
        let p = LinePatterns::default();
        assert!(p.is_binder_entry(&format!("{BINDER} - binding parameter [1] as [BIGINT] - [42]")));
        assert!(!p.is_binder_entry("2024-01-01 DEBUG [org.hibernate.SQL] select"));
    }

    #[test]
    fn test_parse_binding() {
        let p = LinePatterns::default();
        let b = p
            .parse_binding(&format!("{BINDER} - binding parameter [3] as [VARCHAR] - [bar]"))
            .unwrap();
        assert_eq!(b.ordinal, "3");
        assert_eq!(b.type_name, "VARCHAR");
        assert_eq!(b.value, "bar");
        assert_eq!(b.literal, "'bar'");

        let b = p
            .parse_binding(&format!("{BINDER} - binding parameter [1] as [BIGINT] - [42]"))
            .unwrap();
        assert_eq!(b.literal, "42");

        assert!(p.parse_binding(&format!("{BINDER} - something else")).is_none());
    }

    #[test]
    fn test_parse_binding_keeps_unusual_ordinals() {
        let p = LinePatterns::default();
        // 超出整数范围的序号
        let b = p
            .parse_binding(&format!("{BINDER} - binding parameter [99999999999999999999999] as [BIGINT] - [1]"))
            .unwrap();
        assert_eq!(b.ordinal, "99999999999999999999999");
        assert_eq!(b.literal, "1");

        // 非 ASCII 数字
        let b = p
            .parse_binding(&format!("{BINDER} - binding parameter [\u{661}] as [VARCHAR] - [x]"))
            .unwrap();
        assert_eq!(b.ordinal, "\u{661}");
        assert_eq!(b.literal, "'x'");
    }

    #[test]
    fn test_format_literal() {
        let p = LinePatterns::default();
        assert_eq!(p.format_literal("VARCHAR", "x"), "'x'");
        assert_eq!(p.format_literal("VARCHAR", "null"), "null");
        assert_eq!(p.format_literal("VARCHAR", ""), "''");
        assert_eq!(p.format_literal("INTEGER", "null"), "null");
        assert_eq!(p.format_literal("TIMESTAMP", "2024-01-01"), "2024-01-01");
        // 不做转义
        assert_eq!(p.format_literal("VARCHAR", "O'Brien"), "'O'Brien'");
    }

    #[test]
    fn test_from_config() {
        let mut config = AssemblerConfig::default();
        config.statement_start = r"^\s*SELECT\s*$".to_string();
        config.varchar_tag = "NVARCHAR".to_string();
        let p = LinePatterns::from_config(&config).unwrap();
        assert!(p.is_statement_start("  SELECT"));
        assert!(!p.is_statement_start("  select"));
        assert_eq!(p.format_literal("NVARCHAR", "a"), "'a'");
        assert_eq!(p.format_literal("VARCHAR", "a"), "a");

        config.statement_start = "(".to_string();
        assert!(LinePatterns::from_config(&config).is_err());
    }
}
