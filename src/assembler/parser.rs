//! SQL 语句还原器 - 语句识别、参数提取与占位符替换
//!
//! ## 解析流程
//!
//! ```text
//! 日志行 → extract_next_statement() → extract_parameter_values() → resolve_placeholders()
//!              ↓                              ↓                              ↓
//!        跳过噪声行，找到               收集连续的绑定日志行             按顺序替换 `?`
//!        语句起始行并拼接到             解析类型与值，异常行跳过
//!        第一条绑定日志行之前
//! ```
//!
//! 输入耗尽（[`EndOfInput`]）是唯一的终止条件：无论发生在找语句、拼语句还是
//! 收集绑定参数的过程中，`run_parse` 都在此正常结束。绑定块中途耗尽时，
//! 已收集的参数仍然有效，最后一条语句照常输出。
//!
//! ## 使用示例
//!
//! ```rust
//! use sql_log_assembler::assembler::{LineSequence, LogAssembler};
//!
//! let lines = LineSequence::from_lines([
//!     "    select",
//!     "        u.name from users u where u.id=?",
//!     "2024-01-01 TRACE [org.hibernate.type.descriptor.sql.BasicBinder] binding parameter [1] as [BIGINT] - [7]",
//! ]);
//! let mut assembler = LogAssembler::new(lines);
//! let statements = assembler.run_parse();
//! assert_eq!(statements[0].sql, "    select\n        u.name from users u where u.id=7\n");
//! ```

use crate::assembler::cursor::{Cursor, EndOfInput, LineSequence, ScanResult};
use crate::assembler::patterns::LinePatterns;
use crate::assembler::types::{
    LineSpan, ParameterBinding, ParsedStatement, ResolvedStatement,
};
use crate::config::AssemblerConfig;
use crate::error::Result;

/// 把 `?` 占位符依次替换为绑定参数的字面量
///
/// 参数不足时剩余的 `?` 原样保留，参数多余时忽略多出的部分。
pub fn resolve_placeholders(sql: &str, bindings: &[ParameterBinding]) -> String {
    let extra: usize = bindings.iter().map(|b| b.literal.len()).sum();
    let mut result = String::with_capacity(sql.len() + extra);
    let mut next = bindings.iter();
    for c in sql.chars() {
        if c == '?' {
            if let Some(binding) = next.next() {
                result.push_str(&binding.literal);
                continue;
            }
        }
        result.push(c);
    }
    result
}

/// 日志还原器，每个实例独占自己的游标与结果列表
#[derive(Debug)]
pub struct LogAssembler {
    cursor: Cursor,
    patterns: LinePatterns,
    resolved: Vec<ResolvedStatement>,
}

impl LogAssembler {
    /// 使用默认（Hibernate）规则
    pub fn new(lines: LineSequence) -> Self {
        Self::with_patterns(lines, LinePatterns::default())
    }

    pub fn with_patterns(lines: LineSequence, patterns: LinePatterns) -> Self {
        Self { cursor: Cursor::new(lines), patterns, resolved: Vec::new() }
    }

    /// 按配置构造行分类规则
    pub fn from_config(
        lines: LineSequence,
        config: &AssemblerConfig,
    ) -> Result<Self> {
        Ok(Self::with_patterns(lines, LinePatterns::from_config(config)?))
    }

    /// 扫描直到输入耗尽，返回按出现顺序排列的全部还原结果
    pub fn run_parse(&mut self) -> &[ResolvedStatement] {
        #[cfg(feature = "logging")]
        tracing::info!("开始解析，共 {} 行", self.cursor.total_lines());

        while let Ok(parsed) = self.next_parsed() {
            let resolved = Self::resolve(parsed);
            self.resolved.push(resolved);
        }

        #[cfg(feature = "logging")]
        tracing::info!("已到达输入末尾，共还原 {} 条语句", self.resolved.len());
        &self.resolved
    }

    /// 提取下一对（语句，绑定参数），不做替换
    pub fn next_parsed(&mut self) -> ScanResult<ParsedStatement> {
        let (statement_lines, sql) = self.extract_next_statement()?;
        #[cfg(feature = "logging")]
        tracing::debug!(
            "在第 {}-{} 行检测到 SQL 语句",
            statement_lines.start,
            statement_lines.end
        );

        let (binding_lines, bindings) = self.extract_parameter_values();
        #[cfg(feature = "logging")]
        tracing::debug!(
            "在第 {}-{} 行检测到绑定块，共 {} 个参数",
            binding_lines.start,
            binding_lines.end,
            bindings.len()
        );

        Ok(ParsedStatement { sql, statement_lines, binding_lines, bindings })
    }

    /// 已还原的语句
    pub fn statements(&self) -> &[ResolvedStatement] {
        &self.resolved
    }

    /// 只取还原后的 SQL 文本
    pub fn resolved_sql(&self) -> Vec<&str> {
        self.resolved.iter().map(|s| s.sql.as_str()).collect()
    }

    pub fn into_statements(self) -> Vec<ResolvedStatement> {
        self.resolved
    }

    /// 从当前行开始寻找语句起始行，然后拼接到第一条绑定日志行之前
    ///
    /// 当前行可能正是上一个绑定块之后的那一行，因此先检查再前进。
    fn extract_next_statement(&mut self) -> ScanResult<(LineSpan, String)> {
        while !self.patterns.is_statement_start(self.cursor.line()) {
            self.cursor.advance()?;
        }

        let start = self.cursor.line_no();
        let mut sql = String::new();
        sql.push_str(self.cursor.line());
        sql.push('\n');
        self.cursor.advance()?;

        while !self.patterns.is_binder_entry(self.cursor.line()) {
            sql.push_str(self.cursor.line());
            sql.push('\n');
            self.cursor.advance()?;
        }

        Ok((LineSpan::new(start, self.cursor.line_no() - 1), sql))
    }

    /// 收集连续的绑定日志行
    ///
    /// 不匹配绑定明细的行直接跳过；输入耗尽时返回已收集的部分。
    fn extract_parameter_values(&mut self) -> (LineSpan, Vec<ParameterBinding>) {
        let start = self.cursor.line_no();
        let mut bindings = Vec::new();

        while self.patterns.is_binder_entry(self.cursor.line()) {
            match self.patterns.parse_binding(self.cursor.line()) {
                Some(binding) => bindings.push(binding),
                None => {
                    #[cfg(feature = "logging")]
                    tracing::trace!(
                        "第 {} 行不是有效的绑定明细，已跳过: {}",
                        self.cursor.line_no(),
                        self.cursor.line()
                    );
                }
            }
            if let Err(EndOfInput) = self.cursor.advance() {
                return (LineSpan::new(start, self.cursor.line_no()), bindings);
            }
        }

        (LineSpan::new(start, self.cursor.line_no() - 1), bindings)
    }

    fn resolve(parsed: ParsedStatement) -> ResolvedStatement {
        let placeholders = parsed.sql.matches('?').count();
        let substituted = placeholders.min(parsed.bindings.len());
        ResolvedStatement {
            sql: resolve_placeholders(&parsed.sql, &parsed.bindings),
            statement_lines: parsed.statement_lines,
            binding_lines: parsed.binding_lines,
            binding_count: parsed.bindings.len(),
            substituted,
            placeholders,
        }
    }
}
