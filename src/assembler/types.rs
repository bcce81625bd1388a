use serde::Serialize;

/// 闭区间行号范围（1 起始）
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineSpan {
    /// 起始行号
    pub start: usize,
    /// 结束行号（含）
    pub end: usize,
}

impl LineSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// 从一条绑定日志行中解析出的参数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterBinding {
    /// 日志中记录的参数序号原文，仅供参考，不参与排序
    pub ordinal: String,
    /// 类型标签，例如 `VARCHAR`、`BIGINT`
    pub type_name: String,
    /// 日志中的原始值
    pub value: String,
    /// 格式化后用于替换占位符的字面量
    pub literal: String,
}

/// 语句文本与紧随其后的绑定参数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedStatement {
    /// 原始语句文本，每个物理行以 `\n` 结尾
    pub sql: String,
    /// 语句所在行
    pub statement_lines: LineSpan,
    /// 绑定块所在行
    pub binding_lines: LineSpan,
    /// 按出现顺序排列的绑定参数
    pub bindings: Vec<ParameterBinding>,
}

/// 占位符替换完成后的语句
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedStatement {
    pub sql: String,
    pub statement_lines: LineSpan,
    pub binding_lines: LineSpan,
    /// 绑定块中解析出的参数个数
    pub binding_count: usize,
    /// 实际被替换的占位符个数
    pub substituted: usize,
    /// 原始语句中的占位符个数
    pub placeholders: usize,
}

impl ResolvedStatement {
    /// 所有占位符是否都拿到了值
    pub fn is_fully_bound(&self) -> bool {
        self.substituted == self.placeholders
    }
}
