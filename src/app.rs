//! 命令行工作流程：读取日志 → 还原语句 → 写出结果

use crate::assembler::{LineSequence, LogAssembler, io};
use crate::config::Config;
use crate::error::Result;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// 一次运行的汇总
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// `.out` 文件路径
    pub output_path: PathBuf,
    /// 输入行数
    pub line_count: usize,
    /// 还原出的语句数
    pub statement_count: usize,
    /// 仍有未替换占位符的语句数
    pub incomplete_count: usize,
}

/// 处理单个日志文件
pub fn run<P: AsRef<Path>>(config: &Config, input: P) -> Result<RunSummary> {
    let input = input.as_ref();
    let start = Instant::now();

    let lines = LineSequence::from_path(input)?;
    let line_count = lines.len();
    let mut assembler = LogAssembler::from_config(lines, &config.assembler)?;
    assembler.run_parse();
    let statements = assembler.into_statements();

    let output_path = io::output_path_for(input, &config.output.suffix);
    io::write_resolved(&output_path, &statements)?;

    #[cfg(feature = "exporter-json")]
    if let Some(report) = config.output.json_report.as_deref() {
        crate::export::json::write_json_report(report, &statements)?;
    }

    let incomplete_count =
        statements.iter().filter(|s| !s.is_fully_bound()).count();

    #[cfg(feature = "logging")]
    {
        if incomplete_count > 0 {
            tracing::warn!("{} 条语句的占位符没有全部替换", incomplete_count);
        }
        tracing::info!(
            "处理完成: {} -> {}，共 {} 行，还原 {} 条语句，耗时: {:.2?}",
            input.display(),
            output_path.display(),
            line_count,
            statements.len(),
            start.elapsed()
        );
    }
    #[cfg(not(feature = "logging"))]
    let _ = start;

    Ok(RunSummary {
        output_path,
        line_count,
        statement_count: statements.len(),
        incomplete_count,
    })
}
