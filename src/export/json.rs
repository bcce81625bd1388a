//! JSON Lines 报告导出
//!
//! 每条还原后的语句写成一行 JSON，包含语句文本、所在行号范围、参数个数、
//! 占位符个数与实际替换个数，
//! 便于和其他工具配合检查哪些语句没有拿到全部参数。

use crate::assembler::types::ResolvedStatement;
use crate::error::Result;
use std::{
    fs::OpenOptions,
    io::{BufWriter, Write},
    path::Path,
};

/// 写出 JSON Lines 报告，覆盖已有文件，返回写入的记录数
pub fn write_json_report<P: AsRef<Path>>(
    path: P,
    statements: &[ResolvedStatement],
) -> Result<usize> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path.as_ref())?;
    let mut writer = BufWriter::new(file);

    for statement in statements {
        serde_json::to_writer(&mut writer, statement)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    #[cfg(feature = "logging")]
    tracing::debug!(
        "JSON 报告已写入 {}，共 {} 条",
        path.as_ref().display(),
        statements.len()
    );
    Ok(statements.len())
}
