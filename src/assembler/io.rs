//! 输出文件读写

use crate::assembler::types::ResolvedStatement;
use crate::error::Result;
use std::{
    ffi::OsString,
    fs::OpenOptions,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// 输出文件路径：在输入文件名后追加 `.<suffix>`
///
/// `app.log` + `out` → `app.log.out`
pub fn output_path_for<P: AsRef<Path>>(input: P, suffix: &str) -> PathBuf {
    let mut name = OsString::from(input.as_ref().as_os_str());
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

/// 按顺序把还原后的语句依次写入文件，覆盖已有内容
///
/// 语句之间不加分隔符，每条语句自带的换行即为分隔。
pub fn write_resolved<P: AsRef<Path>>(
    path: P,
    statements: &[ResolvedStatement],
) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    for statement in statements {
        writer.write_all(statement.sql.as_bytes())?;
    }
    writer.flush()?;
    Ok(())
}
