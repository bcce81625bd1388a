//! 行序列与读取游标
//!
//! `LineSequence` 是一次解析的全部输入，构造后不可变；`Cursor` 是在它上面
//! 单向前进的读取位置。游标越过最后一行时返回 [`EndOfInput`]，这不是错误，
//! 而是解析循环的终止信号。

use crate::error::{AssemblerError, Result};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// 输入耗尽信号
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndOfInput;

/// 扫描结果：`Ok` 表示还有行可读，`Err(EndOfInput)` 表示输入已耗尽
pub type ScanResult<T> = std::result::Result<T, EndOfInput>;

/// 去掉行尾的换行符（`\n` 与 `\r`），保留其他空白
fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}

/// 有序、有限、不可变的文本行序列
///
/// 两种构造方式的行为一致：只去掉每行末尾的换行符，空行原样保留。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineSequence {
    lines: Vec<String>,
}

impl LineSequence {
    /// 从已切分好的行列表构造
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines = lines
            .into_iter()
            .map(|l| strip_line_ending(l.as_ref()).to_string())
            .collect();
        Self { lines }
    }

    /// 从一整段多行文本构造，按换行切分
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// 两种输入二选一的构造入口
    ///
    /// 两者都没有提供时返回构造错误；两者都提供时以行列表为准。
    pub fn from_sources(
        lines: Option<Vec<String>>,
        text: Option<&str>,
    ) -> Result<Self> {
        match (lines, text) {
            (Some(lines), _) => Ok(Self::from_lines(lines)),
            (None, Some(text)) => Ok(Self::from_text(text)),
            (None, None) => Err(AssemblerError::construction(
                "必须提供行列表或输入字符串中的一个",
            )),
        }
    }

    /// 从任意 `BufRead` 逐行读取
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = Vec::new();
        for line in reader.lines() {
            let line = line?;
            lines.push(strip_line_ending(&line).to_string());
        }
        Ok(Self { lines })
    }

    /// 读取整个日志文件，文件句柄在返回前释放
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// 按 0 起始下标取行
    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

/// 行序列上的读取游标
///
/// `line_no` 是当前行的 1 起始行号；尚未读取任何行时为 0，当前行为空串。
#[derive(Debug, Clone)]
pub struct Cursor {
    lines: LineSequence,
    line_no: usize,
}

impl Cursor {
    pub fn new(lines: LineSequence) -> Self {
        Self { lines, line_no: 0 }
    }

    /// 前进一行；已经在最后一行时返回 `EndOfInput`，位置保持不变
    pub fn advance(&mut self) -> ScanResult<()> {
        if self.line_no < self.lines.len() {
            self.line_no += 1;
            Ok(())
        } else {
            Err(EndOfInput)
        }
    }

    /// 当前行文本
    pub fn line(&self) -> &str {
        match self.line_no {
            0 => "",
            n => self.lines.get(n - 1).unwrap_or(""),
        }
    }

    /// 当前行号（1 起始）
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// 输入总行数
    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }
}
