//! 读取错误类型
//!
//! 所有读取操作共用一个错误类型，由调用方决定是终止、记录还是重新同步。

use std::io;

use super::core::SourcePosition;

/// 读取错误
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// 没有可读内容时流已结束
    #[error("End of input")]
    EndOfInput,

    /// 底层读取失败
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CR 后面没有紧跟 LF
    #[error("Malformed line ending at {position}: CR followed by {}", describe(.found))]
    MalformedLineEnding {
        /// CR 之后读到的字符，流结束时为 None
        found: Option<char>,
        /// CR 之后的位置
        position: SourcePosition,
    },

    /// 单词无法解析为目标数值类型
    #[error("Cannot parse {word:?} as {target}: {reason}")]
    NumberFormat {
        /// 读到的单词
        word: String,
        /// 目标类型名
        target: &'static str,
        /// 解析器给出的原因
        reason: String,
    },
}

impl ReadError {
    /// 是否属于不可恢复的错误（默认应当终止）
    pub fn is_fatal(&self) -> bool {
        matches!(self, ReadError::MalformedLineEnding { .. } | ReadError::Io(_))
    }

    /// 是否为流结束
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, ReadError::EndOfInput)
    }

    /// 错误类别名
    pub fn kind(&self) -> &'static str {
        match self {
            ReadError::EndOfInput => "end_of_input",
            ReadError::Io(_) => "io",
            ReadError::MalformedLineEnding { .. } => "malformed_line_ending",
            ReadError::NumberFormat { .. } => "number_format",
        }
    }
}

fn describe(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("{c:?}"),
        None => "end of input".to_string(),
    }
}

/// 读取结果类型
pub type ReadResult<T> = Result<T, ReadError>;
