//! 输入位置追踪
//!
//! - line/column: 人类可读的错误显示（1-based）
//! - byte_offset: 已消费的原始字节数（0-based）

use std::fmt;

/// 输入流中的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePosition {
    /// 行号，1-based
    pub line: usize,
    /// 列号，1-based，按字符计数
    pub column: usize,
    /// 字节偏移，0-based
    pub byte_offset: usize,
}

impl SourcePosition {
    /// 流起始位置
    pub fn start() -> Self {
        Self {
            line: 1,
            column: 1,
            byte_offset: 0,
        }
    }

    /// 前进一个字符
    ///
    /// # Arguments
    /// * `c` - 当前字符
    /// * `byte_len` - 该字符在原始输入中占用的字节数
    pub fn advance(&mut self, c: char, byte_len: usize) {
        if c == '\n' {
            self.break_line();
        } else {
            self.column += 1;
        }
        self.byte_offset += byte_len;
    }

    /// 换行（不消费字节）
    ///
    /// 宽松模式下单独的 CR 也结束一行，由调用方显式换行
    pub fn break_line(&mut self) {
        self.line += 1;
        self.column = 1;
    }

    /// 前进指定字节数（不更新行列号）
    ///
    /// 用于丢弃缓冲区内容
    pub fn advance_bytes(&mut self, bytes: usize) {
        self.byte_offset += bytes;
    }
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
