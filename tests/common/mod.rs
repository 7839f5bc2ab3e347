//! 测试辅助工具
//!
//! 提供端到端测试用的读取器与分词器构造函数

use std::io::{self, Read};

use conin::{LineEndingPolicy, LineTokenizer, TokenizerConfig};

/// 默认配置的内存分词器
pub fn tokenizer(input: &str) -> LineTokenizer<&[u8]> {
    LineTokenizer::new(input.as_bytes())
}

/// 宽松行尾策略的内存分词器
pub fn lenient(input: &str) -> LineTokenizer<&[u8]> {
    LineTokenizer::with_config(
        input.as_bytes(),
        TokenizerConfig::default().with_line_endings(LineEndingPolicy::Lenient),
    )
}

/// 每次最多返回一个字节的读取器，模拟逐字节到达的终端输入
pub struct Trickle {
    data: Vec<u8>,
    pos: usize,
}

impl Trickle {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            pos: 0,
        }
    }
}

impl Read for Trickle {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos >= self.data.len() || buf.is_empty() {
            return Ok(0);
        }
        buf[0] = self.data[self.pos];
        self.pos += 1;
        Ok(1)
    }
}

/// 先返回给定数据、随后报错的读取器
pub struct FailAfter {
    data: Vec<u8>,
    pos: usize,
    interrupted_once: bool,
}

impl FailAfter {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            pos: 0,
            interrupted_once: false,
        }
    }
}

impl Read for FailAfter {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        // 第一次读取先被信号打断一次
        if !self.interrupted_once {
            self.interrupted_once = true;
            return Err(io::Error::new(io::ErrorKind::Interrupted, "signal"));
        }
        if self.pos < self.data.len() {
            let n = buf.len().min(self.data.len() - self.pos);
            buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            return Ok(n);
        }
        Err(io::Error::new(io::ErrorKind::ConnectionReset, "terminal went away"))
    }
}
