//! 字符源
//!
//! 将字节流（任意 `Read`）转换为字符流
//! 支持UTF-8/Latin-1解码、位置追踪、单字符预读

use std::io::{self, BufRead, BufReader, Read};

use conin_config::CharDecoding;
use tracing::trace;

use super::position::SourcePosition;

/// 原始读取结果
///
/// 流结束与I/O错误是两种不同的结果，调用方需要显式区分
#[derive(Debug)]
pub enum RawChar {
    /// 成功读取一个字符
    Char(char),
    /// 流已结束
    EndOfStream,
    /// 底层读取失败
    IoError(io::Error),
}

impl RawChar {
    /// 读取到的字符（如果有）
    pub fn char(&self) -> Option<char> {
        match self {
            RawChar::Char(c) => Some(*c),
            _ => None,
        }
    }

    /// 是否为流结束
    pub fn is_end(&self) -> bool {
        matches!(self, RawChar::EndOfStream)
    }
}

/// 字符源
///
/// 包装调用方的读取器，提供字符级操作
pub struct CharSource<R> {
    /// 底层字节读取器
    reader: BufReader<R>,
    /// 解码方式
    decoding: CharDecoding,
    /// 已预读但未消费的字符及其字节长度
    peeked: Option<(char, usize)>,
    /// 当前位置
    position: SourcePosition,
}

impl<R: Read> CharSource<R> {
    /// 创建新的字符源
    pub fn new(reader: R, decoding: CharDecoding) -> Self {
        Self {
            reader: BufReader::new(reader),
            decoding,
            peeked: None,
            position: SourcePosition::start(),
        }
    }

    /// 获取当前位置
    pub fn position(&self) -> SourcePosition {
        self.position
    }

    /// 单独结束当前行（宽松模式下的单个 CR）
    pub fn break_line(&mut self) {
        self.position.break_line();
    }

    /// 读取并消费一个字符
    pub fn next_char(&mut self) -> RawChar {
        let (c, len) = match self.peeked.take() {
            Some(peeked) => peeked,
            None => match self.decode() {
                Ok(Some(decoded)) => decoded,
                Ok(None) => {
                    trace!(target: "conin::source", position = %self.position, "End of stream");
                    return RawChar::EndOfStream;
                }
                Err(e) => return RawChar::IoError(e),
            },
        };
        self.position.advance(c, len);
        trace!(target: "conin::source", ch = ?c, "Read char");
        RawChar::Char(c)
    }

    /// 预读下一个字符（不消费）
    ///
    /// 流结束和I/O错误不会被缓存
    pub fn peek_char(&mut self) -> RawChar {
        if let Some((c, _)) = self.peeked {
            return RawChar::Char(c);
        }
        match self.decode() {
            Ok(Some((c, len))) => {
                self.peeked = Some((c, len));
                RawChar::Char(c)
            }
            Ok(None) => RawChar::EndOfStream,
            Err(e) => RawChar::IoError(e),
        }
    }

    /// 丢弃预读字符和缓冲区中已到达的全部字节（不阻塞）
    ///
    /// 底层读取器中尚未进入缓冲区的字节保持不变。返回丢弃的字节数
    pub fn discard_buffered(&mut self) -> usize {
        let peeked = self.peeked.take().map_or(0, |(_, len)| len);
        let buffered = self.reader.buffer().len();
        self.reader.consume(buffered);
        let total = peeked + buffered;
        self.position.advance_bytes(total);
        total
    }

    /// 取回底层读取器（缓冲区中未消费的字节会丢失）
    pub fn into_inner(self) -> R {
        self.reader.into_inner()
    }

    fn decode(&mut self) -> io::Result<Option<(char, usize)>> {
        let Some(lead) = self.read_byte()? else {
            return Ok(None);
        };

        if self.decoding == CharDecoding::Latin1 {
            return Ok(Some((char::from(lead), 1)));
        }

        let Some(seq_len) = utf8_sequence_length(lead) else {
            return Ok(Some((replacement_char(), 1)));
        };

        let mut bytes = [lead, 0, 0, 0];
        let mut len = 1;
        while len < seq_len {
            // 只消费合法的续字节，其余字节留给下一次读取
            match self.peek_byte()? {
                Some(byte) if continuation_range(lead, len).contains(&byte) => {
                    self.reader.consume(1);
                    bytes[len] = byte;
                    len += 1;
                }
                _ => return Ok(Some((replacement_char(), len))),
            }
        }

        let c = std::str::from_utf8(&bytes[..len])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or_else(replacement_char);
        Ok(Some((c, len)))
    }

    fn peek_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = self.peek_byte()?;
        if byte.is_some() {
            self.reader.consume(1);
        }
        Ok(byte)
    }
}

/// 获取UTF-8序列长度
///
/// C0、C1 和 F5..FF 永远不会出现在合法序列中
fn utf8_sequence_length(lead_byte: u8) -> Option<usize> {
    match lead_byte {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None, // 续字节或超出范围
    }
}

/// 序列中第 `index` 个字节允许的取值范围
///
/// 第二个字节的范围由首字节决定，排除过长编码、代理区和超过 U+10FFFF 的码点。
/// 非法前缀整体替换为一个 U+FFFD，与 `String::from_utf8_lossy` 一致。
fn continuation_range(lead_byte: u8, index: usize) -> std::ops::RangeInclusive<u8> {
    match (lead_byte, index) {
        (0xE0, 1) => 0xA0..=0xBF,
        (0xED, 1) => 0x80..=0x9F,
        (0xF0, 1) => 0x90..=0xBF,
        (0xF4, 1) => 0x80..=0x8F,
        _ => 0x80..=0xBF,
    }
}

/// Unicode替换字符（用于错误恢复）
fn replacement_char() -> char {
    '\u{FFFD}'
}
