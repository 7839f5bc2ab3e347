//! LineTokenizer 主入口
//!
//! 在字符源之上实现单词读取、行读取与行尾规范化
//!
//! # 示例
//!
//! ```
//! use conin_core::kit::tokenizer::LineTokenizer;
//!
//! let mut input = LineTokenizer::new("  42 rest\r\n".as_bytes());
//! assert_eq!(input.read_int().unwrap(), 42);
//! assert_eq!(input.read_line().unwrap(), "rest");
//! ```
//!
//! 一个实例只属于一个调用方：所有读取方法都需要 `&mut self`，
//! 不提供任何内部加锁。

use std::io::{self, Read};

use conin_config::{LineEndingPolicy, TokenizerConfig};
use tracing::{debug, trace, warn};

use super::core::{CharSource, RawChar, SourcePosition};
use super::error::{ReadError, ReadResult};
use super::separator::{is_separator, CR, LF};
use super::types::{LineEnding, Terminator, Word};

/// 控制台输入分词器
///
/// 包装一个字节流，提供按字符、单词、行以及数值类型的阻塞读取
pub struct LineTokenizer<R> {
    source: CharSource<R>,
    config: TokenizerConfig,
}

impl LineTokenizer<io::Stdin> {
    /// 绑定到进程标准输入（默认配置）
    pub fn stdin() -> Self {
        Self::new(io::stdin())
    }

    /// 绑定到进程标准输入（显式配置）
    pub fn stdin_with_config(config: TokenizerConfig) -> Self {
        Self::with_config(io::stdin(), config)
    }
}

impl<R: Read> LineTokenizer<R> {
    /// 创建新的分词器（默认配置）
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, TokenizerConfig::default())
    }

    /// 创建新的分词器（显式配置）
    pub fn with_config(reader: R, config: TokenizerConfig) -> Self {
        debug!(
            target: "conin::tokenizer",
            line_endings = ?config.line_endings,
            decoding = ?config.decoding,
            "Creating LineTokenizer"
        );
        Self {
            source: CharSource::new(reader, config.decoding),
            config,
        }
    }

    /// 当前配置
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// 当前读取位置
    pub fn position(&self) -> SourcePosition {
        self.source.position()
    }

    /// 取回底层读取器
    pub fn into_inner(self) -> R {
        self.source.into_inner()
    }

    /// 丢弃已经到达但尚未读取的输入（不阻塞，不会失败）
    ///
    /// 只丢弃本分词器已经缓冲的内容。仍留在操作系统缓冲区里、
    /// 还没有被读入的提前输入不会被丢弃：`Read` 无法查询可立即读取的字节数。
    pub fn flush_pending_input(&mut self) {
        let discarded = self.source.discard_buffered();
        debug!(target: "conin::tokenizer", discarded, "Flushed pending input");
    }

    /// 读取一个原始字符，不做任何分隔符处理
    pub fn read_raw(&mut self) -> RawChar {
        self.source.next_char()
    }

    /// 读取下一个字符，不跳过分隔符
    pub fn read_char(&mut self) -> ReadResult<char> {
        self.next_char()?.ok_or(ReadError::EndOfInput)
    }

    /// 读取下一个非空行的第一个字符，该行其余部分被丢弃
    pub fn read_char_ln(&mut self) -> ReadResult<char> {
        loop {
            let line = self.read_line()?;
            if let Some(c) = line.chars().next() {
                return Ok(c);
            }
            trace!(target: "conin::tokenizer", "Skipping empty line");
        }
    }

    /// 读取一个以分隔符结尾的单词
    ///
    /// 跳过前导分隔符，读取到下一个分隔符为止；该分隔符被消费但不计入结果。
    /// 如果分隔符是 CR，则必须紧跟 LF（宽松模式除外）。
    pub fn read_word(&mut self) -> ReadResult<Word> {
        let mut c = loop {
            match self.next_char()? {
                // 宽松模式下单独的 CR 也是空行，需要计入行号
                Some(CR) if self.config.line_endings == LineEndingPolicy::Lenient => {
                    self.finish_cr()?;
                }
                Some(c) if is_separator(c) => continue,
                Some(c) => break c,
                None => return Err(ReadError::EndOfInput),
            }
        };

        let mut text = String::new();
        let terminator = loop {
            text.push(c);
            match self.next_char()? {
                Some(next) if is_separator(next) => break self.resolve_separator(next)?,
                Some(next) => c = next,
                None => break Terminator::EndOfStream,
            }
        };

        debug!(target: "conin::tokenizer", word = %text, ?terminator, "Read word");
        Ok(Word { text, terminator })
    }

    /// 读取一个单词，并丢弃所在行的剩余部分
    pub fn read_word_ln(&mut self) -> ReadResult<String> {
        let word = self.read_word()?;
        if word.terminator.leaves_line_open() {
            self.discard_rest_of_line()?;
        }
        Ok(word.into_text())
    }

    /// 读取一行，不包含行尾标记
    ///
    /// 行尾为 LF 或 CR LF。流在行中间结束时返回已读内容；
    /// 没有任何字符可读时返回 [`ReadError::EndOfInput`]。
    pub fn read_line(&mut self) -> ReadResult<String> {
        self.read_line_inner()?.ok_or(ReadError::EndOfInput)
    }

    /// 跳到下一行开头
    pub fn skip_line(&mut self) -> ReadResult<()> {
        self.read_line().map(drop)
    }

    /// 丢弃当前行剩余部分；流已结束视为完成
    pub(crate) fn discard_rest_of_line(&mut self) -> ReadResult<()> {
        if let Some(rest) = self.read_line_inner()? {
            trace!(target: "conin::tokenizer", rest = %rest, "Discarded rest of line");
        }
        Ok(())
    }

    fn read_line_inner(&mut self) -> ReadResult<Option<String>> {
        let mut line = String::new();
        let mut read_any = false;

        loop {
            let Some(c) = self.next_char()? else {
                break;
            };
            read_any = true;
            match c {
                LF => break,
                CR => {
                    self.finish_cr()?;
                    break;
                }
                _ => line.push(c),
            }
        }

        if !read_any {
            return Ok(None);
        }
        debug!(target: "conin::tokenizer", len = line.len(), "Read line");
        Ok(Some(line))
    }

    fn next_char(&mut self) -> ReadResult<Option<char>> {
        match self.source.next_char() {
            RawChar::Char(c) => Ok(Some(c)),
            RawChar::EndOfStream => Ok(None),
            RawChar::IoError(e) => {
                warn!(target: "conin::tokenizer", error = %e, "Read failed");
                Err(e.into())
            }
        }
    }

    fn resolve_separator(&mut self, c: char) -> ReadResult<Terminator> {
        match c {
            LF => Ok(Terminator::LineEnd(LineEnding::Lf)),
            CR => self.finish_cr().map(Terminator::LineEnd),
            other => Ok(Terminator::Separator(other)),
        }
    }

    /// CR 已被消费，确认行尾
    fn finish_cr(&mut self) -> ReadResult<LineEnding> {
        match self.config.line_endings {
            LineEndingPolicy::Strict => match self.next_char()? {
                Some(LF) => Ok(LineEnding::CrLf),
                found => {
                    let position = self.position();
                    warn!(target: "conin::tokenizer", ?found, %position, "CR not followed by LF");
                    Err(ReadError::MalformedLineEnding { found, position })
                }
            },
            LineEndingPolicy::Lenient => match self.source.peek_char() {
                RawChar::Char(LF) => {
                    self.source.next_char();
                    Ok(LineEnding::CrLf)
                }
                RawChar::Char(_) | RawChar::EndOfStream => {
                    self.source.break_line();
                    Ok(LineEnding::Cr)
                }
                RawChar::IoError(e) => Err(e.into()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer(input: &str) -> LineTokenizer<&[u8]> {
        LineTokenizer::new(input.as_bytes())
    }

    fn lenient(input: &str) -> LineTokenizer<&[u8]> {
        LineTokenizer::with_config(
            input.as_bytes(),
            TokenizerConfig::default().with_line_endings(LineEndingPolicy::Lenient),
        )
    }

    #[test]
    fn test_read_word_skips_separators() {
        let mut t = tokenizer(" \t\n  hello   world\n");
        let word = t.read_word().unwrap();
        assert_eq!(word.text, "hello");
        assert_eq!(word.terminator, Terminator::Separator(' '));

        let word = t.read_word().unwrap();
        assert_eq!(word.text, "world");
        assert_eq!(word.terminator, Terminator::LineEnd(LineEnding::Lf));
    }

    #[test]
    fn test_read_word_crlf() {
        let mut t = tokenizer("abc\r\ndef");
        let word = t.read_word().unwrap();
        assert_eq!(word.text, "abc");
        assert_eq!(word.terminator, Terminator::LineEnd(LineEnding::CrLf));
        assert_eq!(t.read_char().unwrap(), 'd');
    }

    #[test]
    fn test_read_word_information_separator() {
        let mut t = tokenizer("a\u{001F}b");
        assert_eq!(t.read_word().unwrap().terminator, Terminator::Separator('\u{001F}'));
        assert_eq!(t.read_word().unwrap().text, "b");
    }

    #[test]
    fn test_read_word_at_end_of_stream() {
        let mut t = tokenizer("last");
        let word = t.read_word().unwrap();
        assert_eq!(word.text, "last");
        assert_eq!(word.terminator, Terminator::EndOfStream);
        assert!(matches!(t.read_word(), Err(ReadError::EndOfInput)));
    }

    #[test]
    fn test_read_word_only_separators() {
        let mut t = tokenizer("  \n\t \n");
        assert!(matches!(t.read_word(), Err(ReadError::EndOfInput)));
    }

    #[test]
    fn test_read_word_malformed_cr() {
        let mut t = tokenizer("abc\rdef");
        match t.read_word() {
            Err(ReadError::MalformedLineEnding { found, position }) => {
                assert_eq!(found, Some('d'));
                assert_eq!(position.byte_offset, 5);
            }
            other => panic!("Expected MalformedLineEnding, got {:?}", other),
        }
    }

    #[test]
    fn test_read_word_cr_at_end() {
        let mut t = tokenizer("abc\r");
        assert!(matches!(
            t.read_word(),
            Err(ReadError::MalformedLineEnding { found: None, .. })
        ));
    }

    #[test]
    fn test_lenient_lone_cr() {
        let mut t = lenient("abc\rdef\r");
        let word = t.read_word().unwrap();
        assert_eq!(word.terminator, Terminator::LineEnd(LineEnding::Cr));
        assert_eq!(t.position().line, 2);

        let word = t.read_word().unwrap();
        assert_eq!(word.text, "def");
        assert_eq!(word.terminator, Terminator::LineEnd(LineEnding::Cr));
    }

    #[test]
    fn test_lenient_lone_cr_in_leading_separators_counts_lines() {
        let mut t = lenient("\r\rx");
        assert_eq!(t.read_word().unwrap().text, "x");
        assert_eq!(t.position().line, 3);
        assert_eq!(t.position().column, 2);

        let mut t = lenient("\rabc\n");
        assert_eq!(t.read_word().unwrap().text, "abc");
        assert_eq!(t.position().to_string(), "3:1");
    }

    #[test]
    fn test_lenient_lone_cr_then_crlf_in_leading_separators() {
        let mut t = lenient(" \r\r\n\tword ");
        assert_eq!(t.read_word().unwrap().text, "word");
        assert_eq!(t.position().line, 3);
    }

    #[test]
    fn test_lenient_read_line_tracks_lines() {
        let mut t = lenient("a\rb\r\rc");
        assert_eq!(t.read_line().unwrap(), "a");
        assert_eq!(t.read_line().unwrap(), "b");
        assert_eq!(t.read_line().unwrap(), "");
        assert_eq!(t.position().line, 4);
        assert_eq!(t.read_line().unwrap(), "c");
        assert_eq!(t.position().column, 2);
    }

    #[test]
    fn test_lenient_crlf_still_single_line_end() {
        let mut t = lenient("one\r\ntwo\r\n");
        assert_eq!(t.read_line().unwrap(), "one");
        assert_eq!(t.read_line().unwrap(), "two");
        assert!(matches!(t.read_line(), Err(ReadError::EndOfInput)));
        assert_eq!(t.position().line, 3);
    }

    #[test]
    fn test_read_line() {
        let mut t = tokenizer("first line\nsecond\r\n\nlast");
        assert_eq!(t.read_line().unwrap(), "first line");
        assert_eq!(t.read_line().unwrap(), "second");
        assert_eq!(t.read_line().unwrap(), "");
        assert_eq!(t.read_line().unwrap(), "last");
        assert!(matches!(t.read_line(), Err(ReadError::EndOfInput)));
    }

    #[test]
    fn test_read_line_keeps_inner_whitespace() {
        let mut t = tokenizer("  a \t b  \n");
        assert_eq!(t.read_line().unwrap(), "  a \t b  ");
    }

    #[test]
    fn test_read_line_malformed_cr() {
        let mut t = tokenizer("bad\rline\n");
        let err = t.read_line().unwrap_err();
        assert!(err.is_fatal());
        assert!(matches!(err, ReadError::MalformedLineEnding { found: Some('l'), .. }));
    }

    #[test]
    fn test_skip_line() {
        let mut t = tokenizer("ignored words\nkept\n");
        t.skip_line().unwrap();
        assert_eq!(t.read_line().unwrap(), "kept");
    }

    #[test]
    fn test_read_char_no_skipping() {
        let mut t = tokenizer(" x");
        assert_eq!(t.read_char().unwrap(), ' ');
        assert_eq!(t.read_char().unwrap(), 'x');
        assert!(matches!(t.read_char(), Err(ReadError::EndOfInput)));
    }

    #[test]
    fn test_read_char_ln_skips_empty_lines() {
        let mut t = tokenizer("\n\r\n\nyes please\nnext\n");
        assert_eq!(t.read_char_ln().unwrap(), 'y');
        assert_eq!(t.read_line().unwrap(), "next");
    }

    #[test]
    fn test_read_char_ln_bounded_at_end() {
        let mut t = tokenizer("\n\n\n");
        assert!(matches!(t.read_char_ln(), Err(ReadError::EndOfInput)));
    }

    #[test]
    fn test_read_word_ln() {
        let mut t = tokenizer("cmd arg1 arg2\nnext\n");
        assert_eq!(t.read_word_ln().unwrap(), "cmd");
        assert_eq!(t.read_word().unwrap().text, "next");
    }

    #[test]
    fn test_read_word_ln_at_end_of_stream() {
        let mut t = tokenizer("cmd ");
        assert_eq!(t.read_word_ln().unwrap(), "cmd");
        assert!(matches!(t.read_word(), Err(ReadError::EndOfInput)));
    }

    #[test]
    fn test_read_raw_tags() {
        let mut t = tokenizer("a");
        assert_eq!(t.read_raw().char(), Some('a'));
        assert!(t.read_raw().is_end());
    }

    #[test]
    fn test_flush_pending_input() {
        let mut t = tokenizer("typed ahead\nmore\n");
        assert_eq!(t.read_char().unwrap(), 't');
        t.flush_pending_input();
        assert!(matches!(t.read_char(), Err(ReadError::EndOfInput)));
    }

    #[test]
    fn test_into_inner() {
        let t = tokenizer("abc");
        let inner = t.into_inner();
        assert_eq!(inner, b"abc");
    }
}
