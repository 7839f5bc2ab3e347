//! Conin Tokenizer
//!
//! 控制台输入分词器，分层设计：
//! - core：字符源与位置追踪（字节 → 字符）
//! - separator：分隔符判定
//! - tokenizer：单词、行、字符读取与行尾规范化
//! - parse：数值类型解析

pub mod core;
pub mod error;
pub mod parse;
pub mod separator;
pub mod tokenizer;
pub mod types;

pub use self::core::{CharSource, RawChar, SourcePosition};
pub use error::{ReadError, ReadResult};
pub use parse::parse_word;
pub use separator::is_separator;
pub use tokenizer::LineTokenizer;
pub use types::{LineEnding, Terminator, Word};
