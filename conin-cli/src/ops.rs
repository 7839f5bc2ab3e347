//! 读取操作
//!
//! 命令行上的每个 OP 对应分词器的一个读取方法

use std::fmt;
use std::io::Read;

use clap::ValueEnum;
use conin::{LineTokenizer, ReadResult};
use serde::Serialize;

/// 一个读取操作
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReadOp {
    Byte,
    ByteLn,
    Short,
    ShortLn,
    Int,
    IntLn,
    Long,
    LongLn,
    Float,
    FloatLn,
    Double,
    DoubleLn,
    Word,
    WordLn,
    Line,
    SkipLine,
    Char,
    CharLn,
    /// 丢弃已到达但未读取的输入
    Flush,
}

/// 读取结果
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Char(char),
    Text(String),
    /// 没有产生值的操作（skip-line、flush）
    None,
}

impl ReadOp {
    /// 操作名（与命令行写法一致）
    pub fn name(&self) -> String {
        self.to_possible_value()
            .map(|v| v.get_name().to_string())
            .unwrap_or_else(|| format!("{self:?}"))
    }

    /// 在分词器上执行
    pub fn apply<R: Read>(self, input: &mut LineTokenizer<R>) -> ReadResult<Value> {
        let value = match self {
            ReadOp::Byte => Value::Byte(input.read_byte()?),
            ReadOp::ByteLn => Value::Byte(input.read_byte_ln()?),
            ReadOp::Short => Value::Short(input.read_short()?),
            ReadOp::ShortLn => Value::Short(input.read_short_ln()?),
            ReadOp::Int => Value::Int(input.read_int()?),
            ReadOp::IntLn => Value::Int(input.read_int_ln()?),
            ReadOp::Long => Value::Long(input.read_long()?),
            ReadOp::LongLn => Value::Long(input.read_long_ln()?),
            ReadOp::Float => Value::Float(input.read_float()?),
            ReadOp::FloatLn => Value::Float(input.read_float_ln()?),
            ReadOp::Double => Value::Double(input.read_double()?),
            ReadOp::DoubleLn => Value::Double(input.read_double_ln()?),
            ReadOp::Word => Value::Text(input.read_word()?.into_text()),
            ReadOp::WordLn => Value::Text(input.read_word_ln()?),
            ReadOp::Line => Value::Text(input.read_line()?),
            ReadOp::SkipLine => {
                input.skip_line()?;
                Value::None
            }
            ReadOp::Char => Value::Char(input.read_char()?),
            ReadOp::CharLn => Value::Char(input.read_char_ln()?),
            ReadOp::Flush => {
                input.flush_pending_input();
                Value::None
            }
        };
        Ok(value)
    }
}

impl Value {
    /// 是否产生了值
    pub fn is_some(&self) -> bool {
        !matches!(self, Value::None)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Byte(v) => write!(f, "{v}"),
            Value::Short(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Long(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Double(v) => write!(f, "{v}"),
            Value::Char(c) => write!(f, "{c}"),
            Value::Text(s) => f.write_str(s),
            Value::None => Ok(()),
        }
    }
}
