//! Typed value reads
//!
//! Every numeric read comes in two flavours: the bare one reads a single word
//! and parses it, the `_ln` one additionally discards whatever is left on the
//! line the value was read from. Parsing uses the standard `FromStr` grammar
//! of the target type, so `+7`, `-3`, `1e3`, `inf` and `NaN` are accepted
//! where the type allows them.

use std::fmt::Display;
use std::io::Read;
use std::str::FromStr;

use tracing::debug;

use super::error::{ReadError, ReadResult};
use super::tokenizer::LineTokenizer;

/// Parse a single word as `T`
pub fn parse_word<T>(word: &str) -> ReadResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    word.parse::<T>().map_err(|e| {
        let target = short_type_name::<T>();
        debug!(target: "conin::parser", word, ty = target, error = %e, "Parse failed");
        ReadError::NumberFormat {
            word: word.to_string(),
            target,
            reason: e.to_string(),
        }
    })
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

impl<R: Read> LineTokenizer<R> {
    /// Read one word and parse it as `T`
    pub fn read<T>(&mut self) -> ReadResult<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let word = self.read_word()?;
        parse_word(&word.text)
    }

    /// Read one word, parse it as `T`, then drop the rest of its line
    ///
    /// A parse failure is reported before anything else is consumed.
    pub fn read_ln<T>(&mut self) -> ReadResult<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let word = self.read_word()?;
        let value = parse_word(&word.text)?;
        if word.terminator.leaves_line_open() {
            self.discard_rest_of_line()?;
        }
        Ok(value)
    }

    /// Signed 8-bit integer
    pub fn read_byte(&mut self) -> ReadResult<i8> {
        self.read()
    }

    /// Signed 8-bit integer, then skip the rest of its line
    pub fn read_byte_ln(&mut self) -> ReadResult<i8> {
        self.read_ln()
    }

    /// Signed 16-bit integer
    pub fn read_short(&mut self) -> ReadResult<i16> {
        self.read()
    }

    /// Signed 16-bit integer, then skip the rest of its line
    pub fn read_short_ln(&mut self) -> ReadResult<i16> {
        self.read_ln()
    }

    /// Signed 32-bit integer
    pub fn read_int(&mut self) -> ReadResult<i32> {
        self.read()
    }

    /// Signed 32-bit integer, then skip the rest of its line
    pub fn read_int_ln(&mut self) -> ReadResult<i32> {
        self.read_ln()
    }

    /// Signed 64-bit integer
    pub fn read_long(&mut self) -> ReadResult<i64> {
        self.read()
    }

    /// Signed 64-bit integer, then skip the rest of its line
    pub fn read_long_ln(&mut self) -> ReadResult<i64> {
        self.read_ln()
    }

    /// Single precision float
    pub fn read_float(&mut self) -> ReadResult<f32> {
        self.read()
    }

    /// Single precision float, then skip the rest of its line
    pub fn read_float_ln(&mut self) -> ReadResult<f32> {
        self.read_ln()
    }

    /// Double precision float
    pub fn read_double(&mut self) -> ReadResult<f64> {
        self.read()
    }

    /// Double precision float, then skip the rest of its line
    pub fn read_double_ln(&mut self) -> ReadResult<f64> {
        self.read_ln()
    }
}
