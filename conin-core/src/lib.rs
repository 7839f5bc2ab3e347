//! Conin Core - console input tokenizer
//!
//! Contains the character source, the word and line tokenizer and the typed
//! value parsers. Works on any `std::io::Read`; standard input is just the
//! usual binding.
//!
//! Configuration is passed explicitly via parameters, not via global state.

pub mod kit;

// Re-export common types
pub use kit::tokenizer::{
    is_separator, parse_word, CharSource, LineEnding, LineTokenizer, RawChar, ReadError,
    ReadResult, SourcePosition, Terminator, Word,
};

// Re-export config types from conin-config
pub use conin_config::{CharDecoding, LineEndingPolicy, Phase, TokenizerConfig};
