//! Conin Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all Conin crates.

use serde::Deserialize;

/// How a carriage return that is not followed by a line feed is treated
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEndingPolicy {
    /// Only LF and CR LF end a line; a lone CR is an error
    #[default]
    Strict,
    /// A lone CR (classic Mac OS) also ends a line
    Lenient,
}

/// How raw input bytes become characters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharDecoding {
    /// UTF-8, malformed sequences become U+FFFD
    #[default]
    Utf8,
    /// One byte is one character (ISO-8859-1)
    Latin1,
}

/// Configuration for a tokenizer instance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Line ending policy
    pub line_endings: LineEndingPolicy,
    /// Character decoding
    pub decoding: CharDecoding,
}

impl TokenizerConfig {
    /// Legacy byte-at-a-time behaviour: Latin-1 decoding, strict line endings
    pub fn legacy() -> Self {
        Self {
            line_endings: LineEndingPolicy::Strict,
            decoding: CharDecoding::Latin1,
        }
    }

    /// Builder-style setter for the line ending policy
    pub fn with_line_endings(mut self, policy: LineEndingPolicy) -> Self {
        self.line_endings = policy;
        self
    }

    /// Builder-style setter for the decoding
    pub fn with_decoding(mut self, decoding: CharDecoding) -> Self {
        self.decoding = decoding;
        self
    }
}

/// Processing phase, used to route log output
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Raw character source
    Source,
    /// Word and line tokenizing
    Tokenizer,
    /// Typed value parsing
    Parser,
    /// Command line front end
    Cli,
}

impl Phase {
    /// All phases, in pipeline order
    pub const ALL: [Phase; 4] = [Phase::Source, Phase::Tokenizer, Phase::Parser, Phase::Cli];

    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Source => "source",
            Phase::Tokenizer => "tokenizer",
            Phase::Parser => "parser",
            Phase::Cli => "cli",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("conin::{}", self.as_str())
    }
}
