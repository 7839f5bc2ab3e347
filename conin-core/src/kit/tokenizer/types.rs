//! Word and terminator types

use std::fmt;

/// Which end-of-line marker closed a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
    /// `\r` alone, only accepted under the lenient policy
    Cr,
}

impl LineEnding {
    /// The marker as it appeared in the input
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::Cr => "\r",
        }
    }
}

/// What was consumed right after a word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// An end-of-line marker
    LineEnd(LineEnding),
    /// Any other separator
    Separator(char),
    /// The stream ended right after the word
    EndOfStream,
}

impl Terminator {
    /// Whether the terminator was an end-of-line marker
    pub fn is_line_end(&self) -> bool {
        matches!(self, Terminator::LineEnd(_))
    }

    /// Whether the rest of the current line still has to be read
    ///
    /// False when a line end was consumed, or when there is nothing left.
    pub fn leaves_line_open(&self) -> bool {
        matches!(self, Terminator::Separator(_))
    }
}

/// A whitespace-delimited word together with its terminator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// Word content, never empty and never containing a separator
    pub text: String,
    /// Separator consumed after the word
    pub terminator: Terminator,
}

impl Word {
    /// Whether reading this word also consumed the end of its line
    pub fn ends_line(&self) -> bool {
        self.terminator.is_line_end()
    }

    /// Take the text
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
