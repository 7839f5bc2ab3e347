//! Separator classification
//!
//! A character separates words when it is a Unicode space (category Zs, Zl
//! or Zp) other than the non-breaking spaces U+00A0, U+2007 and U+202F, or one
//! of the control characters TAB, LF, VT, FF, CR and the four ASCII
//! information separators U+001C..U+001F.
//!
//! This is deliberately narrower than [`char::is_whitespace`], which accepts
//! NEL (U+0085) and the non-breaking spaces, and wider in that it accepts the
//! information separators.

/// Line feed
pub const LF: char = '\n';
/// Carriage return
pub const CR: char = '\r';

/// Whether `c` separates words
pub fn is_separator(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | '\u{001C}'..='\u{001F}'
            | ' '
            | '\u{1680}'
            | '\u{2000}'..='\u{2006}'
            | '\u{2008}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{205F}'
            | '\u{3000}'
    )
}
