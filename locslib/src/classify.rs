//! Per-line classification for C-family comment syntax.
//!
//! A single line plus the "inside a block comment" flag is enough to decide
//! whether the line is blank, comment, or source. The function is a
//! single-pass heuristic, not a lexer: a block comment opened and closed on
//! the same line with trailing code counts as comment, and markers inside
//! string literals are honored as markers. These limitations are kept on
//! purpose.

use serde::{Deserialize, Serialize};

/// Category of a single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    /// Whitespace-only line
    Blank,
    /// Line comment, or any line inside a block comment
    Comment,
    /// Everything else
    Source,
}

/// Classify one raw line given the current block-comment state.
///
/// Returns the line's category and the state to carry to the next line.
/// Total over all byte sequences; non-ASCII bytes are opaque data.
///
/// The checks run in priority order. "Ends with `*/`" is tested before the
/// `in_comment` fallthrough so that the line closing a block comment is
/// tagged while the state still reads "inside".
pub fn classify(line: &[u8], in_comment: bool) -> (LineKind, bool) {
    let trimmed = line.trim_ascii();

    if trimmed.is_empty() {
        (LineKind::Blank, in_comment)
    } else if trimmed.starts_with(b"//") {
        (LineKind::Comment, in_comment)
    } else if trimmed.starts_with(b"/*") {
        (LineKind::Comment, true)
    } else if trimmed.ends_with(b"*/") {
        (LineKind::Comment, false)
    } else if in_comment {
        (LineKind::Comment, in_comment)
    } else {
        (LineKind::Source, in_comment)
    }
}
