//! This module implements the `Position` structure, which represents a position in the source code.

#[cfg(feature = "deser")]
use serde::{Deserialize, Serialize};

/// A position in the source code: 1-based line, 0-based column, over UTF-16 code units.
///
/// `column_number` is the offset of this position from the start of its line (or from the
/// start of the source, on the first line), counting code units, not bytes, since the
/// scanner walks the source as UTF-16.
///
/// ## Similar Implementations
/// [V8: Location](https://cs.chromium.org/chromium/src/v8/src/parsing/scanner.h?type=cs&q=isValid+Location&g=0&l=216)
#[cfg_attr(feature = "deser", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Position {
    pub line_number: u32,
    pub column_number: u32,
}

impl Position {
    /// Creates a new `Position`.
    pub fn new(line_number: u32, column_number: u32) -> Self {
        Self {
            line_number,
            column_number,
        }
    }
}

/// A half-open `[start, end)` range over a token's source span, in code-unit offsets.
///
/// Only populated when [`crate::LexerOptions::ranges`] is enabled; otherwise both fields
/// default to `0`.
#[cfg_attr(feature = "deser", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self {
            line_number: 1,
            column_number: 0,
        }
    }
}
