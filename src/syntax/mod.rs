//! Lexical analysis: turning source text into a stream of classified tokens.

/// Lexical analysis (tokenizing/lexing).
pub mod lexer;
/// Keyword recognition.
pub mod keyword;
/// Punctuator recognition.
pub mod punctuator;
/// Source position tracking.
pub mod position;
/// Token representation.
pub mod token;
/// Arbitrary-precision integers for `BigIntLiteral` tokens.
pub mod bigint;
