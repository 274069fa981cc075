//! This module implements all of the [Token]s produced while scanning ECMAScript source text.
//!
//! More information:
//!  - [ECMAScript reference][spec]
//!
//! [spec]: https://tc39.es/ecma262/#sec-tokens

use crate::syntax::bigint::JsBigInt;
use crate::syntax::keyword::{ContextualKeyword, Keyword};
use crate::syntax::lexer::ErrorKind;
use crate::syntax::punctuator::Punctuator;
use crate::syntax::position::Span;

#[cfg(feature = "deser")]
use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// Bits attached to a token that describe *how* it was scanned rather than *what* it is.
    ///
    /// Kept separate from [`TokenKind`] so the common, data-carrying match arms stay small;
    /// a parser only inspects these bits in the handful of productions that care (ASI,
    /// `with`/strict-mode identifier restrictions, tagged templates with invalid escapes).
    #[cfg_attr(feature = "deser", derive(Serialize, Deserialize))]
    pub struct TokenFlags: u8 {
        /// At least one line terminator appeared between the end of the previous token and
        /// the start of this one. Drives automatic semicolon insertion downstream.
        const PRECEDING_LINE_BREAK = 0b0000_0001;
        /// An identifier or keyword spelling contained a `\uXXXX`/`\u{X}` escape.
        const ESCAPED = 0b0000_0010;
        /// A string/template escape used the legacy (pre-ES5, non-strict-only) octal form.
        const LEGACY_OCTAL = 0b0000_0100;
        /// The token's kind is reserved only in strict mode (`StrictModeReservedWord`).
        const STRICT_RESERVED = 0b0000_1000;
    }
}

impl Default for TokenFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// The raw (as-written) and cooked (decoded) text of a template literal span.
#[cfg_attr(feature = "deser", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct TemplateString {
    pub raw: Box<str>,
    /// `None` when an invalid escape makes the cooked value `undefined` per the grammar,
    /// while the raw text (needed by tagged templates) is still returned.
    pub cooked: Option<Box<str>>,
}

bitflags::bitflags! {
    /// Flags of a `RegularExpressionLiteral`, per [ECMA-262 §22.2.2.1](https://tc39.es/ecma262/#sec-get-regexp.prototype.flags).
    #[cfg_attr(feature = "deser", derive(Serialize, Deserialize))]
    pub struct RegExpFlags: u16 {
        /// `d`
        const HAS_INDICES  = 0b0000_0001;
        /// `g`
        const GLOBAL       = 0b0000_0010;
        /// `i`
        const IGNORE_CASE  = 0b0000_0100;
        /// `m`
        const MULTILINE    = 0b0000_1000;
        /// `s`
        const DOT_ALL      = 0b0001_0000;
        /// `u`
        const UNICODE      = 0b0010_0000;
        /// `v`
        const UNICODE_SETS = 0b0100_0000;
        /// `y`
        const STICKY       = 0b1000_0000;
    }
}

/// Represents the different payload shapes a numeric literal token can carry.
#[cfg_attr(feature = "deser", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Debug)]
pub enum Numeric {
    /// A floating point number.
    Rational(f64),
    /// An integer that fits in `i32` without loss.
    Integer(i32),
    /// A `BigInt` (the literal carried a trailing `n`).
    BigInt(JsBigInt),
}

impl From<f64> for Numeric {
    fn from(n: f64) -> Self {
        Self::Rational(n)
    }
}

impl From<i32> for Numeric {
    fn from(n: i32) -> Self {
        Self::Integer(n)
    }
}

impl From<JsBigInt> for Numeric {
    fn from(n: JsBigInt) -> Self {
        Self::BigInt(n)
    }
}

/// Represents the kind of a [`Token`] and the data it carries, if any.
#[cfg_attr(feature = "deser", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Debug)]
pub enum TokenKind {
    /// A boolean literal, either `true` or `false`.
    BooleanLiteral(bool),
    /// The end of the source buffer.
    EndOfSource,
    /// An identifier, tagged with a contextual-keyword hint when its spelling happens to
    /// match one (`async`, `of`, `get`, ...). The parser decides whether the hint applies.
    Identifier(Box<str>, Option<ContextualKeyword>),
    /// A private identifier (`#name`), introduced for class private fields/methods.
    PrivateIdentifier(Box<str>),
    /// A reserved word.
    Keyword(Keyword),
    /// The `null` literal.
    NullLiteral,
    /// A numeric literal.
    NumericLiteral(Numeric),
    /// A piece of punctuation.
    Punctuator(Punctuator),
    /// A string literal.
    StringLiteral(Box<str>),
    /// A complete template literal with no substitutions: `` `text` ``.
    TemplateNoSubstitution(TemplateString),
    /// The opening piece of a template literal with substitutions: `` `text${ ``.
    TemplateHead(TemplateString),
    /// A middle piece of a template literal: `` }text${ ``.
    TemplateMiddle(TemplateString),
    /// The closing piece of a template literal: `` }text` ``.
    TemplateTail(TemplateString),
    /// A regular expression literal, with its body and parsed flags.
    RegularExpressionLiteral(Box<str>, RegExpFlags),
    /// A single-line or multi-line comment. Always produced with
    /// [`crate::LexerOptions::comments`] enabled; otherwise comments are skipped silently.
    Comment,
    /// A diagnosable lexical error. The scanner still advances past the offending text so a
    /// caller driving it in a loop can continue collecting further diagnostics.
    Error(ErrorKind),
}

impl From<bool> for TokenKind {
    fn from(b: bool) -> Self {
        Self::BooleanLiteral(b)
    }
}

impl From<Keyword> for TokenKind {
    fn from(kw: Keyword) -> Self {
        Self::Keyword(kw)
    }
}

impl From<Punctuator> for TokenKind {
    fn from(punc: Punctuator) -> Self {
        Self::Punctuator(punc)
    }
}

impl From<Numeric> for TokenKind {
    fn from(num: Numeric) -> Self {
        Self::NumericLiteral(num)
    }
}

impl TokenKind {
    pub fn numeric_literal<L: Into<Numeric>>(lit: L) -> Self {
        Self::NumericLiteral(lit.into())
    }

    /// `true` for `TokenKind::Keyword` and reserved-word-shaped identifiers; used by the
    /// parser to reject keywords where only a `BindingIdentifier` is legal.
    pub fn is_keyword(&self) -> bool {
        matches!(self, Self::Keyword(_))
    }

    /// Whether this token could begin an expression that a preceding `/` should be parsed
    /// as division against, rather than as the start of a regular expression literal. See
    /// the dispatcher's regex/division disambiguation.
    pub fn is_regexp_disallowed_context(&self) -> bool {
        matches!(
            self,
            Self::Identifier(_, _)
                | Self::NullLiteral
                | Self::BooleanLiteral(_)
                | Self::NumericLiteral(_)
                | Self::StringLiteral(_)
                | Self::TemplateNoSubstitution(_)
                | Self::TemplateTail(_)
                | Self::Punctuator(
                    Punctuator::CloseParen | Punctuator::CloseBracket | Punctuator::CloseBlock
                )
        ) || matches!(
            self,
            Self::Keyword(Keyword::This | Keyword::Super)
        )
    }
}

/// A single scanned token: its kind, source span, code-unit range and out-of-band flags.
#[cfg_attr(feature = "deser", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    kind: TokenKind,
    span: Span,
    /// Half-open `[start, end)` code-unit offsets of the token's raw text, independent of the
    /// `line`/`column` carried by `span` (see [`crate::LexerOptions::ranges`]).
    start: usize,
    end: usize,
    flags: TokenFlags,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span, range: (usize, usize), flags: TokenFlags) -> Self {
        Self {
            kind,
            span,
            start: range.0,
            end: range.1,
            flags,
        }
    }

    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// Code-unit offset of the token's first unit.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Code-unit offset one past the token's last unit.
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn flags(&self) -> TokenFlags {
        self.flags
    }

    /// Shorthand for `self.flags().contains(TokenFlags::PRECEDING_LINE_BREAK)`; this is the
    /// bit the parser consults most often, for automatic semicolon insertion.
    pub fn preceding_line_break(&self) -> bool {
        self.flags.contains(TokenFlags::PRECEDING_LINE_BREAK)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BooleanLiteral(val) => write!(f, "{}", val),
            Self::EndOfSource => write!(f, "end of source"),
            Self::Identifier(name, _) => write!(f, "{}", name),
            Self::PrivateIdentifier(name) => write!(f, "#{}", name),
            Self::Keyword(word) => write!(f, "{}", word),
            Self::NullLiteral => write!(f, "null"),
            Self::NumericLiteral(Numeric::Rational(num)) => {
                let mut buffer = ryu_js::Buffer::new();
                write!(f, "{}", buffer.format(*num))
            }
            Self::NumericLiteral(Numeric::Integer(num)) => write!(f, "{}", num),
            Self::NumericLiteral(Numeric::BigInt(num)) => write!(f, "{}", num),
            Self::Punctuator(punc) => write!(f, "{}", punc),
            Self::StringLiteral(lit) => write!(f, "{}", lit),
            Self::TemplateNoSubstitution(ts)
            | Self::TemplateHead(ts)
            | Self::TemplateMiddle(ts)
            | Self::TemplateTail(ts) => write!(f, "{}", ts.raw),
            Self::RegularExpressionLiteral(body, _) => write!(f, "/{}/", body),
            Self::Comment => write!(f, "comment"),
            Self::Error(kind) => write!(f, "{}", kind),
        }
    }
}
