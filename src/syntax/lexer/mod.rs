//! A lexical analyzer for ECMAScript source code.
//!
//! The lexer splits its input source text into a sequence of classified [`Token`]s, removing
//! whitespace and comments along the way. It performs no parsing of its own: callers drive it
//! one token at a time through [`Lexer::next_token`], supplying a [`Context`] bitset that
//! carries the handful of facts only the parser knows (whether a `/` can start a regular
//! expression here, whether the current code is strict, ...).

mod comment;
mod cursor;
mod identifier;
mod number;
mod regex;
mod string;
mod template;
mod unicode;

#[cfg(test)]
mod tests;

use crate::profiler::BoaProfiler;
use crate::syntax::position::{Position, Span};
use crate::syntax::token::{Token, TokenFlags, TokenKind};
use cursor::Cursor;
use std::fmt;

pub use regex::RegExpFlagsError;

bitflags::bitflags! {
    /// Per-call context the parser passes to [`Lexer::next_token`].
    ///
    /// Unlike [`LexerOptions`] (fixed for the whole parse), these bits can change from one
    /// `next_token` call to the next — most importantly `ALLOW_REG_EXP`, which the parser
    /// flips depending on whether a `/` at the current position would begin a division
    /// expression or a regular expression literal (see [ECMA-262 §12.9.5][spec]).
    ///
    /// [spec]: https://tc39.es/ecma262/#sec-regular-expression-literals
    #[derive(Default)]
    pub struct Context: u8 {
        /// A `/` at the current position should be scanned as the start of a
        /// `RegularExpressionLiteral`, not as a `Div`/`AssignDiv` punctuator.
        const ALLOW_REG_EXP = 0b0000_0001;
        /// The scanner is inside code governed by a `"use strict"` directive (or a Module,
        /// or a class body, all of which are always-strict).
        const STRICT = 0b0000_0010;
        /// The source is being parsed with the Module goal symbol rather than Script; this
        /// also implies `STRICT`, but is tracked separately since a handful of diagnostics
        /// (`import`/`export` placement) need to know the goal, not just strictness.
        const MODULE = 0b0000_0100;
    }
}

/// Options fixed for the lifetime of a single parse, mirroring the options object accepted
/// by real-world ECMAScript parsers. Only the options that affect scanning are acted on here
/// (`module`, `next`, `raw`, `webcompat`, `loc`, `ranges`, `jsx`); the rest
/// (`directives`, `globalReturn`, `impliedStrict`, `specDeviation`) are accepted and carried
/// on the struct for round-tripping a full options object, but only affect syntactic parsing
/// and are no-ops at this layer.
#[derive(Debug, Clone, Copy)]
pub struct LexerOptions {
    /// Parse as a Module rather than a Script.
    pub module: bool,
    /// Accept stage-3 syntax proposals beyond the current ES2022+ baseline.
    pub next: bool,
    /// Preserve the raw source text of every literal on its token, even when a cooked value
    /// is also produced (useful for source-preserving tools).
    pub raw: bool,
    /// Accept the Annex B web-compatibility grammar (HTML-style comments, legacy octal
    /// escapes outside strict mode, ...). Defaults to `true`, matching real-world engines.
    pub webcompat: bool,
    /// Attach line/column [`Position`]s to token spans. When `false`, spans still carry
    /// code-unit offsets but `Position` fields are left at their default.
    pub loc: bool,
    /// Attach code-unit `[start, end)` ranges to tokens.
    pub ranges: bool,
    pub directives: bool,
    pub global_return: bool,
    pub implied_strict: bool,
    /// Recognize JSX syntax islands (`<`-led element syntax) — accepted for interface
    /// completeness; JSX is out of scope for this scanner (see [`ErrorKind`] for what it
    /// does scan) and this flag is currently inert.
    pub jsx: bool,
    pub spec_deviation: bool,
    /// Emit `TokenKind::Comment` tokens instead of silently skipping comments.
    pub comments: bool,
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self {
            module: false,
            next: false,
            raw: false,
            webcompat: true,
            loc: true,
            ranges: false,
            directives: true,
            global_return: false,
            implied_strict: false,
            jsx: false,
            spec_deviation: false,
            comments: false,
        }
    }
}

/// The closed set of diagnoses the scanner can raise. Every variant here is something a
/// caller can match on and recover from; unlike a panic, none of these ever leave the lexer
/// in an inconsistent state — `next_token` can always be called again afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated template literal")]
    UnterminatedTemplate,
    #[error("unterminated comment")]
    UnterminatedComment,
    #[error("unterminated regular expression literal")]
    UnterminatedRegExp,
    #[error("invalid or incomplete escape sequence")]
    InvalidEscapeSequence,
    #[error("invalid Unicode escape sequence")]
    InvalidUnicodeEscape,
    #[error("Unicode code point must not be greater than 0x10FFFF")]
    UnicodeEscapeOutOfRange,
    #[error("unexpected character")]
    UnexpectedCharacter,
    #[error("invalid numeric literal")]
    InvalidNumericLiteral,
    #[error("numeric separator '_' is not allowed in this position")]
    InvalidNumericSeparator,
    #[error("a BigInt literal must be an integer")]
    InvalidBigIntLiteral,
    #[error("numeric literal must not be followed by an identifier or digit")]
    NumericLiteralFollowedByIdentifier,
    #[error("octal literals are not allowed in strict mode")]
    LegacyOctalInStrictMode,
    #[error("\\8 and \\9 are not allowed in strict mode")]
    NonOctalDecimalEscapeInStrictMode,
    #[error("decimals with leading zeros are not allowed in strict mode")]
    LeadingZeroInStrictMode,
    #[error("line breaks are not allowed in regular expression literals")]
    RegExpUnterminatedByLineBreak,
    #[error("invalid regular expression flags")]
    InvalidRegExpFlags,
    #[error("duplicate regular expression flag")]
    DuplicateRegExpFlag,
    #[error("invalid regular expression pattern")]
    InvalidRegExpPattern,
    #[error("keyword used as identifier is not allowed in strict mode")]
    ReservedWordInStrictMode,
    #[error("unpaired surrogate code unit in source text")]
    UnpairedSurrogate,
}

/// A single recorded diagnostic, carrying enough information for a caller to point at the
/// offending source text without re-scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: ErrorKind,
    pub severity: Severity,
    pub span: Span,
}

/// Distinguishes diagnostics the scanner can fully recover from (and keep producing tokens
/// after) from ones serious enough that the token stream should be considered unusable from
/// that point on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Fatal,
}

/// A lexical error, as returned by the convenience [`Lexer::tokens_raw`] driver. `next_token`
/// itself never returns `Result` — it always returns a `Token`, using
/// [`TokenKind::Error`] to report a diagnosis so a caller polling it in a loop never has to
/// special-case an `Err` arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at {span:?}")]
pub struct Error {
    pub kind: ErrorKind,
    pub span: Span,
}

/// What kind of brace a `{`/`}` pair on the brace stack closes, so the dispatcher knows
/// whether a `}` closes an ordinary block or should resume scanning a template literal's
/// substitution gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum BraceContext {
    Block,
    TemplateSubstitution,
}

/// A lexical analyzer for ECMAScript source code.
///
/// Holds the entire source as a UTF-16 code-unit buffer (see the crate's data-model notes on
/// why: surrogate pairs and column counting both need code-unit granularity) plus the small
/// amount of mutable state a pull-mode scanner needs between calls: the brace-kind stack for
/// template re-entry, scratch buffers reused across escape-bearing tokens, and whether a
/// fatal diagnostic has been raised.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    options: LexerOptions,
    brace_stack: Vec<BraceContext>,
    scratch: Vec<u16>,
    diagnostics: Vec<Diagnostic>,
    fatal: bool,
    done: bool,
}

impl fmt::Debug for Lexer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexer")
            .field("position", &self.cursor.pos())
            .field("options", &self.options)
            .field("fatal", &self.fatal)
            .finish()
    }
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `source`, converting it to UTF-16 code units once up front. The
    /// returned lexer owns that buffer (via [`Cursor`]'s `Cow`), so it is not tied to
    /// `source`'s lifetime.
    pub fn new(source: &str) -> Lexer<'static> {
        let units: Vec<u16> = source.encode_utf16().collect();
        Lexer {
            cursor: Cursor::new(units),
            options: LexerOptions::default(),
            brace_stack: Vec::new(),
            scratch: Vec::new(),
            diagnostics: Vec::new(),
            fatal: false,
            done: false,
        }
    }

    /// Like [`Lexer::new`], but with explicit [`LexerOptions`].
    pub fn with_options(source: &str, options: LexerOptions) -> Lexer<'static> {
        let units: Vec<u16> = source.encode_utf16().collect();
        Lexer {
            cursor: Cursor::new(units),
            options,
            brace_stack: Vec::new(),
            scratch: Vec::new(),
            diagnostics: Vec::new(),
            fatal: false,
            done: false,
        }
    }

    /// Creates a lexer directly over a caller-owned UTF-16 buffer, avoiding the reallocation
    /// `new`/`with_options` perform when the caller already holds `u16` code units (e.g. an
    /// embedder coming from a JS host's own string representation).
    pub fn from_code_units(source: &'a [u16], options: LexerOptions) -> Self {
        Self {
            cursor: Cursor::new(source),
            options,
            brace_stack: Vec::new(),
            scratch: Vec::new(),
            diagnostics: Vec::new(),
            fatal: false,
            done: false,
        }
    }

    /// Diagnostics accumulated so far (recoverable ones included). Draining this does not
    /// affect scanning — it is purely a side channel for a caller that wants every warning,
    /// not just the last one surfaced on a token.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Whether a fatal diagnostic has been raised; once `true`, further `next_token` calls
    /// will keep returning `EndOfSource` rather than attempt to resynchronize.
    pub fn is_fatal(&self) -> bool {
        self.fatal
    }

    fn record(&mut self, kind: ErrorKind, severity: Severity, span: Span) {
        if severity == Severity::Fatal {
            self.fatal = true;
        }
        self.diagnostics.push(Diagnostic {
            kind,
            severity,
            span,
        });
    }

    fn error_token(&mut self, kind: ErrorKind, severity: Severity, start: Position) -> TokenKind {
        let span = Span::new(start, self.cursor.pos());
        log::debug!("lexer diagnostic: {kind} ({severity:?}) at {start:?}");
        self.record(kind, severity, span);
        TokenKind::Error(kind)
    }

    fn span_from(&self, start: Position) -> Span {
        if self.options.loc {
            Span::new(start, self.cursor.pos())
        } else {
            Span::default()
        }
    }

    fn strict(&self, ctx: Context) -> bool {
        ctx.contains(Context::STRICT)
    }

    /// Pulls the next token from the source, given the parser-supplied `ctx`.
    ///
    /// Whitespace and comments (unless [`LexerOptions::comments`] is set) are skipped before
    /// the token proper is scanned; [`Token::preceding_line_break`] reports whether any of
    /// the skipped text contained a line terminator, which is what automatic semicolon
    /// insertion keys off of.
    pub fn next_token(&mut self, ctx: Context) -> Token {
        let _timer = BoaProfiler::global().start_event("Lexer::next_token", "Lexing");

        if self.done {
            let offset = self.cursor.index();
            return Token::new(
                TokenKind::EndOfSource,
                self.span_from(self.cursor.pos()),
                (offset, offset),
                TokenFlags::empty(),
            );
        }

        let mut preceding_line_break = false;
        loop {
            match self.cursor.peek() {
                None => break,
                Some(unit) => {
                    if let Some(c) = char::from_u32(u32::from(unit)) {
                        if unicode::is_line_terminator(c) {
                            preceding_line_break = true;
                            self.cursor.next();
                            continue;
                        }
                        if unicode::is_whitespace(c) {
                            self.cursor.next();
                            continue;
                        }
                    }
                    if unit == u16::from(b'/') && !self.options.comments {
                        if self.cursor.peek_at(1) == Some(u16::from(b'/')) {
                            self.comment_skip_line();
                            continue;
                        }
                        if self.cursor.peek_at(1) == Some(u16::from(b'*')) {
                            let had_newline = self.comment_skip_block();
                            preceding_line_break |= had_newline;
                            continue;
                        }
                    }
                    if self.options.webcompat
                        && !self.options.module
                        && self.try_skip_html_comment(&mut preceding_line_break)
                    {
                        continue;
                    }
                    break;
                }
            }
        }

        let start = self.cursor.pos();
        let start_offset = self.cursor.index();

        if self.cursor.is_eof() {
            self.done = true;
            return Token::new(
                TokenKind::EndOfSource,
                self.span_from(start),
                (start_offset, start_offset),
                if preceding_line_break {
                    TokenFlags::PRECEDING_LINE_BREAK
                } else {
                    TokenFlags::empty()
                },
            );
        }

        let mut flags = if preceding_line_break {
            TokenFlags::PRECEDING_LINE_BREAK
        } else {
            TokenFlags::empty()
        };

        if self.options.comments && self.cursor.peek() == Some(u16::from(b'/')) {
            if self.cursor.peek_at(1) == Some(u16::from(b'/')) {
                self.comment_skip_line();
                let end_offset = self.cursor.index();
                return Token::new(TokenKind::Comment, self.span_from(start), (start_offset, end_offset), flags);
            }
            if self.cursor.peek_at(1) == Some(u16::from(b'*')) {
                self.comment_skip_block();
                let end_offset = self.cursor.index();
                return Token::new(TokenKind::Comment, self.span_from(start), (start_offset, end_offset), flags);
            }
        }

        let kind = self.scan_token(ctx, start, &mut flags);
        let end_offset = self.cursor.index();
        Token::new(
            kind,
            self.span_from(start),
            (start_offset, end_offset),
            flags,
        )
    }

    /// Convenience all-at-once driver: lexes the whole buffer with a fixed `ctx`, stopping at
    /// `EndOfSource`. Handy for tests, benchmarks, and callers that don't need to change
    /// `ALLOW_REG_EXP` mid-stream.
    pub fn tokens_raw(&mut self, ctx: Context) -> Vec<Token> {
        let mut out = Vec::new();
        loop {
            let tok = self.next_token(ctx);
            let is_eof = matches!(tok.kind(), TokenKind::EndOfSource);
            out.push(tok);
            if is_eof {
                break;
            }
        }
        out
    }

    fn scan_token(&mut self, ctx: Context, start: Position, flags: &mut TokenFlags) -> TokenKind {
        let unit = self.cursor.peek().expect("checked not EOF above");
        log::trace!(
            "scan_token: dispatching on unit {:#06x} at {:?}",
            unit,
            start
        );

        if unit < 128 {
            match ASCII_DISPATCH[unit as usize] {
                Dispatch::Identifier => return self.scan_identifier(start, ctx, flags),
                Dispatch::Digit => return self.scan_number(start, ctx),
                Dispatch::Quote => {
                    let quote = char::from(unit as u8);
                    self.cursor.next();
                    return self.scan_string(start, quote, ctx, flags);
                }
                Dispatch::Backtick => {
                    self.cursor.next();
                    return self.scan_template_head(start);
                }
                Dispatch::Hash => return self.scan_private_identifier(start),
                Dispatch::Punctuator => {
                    if unit == u16::from(b'.')
                        && matches!(self.cursor.peek_at(1), Some(u) if (u'0' as u16..=u'9' as u16).contains(&u))
                    {
                        return self.scan_number(start, ctx);
                    }
                    return self.scan_punctuator(start, ctx);
                }
                Dispatch::Invalid => {
                    self.cursor.next();
                    return self.error_token(
                        ErrorKind::UnexpectedCharacter,
                        Severity::Fatal,
                        start,
                    );
                }
            }
        }

        match self.cursor.peek_code_point() {
            Some(Ok(c)) if unicode::is_identifier_start(c) => {
                self.scan_identifier(start, ctx, flags)
            }
            Some(Ok(_)) => {
                self.cursor.next_code_point();
                self.error_token(ErrorKind::UnexpectedCharacter, Severity::Fatal, start)
            }
            Some(Err(_)) => {
                self.cursor.next();
                self.error_token(ErrorKind::UnpairedSurrogate, Severity::Fatal, start)
            }
            None => unreachable!("checked not EOF above"),
        }
    }

    fn scan_private_identifier(&mut self, start: Position) -> TokenKind {
        self.cursor.next(); // '#'
        match self.cursor.peek_code_point() {
            Some(Ok(c)) if unicode::is_identifier_start(c) => {}
            _ => return self.error_token(ErrorKind::UnexpectedCharacter, Severity::Fatal, start),
        }
        let mut dummy_flags = TokenFlags::empty();
        match self.scan_identifier(start, Context::empty(), &mut dummy_flags) {
            TokenKind::Identifier(name, _) => TokenKind::PrivateIdentifier(name),
            TokenKind::Keyword(kw) => TokenKind::PrivateIdentifier(kw.to_string().into_boxed_str()),
            other => other,
        }
    }

    fn scan_punctuator(&mut self, start: Position, ctx: Context) -> TokenKind {
        use crate::syntax::punctuator::Punctuator as P;

        let first = self.cursor.next().expect("checked by caller") as u8 as char;

        macro_rules! tok {
            ($p:expr) => {
                TokenKind::Punctuator(P::$p)
            };
        }

        match first {
            '{' => {
                self.brace_stack.push(BraceContext::Block);
                tok!(OpenBlock)
            }
            '}' => match self.brace_stack.pop() {
                Some(BraceContext::TemplateSubstitution) => self.scan_template_continuation(start),
                _ => tok!(CloseBlock),
            },
            '(' => tok!(OpenParen),
            ')' => tok!(CloseParen),
            '[' => tok!(OpenBracket),
            ']' => tok!(CloseBracket),
            ';' => tok!(Semicolon),
            ',' => tok!(Comma),
            ':' => tok!(Colon),
            '~' => tok!(Neg),
            '+' => {
                if self.cursor.next_is_ascii('+') {
                    tok!(Inc)
                } else if self.cursor.next_is_ascii('=') {
                    tok!(AssignAdd)
                } else {
                    tok!(Add)
                }
            }
            '-' => {
                if self.cursor.next_is_ascii('-') {
                    tok!(Dec)
                } else if self.cursor.next_is_ascii('=') {
                    tok!(AssignSub)
                } else {
                    tok!(Sub)
                }
            }
            '*' => {
                if self.cursor.next_is_ascii('*') {
                    if self.cursor.next_is_ascii('=') {
                        tok!(AssignPow)
                    } else {
                        tok!(Exp)
                    }
                } else if self.cursor.next_is_ascii('=') {
                    tok!(AssignMul)
                } else {
                    tok!(Mul)
                }
            }
            '%' => {
                if self.cursor.next_is_ascii('=') {
                    tok!(AssignMod)
                } else {
                    tok!(Mod)
                }
            }
            '/' => {
                // The whitespace/comment skip loop in `next_token` already consumed `//` and
                // `/*` forms; a `/` reaching here always starts Div/AssignDiv or a regex.
                if ctx.contains(Context::ALLOW_REG_EXP) {
                    log::trace!("scan_punctuator: '/' disambiguated as RegularExpressionLiteral at {:?}", start);
                    return self.scan_regex(start);
                }
                if self.cursor.next_is_ascii('=') {
                    tok!(AssignDiv)
                } else {
                    tok!(Div)
                }
            }
            '&' => {
                if self.cursor.next_is_ascii('&') {
                    if self.cursor.next_is_ascii('=') {
                        tok!(AssignBoolAnd)
                    } else {
                        tok!(BoolAnd)
                    }
                } else if self.cursor.next_is_ascii('=') {
                    tok!(AssignAnd)
                } else {
                    tok!(And)
                }
            }
            '|' => {
                if self.cursor.next_is_ascii('|') {
                    if self.cursor.next_is_ascii('=') {
                        tok!(AssignBoolOr)
                    } else {
                        tok!(BoolOr)
                    }
                } else if self.cursor.next_is_ascii('=') {
                    tok!(AssignOr)
                } else {
                    tok!(Or)
                }
            }
            '^' => {
                if self.cursor.next_is_ascii('=') {
                    tok!(AssignXor)
                } else {
                    tok!(Xor)
                }
            }
            '!' => {
                if self.cursor.next_is_ascii('=') {
                    if self.cursor.next_is_ascii('=') {
                        tok!(StrictNotEq)
                    } else {
                        tok!(NotEq)
                    }
                } else {
                    tok!(Not)
                }
            }
            '=' => {
                if self.cursor.next_is_ascii('=') {
                    if self.cursor.next_is_ascii('=') {
                        tok!(StrictEq)
                    } else {
                        tok!(Eq)
                    }
                } else if self.cursor.next_is_ascii('>') {
                    tok!(Arrow)
                } else {
                    tok!(Assign)
                }
            }
            '<' => {
                if self.cursor.next_is_ascii('<') {
                    if self.cursor.next_is_ascii('=') {
                        tok!(AssignLeftSh)
                    } else {
                        tok!(LeftSh)
                    }
                } else if self.cursor.next_is_ascii('=') {
                    tok!(LessThanOrEq)
                } else {
                    tok!(LessThan)
                }
            }
            '>' => {
                if self.cursor.next_is_ascii('>') {
                    if self.cursor.next_is_ascii('>') {
                        if self.cursor.next_is_ascii('=') {
                            tok!(AssignURightSh)
                        } else {
                            tok!(URightSh)
                        }
                    } else if self.cursor.next_is_ascii('=') {
                        tok!(AssignRightSh)
                    } else {
                        tok!(RightSh)
                    }
                } else if self.cursor.next_is_ascii('=') {
                    tok!(GreaterThanOrEq)
                } else {
                    tok!(GreaterThan)
                }
            }
            '?' => {
                if self.cursor.peek() == Some(u16::from(b'.'))
                    && !matches!(self.cursor.peek_at(1), Some(u) if (u'0' as u16..=u'9' as u16).contains(&u))
                {
                    // `?.` not followed by a digit is optional chaining; `?.5` instead
                    // backs off so the following `.5` scans as a numeric literal (this is
                    // the disambiguation real engines perform for `a ? .5 : .6`).
                    self.cursor.next();
                    tok!(Optional)
                } else if self.cursor.next_is_ascii('?') {
                    if self.cursor.next_is_ascii('=') {
                        tok!(AssignCoalesce)
                    } else {
                        tok!(Coalesce)
                    }
                } else {
                    tok!(Question)
                }
            }
            '.' => {
                if self.cursor.peek() == Some(u16::from(b'.'))
                    && self.cursor.peek_at(1) == Some(u16::from(b'.'))
                {
                    self.cursor.next();
                    self.cursor.next();
                    tok!(Spread)
                } else {
                    tok!(Dot)
                }
            }
            _ => unreachable!("ASCII_DISPATCH only routes known punctuator starters here"),
        }
    }
}

/// Tags used by the 128-entry ASCII dispatch table: the first classification step every
/// token goes through before falling into a specific scanner.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Dispatch {
    Identifier,
    Digit,
    Quote,
    Backtick,
    Hash,
    Punctuator,
    Invalid,
}

const fn classify(byte: u8) -> Dispatch {
    match byte {
        b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'$' | b'\\' => Dispatch::Identifier,
        b'0'..=b'9' => Dispatch::Digit,
        b'\'' | b'"' => Dispatch::Quote,
        b'`' => Dispatch::Backtick,
        b'#' => Dispatch::Hash,
        b'{' | b'}' | b'(' | b')' | b'[' | b']' | b';' | b',' | b'<' | b'>' | b'=' | b'!'
        | b'+' | b'-' | b'*' | b'%' | b'&' | b'|' | b'^' | b'~' | b'?' | b':' | b'.' | b'/' => {
            Dispatch::Punctuator
        }
        _ => Dispatch::Invalid,
    }
}

const ASCII_DISPATCH: [Dispatch; 128] = {
    let mut table = [Dispatch::Invalid; 128];
    let mut i = 0;
    while i < 128 {
        table[i] = classify(i as u8);
        i += 1;
    }
    table
};
