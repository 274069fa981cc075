//! Identifier, keyword and private-identifier scanning.

use super::unicode;
use super::{Context, ErrorKind, Lexer, Severity};
use crate::syntax::keyword::{ContextualKeyword, Keyword, STRICT_MODE_RESERVED_WORDS};
use crate::syntax::position::Position;
use crate::syntax::token::{TokenFlags, TokenKind};

impl<'a> Lexer<'a> {
    /// Scans an `IdentifierName`: a `IdentifierStart` followed by zero or more
    /// `IdentifierPart`s, each of which may be written directly or as a `\uXXXX`/`\u{X}`
    /// escape. Once scanned, the spelling is looked up in the reserved-word and
    /// contextual-keyword tables and classified accordingly.
    pub(super) fn scan_identifier(
        &mut self,
        start: Position,
        ctx: Context,
        flags: &mut TokenFlags,
    ) -> TokenKind {
        self.scratch.clear();
        let mut escaped = false;

        loop {
            match self.cursor.peek() {
                Some(u) if u == u16::from(b'\\') => {
                    escaped = true;
                    self.cursor.next();
                    if !self.cursor.next_is_ascii('u') {
                        return self.error_token(
                            ErrorKind::InvalidUnicodeEscape,
                            Severity::Fatal,
                            start,
                        );
                    }
                    match self.take_unicode_escape_sequence() {
                        Ok(c)
                            if (self.scratch.is_empty() && unicode::is_identifier_start(c))
                                || (!self.scratch.is_empty()
                                    && unicode::is_identifier_part(c)) =>
                        {
                            push_char(&mut self.scratch, c);
                        }
                        Ok(_) => {
                            return self.error_token(
                                ErrorKind::InvalidUnicodeEscape,
                                Severity::Fatal,
                                start,
                            )
                        }
                        Err(UnicodeEscapeError::OutOfRange) => {
                            return self.error_token(
                                ErrorKind::UnicodeEscapeOutOfRange,
                                Severity::Fatal,
                                start,
                            )
                        }
                        Err(UnicodeEscapeError::Malformed) => {
                            return self.error_token(
                                ErrorKind::InvalidUnicodeEscape,
                                Severity::Fatal,
                                start,
                            )
                        }
                    }
                }
                Some(_) => match self.cursor.peek_code_point() {
                    Some(Ok(c))
                        if (self.scratch.is_empty() && unicode::is_identifier_start(c))
                            || (!self.scratch.is_empty() && unicode::is_identifier_part(c)) =>
                    {
                        self.cursor.next_code_point();
                        push_char(&mut self.scratch, c);
                    }
                    _ => break,
                },
                None => break,
            }
        }

        if escaped {
            flags.insert(TokenFlags::ESCAPED);
        }

        let name: String = String::from_utf16_lossy(&self.scratch);

        if !escaped {
            match name.as_str() {
                "true" => return TokenKind::BooleanLiteral(true),
                "false" => return TokenKind::BooleanLiteral(false),
                "null" => return TokenKind::NullLiteral,
                _ => {}
            }
        }

        if let Some(kw) = Keyword::from_str(&name) {
            // A reserved word spelled out with an escape (`if` for `if`) never
            // becomes the keyword token itself — it surfaces as an `Identifier` with the
            // `ESCAPED` flag set, and it is up to the parser to reject it wherever a keyword
            // is required (`EscapedReserved`), matching real engines' diagnostics rather than
            // treating it as a lexical error here.
            if escaped {
                let _ = kw;
            } else {
                return TokenKind::Keyword(kw);
            }
        }

        if STRICT_MODE_RESERVED_WORDS.contains(&name.as_str()) {
            flags.insert(TokenFlags::STRICT_RESERVED);
            if ctx.contains(Context::STRICT) && !escaped {
                return self.error_token(
                    ErrorKind::ReservedWordInStrictMode,
                    Severity::Fatal,
                    start,
                );
            }
        }

        let contextual = ContextualKeyword::from_str(&name);
        TokenKind::Identifier(name.into_boxed_str(), contextual)
    }

    /// Scans exactly one `\uXXXX` or `\u{X...}` escape, assuming `\u` has already been
    /// consumed, and decodes it to a `char`. Fails with [`UnicodeEscapeError::Malformed`] on
    /// a wrong digit count, unclosed braces, or a value that doesn't name a Unicode scalar
    /// value (including a lone surrogate half — `IdentifierStart`/`IdentifierPart` can never
    /// be satisfied by one), or [`UnicodeEscapeError::OutOfRange`] when the braced form names
    /// a code point past `0x10FFFF`.
    ///
    /// Identifiers are the only caller that needs a `char` here: `ID_Start`/`ID_Continue`
    /// lookups require a real Unicode scalar value. String and template literals decode the
    /// same escape at the raw-code-unit level instead, via
    /// [`Self::take_unicode_escape_code_units`], since a lone surrogate half is a perfectly
    /// valid (if unpaired on its own) `UnicodeEscapeSequence` there — it may go on to combine
    /// with a neighboring escape's surrogate half into one astral character, exactly as two
    /// adjacent source surrogates would.
    pub(super) fn take_unicode_escape_sequence(&mut self) -> Result<char, UnicodeEscapeError> {
        let value = self.take_unicode_escape_value()?;
        char::from_u32(value).ok_or(UnicodeEscapeError::Malformed)
    }

    /// Scans exactly one `\uXXXX` or `\u{X...}` escape, decoding it to the raw UTF-16 code
    /// unit(s) it names rather than a `char`. A value in the BMP (including a lone surrogate
    /// half, `0xD800..=0xDFFF`) is a single code unit; a value above `0xFFFF` (only reachable
    /// through the braced form) is re-encoded as a surrogate pair, matching how the same
    /// scalar value would appear if it had been written directly in the source instead of
    /// escaped.
    pub(super) fn take_unicode_escape_code_units(
        &mut self,
    ) -> Result<EscapeCodeUnits, UnicodeEscapeError> {
        let value = self.take_unicode_escape_value()?;
        if value <= 0xFFFF {
            Ok(EscapeCodeUnits::Single(value as u16))
        } else {
            let v = value - 0x1_0000;
            let high = 0xD800 + ((v >> 10) as u16);
            let low = 0xDC00 + ((v & 0x3FF) as u16);
            Ok(EscapeCodeUnits::Pair(high, low))
        }
    }

    /// Shared digit-parsing core for `\uXXXX`/`\u{X...}`, assuming `\u` has already been
    /// consumed. Returns the raw scalar value named by the escape, performing no validation
    /// beyond the grammar itself (digit count/braces, and the braced form's `<= 0x10FFFF`
    /// ceiling) — callers decide what values are acceptable for their own production.
    fn take_unicode_escape_value(&mut self) -> Result<u32, UnicodeEscapeError> {
        use UnicodeEscapeError::{Malformed, OutOfRange};

        if self.cursor.next_is_ascii('{') {
            let mut value: u32 = 0;
            let mut digits = 0;
            loop {
                match self.cursor.peek().and_then(|u| char::from_u32(u32::from(u))) {
                    Some(c) if c == '}' => {
                        self.cursor.next();
                        break;
                    }
                    Some(c) if unicode::is_hex_digit(c) => {
                        self.cursor.next();
                        digits += 1;
                        value = value
                            .checked_mul(16)
                            .and_then(|v| v.checked_add(c.to_digit(16).expect("checked hex digit")))
                            .ok_or(OutOfRange)?;
                        if value > 0x0010_FFFF {
                            return Err(OutOfRange);
                        }
                    }
                    _ => return Err(Malformed),
                }
            }
            if digits == 0 {
                return Err(Malformed);
            }
            Ok(value)
        } else {
            let units = self.cursor.peek_n(4).ok_or(Malformed)?;
            let mut value: u32 = 0;
            for &u in units {
                let c = char::from_u32(u32::from(u)).ok_or(Malformed)?;
                value = value * 16 + c.to_digit(16).ok_or(Malformed)?;
            }
            for _ in 0..4 {
                self.cursor.next();
            }
            Ok(value)
        }
    }
}

/// Why a `\uXXXX`/`\u{X...}` escape failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum UnicodeEscapeError {
    /// Wrong digit count, unclosed braces, or (for [`Lexer::take_unicode_escape_sequence`]
    /// only) a well-formed value that isn't a Unicode scalar value.
    Malformed,
    /// Well-formed digits that name a code point greater than `0x10FFFF`.
    OutOfRange,
}

/// The UTF-16 code unit(s) a `\uXXXX`/`\u{X...}` escape decodes to, at the raw-unit level
/// used by string/template literal scanning (see
/// [`Lexer::take_unicode_escape_code_units`]).
pub(super) enum EscapeCodeUnits {
    Single(u16),
    Pair(u16, u16),
}

fn push_char(buf: &mut Vec<u16>, c: char) {
    let mut units = [0u16; 2];
    buf.extend_from_slice(c.encode_utf16(&mut units));
}
