//! String literal lexing: escape decoding shared between `StringLiteral` tokens and
//! template-literal cooked values.

use super::identifier::EscapeCodeUnits;
use super::unicode;
use super::{Context, ErrorKind, Lexer, Severity};
use crate::syntax::position::Position;
use crate::syntax::token::{TokenFlags, TokenKind};

/// Which character terminates the literal currently being scanned. `End` is used by the
/// template scanner, whose "string" keeps going until a backtick or `${`, not a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum StringTerminator {
    SingleQuote,
    DoubleQuote,
    End,
}

/// Outcome of decoding one literal's escape-bearing body.
pub(super) struct Cooked {
    pub(super) value: String,
    pub(super) had_legacy_octal: bool,
    pub(super) had_invalid_escape: bool,
}

/// Appends `c`'s UTF-16 encoding (one unit in the BMP, two above it) to `buf`.
fn push_char_units(buf: &mut Vec<u16>, c: char) {
    let mut units = [0u16; 2];
    buf.extend_from_slice(c.encode_utf16(&mut units));
}

impl<'a> Lexer<'a> {
    /// Scans a `StringLiteral`. `quote` is the opening quote character, already consumed by
    /// the caller (so the right terminator can be selected).
    pub(super) fn scan_string(
        &mut self,
        start: Position,
        quote: char,
        ctx: Context,
        flags: &mut TokenFlags,
    ) -> TokenKind {
        let terminator = if quote == '\'' {
            StringTerminator::SingleQuote
        } else {
            StringTerminator::DoubleQuote
        };

        match self.take_string_characters(terminator, ctx) {
            Ok(cooked) => {
                // Unlike templates (where an invalid escape is tolerated and deferred to the
                // parser's tagged/untagged judgement), an ordinary string literal has no such
                // deferral: a malformed `\u`/`\x` escape is a hard error right here.
                if cooked.had_invalid_escape {
                    return self.error_token(
                        ErrorKind::InvalidUnicodeEscape,
                        Severity::Fatal,
                        start,
                    );
                }
                if cooked.had_legacy_octal {
                    flags.insert(TokenFlags::LEGACY_OCTAL);
                }
                TokenKind::StringLiteral(cooked.value.into_boxed_str())
            }
            Err(kind) => self.error_token(kind, Severity::Fatal, start),
        }
    }

    /// Scans the body of a string or template literal up to (but not past) `terminator`,
    /// decoding escapes as it goes. On success, returns the cooked text plus whether a
    /// legacy-octal or otherwise-invalid escape was seen (both of which a caller may need to
    /// reject, depending on strict mode / tagged-template position).
    pub(super) fn take_string_characters(
        &mut self,
        terminator: StringTerminator,
        ctx: Context,
    ) -> Result<Cooked, ErrorKind> {
        // Template literals never have a legacy-octal or `\8`/`\9` escape, strict mode or not
        // — `take_one_escape` uses this to always report those forms as invalid rather than
        // consulting `ctx`.
        let in_template = terminator == StringTerminator::End;
        // Accumulated as raw UTF-16 code units, not a `String`, so that a `\uXXXX` escape
        // naming one half of a surrogate pair can combine with a neighboring escape's other
        // half (or with a directly-written surrogate) once the whole literal is decoded —
        // see `Escape::CodeUnit`/`Escape::CodeUnitPair` below.
        let mut buf: Vec<u16> = Vec::new();
        let mut had_legacy_octal = false;
        let mut had_invalid_escape = false;

        loop {
            let c = match self.cursor.peek_code_point() {
                None => return Err(ErrorKind::UnterminatedString),
                Some(Err(_)) => {
                    self.cursor.next();
                    return Err(ErrorKind::UnpairedSurrogate);
                }
                Some(Ok(c)) => c,
            };

            match c {
                '\'' if terminator == StringTerminator::SingleQuote => {
                    self.cursor.next();
                    break;
                }
                '"' if terminator == StringTerminator::DoubleQuote => {
                    self.cursor.next();
                    break;
                }
                '`' if terminator == StringTerminator::End => break,
                '$' if terminator == StringTerminator::End
                    && self.cursor.peek_at(1) == Some(u16::from(b'{')) =>
                {
                    break
                }
                c if unicode::is_line_terminator(c) && terminator != StringTerminator::End => {
                    return Err(ErrorKind::UnterminatedString);
                }
                '\\' => {
                    self.cursor.next();
                    match self.take_one_escape(ctx, in_template)? {
                        Escape::Char(c) => push_char_units(&mut buf, c),
                        Escape::LineContinuation => {}
                        Escape::LegacyOctal(c) => {
                            had_legacy_octal = true;
                            push_char_units(&mut buf, c);
                        }
                        Escape::CodeUnit(u) => buf.push(u),
                        Escape::CodeUnitPair(high, low) => {
                            buf.push(high);
                            buf.push(low);
                        }
                        Escape::Invalid => {
                            had_invalid_escape = true;
                        }
                    }
                }
                _ => {
                    self.cursor.next_code_point();
                    push_char_units(&mut buf, c);
                }
            }
        }

        Ok(Cooked {
            value: String::from_utf16_lossy(&buf),
            had_legacy_octal,
            had_invalid_escape,
        })
    }

    /// Decodes exactly one escape sequence, assuming the leading `\` has already been
    /// consumed. Used by both string and template scanning; `in_template` disables the
    /// legacy-octal and `\8`/`\9` forms unconditionally (templates never have them, strict
    /// mode or not), turning them into [`Escape::Invalid`] instead.
    pub(super) fn take_one_escape(
        &mut self,
        ctx: Context,
        in_template: bool,
    ) -> Result<Escape, ErrorKind> {
        let c = match self.cursor.peek_code_point() {
            Some(Ok(c)) => c,
            Some(Err(_)) => {
                self.cursor.next();
                return Err(ErrorKind::UnpairedSurrogate);
            }
            None => return Err(ErrorKind::InvalidEscapeSequence),
        };

        match c {
            'b' => {
                self.cursor.next();
                Ok(Escape::Char('\u{0008}'))
            }
            't' => {
                self.cursor.next();
                Ok(Escape::Char('\u{0009}'))
            }
            'n' => {
                self.cursor.next();
                Ok(Escape::Char('\u{000A}'))
            }
            'v' => {
                self.cursor.next();
                Ok(Escape::Char('\u{000B}'))
            }
            'f' => {
                self.cursor.next();
                Ok(Escape::Char('\u{000C}'))
            }
            'r' => {
                self.cursor.next();
                Ok(Escape::Char('\u{000D}'))
            }
            '"' => {
                self.cursor.next();
                Ok(Escape::Char('"'))
            }
            '\'' => {
                self.cursor.next();
                Ok(Escape::Char('\''))
            }
            '\\' => {
                self.cursor.next();
                Ok(Escape::Char('\\'))
            }
            '`' => {
                self.cursor.next();
                Ok(Escape::Char('`'))
            }
            '$' => {
                self.cursor.next();
                Ok(Escape::Char('$'))
            }
            '0' if !matches!(self.cursor.peek_at(1), Some(u) if (u'0' as u16..=u'9' as u16).contains(&u)) =>
            {
                self.cursor.next();
                Ok(Escape::Char('\u{0000}'))
            }
            '0'..='7' => {
                if in_template {
                    self.take_legacy_octal_escape()?;
                    return Ok(Escape::Invalid);
                }
                if ctx.contains(Context::STRICT) {
                    return Err(ErrorKind::LegacyOctalInStrictMode);
                }
                self.take_legacy_octal_escape()
            }
            '8' | '9' => {
                self.cursor.next();
                if in_template {
                    return Ok(Escape::Invalid);
                }
                if ctx.contains(Context::STRICT) {
                    return Err(ErrorKind::NonOctalDecimalEscapeInStrictMode);
                }
                if !self.options.webcompat {
                    return Err(ErrorKind::NonOctalDecimalEscapeInStrictMode);
                }
                Ok(Escape::Char(c))
            }
            'x' => {
                self.cursor.next();
                self.take_hex_escape_sequence()
            }
            'u' => {
                self.cursor.next();
                // Decoded at the raw-code-unit level, not as a `char`: a `\uXXXX` escape
                // naming one half of a surrogate pair is a perfectly valid
                // `UnicodeEscapeSequence` on its own (e.g. `"😀"` cooks to "😀"),
                // even though neither half alone is a Unicode scalar value.
                match self.take_unicode_escape_code_units() {
                    Ok(EscapeCodeUnits::Single(u)) => Ok(Escape::CodeUnit(u)),
                    Ok(EscapeCodeUnits::Pair(high, low)) => Ok(Escape::CodeUnitPair(high, low)),
                    Err(super::identifier::UnicodeEscapeError::OutOfRange) if in_template => {
                        Ok(Escape::Invalid)
                    }
                    Err(super::identifier::UnicodeEscapeError::OutOfRange) => {
                        Err(ErrorKind::UnicodeEscapeOutOfRange)
                    }
                    Err(super::identifier::UnicodeEscapeError::Malformed) => Ok(Escape::Invalid),
                }
            }
            c if unicode::is_line_terminator(c) => {
                // LineContinuation: a `\` followed by a line terminator contributes nothing.
                if c == '\u{000D}' && self.cursor.peek_at(1) == Some(u16::from(b'\n')) {
                    self.cursor.next();
                }
                self.cursor.next();
                Ok(Escape::LineContinuation)
            }
            _ => {
                self.cursor.next_code_point();
                Ok(Escape::Char(c))
            }
        }
    }

    fn take_legacy_octal_escape(&mut self) -> Result<Escape, ErrorKind> {
        let mut value: u32 = 0;
        let mut digits = 0;
        while digits < 3 {
            match self.cursor.peek().and_then(|u| char::from_u32(u32::from(u))) {
                Some(c @ '0'..='7') => {
                    let next_value = value * 8 + c.to_digit(8).expect("checked octal digit");
                    if digits == 2 && next_value > 255 {
                        break;
                    }
                    value = next_value;
                    self.cursor.next();
                    digits += 1;
                }
                _ => break,
            }
        }
        match char::from_u32(value) {
            Some(c) => Ok(Escape::LegacyOctal(c)),
            None => Err(ErrorKind::InvalidEscapeSequence),
        }
    }

    fn take_hex_escape_sequence(&mut self) -> Result<Escape, ErrorKind> {
        let units = self
            .cursor
            .peek_n(2)
            .ok_or(ErrorKind::InvalidEscapeSequence)?;
        let mut value: u32 = 0;
        for &u in units {
            let c = char::from_u32(u32::from(u)).ok_or(ErrorKind::InvalidEscapeSequence)?;
            let digit = c.to_digit(16).ok_or(ErrorKind::InvalidEscapeSequence)?;
            value = value * 16 + digit;
        }
        self.cursor.next();
        self.cursor.next();
        char::from_u32(value)
            .map(Escape::Char)
            .ok_or(ErrorKind::InvalidEscapeSequence)
    }
}

/// One decoded escape sequence's contribution to the cooked string being built.
pub(super) enum Escape {
    Char(char),
    LineContinuation,
    LegacyOctal(char),
    /// A `\uXXXX`/`\u{X...}` escape naming a single raw UTF-16 code unit (possibly one half
    /// of a surrogate pair, to be combined with a neighboring code unit once the whole
    /// literal is decoded).
    CodeUnit(u16),
    /// A `\u{X...}` escape naming a code point above `0xFFFF`, already split into its
    /// surrogate pair.
    CodeUnitPair(u16, u16),
    Invalid,
}
