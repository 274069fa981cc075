//! Numeric literal lexing: decimal, hex/octal/binary, legacy octal, BigInt and digit
//! separators.

use super::unicode;
use super::{Context, ErrorKind, Lexer, Severity};
use crate::syntax::bigint::JsBigInt;
use crate::syntax::position::Position;
use crate::syntax::token::{Numeric, TokenKind};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Radix {
    Decimal,
    Hex,
    Octal,
    Binary,
    LegacyOctal,
}

impl Radix {
    fn value(self) -> u32 {
        match self {
            Self::Decimal => 10,
            Self::Hex => 16,
            Self::Octal | Self::LegacyOctal => 8,
            Self::Binary => 2,
        }
    }
}

impl<'a> Lexer<'a> {
    /// Scans a `NumericLiteral`, assuming the cursor is positioned at its first character
    /// (a digit, or `.` immediately followed by a digit).
    pub(super) fn scan_number(&mut self, start: Position, ctx: Context) -> TokenKind {
        let leading_zero = self.cursor.peek() == Some(u16::from(b'0'));
        let mut radix = Radix::Decimal;

        if leading_zero {
            match self.cursor.peek_at(1).and_then(|u| char::from_u32(u32::from(u))) {
                Some('x') | Some('X') => {
                    self.cursor.next();
                    self.cursor.next();
                    radix = Radix::Hex;
                }
                Some('o') | Some('O') => {
                    self.cursor.next();
                    self.cursor.next();
                    radix = Radix::Octal;
                }
                Some('b') | Some('B') => {
                    self.cursor.next();
                    self.cursor.next();
                    radix = Radix::Binary;
                }
                Some(c) if c.is_ascii_digit() => {
                    // `0` followed by further digits is either a LegacyOctalIntegerLiteral
                    // (all digits octal) or a NonOctalDecimalIntegerLiteral (an `8`/`9`
                    // appears) — both forbidden in strict mode, but only the former is a
                    // different radix; look ahead to tell them apart without consuming.
                    radix = if self.trailing_digits_all_octal() {
                        Radix::LegacyOctal
                    } else {
                        Radix::Decimal
                    };
                }
                _ => {}
            }
        }

        if radix == Radix::LegacyOctal {
            if ctx.contains(Context::STRICT) {
                return self.error_token(
                    ErrorKind::LegacyOctalInStrictMode,
                    Severity::Fatal,
                    start,
                );
            }
            return self.scan_radix_literal(start, radix);
        }
        if radix != Radix::Decimal {
            return self.scan_radix_literal(start, radix);
        }

        self.scan_decimal_literal(start, leading_zero, ctx)
    }

    /// Looks ahead (without consuming) over the run of ASCII digits starting at the cursor,
    /// reporting whether every one of them is an octal digit (`0`-`7`).
    fn trailing_digits_all_octal(&self) -> bool {
        let mut offset = 0;
        let mut any = false;
        loop {
            match self.cursor.peek_at(offset).and_then(|u| char::from_u32(u32::from(u))) {
                Some(c) if c.is_ascii_digit() => {
                    any = true;
                    if !('0'..='7').contains(&c) {
                        return false;
                    }
                    offset += 1;
                }
                _ => break,
            }
        }
        any
    }

    fn scan_radix_literal(&mut self, start: Position, radix: Radix) -> TokenKind {
        self.scratch_digits_clear();
        let mut any_digit = false;
        let mut last_was_separator = false;

        loop {
            match self.cursor.peek().and_then(|u| char::from_u32(u32::from(u))) {
                Some('_') => {
                    if !any_digit || last_was_separator {
                        return self.error_token(
                            ErrorKind::InvalidNumericSeparator,
                            Severity::Fatal,
                            start,
                        );
                    }
                    self.cursor.next();
                    last_was_separator = true;
                }
                Some(c) if is_digit_in_radix(c, radix) => {
                    self.cursor.next();
                    self.push_digit(c);
                    any_digit = true;
                    last_was_separator = false;
                }
                _ => break,
            }
        }

        if !any_digit || last_was_separator {
            return self.error_token(ErrorKind::InvalidNumericLiteral, Severity::Fatal, start);
        }

        let is_bigint = self.cursor.next_is_ascii('n');

        if self.rejects_trailing_identifier_char() {
            return self.error_token(
                ErrorKind::NumericLiteralFollowedByIdentifier,
                Severity::Fatal,
                start,
            );
        }

        let digits = self.take_scratch_digits();
        if is_bigint {
            match JsBigInt::from_str_radix(&digits, radix.value()) {
                Some(n) => TokenKind::numeric_literal(n),
                None => {
                    self.error_token(ErrorKind::InvalidBigIntLiteral, Severity::Fatal, start)
                }
            }
        } else {
            match i64::from_str_radix(&digits, radix.value()) {
                Ok(n) if i32::try_from(n).is_ok() => TokenKind::numeric_literal(n as i32),
                _ => match u64_as_f64_from_radix(&digits, radix.value()) {
                    Some(f) => TokenKind::numeric_literal(f),
                    None => self.error_token(
                        ErrorKind::InvalidNumericLiteral,
                        Severity::Fatal,
                        start,
                    ),
                },
            }
        }
    }

    fn scan_decimal_literal(
        &mut self,
        start: Position,
        leading_zero: bool,
        ctx: Context,
    ) -> TokenKind {
        self.scratch_digits_clear();
        let mut saw_dot = false;
        let mut saw_exponent = false;
        let mut saw_digit_after_zero = false;
        let mut last_was_separator = false;

        if self.cursor.peek() == Some(u16::from(b'.')) {
            // only reached when scan_number routed a bare `.5` in here
            self.push_digit('.');
            self.cursor.next();
            saw_dot = true;
        } else {
            let mut any_digit = false;
            loop {
                match self.cursor.peek().and_then(|u| char::from_u32(u32::from(u))) {
                    Some('_') => {
                        if last_was_separator {
                            return self.error_token(
                                ErrorKind::InvalidNumericSeparator,
                                Severity::Fatal,
                                start,
                            );
                        }
                        self.cursor.next();
                        last_was_separator = true;
                        continue;
                    }
                    Some(c) if c.is_ascii_digit() => {
                        self.cursor.next();
                        self.push_digit(c);
                        if leading_zero && any_digit {
                            saw_digit_after_zero = true;
                        }
                        any_digit = true;
                        last_was_separator = false;
                    }
                    _ => break,
                }
            }
            if last_was_separator {
                return self.error_token(
                    ErrorKind::InvalidNumericSeparator,
                    Severity::Fatal,
                    start,
                );
            }
        }

        if leading_zero && saw_digit_after_zero {
            if ctx.contains(Context::STRICT) {
                return self.error_token(
                    ErrorKind::LeadingZeroInStrictMode,
                    Severity::Fatal,
                    start,
                );
            }
            self.record(
                ErrorKind::LeadingZeroInStrictMode,
                Severity::Warning,
                self.span_from(start),
            );
        }

        if !saw_dot && self.cursor.peek() == Some(u16::from(b'.')) {
            saw_dot = true;
            self.push_digit('.');
            self.cursor.next();
            let mut last_sep = false;
            let mut any_frac_digit = false;
            loop {
                match self.cursor.peek().and_then(|u| char::from_u32(u32::from(u))) {
                    Some('_') => {
                        if last_sep || !any_frac_digit {
                            return self.error_token(
                                ErrorKind::InvalidNumericSeparator,
                                Severity::Fatal,
                                start,
                            );
                        }
                        self.cursor.next();
                        last_sep = true;
                    }
                    Some(c) if c.is_ascii_digit() => {
                        self.cursor.next();
                        self.push_digit(c);
                        last_sep = false;
                        any_frac_digit = true;
                    }
                    _ => break,
                }
            }
            if last_sep {
                return self.error_token(
                    ErrorKind::InvalidNumericSeparator,
                    Severity::Fatal,
                    start,
                );
            }
        }

        match self.cursor.peek().and_then(|u| char::from_u32(u32::from(u))) {
            Some('e') | Some('E') => {
                self.push_digit('e');
                self.cursor.next();
                if matches!(
                    self.cursor.peek().and_then(|u| char::from_u32(u32::from(u))),
                    Some('+') | Some('-')
                ) {
                    let sign = char::from_u32(u32::from(self.cursor.next().unwrap())).unwrap();
                    self.push_digit(sign);
                }
                let mut any = false;
                let mut last_was_separator = false;
                loop {
                    match self.cursor.peek().and_then(|u| char::from_u32(u32::from(u))) {
                        Some('_') => {
                            if !any || last_was_separator {
                                return self.error_token(
                                    ErrorKind::InvalidNumericSeparator,
                                    Severity::Fatal,
                                    start,
                                );
                            }
                            self.cursor.next();
                            last_was_separator = true;
                        }
                        Some(c) if c.is_ascii_digit() => {
                            self.cursor.next();
                            self.push_digit(c);
                            any = true;
                            last_was_separator = false;
                        }
                        _ => break,
                    }
                }
                if !any || last_was_separator {
                    return self.error_token(
                        if any {
                            ErrorKind::InvalidNumericSeparator
                        } else {
                            ErrorKind::InvalidNumericLiteral
                        },
                        Severity::Fatal,
                        start,
                    );
                }
                saw_exponent = true;
            }
            _ => {}
        }

        let is_bigint = !saw_dot && !saw_exponent && self.cursor.next_is_ascii('n');

        if self.rejects_trailing_identifier_char() {
            return self.error_token(
                ErrorKind::NumericLiteralFollowedByIdentifier,
                Severity::Fatal,
                start,
            );
        }

        let text = self.take_scratch_digits();

        if is_bigint {
            return match JsBigInt::from_str_radix(&text, 10) {
                Some(n) => TokenKind::numeric_literal(n),
                None => {
                    self.error_token(ErrorKind::InvalidBigIntLiteral, Severity::Fatal, start)
                }
            };
        }

        if !saw_dot && !saw_exponent {
            if let Ok(n) = text.parse::<i32>() {
                return TokenKind::numeric_literal(n);
            }
        }

        match fast_float2::parse::<f64, _>(text.as_bytes()) {
            Ok(f) => TokenKind::numeric_literal(f),
            Err(_) => self.error_token(ErrorKind::InvalidNumericLiteral, Severity::Fatal, start),
        }
    }

    /// `NumericLiteral` must not be immediately followed by `IdentifierStart` or a decimal
    /// digit (`3in x` is a syntax error, not `3` then `in`).
    fn rejects_trailing_identifier_char(&self) -> bool {
        match self.cursor.peek_code_point() {
            Some(Ok(c)) => unicode::is_identifier_start(c) || unicode::is_decimal_digit(c),
            _ => false,
        }
    }

    fn scratch_digits_clear(&mut self) {
        self.scratch.clear();
    }

    fn push_digit(&mut self, c: char) {
        self.scratch.push(c as u16);
    }

    fn take_scratch_digits(&mut self) -> String {
        let s: String = self.scratch.iter().map(|&u| u as u8 as char).collect();
        s
    }
}

fn is_digit_in_radix(c: char, radix: Radix) -> bool {
    match radix {
        Radix::Hex => c.is_ascii_hexdigit(),
        Radix::Octal | Radix::LegacyOctal => ('0'..='7').contains(&c),
        Radix::Binary => c == '0' || c == '1',
        Radix::Decimal => c.is_ascii_digit(),
    }
}

fn u64_as_f64_from_radix(digits: &str, radix: u32) -> Option<f64> {
    let mut value: f64 = 0.0;
    for c in digits.chars() {
        value = value * f64::from(radix) + f64::from(c.to_digit(radix)?);
    }
    Some(value)
}
