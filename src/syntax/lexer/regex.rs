//! Regular expression literal lexing.
//!
//! Disambiguating a `/` as a regex rather than division is the parser's job (signalled via
//! [`Context::ALLOW_REG_EXP`](super::Context)); by the time control reaches here the leading
//! `/` has already been consumed and the text is known to be `RegularExpressionBody Flags`.

use super::unicode;
use super::{ErrorKind, Lexer, Severity};
use crate::syntax::position::Position;
use crate::syntax::token::{RegExpFlags, TokenKind};
use std::fmt;

/// Error returned while validating a regular expression's flag letters; folded into
/// [`ErrorKind`] by the scanner, but kept as its own type since it is also useful to a
/// caller validating a flag string independently (e.g. `RegExp(pattern, flags)` at runtime).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegExpFlagsError {
    Unknown(char),
    Duplicate(char),
}

impl fmt::Display for RegExpFlagsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(c) => write!(f, "unknown regular expression flag '{}'", c),
            Self::Duplicate(c) => write!(f, "duplicate regular expression flag '{}'", c),
        }
    }
}

impl<'a> Lexer<'a> {
    /// Scans a `RegularExpressionLiteral`, assuming the leading `/` has already been
    /// consumed by the caller.
    pub(super) fn scan_regex(&mut self, start: Position) -> TokenKind {
        let mut body = String::new();
        let mut in_class = false;

        loop {
            match self.cursor.peek_code_point() {
                None => {
                    return self.error_token(
                        ErrorKind::UnterminatedRegExp,
                        Severity::Fatal,
                        start,
                    )
                }
                Some(Err(_)) => {
                    self.cursor.next();
                    return self.error_token(ErrorKind::UnpairedSurrogate, Severity::Fatal, start);
                }
                Some(Ok(c)) if unicode::is_line_terminator(c) => {
                    return self.error_token(
                        ErrorKind::RegExpUnterminatedByLineBreak,
                        Severity::Fatal,
                        start,
                    )
                }
                Some(Ok('/')) if !in_class => {
                    self.cursor.next();
                    break;
                }
                Some(Ok('[')) => {
                    in_class = true;
                    self.cursor.next_code_point();
                    body.push('[');
                }
                Some(Ok(']')) => {
                    in_class = false;
                    self.cursor.next_code_point();
                    body.push(']');
                }
                Some(Ok('\\')) => {
                    self.cursor.next();
                    body.push('\\');
                    match self.cursor.peek_code_point() {
                        Some(Ok(c)) if unicode::is_line_terminator(c) => {
                            return self.error_token(
                                ErrorKind::RegExpUnterminatedByLineBreak,
                                Severity::Fatal,
                                start,
                            )
                        }
                        Some(Ok(c)) => {
                            self.cursor.next_code_point();
                            body.push(c);
                        }
                        Some(Err(_)) => {
                            self.cursor.next();
                            return self.error_token(
                                ErrorKind::UnpairedSurrogate,
                                Severity::Fatal,
                                start,
                            );
                        }
                        None => {
                            return self.error_token(
                                ErrorKind::UnterminatedRegExp,
                                Severity::Fatal,
                                start,
                            )
                        }
                    }
                }
                Some(Ok(c)) => {
                    self.cursor.next_code_point();
                    body.push(c);
                }
            }
        }

        let mut flags_text = String::new();
        loop {
            match self.cursor.peek_code_point() {
                Some(Ok(c)) if unicode::is_identifier_part(c) => {
                    self.cursor.next_code_point();
                    flags_text.push(c);
                }
                _ => break,
            }
        }

        match parse_regex_flags(&flags_text) {
            Ok(flags) => {
                // Validate the body against the real `RegExp` grammar so a caller gets an
                // early diagnostic rather than discovering a malformed pattern at runtime.
                // This is advisory only: a body regress can't parse is still returned as a
                // valid token, since the scanner's job is tokenizing, not rejecting.
                if regress::Regex::with_flags(&body, flags_text.as_str()).is_err() {
                    self.record(
                        ErrorKind::InvalidRegExpPattern,
                        Severity::Warning,
                        self.span_from(start),
                    );
                }
                TokenKind::RegularExpressionLiteral(body.into_boxed_str(), flags)
            }
            Err(RegExpFlagsError::Duplicate(_)) => {
                self.error_token(ErrorKind::DuplicateRegExpFlag, Severity::Fatal, start)
            }
            Err(RegExpFlagsError::Unknown(_)) => {
                self.error_token(ErrorKind::InvalidRegExpFlags, Severity::Fatal, start)
            }
        }
    }
}

/// Parses a regular expression's flag letters, rejecting unknown or duplicate flags.
pub fn parse_regex_flags(s: &str) -> Result<RegExpFlags, RegExpFlagsError> {
    let mut flags = RegExpFlags::empty();
    for c in s.chars() {
        let new_flag = match c {
            'd' => RegExpFlags::HAS_INDICES,
            'g' => RegExpFlags::GLOBAL,
            'i' => RegExpFlags::IGNORE_CASE,
            'm' => RegExpFlags::MULTILINE,
            's' => RegExpFlags::DOT_ALL,
            'u' => RegExpFlags::UNICODE,
            'v' => RegExpFlags::UNICODE_SETS,
            'y' => RegExpFlags::STICKY,
            other => return Err(RegExpFlagsError::Unknown(other)),
        };
        if flags.contains(new_flag) {
            return Err(RegExpFlagsError::Duplicate(c));
        }
        flags.insert(new_flag);
    }
    Ok(flags)
}
