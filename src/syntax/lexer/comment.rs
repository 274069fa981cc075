//! Comment skipping: single-line, multi-line, and (in web-compatibility mode) the Annex B
//! HTML-style comment forms.

use super::unicode;
use super::{Context, ErrorKind, Lexer, Severity};
use crate::syntax::position::Position;

impl<'a> Lexer<'a> {
    /// Skips a `//`-style comment, assuming both slashes are still unconsumed at the cursor.
    /// Stops before the line terminator that ends it (or at EOF); the terminator itself is
    /// picked up by the whitespace loop on the next iteration.
    pub(super) fn comment_skip_line(&mut self) {
        self.cursor.next();
        self.cursor.next();
        loop {
            match self.cursor.peek().and_then(|u| char::from_u32(u32::from(u))) {
                None => break,
                Some(c) if unicode::is_line_terminator(c) => break,
                Some(_) => {
                    self.cursor.next();
                }
            }
        }
    }

    /// Skips a `/*...*/` comment, assuming both the `/` and `*` are still unconsumed.
    /// Returns whether the comment's body contained a line terminator (needed for automatic
    /// semicolon insertion, since a multi-line comment counts as a line break there even
    /// though the comment itself produces no token).
    pub(super) fn comment_skip_block(&mut self) -> bool {
        let start = self.cursor.pos();
        self.cursor.next();
        self.cursor.next();
        let mut had_newline = false;
        loop {
            match self.cursor.peek().and_then(|u| char::from_u32(u32::from(u))) {
                None => {
                    let span = self.span_from(start);
                    self.record(ErrorKind::UnterminatedComment, Severity::Fatal, span);
                    break;
                }
                Some(c) if unicode::is_line_terminator(c) => {
                    had_newline = true;
                    self.cursor.next();
                }
                Some('*') if self.cursor.peek_at(1) == Some(u16::from(b'/')) => {
                    self.cursor.next();
                    self.cursor.next();
                    break;
                }
                Some(_) => {
                    self.cursor.next();
                }
            }
        }
        had_newline
    }

    /// Annex B: `<!--` and a line-initial `-->` are treated as line comments outside of
    /// Module code, for compatibility with HTML-embedded scripts. Returns `true` (and
    /// updates `preceding_line_break`) if one was found and skipped at the cursor.
    pub(super) fn try_skip_html_comment(&mut self, preceding_line_break: &mut bool) -> bool {
        if self.cursor.peek() == Some(u16::from(b'<'))
            && self.cursor.peek_n(4).map(as_ascii) == Some("<!--".to_string())
        {
            for _ in 0..4 {
                self.cursor.next();
            }
            self.comment_skip_line();
            return true;
        }

        if *preceding_line_break
            && self.cursor.peek() == Some(u16::from(b'-'))
            && self.cursor.peek_n(3).map(as_ascii) == Some("-->".to_string())
        {
            for _ in 0..3 {
                self.cursor.next();
            }
            self.comment_skip_line();
            return true;
        }

        false
    }
}

fn as_ascii(units: &[u16]) -> String {
    units.iter().map(|&u| u as u8 as char).collect()
}
