//! Template literal lexing, including re-entry after a `${...}` substitution.
//!
//! Re-entry is driven by the lexer's `brace_stack`: scanning a head or middle piece that
//! ends in `${` pushes `BraceContext::TemplateSubstitution`; an ordinary `{` inside the
//! substitution expression pushes `BraceContext::Block`. When the punctuator scanner meets a
//! `}`, it pops the stack to decide whether to emit a plain `CloseBlock` or resume template
//! scanning here.

use super::string::StringTerminator;
use super::{BraceContext, Context, ErrorKind, Lexer, Severity};
use crate::syntax::position::Position;
use crate::syntax::token::{TemplateString, TokenKind};

impl<'a> Lexer<'a> {
    /// Scans a template literal's first piece, assuming the opening backtick has already
    /// been consumed. Produces either `TemplateNoSubstitution` (ran to a closing backtick)
    /// or `TemplateHead` (ran to a `${`, pushing onto the brace stack for later re-entry).
    pub(super) fn scan_template_head(&mut self, start: Position) -> TokenKind {
        self.scan_template_piece(start, true)
    }

    /// Scans the continuation of a template literal after a `}` popped a
    /// `TemplateSubstitution` brace marker. Produces either `TemplateTail` or
    /// `TemplateMiddle`.
    pub(super) fn scan_template_continuation(&mut self, start: Position) -> TokenKind {
        self.scan_template_piece(start, false)
    }

    fn scan_template_piece(&mut self, start: Position, is_head: bool) -> TokenKind {
        let raw_start = self.cursor.index();
        match self.take_string_characters(StringTerminator::End, Context::empty()) {
            Ok(cooked) => {
                let raw_end = self.cursor.index();
                let ended_at_brace = self.cursor.peek() == Some(u16::from(b'{'));

                let raw = self.raw_slice_lossy(raw_start, raw_end);

                if ended_at_brace {
                    self.cursor.next(); // consume '{'
                    self.brace_stack.push(BraceContext::TemplateSubstitution);
                } else {
                    self.cursor.next(); // consume closing '`'
                }

                let cooked_value = if cooked.had_invalid_escape {
                    None
                } else {
                    Some(cooked.value.into_boxed_str())
                };

                let template = TemplateString {
                    raw: raw.into_boxed_str(),
                    cooked: cooked_value,
                };

                match (is_head, ended_at_brace) {
                    (true, true) => TokenKind::TemplateHead(template),
                    (true, false) => TokenKind::TemplateNoSubstitution(template),
                    (false, true) => TokenKind::TemplateMiddle(template),
                    (false, false) => TokenKind::TemplateTail(template),
                }
            }
            Err(ErrorKind::UnterminatedString) => {
                self.error_token(ErrorKind::UnterminatedTemplate, Severity::Fatal, start)
            }
            Err(kind) => self.error_token(kind, Severity::Fatal, start),
        }
    }

    fn raw_slice_lossy(&self, start: usize, end: usize) -> String {
        self.cursor
            .buffer_slice(start, end)
            .map(|units| String::from_utf16_lossy(units))
            .unwrap_or_default()
    }
}
