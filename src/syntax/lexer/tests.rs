//! Tests for the lexer.
#![allow(clippy::indexing_slicing)]

use super::*;
use crate::syntax::bigint::JsBigInt;
use crate::syntax::keyword::{ContextualKeyword, Keyword};
use crate::syntax::punctuator::Punctuator;
use crate::syntax::token::{Numeric, RegExpFlags};

const NO_REGEX: Context = Context::empty();
const REGEX: Context = Context::ALLOW_REG_EXP;

fn kinds(src: &str, ctx: Context) -> Vec<TokenKind> {
    let mut lexer = Lexer::new(src);
    lexer
        .tokens_raw(ctx)
        .into_iter()
        .map(|t| t.kind().clone())
        .filter(|k| !matches!(k, TokenKind::EndOfSource))
        .collect()
}

#[test]
fn check_single_line_comment() {
    let s = "var \n//This is a comment\ntrue";
    let got = kinds(s, NO_REGEX);
    assert_eq!(
        got,
        vec![
            TokenKind::Keyword(Keyword::Var),
            TokenKind::BooleanLiteral(true),
        ]
    );
}

#[test]
fn check_multi_line_comment() {
    let s = "var /* await \n break \n*/ x";
    let got = kinds(s, NO_REGEX);
    assert_eq!(
        got,
        vec![
            TokenKind::Keyword(Keyword::Var),
            TokenKind::Identifier("x".into(), None),
        ]
    );
}

#[test]
fn comments_can_be_surfaced_as_tokens() {
    let mut lexer = Lexer::with_options(
        "a // trailing\nb",
        LexerOptions {
            comments: true,
            ..LexerOptions::default()
        },
    );
    let toks = lexer.tokens_raw(NO_REGEX);
    assert_eq!(toks[0].kind(), &TokenKind::Identifier("a".into(), None));
    assert_eq!(toks[1].kind(), &TokenKind::Comment);
    assert_eq!(toks[2].kind(), &TokenKind::Identifier("b".into(), None));
}

#[test]
fn check_string() {
    let s = "'aaa' \"bbb\"";
    let got = kinds(s, NO_REGEX);
    assert_eq!(
        got,
        vec![
            TokenKind::StringLiteral("aaa".into()),
            TokenKind::StringLiteral("bbb".into()),
        ]
    );
}

#[test]
fn string_invalid_unicode_escape_is_an_error() {
    let got = kinds(r#"'\u{110000}'"#, NO_REGEX);
    assert!(matches!(
        got[0],
        TokenKind::Error(ErrorKind::UnicodeEscapeOutOfRange)
    ));
}

#[test]
fn string_malformed_unicode_escape_is_an_error() {
    let got = kinds(r#"'\u{}'"#, NO_REGEX);
    assert!(matches!(got[0], TokenKind::Error(ErrorKind::InvalidUnicodeEscape)));
}

#[test]
fn check_punctuators() {
    // https://tc39.es/ecma262/#sec-punctuators
    let s = "{ ( ) [ ] . ... ; , < > <= >= == != === !== \
             + - * % -- << >> >>> & | ^ ! ~ && || ? : \
             = += -= *= &= **= ++ ** <<= >>= >>>= &= |= ^= =>";
    let got = kinds(s, NO_REGEX);
    use Punctuator::*;
    let expected = vec![
        OpenBlock, OpenParen, CloseParen, OpenBracket, CloseBracket, Dot, Spread, Semicolon,
        Comma, LessThan, GreaterThan, LessThanOrEq, GreaterThanOrEq, Eq, NotEq, StrictEq,
        StrictNotEq, Add, Sub, Mul, Mod, Dec, LeftSh, RightSh, URightSh, And, Or, Xor, Not, Neg,
        BoolAnd, BoolOr, Question, Colon, Assign, AssignAdd, AssignSub, AssignMul, AssignAnd,
        AssignPow, Inc, Exp, AssignLeftSh, AssignRightSh, AssignURightSh, AssignAnd, AssignOr,
        AssignXor, Arrow,
    ]
    .into_iter()
    .map(TokenKind::Punctuator)
    .collect::<Vec<_>>();
    assert_eq!(got, expected);
}

#[test]
fn check_keywords() {
    let s = "break case catch class const continue debugger default delete do \
             else enum export extends finally for function if import in instanceof \
             new return super switch this throw try typeof var void while with yield await";
    let got = kinds(s, NO_REGEX);
    use Keyword::*;
    let expected = vec![
        Break, Case, Catch, Class, Const, Continue, Debugger, Default, Delete, Do, Else, Enum,
        Export, Extends, Finally, For, Function, If, Import, In, InstanceOf, New, Return, Super,
        Switch, This, Throw, Try, TypeOf, Var, Void, While, With, Yield, Await,
    ]
    .into_iter()
    .map(TokenKind::Keyword)
    .collect::<Vec<_>>();
    assert_eq!(got, expected);
}

#[test]
fn contextual_keywords_scan_as_identifiers() {
    let got = kinds("async of get set", NO_REGEX);
    assert_eq!(
        got,
        vec![
            TokenKind::Identifier("async".into(), Some(ContextualKeyword::Async)),
            TokenKind::Identifier("of".into(), Some(ContextualKeyword::Of)),
            TokenKind::Identifier("get".into(), Some(ContextualKeyword::Get)),
            TokenKind::Identifier("set".into(), Some(ContextualKeyword::Set)),
        ]
    );
}

#[test]
fn check_variable_definition_tokens() {
    let got = kinds("let a = 5;", NO_REGEX);
    assert_eq!(
        got,
        vec![
            TokenKind::Identifier("let".into(), Some(ContextualKeyword::Let)),
            TokenKind::Identifier("a".into(), None),
            TokenKind::Punctuator(Punctuator::Assign),
            TokenKind::numeric_literal(5_i32),
            TokenKind::Punctuator(Punctuator::Semicolon),
        ]
    );
}

#[test]
fn check_positions() {
    // Column is 0-based (spec.md's "column equals index minus offset of last line
    // terminator"): the first unit on a line sits at column 0.
    let mut lexer = Lexer::new("x\ny");
    let first = lexer.next_token(NO_REGEX);
    assert_eq!(first.span().start, Position::new(1, 0));
    assert_eq!(first.span().end, Position::new(1, 1));
    let second = lexer.next_token(NO_REGEX);
    assert_eq!(second.span().start, Position::new(2, 0));
    assert_eq!(second.span().end, Position::new(2, 1));
}

#[test]
fn check_line_numbers() {
    let mut lexer = Lexer::new("\n\n\nx");
    let tok = lexer.next_token(NO_REGEX);
    assert_eq!(tok.span().start, Position::new(4, 0));
    assert!(tok.preceding_line_break());
}

#[test]
fn crlf_counts_as_a_single_line_break() {
    // A lone `CRLF` source's second line starts at column 0 (spec.md's boundary case).
    let mut lexer = Lexer::new("x\r\ny");
    let _ = lexer.next_token(NO_REGEX);
    let second = lexer.next_token(NO_REGEX);
    assert_eq!(second.span().start, Position::new(2, 0));
}

#[test]
fn source_containing_only_crlf() {
    let mut lexer = Lexer::new("\r\n");
    let tok = lexer.next_token(NO_REGEX);
    assert_eq!(tok.kind(), &TokenKind::EndOfSource);
    assert_eq!(tok.span().start, Position::new(2, 0));
    assert!(tok.preceding_line_break());
}

#[test]
fn two_divisions_in_expression() {
    // `a / b / c` with ALLOW_REG_EXP never set should scan as two division punctuators,
    // not attempt to treat the second `/` as a regex literal start.
    let got = kinds("a / b / c", NO_REGEX);
    assert_eq!(
        got,
        vec![
            TokenKind::Identifier("a".into(), None),
            TokenKind::Punctuator(Punctuator::Div),
            TokenKind::Identifier("b".into(), None),
            TokenKind::Punctuator(Punctuator::Div),
            TokenKind::Identifier("c".into(), None),
        ]
    );
}

#[test]
fn check_decrement_advances_lexer_2_places() {
    let mut lexer = Lexer::new("a-- b");
    let _ = lexer.next_token(NO_REGEX);
    let dec = lexer.next_token(NO_REGEX);
    assert_eq!(dec.kind(), &TokenKind::Punctuator(Punctuator::Dec));
    assert_eq!(dec.start(), 1);
    assert_eq!(dec.end(), 3);
}

#[test]
fn check_nan() {
    let got = kinds("NaN", NO_REGEX);
    assert_eq!(got, vec![TokenKind::Identifier("NaN".into(), None)]);
}

#[test]
fn numbers() {
    let cases: &[(&str, TokenKind)] = &[
        ("0", TokenKind::numeric_literal(0_i32)),
        ("100", TokenKind::numeric_literal(100_i32)),
        ("100.0", TokenKind::numeric_literal(100.0_f64)),
        (".5", TokenKind::numeric_literal(0.5_f64)),
        ("10e5", TokenKind::numeric_literal(10e5_f64)),
        ("10e-5", TokenKind::numeric_literal(10e-5_f64)),
        ("0x123", TokenKind::numeric_literal(0x123_i32)),
        ("0o17", TokenKind::numeric_literal(0o17_i32)),
        ("0b101", TokenKind::numeric_literal(0b101_i32)),
        ("1_000_000", TokenKind::numeric_literal(1_000_000_i32)),
        ("1_000_000.5e+2", TokenKind::numeric_literal(1_000_000.5e+2_f64)),
    ];
    for (src, expected) in cases {
        let got = kinds(src, NO_REGEX);
        assert_eq!(&got[0], expected, "lexing {src:?}");
    }
}

#[test]
fn zero_bigint_literal() {
    let got = kinds("0n", NO_REGEX);
    assert_eq!(
        got,
        vec![TokenKind::NumericLiteral(Numeric::BigInt(
            JsBigInt::from_str_radix("0", 10).unwrap()
        ))]
    );
}

#[test]
fn octal_bigint_literal() {
    let got = kinds("0o17n", NO_REGEX);
    assert_eq!(
        got,
        vec![TokenKind::NumericLiteral(Numeric::BigInt(
            JsBigInt::from_str_radix("17", 8).unwrap()
        ))]
    );
}

#[test]
fn implicit_octal_edge_case() {
    // `08` has a non-octal digit, so it's a NonOctalDecimalIntegerLiteral, not legacy octal.
    let got = kinds("08", NO_REGEX);
    assert_eq!(got, vec![TokenKind::numeric_literal(8_i32)]);
}

#[test]
fn legacy_octal_literal_outside_strict_mode() {
    let got = kinds("017", NO_REGEX);
    assert_eq!(got, vec![TokenKind::numeric_literal(15_i32)]);
}

#[test]
fn legacy_octal_literal_rejected_in_strict_mode() {
    let ctx = Context::STRICT;
    let got = kinds("017", ctx);
    assert!(matches!(got[0], TokenKind::Error(ErrorKind::LegacyOctalInStrictMode)));
}

#[test]
fn hexadecimal_edge_case() {
    let got = kinds("0xFFFF", NO_REGEX);
    assert_eq!(got, vec![TokenKind::numeric_literal(0xFFFF_i32)]);
}

#[test]
fn single_number_without_semicolon() {
    let got = kinds("1", NO_REGEX);
    assert_eq!(got, vec![TokenKind::numeric_literal(1_i32)]);
}

#[test]
fn number_followed_by_dot() {
    let got = kinds("1..toString()", NO_REGEX);
    assert_eq!(
        got,
        vec![
            TokenKind::numeric_literal(1.0_f64),
            TokenKind::Punctuator(Punctuator::Dot),
            TokenKind::Identifier("toString".into(), None),
            TokenKind::Punctuator(Punctuator::OpenParen),
            TokenKind::Punctuator(Punctuator::CloseParen),
        ]
    );
}

#[test]
fn numeric_separator_trailing_is_an_error() {
    let got = kinds("1_", NO_REGEX);
    assert!(matches!(got[0], TokenKind::Error(ErrorKind::InvalidNumericSeparator)));
}

#[test]
fn numeric_separator_in_fraction_trailing_is_an_error() {
    let got = kinds("1.5_", NO_REGEX);
    assert!(matches!(got[0], TokenKind::Error(ErrorKind::InvalidNumericSeparator)));
}

#[test]
fn numeric_separator_in_exponent_trailing_is_an_error() {
    let got = kinds("1e1_", NO_REGEX);
    assert!(matches!(got[0], TokenKind::Error(ErrorKind::InvalidNumericSeparator)));
}

#[test]
fn regex_literal() {
    let got = kinds("/(?:)/", REGEX);
    assert_eq!(
        got,
        vec![TokenKind::RegularExpressionLiteral(
            "(?:)".into(),
            RegExpFlags::empty()
        )]
    );
}

#[test]
fn regex_literal_flags() {
    let got = kinds("/[a-z]+/gi", REGEX);
    assert_eq!(
        got,
        vec![TokenKind::RegularExpressionLiteral(
            "[a-z]+".into(),
            RegExpFlags::GLOBAL | RegExpFlags::IGNORE_CASE
        )]
    );
}

#[test]
fn regex_literal_rejects_duplicate_flag() {
    let got = kinds("/a/gg", REGEX);
    assert!(matches!(got[0], TokenKind::Error(ErrorKind::DuplicateRegExpFlag)));
}

#[test]
fn division_without_allow_regexp_is_division() {
    let got = kinds("a/b/g", NO_REGEX);
    assert_eq!(
        got,
        vec![
            TokenKind::Identifier("a".into(), None),
            TokenKind::Punctuator(Punctuator::Div),
            TokenKind::Identifier("b".into(), None),
            TokenKind::Punctuator(Punctuator::Div),
            TokenKind::Identifier("g".into(), None),
        ]
    );
}

#[test]
fn addition_no_spaces() {
    let got = kinds("1+1", NO_REGEX);
    assert_eq!(
        got,
        vec![
            TokenKind::numeric_literal(1_i32),
            TokenKind::Punctuator(Punctuator::Add),
            TokenKind::numeric_literal(1_i32),
        ]
    );
}

#[test]
fn addition_no_spaces_left() {
    let got = kinds("1+ 1", NO_REGEX);
    assert_eq!(
        got,
        vec![
            TokenKind::numeric_literal(1_i32),
            TokenKind::Punctuator(Punctuator::Add),
            TokenKind::numeric_literal(1_i32),
        ]
    );
}

#[test]
fn addition_no_spaces_right() {
    let got = kinds("1 +1", NO_REGEX);
    assert_eq!(
        got,
        vec![
            TokenKind::numeric_literal(1_i32),
            TokenKind::Punctuator(Punctuator::Add),
            TokenKind::numeric_literal(1_i32),
        ]
    );
}

#[test]
fn template_literal_no_substitution() {
    let got = kinds("`hello`", NO_REGEX);
    match &got[0] {
        TokenKind::TemplateNoSubstitution(ts) => {
            assert_eq!(&*ts.raw, "hello");
            assert_eq!(ts.cooked.as_deref(), Some("hello"));
        }
        other => panic!("expected TemplateNoSubstitution, got {other:?}"),
    }
}

#[test]
fn template_literal_with_substitution() {
    let got = kinds("`a${b}c`", NO_REGEX);
    assert!(matches!(got[0], TokenKind::TemplateHead(_)));
    assert_eq!(got[1], TokenKind::Identifier("b".into(), None));
    assert!(matches!(got[2], TokenKind::TemplateTail(_)));
}

#[test]
fn template_literal_nested_braces_in_substitution() {
    let got = kinds("`a${ { x: 1 } }b`", NO_REGEX);
    assert!(matches!(got[0], TokenKind::TemplateHead(_)));
    assert_eq!(got[1], TokenKind::Punctuator(Punctuator::OpenBlock));
    assert_eq!(got[5], TokenKind::Punctuator(Punctuator::CloseBlock));
    assert!(matches!(got[6], TokenKind::TemplateTail(_)));
}

#[test]
fn template_literal_octal_escape_is_invalid_not_legacy_octal() {
    let got = kinds(r"`\01`", NO_REGEX);
    match &got[0] {
        TokenKind::TemplateNoSubstitution(ts) => assert_eq!(ts.cooked, None),
        other => panic!("expected TemplateNoSubstitution, got {other:?}"),
    }
}

#[test]
fn escaped_reserved_word_is_identifier_with_escaped_flag() {
    let mut lexer = Lexer::new("\\u0069f");
    let tok = lexer.next_token(NO_REGEX);
    assert_eq!(tok.kind(), &TokenKind::Identifier("if".into(), None));
    assert!(tok.flags().contains(TokenFlags::ESCAPED));
}

#[test]
fn identifier_starting_with_unicode_escape() {
    // `alert` spells out `alert` with its first character escaped.
    let mut lexer = Lexer::new("\\u0061lert");
    let tok = lexer.next_token(NO_REGEX);
    match tok.kind() {
        TokenKind::Identifier(name, _) => assert_eq!(&**name, "alert"),
        other => panic!("expected Identifier, got {other:?}"),
    }
    assert!(tok.flags().contains(TokenFlags::ESCAPED));
}

#[test]
fn private_identifier() {
    let got = kinds("#field", NO_REGEX);
    assert_eq!(got, vec![TokenKind::PrivateIdentifier("field".into())]);
}

#[test]
fn html_comment_skipped_in_script_goal() {
    let got = kinds("<!-- comment\nx", NO_REGEX);
    assert_eq!(got, vec![TokenKind::Identifier("x".into(), None)]);
}

#[test]
fn html_comment_not_skipped_in_module_goal() {
    let mut lexer = Lexer::with_options(
        "<!-- x",
        LexerOptions {
            module: true,
            ..LexerOptions::default()
        },
    );
    let tok = lexer.next_token(NO_REGEX);
    assert_eq!(tok.kind(), &TokenKind::Punctuator(Punctuator::LessThan));
}

#[test]
fn empty_source_is_immediately_eof() {
    let mut lexer = Lexer::new("");
    let tok = lexer.next_token(NO_REGEX);
    assert_eq!(tok.kind(), &TokenKind::EndOfSource);
}

#[test]
fn unterminated_string_is_fatal() {
    let mut lexer = Lexer::new("'abc");
    let tok = lexer.next_token(NO_REGEX);
    assert!(matches!(tok.kind(), TokenKind::Error(ErrorKind::UnterminatedString)));
    assert!(lexer.is_fatal());
}

#[test]
fn unterminated_template_is_fatal() {
    let mut lexer = Lexer::new("`abc");
    let tok = lexer.next_token(NO_REGEX);
    assert!(matches!(tok.kind(), TokenKind::Error(ErrorKind::UnterminatedTemplate)));
    assert!(lexer.is_fatal());
}

#[test]
fn unterminated_template_after_substitution_is_fatal() {
    let mut lexer = Lexer::new("`a${b}c");
    let _ = lexer.next_token(NO_REGEX); // TemplateHead
    let _ = lexer.next_token(NO_REGEX); // Identifier b
    // `}` pops the brace stack and re-enters template scanning, which hits EOF before a
    // closing backtick or `${`.
    let tok = lexer.next_token(NO_REGEX);
    assert!(matches!(tok.kind(), TokenKind::Error(ErrorKind::UnterminatedTemplate)));
}

#[test]
fn unpaired_surrogate_is_reported_not_panicking() {
    let lone_high = [0xD800u16];
    let mut lexer = Lexer::from_code_units(&lone_high, LexerOptions::default());
    let tok = lexer.next_token(NO_REGEX);
    assert!(matches!(tok.kind(), TokenKind::Error(ErrorKind::UnpairedSurrogate)));
}

#[test]
fn boolean_and_null_literals() {
    let got = kinds("true false null", NO_REGEX);
    assert_eq!(
        got,
        vec![
            TokenKind::BooleanLiteral(true),
            TokenKind::BooleanLiteral(false),
            TokenKind::NullLiteral,
        ]
    );
}

#[test]
fn escaped_boolean_literal_is_identifier() {
    // `true` spells `true` with its first character escaped; literals are keyword-shaped
    // text matched only on the *unescaped* spelling, so this scans as a plain identifier.
    let mut lexer = Lexer::new("\\u0074rue");
    let tok = lexer.next_token(NO_REGEX);
    assert_eq!(tok.kind(), &TokenKind::Identifier("true".into(), None));
    assert!(tok.flags().contains(TokenFlags::ESCAPED));
}

#[test]
fn unicode_escape_out_of_range_in_identifier() {
    let got = kinds(r"\u{110000}", NO_REGEX);
    assert!(matches!(
        got[0],
        TokenKind::Error(ErrorKind::UnicodeEscapeOutOfRange)
    ));
}

#[test]
fn unicode_escape_out_of_range_in_template_is_tolerated() {
    let got = kinds(r"`\u{110000}`", NO_REGEX);
    match &got[0] {
        TokenKind::TemplateNoSubstitution(ts) => assert_eq!(ts.cooked, None),
        other => panic!("expected TemplateNoSubstitution, got {other:?}"),
    }
}

#[test]
fn with_statement_in_strict_mode_is_rejected_by_parser_not_lexer() {
    // `with` itself always scans as a keyword; whether the statement is allowed under
    // strict mode is a parser concern, not raised here.
    let got = kinds("with", Context::STRICT);
    assert_eq!(got, vec![TokenKind::Keyword(Keyword::With)]);
}
