//! ECMAScript-specific Unicode classification, layered on top of the bit-packed `ID_Start`/
//! `ID_Continue` tables from the `unicode-ident` crate (the same generated-at-build-time
//! table design rustc and `syn` use for identifier scanning).
//!
//! ECMAScript's `IdentifierStart`/`IdentifierPart` productions are the Unicode `ID_Start`/
//! `ID_Continue` properties plus a small fixed set of extra characters (`$`, `_`, and, for
//! `IdentifierPart` only, the zero-width non-joiner/joiner used in some natural-language
//! scripts' ligature rules) — see [ECMA-262 §12.7](https://tc39.es/ecma262/#sec-names-and-keywords).

const ZWNJ: char = '\u{200C}';
const ZWJ: char = '\u{200D}';

/// Whether `c` can start an `IdentifierName`.
pub(crate) fn is_identifier_start(c: char) -> bool {
    c == '$' || c == '_' || unicode_ident::is_xid_start(c)
}

/// Whether `c` can continue an `IdentifierName` once started.
pub(crate) fn is_identifier_part(c: char) -> bool {
    c == '$' || c == ZWNJ || c == ZWJ || unicode_ident::is_xid_continue(c)
}

/// `WhiteSpace` per [ECMA-262 §12.2](https://tc39.es/ecma262/#sec-white-space): Unicode
/// `White_Space` general category members that aren't line terminators, plus the BOM
/// (`U+FEFF`), which ECMAScript treats as whitespace wherever it appears.
pub(crate) fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}' | '\u{000B}' | '\u{000C}' | '\u{0020}' | '\u{00A0}' | '\u{FEFF}'
    ) || (c.is_whitespace() && !is_line_terminator(c))
}

/// `LineTerminator` per [ECMA-262 §12.3](https://tc39.es/ecma262/#sec-line-terminators).
pub(crate) fn is_line_terminator(c: char) -> bool {
    matches!(c, '\u{000A}' | '\u{000D}' | '\u{2028}' | '\u{2029}')
}

/// A code unit is a line terminator iff it decodes to one of the four line-terminator code
/// points; none of the four has a surrogate-pair encoding, so comparing the unit directly is
/// always correct without trying to combine a pair first.
pub(crate) fn is_line_terminator_unit(unit: u16) -> bool {
    matches!(unit, 0x000A | 0x000D | 0x2028 | 0x2029)
}

pub(crate) fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub(crate) fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}
