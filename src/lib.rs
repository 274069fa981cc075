#![deny(
    unused_qualifications,
    clippy::all,
    unused_import_braces,
    unused_lifetimes,
    unreachable_pub,
    trivial_numeric_casts,
    missing_debug_implementations,
    missing_copy_implementations,
    deprecated_in_future,
    meta_variable_misuse,
    non_ascii_idents,
    rust_2018_compatibility,
    rust_2018_idioms,
    future_incompatible,
    nonstandard_style
)]
#![warn(clippy::perf, clippy::single_match_else, clippy::dbg_macro)]
#![allow(
    clippy::missing_inline_in_public_items,
    clippy::cognitive_complexity,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::as_conversions
)]
//! A spec-compliant ECMAScript (ES2022+) lexical scanner.
//!
//! This crate turns a source string into a stream of classified [`Token`]s
//! for consumption by a recursive-descent parser. It performs no parsing,
//! no AST construction and no execution: it is the scanning layer alone.

pub mod syntax;

pub use crate::syntax::lexer::{Context, Error, ErrorKind, Lexer, LexerOptions};
pub use crate::syntax::token::{Token, TokenKind};
