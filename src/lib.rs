//! Smelt is a lexer and parser for the Standard ML programming language.
//!
//! The crate is library-shaped: it exposes the lexer as
//! [`syntax::lexer::tokens`], which splits a source text into a token
//! sequence (or a failure carrying the tokens produced so far), and the
//! parser as [`syntax::parser::parse`], which builds an abstract syntax
//! tree that retains every delimiter token it observed. Tokens borrow
//! their text from the input; nothing is copied out of the source.

#![deny(
    unused_qualifications,
    clippy::all,
    unused_import_braces,
    unused_lifetimes,
    unreachable_pub,
    trivial_numeric_casts,
    missing_debug_implementations,
    non_ascii_idents,
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

pub mod profiler;
pub mod syntax;

pub use crate::syntax::{
    ast::node::Ast,
    lexer::{Lexer, Token, TokenKind},
    parser::Parser,
    source::{Slice, Source},
};
