//! This module implements lexing for string literals.
//!
//! The emitted token covers the whole literal, surrounding double quotes
//! included; escape sequences are validated but never decoded.

use super::{chars, Cursor, Error, Tokenizer};
use crate::{
    profiler::Profiler,
    syntax::lexer::{Token, TokenKind},
};
use std::cmp;

/// String literal lexing.
///
/// Expects the cursor to sit on the opening `"`. The escape classes are
/// those of the Definition: single-character escapes, `\^c` control
/// escapes, `\ddd` decimal escapes, `\uxxxx` hexadecimal escapes and
/// `\f...f\` format escapes for breaking a literal across lines.
#[derive(Debug, Clone, Copy)]
pub(super) struct StringLiteral;

impl StringLiteral {
    /// Creates a new string literal lexer.
    pub(super) fn new() -> Self {
        Self
    }

    /// Scans the remainder of a `\` escape sequence; the backslash is
    /// already consumed. On a successful return the cursor sits on the
    /// first character that belongs to the string body again.
    ///
    /// An unknown escape character is left in place: the string body
    /// loop re-examines it and rejects it there if it is not printable.
    fn escape(&self, cursor: &mut Cursor<'_>, string_start: usize) -> Result<(), Error> {
        loop {
            match cursor.peek() {
                None => {
                    return Err(Error::syntax(format!(
                        "unclosed string starting at {}",
                        string_start
                    )));
                }
                Some(b) if chars::is_single_escape(b) => {
                    cursor.advance();
                    return Ok(());
                }
                Some(b) if chars::is_format_escape(b) => {
                    cursor.advance();
                    return self.format(cursor);
                }
                Some(b'^') => {
                    cursor.advance();
                    match cursor.peek() {
                        None => {
                            return Err(Error::syntax(format!(
                                "incomplete control escape sequence at {}",
                                cursor.pos()
                            )));
                        }
                        Some(b) if chars::is_control_escape(b) => {
                            // The character after the control name is
                            // dispatched as an escape again.
                            cursor.advance();
                            continue;
                        }
                        Some(_) => {
                            return Err(Error::syntax(format!(
                                "invalid control escape sequence at {}",
                                cursor.pos()
                            )));
                        }
                    }
                }
                Some(b'u') => {
                    cursor.advance();
                    return self.fixed_digits(cursor, 4, chars::is_hex_digit, "\\uxxxx");
                }
                Some(b) if chars::is_dec_digit(b) => {
                    return self.fixed_digits(cursor, 3, chars::is_dec_digit, "\\ddd");
                }
                Some(_) => return Ok(()),
            }
        }
    }

    /// Requires exactly `count` characters of the digit class, starting
    /// at the cursor.
    fn fixed_digits(
        &self,
        cursor: &mut Cursor<'_>,
        count: usize,
        digit: fn(u8) -> bool,
        shape: &str,
    ) -> Result<(), Error> {
        let start = cursor.pos();
        for _ in 0..count {
            match cursor.peek() {
                Some(b) if digit(b) => cursor.advance(),
                _ => {
                    let end = cmp::min(start + count, cursor.source().len());
                    return Err(Error::syntax(format!(
                        "in string, expected escape sequence {} but found {}",
                        shape,
                        cursor.source().slice(start, end)
                    )));
                }
            }
        }
        Ok(())
    }

    /// Consumes the interior of a `\f...f\` format escape; the first
    /// format character is already consumed.
    fn format(&self, cursor: &mut Cursor<'_>) -> Result<(), Error> {
        loop {
            match cursor.peek() {
                None => {
                    return Err(Error::syntax(format!(
                        "incomplete format escape sequence at {}",
                        cursor.pos()
                    )));
                }
                Some(b'\\') => {
                    cursor.advance();
                    return Ok(());
                }
                Some(b) if chars::is_format_escape(b) => cursor.advance(),
                Some(_) => {
                    return Err(Error::syntax(format!(
                        "invalid format escape sequence at {}",
                        cursor.pos()
                    )));
                }
            }
        }
    }
}

impl<'s> Tokenizer<'s> for StringLiteral {
    fn lex(&mut self, cursor: &mut Cursor<'s>, tokens: &mut Vec<Token<'s>>) -> Result<(), Error> {
        let _timer = Profiler::global().start_event("StringLiteral", "lexing");

        let start = cursor.pos();
        cursor.advance();

        loop {
            match cursor.peek() {
                None => {
                    return Err(Error::syntax(format!(
                        "unclosed string starting at {}",
                        start
                    )));
                }
                Some(b'"') => {
                    cursor.advance();
                    tokens.push(Token::new(cursor.slice_from(start), TokenKind::String));
                    return Ok(());
                }
                Some(b'\\') => {
                    cursor.advance();
                    self.escape(cursor, start)?;
                }
                Some(b) if chars::is_print(b) => cursor.advance(),
                Some(_) => {
                    return Err(Error::syntax(format!(
                        "non-printable character at {}",
                        cursor.pos()
                    )));
                }
            }
        }
    }
}
