//! This module implements lexing for the numeric constants of Standard
//! ML: decimal and hexadecimal integers, decimal and hexadecimal words,
//! and reals without exponents.

use super::{chars, Cursor, Error, Tokenizer};
use crate::{
    profiler::Profiler,
    syntax::lexer::{Token, TokenKind},
};

/// Numeric constant lexing.
///
/// Expects the cursor to sit on the optional leading `~` or on the first
/// digit. The prefixes `0x`, `0w` and `0wx` overlap with ordinary
/// identifiers, so the lexer commits to a format only once the full
/// prefix, digits included, has been seen; otherwise the shorter
/// constant is emitted and the trailing letters are left for the
/// identifier lexer.
///
/// Real constants with exponents are rejected outright.
#[derive(Debug, Clone, Copy)]
pub(super) struct NumberLiteral;

impl NumberLiteral {
    /// Creates a new numeric constant lexer.
    pub(super) fn new() -> Self {
        Self
    }

    /// Scans the digits after the decimal point and emits a real
    /// constant. The cursor sits right after the dot.
    fn real_fraction<'s>(
        &self,
        cursor: &mut Cursor<'s>,
        tokens: &mut Vec<Token<'s>>,
        start: usize,
    ) -> Result<(), Error> {
        if !cursor.peek().map_or(false, chars::is_dec_digit) {
            return Err(Error::syntax("unexpected end of real constant"));
        }
        cursor.take_while(chars::is_dec_digit);

        if matches!(cursor.peek(), Some(b'E') | Some(b'e')) {
            return Err(Error::syntax(
                "real constants with exponents not supported yet",
            ));
        }

        tokens.push(Token::new(cursor.slice_from(start), TokenKind::Real));
        Ok(())
    }

    /// Absorbs the remaining decimal digits of an integer, switching to
    /// a real constant if a decimal point follows.
    fn dec_tail<'s>(
        &self,
        cursor: &mut Cursor<'s>,
        tokens: &mut Vec<Token<'s>>,
        start: usize,
    ) -> Result<(), Error> {
        cursor.take_while(chars::is_dec_digit);
        if cursor.next_is(b'.') {
            return self.real_fraction(cursor, tokens, start);
        }
        tokens.push(Token::new(cursor.slice_from(start), TokenKind::Integer));
        Ok(())
    }
}

impl<'s> Tokenizer<'s> for NumberLiteral {
    fn lex(&mut self, cursor: &mut Cursor<'s>, tokens: &mut Vec<Token<'s>>) -> Result<(), Error> {
        let _timer = Profiler::global().start_event("NumberLiteral", "lexing");

        let start = cursor.pos();
        let negated = cursor.next_is(b'~');

        if !cursor.next_is(b'0') {
            // A plain (possibly negated) decimal constant.
            return self.dec_tail(cursor, tokens, start);
        }

        if negated {
            // `~0` may open a hexadecimal integer, a real or a longer
            // decimal integer; word constants cannot be negated.
            match cursor.peek() {
                Some(b'x') if cursor.peek_nth(1).map_or(false, chars::is_hex_digit) => {
                    cursor.advance();
                    cursor.take_while(chars::is_hex_digit);
                    tokens.push(Token::new(cursor.slice_from(start), TokenKind::Integer));
                    Ok(())
                }
                Some(b'.') => {
                    cursor.advance();
                    self.real_fraction(cursor, tokens, start)
                }
                Some(b) if chars::is_dec_digit(b) => self.dec_tail(cursor, tokens, start),
                _ => {
                    tokens.push(Token::new(cursor.slice_from(start), TokenKind::Integer));
                    Ok(())
                }
            }
        } else {
            match cursor.peek() {
                Some(b'x') if cursor.peek_nth(1).map_or(false, chars::is_hex_digit) => {
                    cursor.advance();
                    cursor.take_while(chars::is_hex_digit);
                    tokens.push(Token::new(cursor.slice_from(start), TokenKind::Integer));
                    Ok(())
                }
                Some(b'w') => {
                    // Word constant disambiguation. Without a digit (or
                    // `x` plus hex digit) after the `w`, the `0` stands
                    // alone and the `w` starts an ordinary identifier.
                    match cursor.peek_nth(1) {
                        Some(b'x') if cursor.peek_nth(2).map_or(false, chars::is_hex_digit) => {
                            cursor.advance_by(2);
                            cursor.take_while(chars::is_hex_digit);
                            tokens.push(Token::new(cursor.slice_from(start), TokenKind::Word));
                        }
                        Some(b) if chars::is_dec_digit(b) => {
                            cursor.advance();
                            cursor.take_while(chars::is_dec_digit);
                            tokens.push(Token::new(cursor.slice_from(start), TokenKind::Word));
                        }
                        _ => {
                            tokens.push(Token::new(cursor.slice_from(start), TokenKind::Integer));
                        }
                    }
                    Ok(())
                }
                Some(b'.') => {
                    cursor.advance();
                    self.real_fraction(cursor, tokens, start)
                }
                Some(b) if chars::is_dec_digit(b) => self.dec_tail(cursor, tokens, start),
                _ => {
                    tokens.push(Token::new(cursor.slice_from(start), TokenKind::Integer));
                    Ok(())
                }
            }
        }
    }
}
