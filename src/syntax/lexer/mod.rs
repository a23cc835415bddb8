//! A lexical analyzer for Standard ML source code.
//!
//! The lexer splits its input into a sequence of [`Token`]s in a single
//! left-to-right pass. Tokens are slices of the input paired with a
//! lexical class; whitespace is skipped, comments are kept as tokens so
//! that later phases may filter or preserve them. On failure the tokens
//! produced so far are reported alongside the error, so that tools can
//! render a cursor at the first bad character.

#[cfg(test)]
mod tests;

mod chars;
mod comment;
mod cursor;
mod error;
mod identifier;
mod number;
mod string;
mod token;

pub use self::{
    error::Error,
    token::{Token, TokenKind},
};

use self::{
    comment::BlockComment, cursor::Cursor, identifier::Identifier, number::NumberLiteral,
    string::StringLiteral,
};
use crate::{
    profiler::Profiler,
    syntax::{ast::reserved::Reserved, source::Source},
};
use std::fmt;

/// Common interface for the per-family token lexers.
///
/// A tokenizer consumes one lexical item from the cursor and appends the
/// token(s) it produced, in input order. Implementations expect the
/// cursor to sit on the first character of the item.
trait Tokenizer<'s> {
    /// Lexes one lexical item.
    fn lex(&mut self, cursor: &mut Cursor<'s>, tokens: &mut Vec<Token<'s>>) -> Result<(), Error>;
}

/// Lexes `src` into its token sequence.
///
/// On failure the returned [`Failure`] carries every token produced
/// before the error, in input order.
pub fn tokens(src: &str) -> Result<Vec<Token<'_>>, Failure<'_>> {
    Lexer::new(src).tokens()
}

/// A failed lex: the tokens produced before the failure, plus the error.
///
/// The partial tokens are a first-class output; an editor can still
/// highlight the prefix of the buffer that lexed cleanly.
#[derive(Debug)]
pub struct Failure<'s> {
    /// Every token produced before the failure, in input order.
    pub partial: Vec<Token<'s>>,
    /// What went wrong.
    pub error: Error,
}

impl fmt::Display for Failure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

/// A lexical analyzer for Standard ML source code.
#[derive(Debug)]
pub struct Lexer<'s> {
    cursor: Cursor<'s>,
    tokens: Vec<Token<'s>>,
}

impl<'s> Lexer<'s> {
    /// Creates a lexer over `src`.
    ///
    /// The source needs to live at least as long as any token the lexer
    /// produces.
    pub fn new(src: &'s str) -> Self {
        Self {
            cursor: Cursor::new(Source::new(src)),
            tokens: Vec::new(),
        }
    }

    /// Runs the lexer to completion.
    pub fn tokens(mut self) -> Result<Vec<Token<'s>>, Failure<'s>> {
        let _timer = Profiler::global().start_event("lex", "lexing");

        loop {
            match self.next_item() {
                Ok(true) => (),
                Ok(false) => return Ok(self.tokens),
                Err(error) => {
                    return Err(Failure {
                        partial: self.tokens,
                        error,
                    });
                }
            }
        }
    }

    /// Pushes a reserved token covering `[start, cursor)`.
    fn push_reserved(&mut self, word: Reserved, start: usize) {
        self.tokens
            .push(Token::new(self.cursor.slice_from(start), word.into()));
    }

    /// Dispatches on the next character, producing zero or more tokens.
    /// Returns false once the input is exhausted.
    fn next_item(&mut self) -> Result<bool, Error> {
        let byte = match self.cursor.peek() {
            None => return Ok(false),
            Some(byte) => byte,
        };

        let start = self.cursor.pos();
        match byte {
            // `(` is a parenthesis unless a `*` follows.
            b'(' => {
                if self.cursor.peek_nth(1) == Some(b'*') {
                    BlockComment::new().lex(&mut self.cursor, &mut self.tokens)?;
                } else {
                    self.cursor.advance();
                    self.push_reserved(Reserved::LParen, start);
                }
            }
            b')' => self.single(Reserved::RParen, start),
            b'[' => self.single(Reserved::LSquare, start),
            b']' => self.single(Reserved::RSquare, start),
            b'{' => self.single(Reserved::LCurly, start),
            b'}' => self.single(Reserved::RCurly, start),
            b',' => self.single(Reserved::Comma, start),
            b';' => self.single(Reserved::Semicolon, start),
            b'_' => self.single(Reserved::Underscore, start),
            b'"' => StringLiteral::new().lex(&mut self.cursor, &mut self.tokens)?,
            // `~` opens a negated numeric constant when a digit follows,
            // extends into a symbolic identifier when a symbolic
            // character follows, and stands alone otherwise.
            b'~' => match self.cursor.peek_nth(1) {
                Some(b) if chars::is_dec_digit(b) => {
                    NumberLiteral::new().lex(&mut self.cursor, &mut self.tokens)?;
                }
                Some(b) if chars::is_symbolic(b) => {
                    Identifier::new().lex(&mut self.cursor, &mut self.tokens)?;
                }
                _ => {
                    self.cursor.advance();
                    self.tokens
                        .push(Token::new(self.cursor.slice_from(start), TokenKind::Identifier));
                }
            },
            b'\'' => Identifier::new().lex(&mut self.cursor, &mut self.tokens)?,
            b'.' => self.dots(start)?,
            b if chars::is_dec_digit(b) => {
                NumberLiteral::new().lex(&mut self.cursor, &mut self.tokens)?;
            }
            b if chars::is_symbolic(b) => {
                Identifier::new().lex(&mut self.cursor, &mut self.tokens)?;
            }
            b if chars::is_letter(b) => {
                Identifier::new().lex(&mut self.cursor, &mut self.tokens)?;
            }
            // Everything else is treated as whitespace.
            _ => self.cursor.advance(),
        }

        Ok(true)
    }

    /// Emits a single-character reserved token.
    fn single(&mut self, word: Reserved, start: usize) {
        self.cursor.advance();
        self.push_reserved(word, start);
    }

    /// A lone `.` only occurs as part of `...`.
    fn dots(&mut self, start: usize) -> Result<(), Error> {
        if self.cursor.peek_nth(1) == Some(b'.') && self.cursor.peek_nth(2) == Some(b'.') {
            self.cursor.advance_by(3);
            self.push_reserved(Reserved::DotDotDot, start);
            Ok(())
        } else {
            Err(Error::syntax("unexpected '.'"))
        }
    }
}
