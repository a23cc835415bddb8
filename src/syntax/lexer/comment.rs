//! This module implements lexing for `(* ... *)` comments, which may
//! nest to arbitrary depth.

use super::{Cursor, Error, Tokenizer};
use crate::{
    profiler::Profiler,
    syntax::lexer::{Token, TokenKind},
};

/// Comment lexing.
///
/// Expects the cursor to sit on the `(` of the opening `(*`. The emitted
/// token covers the whole comment, delimiters of every nesting level
/// included.
#[derive(Debug, Clone, Copy)]
pub(super) struct BlockComment;

impl BlockComment {
    /// Creates a new comment lexer.
    pub(super) fn new() -> Self {
        Self
    }
}

impl<'s> Tokenizer<'s> for BlockComment {
    fn lex(&mut self, cursor: &mut Cursor<'s>, tokens: &mut Vec<Token<'s>>) -> Result<(), Error> {
        let _timer = Profiler::global().start_event("BlockComment", "lexing");

        let start = cursor.pos();
        cursor.advance_by(2);
        let mut nesting = 1_usize;

        loop {
            if nesting == 0 {
                tokens.push(Token::new(cursor.slice_from(start), TokenKind::Comment));
                return Ok(());
            }
            match (cursor.peek(), cursor.peek_nth(1)) {
                (Some(b'('), Some(b'*')) => {
                    cursor.advance_by(2);
                    nesting += 1;
                }
                (Some(b'*'), Some(b')')) => {
                    cursor.advance_by(2);
                    nesting -= 1;
                }
                (Some(_), _) => cursor.advance(),
                (None, _) => {
                    return Err(Error::syntax(format!(
                        "unclosed comment starting at {}",
                        start
                    )));
                }
            }
        }
    }
}
