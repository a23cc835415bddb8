//! This module implements lexing for identifiers, reserved words and the
//! structure qualifiers of long identifiers.

use super::{chars, Cursor, Error, Tokenizer};
use crate::{
    profiler::Profiler,
    syntax::{
        ast::reserved::Reserved,
        lexer::{Token, TokenKind},
        source::Slice,
    },
};
use std::str::FromStr;

/// Identifier lexing.
///
/// Covers alphanumeric identifiers (which may start with a prime and may
/// open a qualified long identifier), symbolic identifiers, and the
/// reserved words both alphabets can spell. Expects the cursor to sit on
/// the first character of the identifier.
///
/// More information:
///  - [The Definition of Standard ML, §2.4][defn]
///
/// [defn]: https://smlfamily.github.io/sml97-defn.pdf
#[derive(Debug, Clone, Copy)]
pub(super) struct Identifier {
    qualified: bool,
}

impl Identifier {
    /// Creates a new identifier/reserved-word lexer.
    pub(super) fn new() -> Self {
        Self { qualified: false }
    }

    /// Finishes a scanned segment: reserved words become reserved
    /// tokens, unless the segment was reached through a qualifier, in
    /// which case a reserved word is an error.
    fn terminate<'s>(&self, slice: Slice<'s>, tokens: &mut Vec<Token<'s>>) -> Result<(), Error> {
        match Reserved::from_str(slice.as_str()) {
            Ok(_) if self.qualified => Err(Error::syntax(format!(
                "reserved word '{}' prefaced by qualifiers",
                slice
            ))),
            Ok(word) => {
                tokens.push(Token::new(slice, TokenKind::Reserved(word)));
                Ok(())
            }
            Err(_) => {
                tokens.push(Token::new(slice, TokenKind::Identifier));
                Ok(())
            }
        }
    }
}

impl<'s> Tokenizer<'s> for Identifier {
    fn lex(&mut self, cursor: &mut Cursor<'s>, tokens: &mut Vec<Token<'s>>) -> Result<(), Error> {
        let _timer = Profiler::global().start_event("Identifier", "lexing");

        loop {
            let start = cursor.pos();
            let first = cursor
                .peek()
                .expect("dispatch guarantees an identifier character");

            // A symbolic segment never continues a long identifier, so
            // scanning it always terminates the token.
            if chars::is_symbolic(first) {
                cursor.take_while(chars::is_symbolic);
                return self.terminate(cursor.slice_from(start), tokens);
            }

            let starts_prime = first == b'\'';
            cursor.advance();
            cursor.take_while(chars::is_alphanumeric);
            let slice = cursor.slice_from(start);

            if cursor.peek() == Some(b'.') {
                if starts_prime {
                    return Err(Error::syntax(
                        "structure identifiers cannot start with prime",
                    ));
                }
                if Reserved::from_str(slice.as_str()).is_ok() {
                    return Err(Error::syntax(format!(
                        "reserved word '{}' cannot be used as qualifier",
                        slice
                    )));
                }
                tokens.push(Token::new(slice, TokenKind::Qualifier));
                cursor.advance();

                // The dot must be followed by another segment of the
                // long identifier.
                match cursor.peek() {
                    Some(b) if chars::is_letter(b) || chars::is_symbolic(b) => {
                        self.qualified = true;
                        continue;
                    }
                    _ => {
                        return Err(Error::syntax("unexpected end of qualified identifier"));
                    }
                }
            }

            return self.terminate(slice, tokens);
        }
    }
}
