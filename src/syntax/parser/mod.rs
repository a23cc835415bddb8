//! A recursive-descent parser over the lexed token stream.
//!
//! Early development: the grammar currently covers value declarations
//! with the patterns and expressions needed to exercise every token
//! class. The parser filters comment tokens out up front and treats the
//! remaining sequence as random access by index; it never rewinds
//! across the lexer boundary. Every node it builds retains the concrete
//! delimiter tokens it observed.


mod error;

pub use self::error::{ParseError, ParseResult};

use crate::{
    profiler::Profiler,
    syntax::{
        ast::{
            node::{Ast, Dec, Exp, Pat},
            reserved::Reserved,
        },
        lexer::{self, Token, TokenKind},
    },
};

/// Lexes and parses `src` into a syntax tree.
///
/// Prints a single `Successfully parsed N out of M tokens` line on
/// completion.
pub fn parse(src: &str) -> ParseResult<'_> {
    let tokens = match lexer::tokens(src) {
        Ok(tokens) => tokens,
        Err(failure) => return Err(ParseError::lex(&failure)),
    };
    Parser::new(tokens).parse_program()
}

/// A recursive-descent consumer of the comment-free token stream.
#[derive(Debug)]
pub struct Parser<'s> {
    /// The tokens being input, comments already filtered out.
    tokens: Vec<Token<'s>>,
    /// The current position within the tokens.
    pos: usize,
}

impl<'s> Parser<'s> {
    /// Creates a new parser, using `tokens` as input.
    ///
    /// Comment tokens never reach the grammar and are dropped here.
    pub fn new(tokens: Vec<Token<'s>>) -> Self {
        let tokens = tokens.into_iter().filter(|t| !t.is_comment()).collect();
        Self { tokens, pos: 0 }
    }

    /// Parses the whole token stream as a sequence of declarations.
    pub fn parse_program(&mut self) -> ParseResult<'s> {
        let _timer = Profiler::global().start_event("parse", "parsing");

        let mut decs = Vec::new();
        while self.pos < self.tokens.len() {
            decs.push(self.parse_dec()?);
        }

        println!(
            "Successfully parsed {} out of {} tokens",
            self.pos,
            self.tokens.len()
        );

        Ok(Ast { decs })
    }

    /// Gets the token at `pos`, or an abrupt-end error.
    fn get(&self, pos: usize) -> Result<Token<'s>, ParseError> {
        self.tokens.get(pos).copied().ok_or_else(|| {
            let position = self.tokens.last().map_or(0, |t| t.slice().end());
            ParseError::new(position, "unexpected end of input")
        })
    }

    /// Consumes and returns the next token.
    fn advance(&mut self) -> Result<Token<'s>, ParseError> {
        let token = self.get(self.pos)?;
        self.pos += 1;
        Ok(token)
    }

    /// Consumes the next token, which must be the reserved word `word`.
    fn expect(&mut self, word: Reserved, context: &str) -> Result<Token<'s>, ParseError> {
        let token = self.get(self.pos)?;
        if token.kind() == TokenKind::Reserved(word) {
            self.pos += 1;
            Ok(token)
        } else {
            Err(ParseError::new(
                token.slice().start(),
                format!("expected `{}` in {}, found {}", word, context, token.kind()),
            ))
        }
    }

    /// Checks whether the next token is the reserved word `word` and
    /// consumes it if so.
    fn eat(&mut self, word: Reserved) -> Option<Token<'s>> {
        match self.tokens.get(self.pos) {
            Some(token) if token.kind() == TokenKind::Reserved(word) => {
                self.pos += 1;
                Some(*token)
            }
            _ => None,
        }
    }

    /// Parses one declaration.
    fn parse_dec(&mut self) -> Result<Dec<'s>, ParseError> {
        if let Some(semi_tok) = self.eat(Reserved::Semicolon) {
            return Ok(Dec::Semicolon { semi_tok });
        }

        let token = self.get(self.pos)?;
        if token.kind() != TokenKind::Reserved(Reserved::Val) {
            return Err(ParseError::new(
                token.slice().start(),
                format!("expected a declaration, found {}", token.kind()),
            )
            .explained("only `val` declarations are understood so far"));
        }

        let val_tok = self.advance()?;
        let rec_tok = self.eat(Reserved::Rec);
        let pat = self.parse_pat()?;
        let eq_tok = self.expect(Reserved::Equal, "value binding")?;
        let exp = self.parse_exp()?;

        Ok(Dec::Val {
            val_tok,
            rec_tok,
            pat,
            eq_tok,
            exp,
        })
    }

    /// Parses one pattern.
    fn parse_pat(&mut self) -> Result<Pat<'s>, ParseError> {
        let token = self.get(self.pos)?;
        match token.kind() {
            TokenKind::Reserved(Reserved::Underscore) => {
                self.pos += 1;
                Ok(Pat::Wildcard { tok: token })
            }
            TokenKind::Reserved(Reserved::LParen) => {
                let (lparen, elems, commas, rparen) =
                    self.parse_delimited(Reserved::RParen, Self::parse_pat)?;
                Ok(Pat::Paren {
                    lparen,
                    elems,
                    commas,
                    rparen,
                })
            }
            _ if token.is_pattern_constant() => {
                self.pos += 1;
                Ok(Pat::Constant { tok: token })
            }
            _ if token.is_maybe_long_identifier() => {
                let (qualifiers, ident) = self.parse_long_ident()?;
                Ok(Pat::Ident { qualifiers, ident })
            }
            _ => Err(ParseError::new(
                token.slice().start(),
                format!("expected a pattern, found {}", token.kind()),
            )),
        }
    }

    /// Parses one expression.
    fn parse_exp(&mut self) -> Result<Exp<'s>, ParseError> {
        let token = self.get(self.pos)?;
        match token.kind() {
            TokenKind::Reserved(Reserved::LParen) => {
                let (lparen, elems, commas, rparen) =
                    self.parse_delimited(Reserved::RParen, Self::parse_exp)?;
                Ok(Exp::Paren {
                    lparen,
                    elems,
                    commas,
                    rparen,
                })
            }
            TokenKind::Reserved(Reserved::LSquare) => {
                let (lsquare, elems, commas, rsquare) =
                    self.parse_delimited(Reserved::RSquare, Self::parse_exp)?;
                Ok(Exp::List {
                    lsquare,
                    elems,
                    commas,
                    rsquare,
                })
            }
            _ if token.is_constant() => {
                self.pos += 1;
                Ok(Exp::Constant { tok: token })
            }
            _ if token.is_maybe_long_identifier() => {
                let (qualifiers, ident) = self.parse_long_ident()?;
                Ok(Exp::Ident { qualifiers, ident })
            }
            _ => Err(ParseError::new(
                token.slice().start(),
                format!("expected an expression, found {}", token.kind()),
            )),
        }
    }

    /// Parses a comma-separated, possibly empty sequence between an
    /// opening delimiter (already peeked) and `close`.
    fn parse_delimited<T>(
        &mut self,
        close: Reserved,
        mut elem: impl FnMut(&mut Self) -> Result<T, ParseError>,
    ) -> Result<(Token<'s>, Vec<T>, Vec<Token<'s>>, Token<'s>), ParseError> {
        let open = self.advance()?;
        let mut elems = Vec::new();
        let mut commas = Vec::new();

        if let Some(end) = self.eat(close) {
            return Ok((open, elems, commas, end));
        }

        loop {
            elems.push(elem(self)?);
            match self.eat(Reserved::Comma) {
                Some(comma) => commas.push(comma),
                None => break,
            }
        }

        let end = self.expect(close, "delimited sequence")?;
        Ok((open, elems, commas, end))
    }

    /// Parses a possibly qualified identifier: zero or more qualifier
    /// tokens followed by the identifier itself.
    fn parse_long_ident(&mut self) -> Result<(Vec<Token<'s>>, Token<'s>), ParseError> {
        let mut qualifiers = Vec::new();
        loop {
            let token = self.advance()?;
            match token.kind() {
                TokenKind::Qualifier => qualifiers.push(token),
                TokenKind::Identifier => return Ok((qualifiers, token)),
                _ => {
                    return Err(ParseError::new(
                        token.slice().start(),
                        format!("expected an identifier, found {}", token.kind()),
                    ));
                }
            }
        }
    }
}
