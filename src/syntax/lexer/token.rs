//! This module implements the tokens of the Standard ML language.

use crate::syntax::{ast::reserved::Reserved, source::Slice};
use std::fmt;

#[cfg(feature = "deser")]
use serde::{Deserialize, Serialize};

/// The smallest individual unit the parser can understand: a source
/// slice paired with its lexical class.
///
/// Tokens borrow their text from the source view they were lexed from.
#[cfg_attr(feature = "deser", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'s> {
    /// The token class.
    kind: TokenKind,
    /// The token text in the original source code.
    slice: Slice<'s>,
}

impl<'s> Token<'s> {
    /// Creates a new token from a source slice and a class.
    #[inline]
    pub fn new(slice: Slice<'s>, kind: TokenKind) -> Self {
        Self { kind, slice }
    }

    /// Gets the class of the token.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Gets the token slice in the original source code.
    #[inline]
    pub fn slice(&self) -> Slice<'s> {
        self.slice
    }

    /// Gets the token text.
    #[inline]
    pub fn text(&self) -> &'s str {
        self.slice.as_str()
    }

    /// Checks if this token is a comment.
    #[inline]
    pub fn is_comment(&self) -> bool {
        self.kind == TokenKind::Comment
    }

    /// Checks if this token is a type variable such as `'a`.
    pub fn is_ty_var(&self) -> bool {
        self.kind == TokenKind::Identifier && self.text().starts_with('\'')
    }

    /// Checks if this token is a special constant.
    pub fn is_constant(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Integer | TokenKind::Word | TokenKind::Real | TokenKind::String
        )
    }

    /// Checks if this token is a constant that may appear in a pattern.
    ///
    /// Real constants are excluded: matching on reals is not legal SML.
    pub fn is_pattern_constant(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Integer | TokenKind::Word | TokenKind::String
        )
    }

    /// Checks if this token may begin or continue a long identifier.
    ///
    /// Type variables never take part in long identifiers.
    pub fn is_maybe_long_identifier(&self) -> bool {
        match self.kind {
            TokenKind::Qualifier => true,
            TokenKind::Identifier => !self.text().starts_with('\''),
            _ => false,
        }
    }

    /// Checks if this token may begin a declaration.
    pub fn is_dec_start_token(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Reserved(
                Reserved::Val
                    | Reserved::Fun
                    | Reserved::Type
                    | Reserved::Datatype
                    | Reserved::Abstype
                    | Reserved::Exception
                    | Reserved::Local
                    | Reserved::Open
                    | Reserved::Infix
                    | Reserved::Infixr
                    | Reserved::Nonfix
            )
        )
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.slice, f)
    }
}

/// Represents the lexical class of a token.
#[cfg_attr(feature = "deser", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// One of the fixed reserved words or punctuation marks.
    Reserved(Reserved),

    /// An alphanumeric or symbolic identifier.
    Identifier,

    /// The structure prefix of a long identifier, ending at the access
    /// dot. The dot itself is not part of the slice.
    Qualifier,

    /// A decimal or hexadecimal integer constant, possibly negated.
    Integer,

    /// A decimal or hexadecimal word constant such as `0w12` or `0wx1A`.
    Word,

    /// A real constant such as `1.5` or `~0.5`.
    Real,

    /// A string constant, surrounding double quotes included.
    String,

    /// A possibly nested `(* ... *)` comment, delimiters included.
    Comment,
}

impl From<Reserved> for TokenKind {
    fn from(word: Reserved) -> Self {
        Self::Reserved(word)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Reserved(word) => write!(f, "`{}`", word),
            Self::Identifier => f.write_str("an identifier"),
            Self::Qualifier => f.write_str("a structure qualifier"),
            Self::Integer => f.write_str("an integer constant"),
            Self::Word => f.write_str("a word constant"),
            Self::Real => f.write_str("a real constant"),
            Self::String => f.write_str("a string constant"),
            Self::Comment => f.write_str("a comment"),
        }
    }
}
