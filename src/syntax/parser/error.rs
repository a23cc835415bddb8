//! Error and result implementation for the parser.

use crate::syntax::{ast::node::Ast, lexer::Failure};
use std::{error, fmt};

/// Result of a parsing operation.
pub type ParseResult<'s> = Result<Ast<'s>, ParseError>;

/// A structured description of a parse failure.
///
/// Unlike lexer errors, parse errors abort the whole invocation without
/// a partial tree; the record carries everything a diagnostic line
/// needs: a header naming the failing phase, the byte offset of the
/// offending token, what went wrong, and optionally a longer
/// explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    header: Box<str>,
    position: usize,
    what: Box<str>,
    explain: Option<Box<str>>,
}

impl ParseError {
    /// Creates a new parse error at `position`.
    pub(super) fn new<W>(position: usize, what: W) -> Self
    where
        W: Into<Box<str>>,
    {
        Self {
            header: "parse error".into(),
            position,
            what: what.into(),
            explain: None,
        }
    }

    /// Attaches a longer explanation to the error.
    pub(super) fn explained<E>(mut self, explain: E) -> Self
    where
        E: Into<Box<str>>,
    {
        self.explain = Some(explain.into());
        self
    }

    /// Creates a parse error from a failed lex.
    pub(super) fn lex(failure: &Failure<'_>) -> Self {
        let position = failure
            .partial
            .last()
            .map_or(0, |token| token.slice().end());
        Self {
            header: "lex error".into(),
            position,
            what: failure.error.message().into(),
            explain: None,
        }
    }

    /// The phase the error was raised in.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// The byte offset of the offending token.
    pub fn position(&self) -> usize {
        self.position
    }

    /// What went wrong.
    pub fn what(&self) -> &str {
        &self.what
    }

    /// The longer explanation, if any.
    pub fn explain(&self) -> Option<&str> {
        self.explain.as_deref()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} at {}", self.header, self.what, self.position)?;
        if let Some(explain) = &self.explain {
            write!(f, " ({})", explain)?;
        }
        Ok(())
    }
}

impl error::Error for ParseError {}
