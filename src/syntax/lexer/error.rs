//! This module contains the errors used by the lexer.

use std::{error, fmt};

/// An error that occurred while splitting source text into tokens.
///
/// The message text is part of the diagnostic contract: tools match on
/// it and on the byte offset it embeds to render a cursor at the first
/// offending character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    details: Box<str>,
}

impl Error {
    /// Creates a new syntax error from a message.
    pub(super) fn syntax<M>(msg: M) -> Self
    where
        M: Into<Box<str>>,
    {
        Self {
            details: msg.into(),
        }
    }

    /// The diagnostic message.
    pub fn message(&self) -> &str {
        &self.details
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.details)
    }
}

impl error::Error for Error {}
