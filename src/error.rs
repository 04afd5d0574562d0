// Part of caissa, a chess rules engine. See LICENSE for license information.

//! Parse errors for textual coordinate notation.
//!
//! The engine's mutating surface never fails with a [`ParseError`] — a
//! rejected move is reported as [`crate::board::RequestOutcome::Failure`],
//! not an error. This type exists purely for turning user-typed text (as
//! read by the `cli` binary) into [`crate::geometry::Square`]s and
//! [`crate::movegen::Move`]s.

use std::fmt;

/// An error that occurs when a string cannot be parsed as chess notation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// A token was outside the expected range (e.g. file `j`, rank `9`).
    ErroneousToken,
    /// A token was expected but the input ended first.
    ExpectedToken,
    /// A token was present but was not of the expected shape.
    InvalidToken,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::ErroneousToken => "token out of range",
            Self::ExpectedToken => "expected a token but found none",
            Self::InvalidToken => "invalid token",
        };
        f.write_str(text)
    }
}

impl std::error::Error for ParseError {}
