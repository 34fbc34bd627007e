//! Error types for the command lexer.

use thiserror::Error;

use crate::token::Position;

/// Errors raised while turning text into tokens.
///
/// Every variant is fatal to the parse call that produced it; no partial
/// result is returned. The position points into the original message element,
/// not into any joined text the splicer may have built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// An opening quote has no matching close before the end of input.
    #[error("unmatched quote at {position}")]
    QuoteMismatch {
        /// Position of the opening quote.
        position: Position,
    },

    /// A backslash inside quotes precedes a character outside the escape set.
    #[error("invalid escape sequence '\\{sequence}' at {position}")]
    InvalidEscapeSequence {
        /// Position of the backslash.
        position: Position,
        /// The character following the backslash.
        sequence: char,
    },

    /// An `=` appears where no valid option name precedes it.
    #[error("malformed assignment at {position}")]
    MalformedAssignment {
        /// Position of the offending `=`.
        position: Position,
    },
}

impl LexError {
    /// Returns where the error occurred.
    pub fn position(&self) -> Position {
        match self {
            Self::QuoteMismatch { position }
            | Self::InvalidEscapeSequence { position, .. }
            | Self::MalformedAssignment { position } => *position,
        }
    }

    /// Returns a stable identifier for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::QuoteMismatch { .. } => "quote_mismatch",
            Self::InvalidEscapeSequence { .. } => "invalid_escape_sequence",
            Self::MalformedAssignment { .. } => "malformed_assignment",
        }
    }
}

/// Result type for lexing operations.
pub type LexResult<T> = Result<T, LexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LexError::QuoteMismatch {
            position: Position::new(0, 7),
        };
        assert_eq!(err.to_string(), "unmatched quote at element 0, offset 7");

        let err = LexError::InvalidEscapeSequence {
            position: Position::new(2, 3),
            sequence: 'z',
        };
        assert_eq!(
            err.to_string(),
            "invalid escape sequence '\\z' at element 2, offset 3"
        );
        assert_eq!(err.kind(), "invalid_escape_sequence");
        assert_eq!(err.position(), Position::new(2, 3));
    }
}
