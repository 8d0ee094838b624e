//! Core error types for graph extraction
//!
//! Every failure the pipeline can produce is a parse error: the input text
//! is deterministic, so there is nothing to retry and nothing to recover.

use thiserror::Error;

use super::Position;

/// Result alias used throughout the extraction pipeline
pub type Result<T> = std::result::Result<T, GraphError>;

/// Core error types for graph extraction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The diagram is structurally malformed at the given grid position.
    ///
    /// Positions are signed because a connector can point past the grid edge.
    #[error("Parse error: {message} at line {line}, column {column}")]
    ParseError {
        message: String,
        line: isize,
        column: isize,
    },
}

impl GraphError {
    /// Create a new parse error
    pub fn parse_error(message: impl Into<String>, line: isize, column: isize) -> Self {
        Self::ParseError {
            message: message.into(),
            line,
            column,
        }
    }

    /// A cell expected to hold a connector character holds something else
    pub fn unexpected_character(found: Option<char>, position: Position) -> Self {
        let message = match found {
            Some(c) => format!("unexpected character '{}' in connector", c),
            None => "unexpected end of grid in connector".to_string(),
        };
        Self::parse_error(message, position.row, position.column)
    }

    /// A connector chain terminates somewhere that no word occupies
    pub fn dangling_connector(position: Position) -> Self {
        Self::parse_error("connector does not end at a word", position.row, position.column)
    }

    /// The grid position the error refers to
    pub fn position(&self) -> Position {
        match self {
            Self::ParseError { line, column, .. } => Position::new(*line, *column),
        }
    }

    /// The descriptive message without the position suffix
    pub fn message(&self) -> &str {
        match self {
            Self::ParseError { message, .. } => message,
        }
    }
}
