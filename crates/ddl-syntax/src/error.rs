use crate::lexer::{error::LexerError, token::Token};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DdlError {
    #[error("Malformed DDL at line {line}, column {column} (offset {offset}): {message}, found `{found}`")]
    MalformedDdl {
        message: String,
        offset: usize,
        line: usize,
        column: usize,
        found: String,
    },
}

pub type DdlResult<T> = Result<T, DdlError>;

impl DdlError {
    pub(crate) fn at(token: &Token, message: impl Into<String>) -> Self {
        DdlError::MalformedDdl {
            message: message.into(),
            offset: token.span.0,
            line: token.line,
            column: token.column,
            found: token.kind.to_string(),
        }
    }

    /// Byte offset of the offending text.
    pub fn offset(&self) -> usize {
        match self {
            DdlError::MalformedDdl { offset, .. } => *offset,
        }
    }

    /// Format error with the offending source line and a caret
    pub fn format_error(&self, source: &str) -> String {
        match self {
            DdlError::MalformedDdl {
                message,
                line,
                column,
                found,
                ..
            } => {
                let snippet = source.lines().nth(line.saturating_sub(1)).unwrap_or_default();
                format!(
                    "Parse Error at line {}, column {}:\n{}\n{}^\n{} (found `{}`)",
                    line,
                    column,
                    snippet,
                    " ".repeat(column.saturating_sub(1)),
                    message,
                    found
                )
            }
        }
    }
}

impl From<LexerError> for DdlError {
    fn from(err: LexerError) -> Self {
        let offset = err.offset();
        match err {
            LexerError::Unterminated {
                what, line, column, ..
            } => DdlError::MalformedDdl {
                message: format!("unterminated {what}"),
                offset,
                line,
                column,
                found: "EOF".to_string(),
            },
            LexerError::ParseError {
                message,
                line,
                column,
                source_snippet,
                ..
            } => DdlError::MalformedDdl {
                message,
                offset,
                line,
                column,
                found: source_snippet,
            },
        }
    }
}
