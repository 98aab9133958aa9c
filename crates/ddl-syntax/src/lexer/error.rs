use crate::grammar::Rule;
use pest::error::{Error as PestError, InputLocation, LineColLocation};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexerError {
    #[error("Unterminated {what} at line {line}, column {column}")]
    Unterminated {
        what: &'static str,
        offset: usize,
        line: usize,
        column: usize,
        source_snippet: String,
    },

    #[error("Parse error at line {line}, column {column}: {message}")]
    ParseError {
        message: String,
        offset: usize,
        line: usize,
        column: usize,
        source_snippet: String,
    },
}

impl LexerError {
    pub fn from_pest_error(err: PestError<Rule>, input: &str) -> Self {
        let (line, column) = match err.line_col {
            LineColLocation::Pos((l, c)) => (l, c),
            LineColLocation::Span((l, c), _) => (l, c),
        };
        let offset = match err.location {
            InputLocation::Pos(p) => p,
            InputLocation::Span((p, _)) => p,
        };
        let source_snippet = err.line().to_string();

        let what = match input.get(offset..).and_then(|rest| rest.chars().next()) {
            Some('`') | Some('"') => Some("quoted identifier"),
            Some('\'') => Some("string literal"),
            _ => None,
        };

        match what {
            Some(what) => LexerError::Unterminated {
                what,
                offset,
                line,
                column,
                source_snippet,
            },
            None => LexerError::ParseError {
                message: format!("{}", err.variant),
                offset,
                line,
                column,
                source_snippet,
            },
        }
    }

    pub fn offset(&self) -> usize {
        match self {
            LexerError::Unterminated { offset, .. } | LexerError::ParseError { offset, .. } => {
                *offset
            }
        }
    }

    /// Format error with context for display
    pub fn format_error(&self) -> String {
        let (line, column, snippet) = match self {
            LexerError::Unterminated {
                line,
                column,
                source_snippet,
                ..
            }
            | LexerError::ParseError {
                line,
                column,
                source_snippet,
                ..
            } => (line, column, source_snippet),
        };
        format!(
            "Lex Error at line {}, column {}:\n{}\n{}^\n{}",
            line,
            column,
            snippet,
            " ".repeat(column.saturating_sub(1)),
            self
        )
    }
}
