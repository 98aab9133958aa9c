use thiserror::Error;

/// Errors raised when a typed value does not fit its declared type parameters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValueError {
    /// A string is longer than the declared `VARCHAR(n)` length.
    #[error("Value too long: {actual} characters exceeds VARCHAR({max_len})")]
    ValueTooLong { max_len: usize, actual: usize },

    /// A number does not fit the declared `DECIMAL(p, s)` bounds.
    #[error("Value out of range: {value} does not fit DECIMAL({precision}, {scale})")]
    ValueOutOfRange {
        value: String,
        precision: u32,
        scale: u32,
    },

    #[error("Invalid decimal: {0}")]
    InvalidDecimal(String),

    #[error("Unknown compatible mode: {0}")]
    UnknownCompatibleMode(String),
}
