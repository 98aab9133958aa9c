use model::error::ValueError;
use thiserror::Error;

/// Raised when caller-supplied SQL text is not self-contained.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{reason} in `{fragment}`")]
pub struct FragmentError {
    pub fragment: String,
    pub reason: &'static str,
}

#[derive(Debug, Error)]
pub enum PlannerError {
    /// A partition descriptor violates a structural invariant.
    #[error("Invalid partition descriptor: {0}")]
    InvalidPartitionDescriptor(String),

    /// A JSON projection has an unusable path or target type.
    #[error("Invalid JSON projection: {0}")]
    InvalidProjection(String),

    /// A CREATE TABLE definition cannot be rendered.
    #[error("Invalid table definition: {0}")]
    InvalidTable(String),

    #[error("Unbalanced SQL: {0}")]
    Fragment(#[from] FragmentError),

    #[error("Value error: {0}")]
    Value(#[from] ValueError),
}

pub type PlannerResult<T> = Result<T, PlannerError>;
