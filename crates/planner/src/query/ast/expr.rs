//! Defines the AST for SQL expressions.

use crate::{
    error::{PlannerError, PlannerResult},
    query::renderer::check_balanced,
};
use model::core::value::TypedValue;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A column or table identifier, e.g., `docs` or `docs.id`.
    Identifier(Ident),

    /// A typed value, bound as a parameter.
    Value(TypedValue),

    /// SQL text emitted verbatim, e.g. `CURRENT_TIMESTAMP`.
    Literal(String),

    /// A string emitted as a quoted, escaped literal.
    String(String),

    Null,

    /// A binary operation, e.g., `column = ?` or `a <= b`.
    BinaryOp(Box<BinaryOp>),

    /// A function call, e.g., `ST_AsText(geo)`.
    FunctionCall(FunctionCall),

    /// An aliased expression, e.g. `JSON_VALUE(...) AS price`
    Alias { expr: Box<Expr>, alias: String },

    /// `JSON_VALUE(<column>, '<path>' RETURNING <type>)`
    JsonValue(JsonValue),

    /// `MATCH (<columns>) AGAINST (? IN <mode>)`
    MatchAgainst(MatchAgainst),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub qualifier: Option<String>, // e.g., the 'docs' in 'docs.id'
    pub name: String,              // e.g., the 'id' in 'docs.id'
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    pub left: Expr,
    pub op: BinaryOperator,
    pub right: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    pub args: Vec<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    // Comparison
    Eq,    // =
    NotEq, // <>
    Lt,    // <
    LtEq,  // <=
    Gt,    // >
    GtEq,  // >=

    // Logical
    And,
    Or,
}

/// Extracts a scalar from a JSON column and casts it to `returning`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonValue {
    pub column: Ident,
    pub path: String,
    pub returning: String,
}

impl JsonValue {
    /// Rejects an empty path or a target type that is not a plain type name.
    pub fn validate(&self) -> PlannerResult<()> {
        if self.column.name.trim().is_empty() {
            return Err(PlannerError::InvalidProjection("column is empty".to_string()));
        }
        if self.path.trim().is_empty() {
            return Err(PlannerError::InvalidProjection("path is empty".to_string()));
        }

        let ty = self.returning.trim();
        if ty.is_empty() {
            return Err(PlannerError::InvalidProjection(
                "target type is empty".to_string(),
            ));
        }
        if ty.contains(['\'', '"', '`', ';']) {
            return Err(PlannerError::InvalidProjection(format!(
                "target type `{ty}` contains quotes or a statement separator"
            )));
        }
        check_balanced(ty).map_err(|e| PlannerError::InvalidProjection(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchAgainst {
    pub columns: Vec<Ident>,
    pub query: String,
    pub mode: SearchMode,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    #[default]
    NaturalLanguage,
    Boolean,
}

impl SearchMode {
    pub fn keyword(&self) -> &'static str {
        match self {
            SearchMode::NaturalLanguage => "NATURAL LANGUAGE MODE",
            SearchMode::Boolean => "BOOLEAN MODE",
        }
    }
}

impl Expr {
    pub fn binary(self, op: BinaryOperator, right: Expr) -> Expr {
        Expr::BinaryOp(Box::new(BinaryOp {
            left: self,
            op,
            right,
        }))
    }

    pub fn eq(self, right: Expr) -> Expr {
        self.binary(BinaryOperator::Eq, right)
    }

    pub fn lt(self, right: Expr) -> Expr {
        self.binary(BinaryOperator::Lt, right)
    }

    pub fn gt(self, right: Expr) -> Expr {
        self.binary(BinaryOperator::Gt, right)
    }

    pub fn and(self, right: Expr) -> Expr {
        self.binary(BinaryOperator::And, right)
    }

    pub fn alias(self, alias: &str) -> Expr {
        Expr::Alias {
            expr: Box::new(self),
            alias: alias.to_string(),
        }
    }
}
