//! Defines the AST for a standalone `CREATE FULLTEXT INDEX` statement.

use crate::query::ast::common::TableRef;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateFullTextIndex {
    pub name: String,
    pub table: TableRef,
    pub columns: Vec<String>,
    /// Tokenizer named after `WITH PARSER`, e.g. `ngram` or `ik`.
    pub parser: Option<String>,
}
