//! Defines the AST for a CREATE TABLE statement.

use crate::query::ast::{common::TableRef, expr::Expr, partition::PartitionDescriptor};
use model::core::data_type::ColumnType;

/// Represents a complete CREATE TABLE statement.
#[derive(Debug, Clone, Default)]
pub struct CreateTable {
    pub table: TableRef,
    pub columns: Vec<ColumnDef>,
    pub constraints: Vec<TableConstraint>,
    pub if_not_exists: bool,
    /// Table options emitted verbatim after the column list,
    /// e.g. `DEFAULT CHARSET=utf8mb4`.
    pub options: Option<String>,
    pub partition: Option<PartitionDescriptor>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub data_type: ColumnType,
    pub is_nullable: bool,
    pub is_primary_key: bool,
    pub auto_increment: bool,
    pub default_value: Option<Expr>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableConstraint {
    PrimaryKey {
        columns: Vec<String>,
    },
    Unique {
        name: Option<String>,
        columns: Vec<String>,
    },
    Index {
        name: Option<String>,
        columns: Vec<String>,
    },
    /// `SPATIAL KEY [<name>] (<columns>)`
    Spatial {
        name: Option<String>,
        columns: Vec<String>,
    },
    /// `FULLTEXT INDEX [<name>] (<columns>) [WITH PARSER <parser>]`
    FullText {
        name: Option<String>,
        columns: Vec<String>,
        parser: Option<String>,
    },
    /// `VECTOR INDEX [<name>] (<column>) WITH (<params>)`
    Vector {
        name: Option<String>,
        column: String,
        params: Vec<(String, String)>,
    },
}

impl TableConstraint {
    pub fn columns(&self) -> Vec<&str> {
        match self {
            TableConstraint::PrimaryKey { columns }
            | TableConstraint::Unique { columns, .. }
            | TableConstraint::Index { columns, .. }
            | TableConstraint::Spatial { columns, .. }
            | TableConstraint::FullText { columns, .. } => {
                columns.iter().map(String::as_str).collect()
            }
            TableConstraint::Vector { column, .. } => vec![column.as_str()],
        }
    }
}
