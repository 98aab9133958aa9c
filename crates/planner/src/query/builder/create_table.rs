//! Provides a fluent builder for constructing `CreateTable` ASTs.

use crate::query::ast::{
    common::TableRef,
    create_table::{ColumnDef, CreateTable, TableConstraint},
    expr::Expr,
    partition::PartitionDescriptor,
};
use model::core::data_type::ColumnType;

#[derive(Debug, Clone)]
pub struct CreateTableBuilder {
    ast: CreateTable,
}

impl CreateTableBuilder {
    pub fn new(table: TableRef) -> Self {
        Self {
            ast: CreateTable {
                table,
                ..Default::default()
            },
        }
    }

    pub fn if_not_exists(mut self) -> Self {
        self.ast.if_not_exists = true;
        self
    }

    pub fn column(self, name: &str, data_type: ColumnType) -> ColumnBuilder {
        ColumnBuilder::new(self, name, data_type)
    }

    pub fn primary_key<S: Into<String>>(mut self, columns: impl IntoIterator<Item = S>) -> Self {
        self.ast.constraints.push(TableConstraint::PrimaryKey {
            columns: columns.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn constraint(mut self, constraint: TableConstraint) -> Self {
        self.ast.constraints.push(constraint);
        self
    }

    pub fn options(mut self, options: &str) -> Self {
        self.ast.options = Some(options.to_string());
        self
    }

    pub fn partition(mut self, partition: PartitionDescriptor) -> Self {
        self.ast.partition = Some(partition);
        self
    }

    pub fn build(self) -> CreateTable {
        self.ast
    }
}

pub struct ColumnBuilder {
    table_builder: CreateTableBuilder,
    column: ColumnDef,
}

impl ColumnBuilder {
    pub fn new(table_builder: CreateTableBuilder, name: &str, data_type: ColumnType) -> Self {
        Self {
            table_builder,
            column: ColumnDef {
                name: name.to_string(),
                data_type,
                is_nullable: false, // Columns are NOT NULL by default
                is_primary_key: false,
                auto_increment: false,
                default_value: None,
                comment: None,
            },
        }
    }

    pub fn nullable(mut self) -> Self {
        self.column.is_nullable = true;
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.column.is_primary_key = true;
        self
    }

    pub fn auto_increment(mut self) -> Self {
        self.column.auto_increment = true;
        self
    }

    pub fn default_value(mut self, default_value: Expr) -> Self {
        self.column.default_value = Some(default_value);
        self
    }

    pub fn comment(mut self, comment: &str) -> Self {
        self.column.comment = Some(comment.to_string());
        self
    }

    pub fn add(mut self) -> CreateTableBuilder {
        self.table_builder.ast.columns.push(self.column);
        self.table_builder
    }
}
