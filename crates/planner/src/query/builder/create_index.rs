//! Provides a fluent builder for constructing `CreateFullTextIndex` ASTs.

use crate::query::ast::{common::TableRef, create_index::CreateFullTextIndex};

#[derive(Debug, Clone)]
pub struct CreateFullTextIndexBuilder {
    ast: CreateFullTextIndex,
}

impl CreateFullTextIndexBuilder {
    pub fn new(name: &str, table: TableRef) -> Self {
        Self {
            ast: CreateFullTextIndex {
                name: name.to_string(),
                table,
                ..Default::default()
            },
        }
    }

    pub fn columns<S: Into<String>>(mut self, columns: impl IntoIterator<Item = S>) -> Self {
        self.ast.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn parser(mut self, parser: &str) -> Self {
        self.ast.parser = Some(parser.to_string());
        self
    }

    pub fn build(self) -> CreateFullTextIndex {
        self.ast
    }
}
