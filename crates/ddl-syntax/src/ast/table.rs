//! Structured form of a reflected `CREATE TABLE` statement.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDefinition {
    pub name: String,
    /// Type exactly as declared, e.g. `varchar(4096)` or `VECTOR(1024)`.
    pub type_text: String,
    pub nullable: bool,
    /// Default expression text; `None` when absent or `DEFAULT NULL`.
    pub default: Option<String>,
    pub auto_increment: bool,
    pub comment: Option<String>,
    pub ordinal_position: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum KeyKind {
    PrimaryKey,
    UniqueKey,
    Key,
    FullText,
    Spatial,
    Vector,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyKind::PrimaryKey => write!(f, "PRIMARY KEY"),
            KeyKind::UniqueKey => write!(f, "UNIQUE KEY"),
            KeyKind::Key => write!(f, "KEY"),
            KeyKind::FullText => write!(f, "FULLTEXT KEY"),
            KeyKind::Spatial => write!(f, "SPATIAL KEY"),
            KeyKind::Vector => write!(f, "VECTOR KEY"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyDefinition {
    /// Absent for an unnamed primary or unique key.
    pub name: Option<String>,
    pub kind: KeyKind,
    pub columns: Vec<String>,
}

/// A parsed table definition.
///
/// Built once per parse call; columns keep their declaration order and
/// `columns()[i].ordinal_position == i` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableDefinition {
    name: String,
    columns: Vec<ColumnDefinition>,
    keys: Vec<KeyDefinition>,
    options: Option<String>,
}

impl TableDefinition {
    pub(crate) fn new(
        name: String,
        columns: Vec<ColumnDefinition>,
        keys: Vec<KeyDefinition>,
        options: Option<String>,
    ) -> Self {
        Self {
            name,
            columns,
            keys,
            options,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[ColumnDefinition] {
        &self.columns
    }

    pub fn keys(&self) -> &[KeyDefinition] {
        &self.keys
    }

    /// Raw table options after the column list, e.g.
    /// `DEFAULT CHARSET = utf8mb4 ROW_FORMAT = DYNAMIC`.
    pub fn options(&self) -> Option<&str> {
        self.options.as_deref()
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    pub fn primary_key(&self) -> Option<&KeyDefinition> {
        self.keys.iter().find(|k| k.kind == KeyKind::PrimaryKey)
    }
}
