//! Defines the `Dialect` trait for database-specific SQL syntax.
//!
//! Dialects are plain values: build one from a [`DialectConfig`] and hand a
//! reference to whatever renders or executes SQL.

use model::core::{
    data_type::{ColumnType, CompatibleMode},
    utils::quote_identifier_with,
};
use serde::{Deserialize, Serialize};

pub trait Dialect: Send + Sync {
    /// Wraps an identifier (like a table or column name) in the correct
    /// quotation marks for the dialect.
    ///
    /// - MySQL mode uses backticks: `` `my_column` ``
    /// - Oracle mode uses double quotes: `"my_column"`
    fn quote_identifier(&self, ident: &str) -> String;

    /// Returns the placeholder for a parameterized query.
    fn get_placeholder(&self, index: usize) -> String;

    /// Renders a `ColumnType` into a database-specific SQL type string.
    fn render_data_type(&self, data_type: &ColumnType) -> String;

    /// Returns the name of the dialect.
    fn name(&self) -> String;

    fn compatible_mode(&self) -> CompatibleMode;
}

/// Settings used to construct an [`OceanBase`] dialect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialectConfig {
    pub compatible_mode: CompatibleMode,
    pub quote_identifiers: bool,
}

impl Default for DialectConfig {
    fn default() -> Self {
        Self {
            compatible_mode: CompatibleMode::MySql,
            quote_identifiers: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OceanBase {
    mode: CompatibleMode,
    quote_identifiers: bool,
}

impl Default for OceanBase {
    fn default() -> Self {
        Self::new(CompatibleMode::MySql)
    }
}

impl OceanBase {
    pub fn new(mode: CompatibleMode) -> Self {
        Self {
            mode,
            quote_identifiers: true,
        }
    }

    pub fn from_config(config: &DialectConfig) -> Self {
        Self {
            mode: config.compatible_mode,
            quote_identifiers: config.quote_identifiers,
        }
    }

    pub fn mode(&self) -> CompatibleMode {
        self.mode
    }
}

impl Dialect for OceanBase {
    fn quote_identifier(&self, ident: &str) -> String {
        if !self.quote_identifiers {
            return ident.to_string();
        }
        match self.mode {
            CompatibleMode::MySql => quote_identifier_with(ident, '`'),
            CompatibleMode::Oracle => quote_identifier_with(ident, '"'),
        }
    }

    fn get_placeholder(&self, index: usize) -> String {
        match self.mode {
            CompatibleMode::MySql => "?".into(),
            // Oracle-mode drivers bind by position name
            CompatibleMode::Oracle => format!(":{}", index + 1),
        }
    }

    fn render_data_type(&self, data_type: &ColumnType) -> String {
        data_type.sql_name(self.mode).into_owned()
    }

    fn name(&self) -> String {
        match self.mode {
            CompatibleMode::MySql => "OceanBase (MySQL mode)".into(),
            CompatibleMode::Oracle => "OceanBase (Oracle mode)".into(),
        }
    }

    fn compatible_mode(&self) -> CompatibleMode {
        self.mode
    }
}
