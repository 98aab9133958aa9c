//! Reflection of OceanBase / MySQL `CREATE TABLE` text into a structured
//! [`TableDefinition`](ast::table::TableDefinition).

pub mod ast;
pub mod charset;
pub mod error;
pub mod grammar;
pub mod lexer;
pub mod parser;

pub use error::{DdlError, DdlResult};
pub use parser::parse;
