pub mod common;
pub mod create_index;
pub mod create_table;
pub mod expr;
pub mod partition;
