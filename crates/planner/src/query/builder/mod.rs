pub mod create_index;
pub mod create_table;
pub mod partition;
