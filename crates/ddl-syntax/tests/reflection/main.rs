//! Reflection tests
//!
//! These tests feed literal `SHOW CREATE TABLE` output through the parser
//! and check the structured definition that comes back.

mod errors;
mod keys;
mod tables;
