//! CLI command implementations for sar-importer.
//!
//! This module provides implementations for all CLI subcommands:
//! - `import`: Data file import
//! - `schema`: DDL generation
//! - `families`: Catalog listing
//! - `check`: Configuration and catalog validation
//! - `config`: Configuration file generation
//! - `generate`: Test data generation
//! - `weekly`: Weekly HTML image table

pub mod check;
pub mod config;
pub mod families;
pub mod generate;
pub mod import;
pub mod schema;
pub mod weekly;

// Re-export command functions
pub use check::command_check;
pub use config::command_config;
pub use families::command_families;
pub use generate::command_generate_testdata;
pub use import::command_import;
pub use schema::command_schema;
pub use weekly::command_weekly_table;
