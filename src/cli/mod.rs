//! CLI module for the fluentgen binary

pub mod commands;
pub mod error;
pub mod output;

pub use error::CliError;
