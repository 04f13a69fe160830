//! addrtail CLI library
//!
//! This library provides the command-line interface for batch parsing of
//! mailing-address tails in CSV exports.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
