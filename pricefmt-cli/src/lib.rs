//! pricefmt CLI library
//!
//! This library provides the command-line interface for the pricefmt
//! price detection and formatting engine.

pub mod catalog_source;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
