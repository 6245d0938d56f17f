//! Command-line interface module
//!
//! Provides argument parsing and wires the process streams into the loop.

pub mod args;
pub mod commands;

pub use args::{Args, parse_args};
pub use commands::run_interactive;
