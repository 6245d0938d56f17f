//! Command-line argument parsing and validation

use crate::config::{DEFAULT_PROMPT, FileInfoMode};
use clap::Parser;

/// Prompt Shell - a tiny interactive command loop
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "psh")]
pub struct Args {
    /// Enable debug output on stderr
    #[arg(long)]
    pub debug: bool,

    /// How much the `fi` command prints
    #[arg(long = "fi-mode", value_enum, default_value_t = FileInfoMode::Detailed)]
    pub fi_mode: FileInfoMode,

    /// Prompt printed before each command is read
    #[arg(long, default_value = DEFAULT_PROMPT)]
    pub prompt: String,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
