//! Configuration management for the shell
//!
//! Turns command line flags into validated runtime options.

use crate::{cli::Args, error::ShellError};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Prompt printed before every line is read
pub const DEFAULT_PROMPT: &str = "?> ";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Prompt text, written without a trailing newline
    pub prompt: String,
    /// How much the `fi` command prints
    pub file_info: FileInfoMode,
}

/// Verbosity of the `fi` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FileInfoMode {
    /// Name, path and permissions
    Brief,
    /// Everything in brief plus length and the file's text contents
    #[default]
    Detailed,
}

impl FileInfoMode {
    /// Whether length and contents are part of the report
    pub fn is_detailed(self) -> bool {
        matches!(self, Self::Detailed)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            prompt: DEFAULT_PROMPT.to_string(),
            file_info: FileInfoMode::default(),
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, ShellError> {
        let config = Self {
            debug: args.debug,
            prompt: args.prompt.clone(),
            file_info: args.fi_mode,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ShellError> {
        if self.prompt.contains(['\n', '\r']) {
            return Err(ShellError::config(format!(
                "prompt must fit on one line: {:?}",
                self.prompt
            )));
        }

        Ok(())
    }
}
