//! # Prompt Shell
//!
//! A tiny interactive command loop. Each line read from the input is split on
//! spaces and the first token picks one of four commands:
//!
//! - `echo` prints its arguments back
//! - `fi` describes a file (name, path, permissions, optionally size and contents)
//! - `sm` prints a special message built from the arguments
//! - `exit` ends the loop
//!
//! ## Example
//!
//! ```
//! use prompt_shell::{config::Config, core::CommandLoop};
//! use std::io::Cursor;
//!
//! let input = Cursor::new("echo hello world\nexit\n");
//! let mut output = Vec::new();
//! let shout = |args: &[String]| args.join(" ").to_uppercase();
//!
//! let mut shell = CommandLoop::new(input, &mut output, shout, Config::default());
//! shell.run()?;
//! drop(shell);
//! assert_eq!(String::from_utf8(output)?, "?> hello world\n?> ");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
///
/// Diagnostics go to stderr; stdout belongs to the prompt and command output.
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
