//! Entry point that runs the command loop on the process streams

use crate::{
    config::Config,
    core::{CommandLoop, DefaultMessage, LoopExit},
};
use anyhow::Context;
use std::io;
use tracing::{info, instrument};

/// Run the command loop on stdin/stdout until `exit` or end of input
#[instrument(skip(config))]
pub fn run_interactive(config: &Config) -> anyhow::Result<LoopExit> {
    info!("Starting interactive shell");

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    let mut shell = CommandLoop::new(stdin, stdout, DefaultMessage, config.clone());
    let exit = shell.run().context("Command loop failed")?;

    info!("Shell finished: {:?}", exit);
    Ok(exit)
}
