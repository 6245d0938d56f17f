#![allow(clippy::cargo_common_metadata)]
use anyhow::Result;
use prompt_shell::{cli, config::Config, setup_logging};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = cli::parse_args();

    // Initialize configuration
    let config = Config::from_args(&args)?;

    // Setup logging based on debug flag
    setup_logging(config.debug)?;

    // Both `exit` and end of input leave with status 0
    cli::run_interactive(&config)?;
    Ok(())
}
