//! Lemonade - settings and cheat tooling
//!
//! Command-line front-end over the settings store and cheat lists shared
//! with the native 3DS core.

mod cli;

use anyhow::Context;
use clap::Parser;
use lm_core::ToolConfig;

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    let mut config = match &args.config {
        Some(path) => ToolConfig::load_from(path),
        None => ToolConfig::load(),
    }
    .context("Failed to load tool configuration")?;

    if let Some(dir) = &args.user_dir {
        config.user_dir = dir.clone();
    }

    // Initialize logging
    lm_core::logging::init(config.log_level);

    tracing::debug!("Using user directory {:?}", config.user_dir);

    cli::run(args.command, &config)
}
