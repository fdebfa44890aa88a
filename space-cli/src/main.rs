// SPDX-License-Identifier: GPL-3.0-only

mod cli;
mod commands;
mod config;
mod logging;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;
use crate::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    logging::init(&config, config.log_level.raised(cli.verbose));

    tracing::debug!(?config, "configuration loaded");
    commands::run(cli.command, &config)
}
