// SPDX-License-Identifier: GPL-3.0-only

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use space_types::Unit;

#[derive(Debug, Parser)]
#[command(name = "space-hierarchy")]
#[command(about = "Inspect building space hierarchies and convert location units")]
pub struct Cli {
    /// Configuration file (defaults to $XDG_CONFIG_HOME/space-hierarchy/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Raise log verbosity; repeat for more
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Flatten a hierarchy tree into indented rows
    Format {
        /// JSON array of hierarchy nodes, or `-` for stdin
        #[arg(long, default_value = "-")]
        input: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Flatten a hierarchy tree and keep rows related to a fuzzy query
    Search {
        #[arg(long, default_value = "-")]
        input: PathBuf,
        #[arg(long, short)]
        query: String,
        /// Order direct name matches first
        #[arg(long)]
        ranked: bool,
        #[arg(long)]
        json: bool,
    },
    /// Convert a length or area between units
    #[command(allow_negative_numbers = true)]
    Convert {
        magnitude: f64,
        from: Unit,
        to: Unit,
        /// Decimal digits to round to (0 disables rounding); overrides the config
        #[arg(long)]
        round: Option<u32>,
    },
    /// Print the ancestry of a flat space record, the space itself first
    Parents {
        /// JSON array of flat space records, or `-` for stdin
        #[arg(long, default_value = "-")]
        input: PathBuf,
        #[arg(long)]
        id: String,
        /// Stop at a missing parent instead of failing
        #[arg(long)]
        lenient: bool,
    },
    /// Rebuild a hierarchy tree from flat space records
    Tree {
        #[arg(long, default_value = "-")]
        input: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// List flat space records parent-first, with placeholders for empty levels
    Flat {
        #[arg(long, default_value = "-")]
        input: PathBuf,
        /// Skip the placeholder rows regardless of the config
        #[arg(long)]
        no_placeholders: bool,
        #[arg(long)]
        json: bool,
    },
}
