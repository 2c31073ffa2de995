//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// rulegraph - Inspect compiled rule networks
#[derive(Parser)]
#[command(name = "rulegraph")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a network description
    Render {
        /// Network description file (JSON or JSONC)
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Stop after this many nodes
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Write a config file (to `--config` if given)
    Init {
        /// Format to store (defaults to text)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Node limit to store
        #[arg(short, long)]
        limit: Option<usize>,

        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented one-line-per-node dump
    #[default]
    Text,
    /// Normalized network description
    Json,
}
