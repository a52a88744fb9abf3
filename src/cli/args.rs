//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::index::DEFAULT_INDEX_URL;

/// Bucketeer - Scoop bucket reconciliation.
#[derive(Debug, Parser)]
#[command(name = "bucketeer")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Minimal output (suppresses warnings)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Inspect Scoop-installed packages for a bucket
    Scoop(ScoopArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// The `scoop` command group.
#[derive(Debug, Clone, clap::Args)]
pub struct ScoopArgs {
    #[command(subcommand)]
    pub command: ScoopCommands,
}

/// Subcommands of the `scoop` group.
#[derive(Debug, Clone, Subcommand)]
pub enum ScoopCommands {
    /// List installed packages from the bucket
    List(ListArgs),

    /// Cross-reference the bucket index against installed packages
    Index(IndexArgs),
}

/// Arguments for the `scoop list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Path to the Scoop root (defaults to ~/scoop)
    #[arg(long, env = "SCOOP")]
    pub root: Option<PathBuf>,

    /// Bucket to filter by
    #[arg(long, default_value = "gauto")]
    pub bucket: String,
}

/// Arguments for the `scoop index` command.
#[derive(Debug, Clone, clap::Args)]
pub struct IndexArgs {
    /// Path to the Scoop root (defaults to ~/scoop)
    #[arg(long, env = "SCOOP")]
    pub root: Option<PathBuf>,

    /// Bucket to filter by
    #[arg(long, default_value = "gauto")]
    pub bucket: String,

    /// Package name prefix carried by bucket packages
    #[arg(long, default_value = "ga-")]
    pub prefix: String,

    /// Bucket index URL
    #[arg(long, env = "BUCKETEER_INDEX_URL", default_value = DEFAULT_INDEX_URL)]
    pub url: String,
}

impl Default for IndexArgs {
    fn default() -> Self {
        Self {
            root: None,
            bucket: "gauto".to_string(),
            prefix: "ga-".to_string(),
            url: DEFAULT_INDEX_URL.to_string(),
        }
    }
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
