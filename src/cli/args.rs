//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::DEFAULT_REPOSITORY_LIST;

/// templist - List project templates from remote template repositories.
#[derive(Debug, Parser)]
#[command(name = "templist")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the repository list file
    #[arg(
        short,
        long,
        global = true,
        env = "TEMPLIST_REPOSITORIES",
        default_value = DEFAULT_REPOSITORY_LIST
    )]
    pub repositories: PathBuf,

    /// Timeout in seconds for each repository request
    #[arg(
        long,
        global = true,
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Show per-repository detail
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print templates and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Available subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// List templates from every repository (default if no command specified)
    Templates,

    /// Show the configured repositories without contacting them
    Repositories,
}
