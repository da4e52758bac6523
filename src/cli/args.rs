//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::features::Edition;
use crate::lint::OutputFormat;

/// escompat - Report ECMAScript features your target runtimes lack.
#[derive(Debug, Parser)]
#[command(name = "escompat")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides .escompat.yml discovery)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Report features the targets don't support (default if no command specified)
    Check(CheckArgs),

    /// Show the resolved target runtimes
    Targets(TargetsArgs),

    /// List the feature catalog
    Features(FeaturesArgs),

    /// Print the JSON schema of the config file
    Schema,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Target selection shared by `check` and `targets`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct TargetArgs {
    /// Target query, e.g. "chrome 80, safari 13.1" (overrides config)
    #[arg(short, long, value_name = "QUERY")]
    pub targets: Option<String>,

    /// Named target environment from the config
    #[arg(long, value_name = "ENV", env = "ESCOMPAT_ENV")]
    pub env: Option<String>,

    /// Compatibility database JSON file (overrides config)
    #[arg(long, value_name = "PATH")]
    pub database: Option<PathBuf>,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Polyfill the project loads (repeatable)
    #[arg(long = "polyfill", value_name = "ID")]
    pub polyfills: Vec<String>,

    /// Only check these editions (comma-separated)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub edition: Vec<Edition>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            target: TargetArgs::default(),
            polyfills: Vec::new(),
            edition: Vec::new(),
            format: OutputFormat::Human,
        }
    }
}

/// Arguments for the `targets` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct TargetsArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `features` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FeaturesArgs {
    /// Only list these editions (comma-separated)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub edition: Vec<Edition>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
