//! CLI parse: clap types for composer-codegen. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// composer-codegen - regenerate the decoder composer Context stages
#[derive(Parser)]
#[command(name = "composer-codegen")]
#[command(about = "Generate the Context0..ContextN decoder composer declarations")]
pub struct Cli {
    /// Action to run (default: generate)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Project root; relative output paths and composer-codegen.toml resolve against it
    #[arg(long, default_value = ".", global = true)]
    pub root: PathBuf,

    /// Configuration file path (layered over composer-codegen.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Number of Context interfaces to emit
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub interface_count: Option<i64>,

    /// Destination file for the generated declarations
    #[arg(long, global = true)]
    pub output: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Overwrite the output file with freshly generated declarations
    Generate,
    /// Fail if the output file is missing or differs from what would be generated
    Check,
    /// Write the generated declarations to stdout instead of the output file
    Print,
    /// Write a starter composer-codegen.toml into the project root
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// The requested command, falling back to `generate`.
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Generate)
    }
}
