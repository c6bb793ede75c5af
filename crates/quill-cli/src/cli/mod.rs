//! Command-line interface definition for Quill.
//!
//! This module defines the complete CLI structure using clap v4's derive macros.
//!
//! # Command Structure
//!
//! - `quill compose` - Compose client bundler configurations
//! - `quill check` - Validate the project configuration

mod commands;
pub mod enums;

use clap::Parser;

pub use commands::{CheckArgs, Command, ComposeArgs};
pub use enums::*;

/// Quill - client bundler configuration composer
#[derive(Parser, Debug)]
#[command(
    name = "quill",
    version,
    about = "Compose client bundler configurations",
    long_about = "Quill turns declarative build intentions (development or production,\n\
                  server-rendered or single-page, legacy or modern targets, analysis,\n\
                  hot reloading, type checking) into complete bundler configurations."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    ///
    /// Useful for CI/CD environments or when piping configurations to other tools.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
