//! Quill CLI - composes client bundler configurations.
//!
//! This is the main entry point for the Quill CLI. It handles command-line argument
//! parsing, logging initialization, and command dispatch.

use clap::Parser;
use miette::Result;
use quill_cli::{cli, commands, error, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Compose(compose_args) => commands::compose_execute(compose_args).await,
        cli::Command::Check(check_args) => commands::check_execute(check_args).await,
    };

    // Convert CLI errors to miette diagnostics for error reporting
    result.map_err(error::cli_error_to_miette)
}
