use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::VariantArg;

/// Available Quill subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compose bundler configurations
    ///
    /// Loads quill.toml (or the `quill` field of package.json), applies
    /// QUILL__* environment variables, the selected profile and flags, and
    /// emits one JSON configuration per client variant.
    Compose(ComposeArgs),

    /// Validate configuration
    ///
    /// Checks the resolved build context for schema errors and, with --fs,
    /// that the project directories and the app template exist.
    Check(CheckArgs),
}

/// Arguments for the compose command
#[derive(Args, Debug, Clone, Default)]
pub struct ComposeArgs {
    /// Path to the configuration file
    ///
    /// Defaults to quill.toml, then the `quill` field of package.json, in the
    /// working directory.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Named profile applied over the base configuration
    #[arg(short, long, value_name = "NAME")]
    pub profile: Option<String>,

    /// Force a development build
    #[arg(long)]
    pub dev: bool,

    /// Which client variants to compose
    ///
    /// - client: legacy browser bundle only
    /// - modern: modern browser bundle only
    /// - all: legacy bundle, plus modern when modern mode is `client`
    #[arg(long, value_enum, default_value = "all")]
    pub variant: VariantArg,

    /// Directory to write `<variant>.config.json` files to
    ///
    /// Without it, configurations are printed to stdout as a JSON array.
    #[arg(short, long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Enable static bundle analysis
    #[arg(long)]
    pub analyze: bool,

    /// Enable client-side modern mode
    #[arg(long)]
    pub modern: bool,
}

/// Arguments for the check command
#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    /// Path to the configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Named profile applied over the base configuration
    #[arg(short, long, value_name = "NAME")]
    pub profile: Option<String>,

    /// Also check that directories and the app template exist
    #[arg(long)]
    pub fs: bool,
}
