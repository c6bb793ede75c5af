//! Check command implementation.
//!
//! Validates configuration without composing.

use quill_compose::TYPE_CHECKER_MISSING;
use quill_config::{validate_fs, validate_schema};

use crate::cli::CheckArgs;
use crate::config::{LoadOptions, load_context};
use crate::error::Result;
use crate::resolve::extensions_for;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load the layered configuration and apply the profile
/// 2. Schema checks (router base, public path, crossorigin, ...)
/// 3. With `--fs`: root directory and app template exist
/// 4. Warn when type checking is requested but the checker is not installed
pub async fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking configuration...");

    let cwd = std::env::current_dir()?;
    let context = load_context(&LoadOptions {
        cwd: cwd.clone(),
        config: args.config.clone(),
        profile: args.profile.clone(),
        ..Default::default()
    })?;

    if args.fs {
        validate_fs(&context, &cwd)?;
    } else {
        validate_schema(&context)?;
    }
    ui::success("Configuration is valid");

    if context.build.type_check.is_enabled()
        && extensions_for(&context, &cwd).type_checker().is_none()
    {
        ui::warning(TYPE_CHECKER_MISSING);
    }

    Ok(())
}
