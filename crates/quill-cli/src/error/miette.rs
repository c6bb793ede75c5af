//! Miette diagnostic conversion for CLI errors.

use crate::error::CliError;
use miette::{MietteDiagnostic, Report};

/// Convert CliError to miette Report
///
/// Hints become the diagnostic's help text instead of part of the message.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match &err {
        CliError::Config(config) => {
            let mut diagnostic =
                MietteDiagnostic::new(format!("Configuration error: {config}")).with_code("quill::config");
            if let Some(hint) = config.hint() {
                diagnostic = diagnostic.with_help(hint.to_string());
            }
            Report::new(diagnostic)
        }
        CliError::Load { message, hint } => Report::new(
            MietteDiagnostic::new(format!("Failed to load configuration: {message}"))
                .with_code("quill::load")
                .with_help(hint.clone()),
        ),
        _ => miette::miette!("{}", err),
    }
}
