//! Error handling for the Quill CLI.
//!
//! `CliError` is the top-level error returned by commands. Configuration
//! errors from `quill-config` convert into it automatically and keep their
//! hints, which the binary renders through miette.
//!
//! # Example
//!
//! ```rust,no_run
//! use quill_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_config(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path).with_path(path)
//! }
//! ```

mod miette;

use std::path::PathBuf;
use thiserror::Error;

pub use self::miette::cli_error_to_miette;
pub use quill_config::ConfigError;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Build context errors (invalid values, unknown profiles, validation)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Layered configuration could not be assembled
    #[error("Failed to load configuration: {message}\n\nHint: {hint}")]
    Load {
        /// What went wrong
        message: String,
        /// Helpful hint for fixing the configuration
        hint: String,
    },

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        CliError::Load {
            message: err.to_string(),
            hint: "Check quill.toml and QUILL__* environment variables for typos and value types"
                .to_string(),
        }
    }
}

impl CliError {
    /// Hint shown below the error, if any
    pub fn hint(&self) -> Option<&str> {
        match self {
            CliError::Config(err) => err.hint(),
            CliError::Load { hint, .. } => Some(hint),
            CliError::FileNotFound(_) => Some("Check the path or run from the project root"),
            _ => None,
        }
    }
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait attaching the offending path to I/O errors.
pub trait ResultExt<T> {
    /// Turn "not found" I/O errors into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            match err {
                CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                    CliError::FileNotFound(path.as_ref().to_path_buf())
                }
                other => other,
            }
        })
    }
}
