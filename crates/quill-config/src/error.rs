//! Error types for build context loading and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Filesystem validation errors (for CLI use)
    #[error("root directory not found: {}", path.display())]
    RootDirNotFound { path: PathBuf },

    #[error("app template not found: {}", path.display())]
    TemplateNotFound { path: PathBuf },

    // Config parsing/loading errors
    #[error("config not found")]
    NotFound,

    #[error("invalid config value for '{field}'{}", hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },

    #[error("invalid profile override: {message}")]
    InvalidProfileOverride { message: String },

    #[error("profile '{0}' is not defined")]
    ProfileNotFound(String),

    // Schema validation errors (no filesystem checks)
    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Hint attached to the error, if any.
    pub fn hint(&self) -> Option<&str> {
        match self {
            ConfigError::InvalidValue { hint, .. } | ConfigError::SchemaValidation { hint, .. } => {
                hint.as_deref()
            }
            ConfigError::NotFound => {
                Some("Create quill.toml or add a \"quill\" field to package.json")
            }
            ConfigError::ProfileNotFound(_) => {
                Some("Declare the profile as [profiles.<name>] in quill.toml")
            }
            ConfigError::RootDirNotFound { .. } => Some("Check paths.root_dir"),
            ConfigError::TemplateNotFound { .. } => {
                Some("Generate the app first or point paths.app_template_path at an existing file")
            }
            _ => None,
        }
    }
}
