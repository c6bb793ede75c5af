//! Pluggable config validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation (for library use).
//! The composer itself trusts its input; these checks run before it.

use std::path::Path;

use crate::context::BuildContext;
use crate::error::{ConfigError, Result};

const CROSSORIGIN_VALUES: &[&str] = &["", "anonymous", "use-credentials"];

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    /// Validate a build context
    fn validate(&self, context: &BuildContext) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use quill_config::{BuildContext, ConfigValidator, SchemaValidator};
///
/// let context = BuildContext::default();
/// SchemaValidator.validate(&context).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, context: &BuildContext) -> Result<()> {
        if !context.router.base.starts_with('/') {
            return Err(ConfigError::SchemaValidation {
                message: format!("router base '{}' must be absolute", context.router.base),
                hint: Some("Start the router base with '/', e.g. \"/app\"".to_string()),
            });
        }

        if context.build.public_path.trim().is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "public_path cannot be empty".to_string(),
                hint: Some("Use \"/_quill/\" or an absolute CDN URL".to_string()),
            });
        }

        if let Some(crossorigin) = &context.render.crossorigin {
            if !CROSSORIGIN_VALUES.contains(&crossorigin.as_str()) {
                return Err(ConfigError::SchemaValidation {
                    message: format!("unsupported crossorigin value '{crossorigin}'"),
                    hint: Some("Use \"anonymous\" or \"use-credentials\"".to_string()),
                });
            }
        }

        if context.hot_middleware.client.timeout == 0 {
            return Err(ConfigError::SchemaValidation {
                message: "hot_middleware.client.timeout must be greater than zero".to_string(),
                hint: None,
            });
        }

        for (name, group) in &context.build.optimization.split_chunks.cache_groups {
            if name.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "cache group names cannot be empty".to_string(),
                    hint: None,
                });
            }
            if group.test.as_deref().is_some_and(|test| test.is_empty()) {
                return Err(ConfigError::SchemaValidation {
                    message: format!("cache group '{name}' has an empty test pattern"),
                    hint: Some("Remove 'test' to match every module".to_string()),
                });
            }
        }

        for key in context.env.keys() {
            if key.is_empty() || key.contains(|c: char| c.is_whitespace() || c == '.') {
                return Err(ConfigError::SchemaValidation {
                    message: format!("env key '{key}' is not a valid identifier"),
                    hint: Some("Env keys become process.env.<KEY> constants".to_string()),
                });
            }
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Validates that the root directory and the app template exist on disk.
/// Relative paths are resolved against `root`.
pub struct FsValidator {
    root: std::path::PathBuf,
}

impl FsValidator {
    /// Create a new filesystem validator with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, context: &BuildContext) -> Result<()> {
        SchemaValidator.validate(context)?;

        let root_dir = self.root.join(&context.paths.root_dir);
        if !root_dir.is_dir() {
            return Err(ConfigError::RootDirNotFound { path: root_dir });
        }

        let template = root_dir.join(&context.paths.app_template_path);
        if !template.exists() {
            return Err(ConfigError::TemplateNotFound { path: template });
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(context: &BuildContext) -> Result<()> {
    SchemaValidator.validate(context)
}

/// Convenience function for filesystem validation
pub fn validate_fs(context: &BuildContext, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(context)
}
