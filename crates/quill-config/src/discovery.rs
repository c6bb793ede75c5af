//! File-based config discovery for CLI use
//!
//! Handles finding and loading quill configuration files from the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::QuillConfig;
use crate::context::BuildContext;
use crate::error::{ConfigError, Result};

/// Name of the dedicated config file
pub const CONFIG_FILE_NAME: &str = "quill.toml";

/// Field holding the config inside `package.json`
pub const PACKAGE_JSON_FIELD: &str = "quill";

/// File-based configuration discovery
///
/// Searches for quill configuration files in conventional locations and loads them.
/// Library users should build a `BuildContext` directly or use `QuillConfig::from_value()`.
///
/// # Example
///
/// ```no_run
/// use quill_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. TOML config: quill.toml
    /// 2. package.json (quill field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(CONFIG_FILE_NAME);
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        if pkg_path.exists() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed
                        .get(PACKAGE_JSON_FIELD)
                        .is_some_and(|field| !field.is_null())
                    {
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    /// Load config from discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<QuillConfig> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        QuillConfig::from_value(load_value(&path)?)
    }

    /// Load config and resolve a profile into a build context
    pub fn load_with_profile(&self, profile: &str) -> Result<BuildContext> {
        self.load()?.materialize_profile(Some(profile))
    }
}

/// Read a config file into a JSON value
///
/// `package.json` files contribute their `quill` field; anything else is parsed as TOML.
pub fn load_value(path: &Path) -> Result<Value> {
    if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
        return load_package_json_field(path);
    }

    let content = fs::read_to_string(path)?;

    let toml_val: toml::Value = toml::from_str(&content).map_err(|e| ConfigError::InvalidValue {
        field: "toml".to_string(),
        hint: Some(format!("Invalid TOML syntax: {}", e)),
    })?;

    serde_json::to_value(toml_val).map_err(|e| ConfigError::InvalidValue {
        field: "toml".to_string(),
        hint: Some(format!("TOML to JSON conversion failed: {}", e)),
    })
}

fn load_package_json_field(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;

    let parsed: Value = serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
        field: "package.json".to_string(),
        hint: Some(format!("Invalid JSON: {}", e)),
    })?;

    let value = parsed
        .get(PACKAGE_JSON_FIELD)
        .ok_or_else(|| ConfigError::InvalidValue {
            field: PACKAGE_JSON_FIELD.to_string(),
            hint: Some("Add a 'quill' field to your package.json".to_string()),
        })?;

    if value.is_null() {
        return Err(ConfigError::InvalidValue {
            field: PACKAGE_JSON_FIELD.to_string(),
            hint: Some("The 'quill' field cannot be null".to_string()),
        });
    }

    Ok(value.clone())
}

/// Discover and load config from current directory (convenience function)
///
/// # Example
///
/// ```no_run
/// use quill_config::discover;
///
/// let config = discover().unwrap();
/// ```
pub fn discover() -> Result<QuillConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load()
}

/// Discover config and resolve a profile (convenience function)
///
/// # Example
///
/// ```no_run
/// use quill_config::discover_with_profile;
///
/// let context = discover_with_profile("production").unwrap();
/// ```
pub fn discover_with_profile(profile: &str) -> Result<BuildContext> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load_with_profile(profile)
}
