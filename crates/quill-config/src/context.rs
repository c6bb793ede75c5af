//! The build context: an immutable snapshot of one build invocation.
//!
//! The context is created once by the outer builder, lent to the composer for
//! the duration of a single composition, and dropped after the build. Nothing
//! downstream mutates it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

use crate::build::{
    BuildOptions, default_app_template_path, default_build_dir, default_root_dir,
    default_router_base,
};
use crate::error::{ConfigError, Result as ConfigResult};
use crate::hot::HotMiddlewareOptions;

/// Build mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Development,
    Production,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => "production",
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Mode::Development)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Mode::Development),
            "production" | "prod" => Ok(Mode::Production),
            other => Err(ConfigError::InvalidValue {
                field: "mode".to_string(),
                hint: Some(format!(
                    "unknown mode '{other}', expected development or production"
                )),
            }),
        }
    }
}

/// Global modern build mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModernMode {
    /// Legacy and modern client bundles, modern served by client detection
    Client,
    /// Legacy and modern client bundles, modern served by user-agent sniffing
    Server,
}

/// Filesystem locations of a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paths {
    #[serde(default = "default_root_dir")]
    pub root_dir: PathBuf,

    /// Generated app and output directory
    #[serde(default = "default_build_dir")]
    pub build_dir: PathBuf,

    /// HTML template the shell documents are rendered from
    #[serde(default = "default_app_template_path")]
    pub app_template_path: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            root_dir: default_root_dir(),
            build_dir: default_build_dir(),
            app_template_path: default_app_template_path(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouterOptions {
    /// Base path the application is served from
    #[serde(default = "default_router_base")]
    pub base: String,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            base: default_router_base(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// `crossorigin` attribute added to emitted script tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crossorigin: Option<String>,
}

/// Everything the composer needs to know about one build
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildContext {
    #[serde(default)]
    pub mode: Mode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modern: Option<ModernMode>,

    /// Static site generation
    #[serde(default)]
    pub is_static: bool,

    #[serde(default)]
    pub paths: Paths,

    #[serde(default)]
    pub router: RouterOptions,

    #[serde(default)]
    pub render: RenderOptions,

    #[serde(default)]
    pub build: BuildOptions,

    #[serde(default)]
    pub hot_middleware: HotMiddlewareOptions,

    /// User constants exposed as `process.env.<KEY>`
    #[serde(default)]
    pub env: IndexMap<String, Value>,
}

impl BuildContext {
    /// Create from serde_json::Value (for programmatic config from DB/API)
    ///
    /// # Example
    ///
    /// ```
    /// use quill_config::{BuildContext, Mode};
    /// use serde_json::json;
    ///
    /// let context = BuildContext::from_value(json!({
    ///     "mode": "production",
    ///     "router": { "base": "/app" }
    /// }))
    /// .unwrap();
    /// assert_eq!(context.mode, Mode::Production);
    /// assert_eq!(context.router.base, "/app");
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "context".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "context".to_string(),
            hint: Some(e.to_string()),
        })
    }

    pub fn is_dev(&self) -> bool {
        self.mode.is_dev()
    }

    /// Shorthand for a production context with default options
    pub fn production() -> Self {
        Self {
            mode: Mode::Production,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parses_short_names() {
        assert_eq!("dev".parse::<Mode>().unwrap(), Mode::Development);
        assert_eq!("Production".parse::<Mode>().unwrap(), Mode::Production);
        assert!("staging".parse::<Mode>().is_err());
    }

    #[test]
    fn production_shorthand() {
        let context = BuildContext::production();
        assert!(!context.is_dev());
        assert_eq!(context.router.base, "/");
    }
}
