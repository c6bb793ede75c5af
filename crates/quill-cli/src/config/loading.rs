use crate::error::{CliError, Result};
use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};
use quill_config::{BuildContext, ConfigDiscovery, QuillConfig, load_value};
use serde_json::{Map, Value, json};
use std::path::{Path, PathBuf};

/// Prefix of configuration environment variables; nested keys split on `__`
pub const ENV_PREFIX: &str = "QUILL__";

/// Where and how to load the build context from
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Directory searched for config files
    pub cwd: PathBuf,
    /// Explicit config file, bypassing discovery
    pub config: Option<PathBuf>,
    pub profile: Option<String>,
    /// Flag overrides, applied last
    pub overrides: Value,
}

/// Load the build context from every layer.
///
/// An explicit config file must exist; a discovered one is optional.
pub fn load_context(options: &LoadOptions) -> Result<BuildContext> {
    let mut figment = Figment::new().merge(Serialized::defaults(QuillConfig::default()));

    let config_file = match &options.config {
        Some(path) => {
            let path = resolve(&options.cwd, path);
            if !path.is_file() {
                return Err(CliError::FileNotFound(path));
            }
            Some(path)
        }
        None => ConfigDiscovery::new(&options.cwd).find(),
    };

    if let Some(path) = &config_file {
        tracing::debug!(path = %path.display(), "loading config file");
        figment = if is_toml(path) {
            figment.merge(Toml::file(path))
        } else {
            figment.merge(Serialized::defaults(load_value(path)?))
        };
    } else {
        tracing::debug!("no config file found, using defaults");
    }

    figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

    let config: QuillConfig = figment.extract()?;
    let context = config.materialize_profile(options.profile.as_deref())?;

    apply_overrides(context, &options.overrides)
}

/// Flag overrides as a partial build context
pub fn cli_overrides(dev: bool, analyze: bool, modern: bool) -> Value {
    let mut overrides = Map::new();
    if dev {
        overrides.insert("mode".to_string(), json!("development"));
    }
    if modern {
        overrides.insert("modern".to_string(), json!("client"));
    }
    if analyze {
        overrides.insert("build".to_string(), json!({ "analyze": true }));
    }
    Value::Object(overrides)
}

fn apply_overrides(context: BuildContext, overrides: &Value) -> Result<BuildContext> {
    if overrides.as_object().is_none_or(Map::is_empty) {
        return Ok(context);
    }

    Figment::new()
        .merge(Serialized::defaults(context))
        .merge(Serialized::defaults(overrides))
        .extract()
        .map_err(CliError::from)
}

fn resolve(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "toml")
}
