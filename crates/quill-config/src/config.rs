//! Project configuration file structure and profile merging.
//!
//! A project file holds one base build context plus named profiles that are
//! deep-merged over it. For file discovery, see the `discovery` module.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::context::BuildContext;
use crate::error::{ConfigError, Result as ConfigResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuillConfig {
    #[serde(flatten)]
    pub context: BuildContext,

    /// Named overrides, e.g. `[profiles.ci.build] quiet = true`
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub profiles: IndexMap<String, Value>,
}

impl QuillConfig {
    /// Create from serde_json::Value (for programmatic config from DB/API)
    ///
    /// # Example
    ///
    /// ```
    /// use quill_config::QuillConfig;
    /// use serde_json::json;
    ///
    /// let config = QuillConfig::from_value(json!({
    ///     "mode": "production",
    ///     "build": { "analyze": true }
    /// }))
    /// .unwrap();
    /// assert!(config.context.build.analyze.is_enabled());
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Names of the declared profiles, in declaration order
    pub fn profile_names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    /// Resolve the build context, applying `profile` over the base when given.
    pub fn materialize_profile(self, profile: Option<&str>) -> ConfigResult<BuildContext> {
        let Some(name) = profile else {
            return Ok(self.context);
        };

        let overrides = self
            .profiles
            .get(name)
            .ok_or_else(|| ConfigError::ProfileNotFound(name.to_string()))?;

        if overrides.is_null() {
            return Ok(self.context);
        }

        tracing::debug!(profile = name, "applying profile overrides");

        let mut base =
            serde_json::to_value(&self.context).map_err(|err| ConfigError::InvalidProfileOverride {
                message: err.to_string(),
            })?;
        merge_values(&mut base, overrides);
        serde_json::from_value(base).map_err(|err| ConfigError::InvalidProfileOverride {
            message: format!("profile '{name}': {err}"),
        })
    }
}

/// Deep-merge `update` into `target`.
///
/// Objects merge key by key; every other value (arrays included) replaces
/// the target wholesale.
pub fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target_slot, Value::Object(update_map)) => {
            let mut new_obj = serde_json::Map::with_capacity(update_map.len());
            for (key, value) in update_map {
                new_obj.insert(key.clone(), value.clone());
            }
            *target_slot = Value::Object(new_obj);
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}
