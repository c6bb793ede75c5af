//! Merging user option objects over typed defaults.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::probe::EnvironmentProbe;

/// Deep-merge `overrides` over `defaults`.
///
/// Objects merge key by key, everything else is replaced. When the merged
/// object no longer fits `T` the defaults are kept and `probe` is warned.
pub fn merge_options<T>(
    defaults: T,
    overrides: &Map<String, Value>,
    what: &str,
    probe: &dyn EnvironmentProbe,
) -> T
where
    T: Serialize + DeserializeOwned,
{
    if overrides.is_empty() {
        return defaults;
    }

    let mut merged = match serde_json::to_value(&defaults) {
        Ok(value) => value,
        Err(_) => return defaults,
    };
    quill_config::merge_values(&mut merged, &Value::Object(overrides.clone()));

    match serde_json::from_value(merged) {
        Ok(options) => options,
        Err(err) => {
            probe.warn(&format!("ignoring invalid {what} options: {err}"));
            defaults
        }
    }
}
