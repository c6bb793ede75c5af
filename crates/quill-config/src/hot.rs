//! Hot-middleware client options.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HotMiddlewareOptions {
    /// Options serialized into the browser client's connection URL
    #[serde(default)]
    pub client: HotClientOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotClientOptions {
    /// Reload the page when an update cannot be applied
    #[serde(default = "default_reload")]
    pub reload: bool,

    /// Milliseconds before the event stream is considered dead
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Console coloring overrides (structured, sent as embedded JSON)
    #[serde(default = "empty_object")]
    pub ansi_colors: Value,

    /// Error overlay style overrides (structured, sent as embedded JSON)
    #[serde(default = "empty_object")]
    pub overlay_styles: Value,

    /// Any other client option, forwarded verbatim
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Default for HotClientOptions {
    fn default() -> Self {
        Self {
            reload: default_reload(),
            timeout: default_timeout(),
            ansi_colors: empty_object(),
            overlay_styles: empty_object(),
            extra: IndexMap::new(),
        }
    }
}

fn default_reload() -> bool {
    true
}

fn default_timeout() -> u64 {
    30_000
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}
