//! Hot-module-replacement client entry.
//!
//! The development client entry is prefixed with the hot-middleware client
//! module, configured through its query string.

use indexmap::IndexMap;
use quill_config::HotClientOptions;
use serde_json::Value;

use crate::url::join_url_path;

/// Browser client module of the hot middleware
pub const HOT_CLIENT_MODULE: &str = "webpack-hot-middleware/client";

/// EventSource polyfill loaded ahead of the hot client
pub const EVENT_SOURCE_POLYFILL: &str = "eventsource-polyfill";

/// Event stream mount point below the router base
pub const HMR_PATH_SEGMENT: &str = "__webpack_hmr";

/// Query parameters the client parses as JSON
const JSON_PARAMS: [&str; 2] = ["ansiColors", "overlayStyles"];

/// Ordered query parameters for the hot client of variant `name`.
///
/// Order: `reload`, `timeout`, `ansiColors`, `overlayStyles`, `path`, extra
/// options, then `name`. Extra options sharing a key with an earlier
/// parameter replace its value in place; `name` always comes last. Structured
/// `ansiColors`/`overlayStyles` extras are embedded as JSON like the typed
/// options.
pub fn client_query(
    options: &HotClientOptions,
    router_base: &str,
    name: &str,
) -> IndexMap<String, Value> {
    let mut query = IndexMap::new();
    query.insert("reload".to_string(), Value::Bool(options.reload));
    query.insert("timeout".to_string(), Value::from(options.timeout));
    query.insert(
        "ansiColors".to_string(),
        Value::String(options.ansi_colors.to_string()),
    );
    query.insert(
        "overlayStyles".to_string(),
        Value::String(options.overlay_styles.to_string()),
    );
    query.insert(
        "path".to_string(),
        Value::String(join_url_path(&[router_base, HMR_PATH_SEGMENT, name])),
    );

    for (key, value) in &options.extra {
        let value = match value {
            Value::Object(_) | Value::Array(_) if JSON_PARAMS.contains(&key.as_str()) => {
                Value::String(value.to_string())
            }
            other => other.clone(),
        };
        query.insert(key.clone(), value);
    }

    query.shift_remove("name");
    query.insert("name".to_string(), Value::String(name.to_string()));
    query
}

/// Full entry module string: `webpack-hot-middleware/client?<query>`
pub fn client_entry(options: &HotClientOptions, router_base: &str, name: &str) -> String {
    let query = client_query(options, router_base, name);
    format!("{HOT_CLIENT_MODULE}?{}", stringify_query(&query))
}

/// Serialize query parameters the way Node's `querystring` does.
///
/// Strings, numbers and booleans are written as text, arrays repeat their
/// key once per element, objects and `null` become empty values.
pub fn stringify_query(query: &IndexMap<String, Value>) -> String {
    let mut pairs = Vec::with_capacity(query.len());
    for (key, value) in query {
        let key = urlencoding::encode(key);
        match value {
            Value::Array(items) => {
                for item in items {
                    pairs.push(format!("{key}={}", urlencoding::encode(&primitive(item))));
                }
            }
            other => pairs.push(format!("{key}={}", urlencoding::encode(&primitive(other)))),
        }
    }
    pairs.join("&")
}

fn primitive(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}
