use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Options forwarded to the HTML shell plugins
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HtmlOptions {
    /// HTML minifier options (`None` leaves the shell unminified)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minify: Option<Value>,
}
