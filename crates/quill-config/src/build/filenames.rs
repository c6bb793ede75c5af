use serde::{Deserialize, Serialize};

/// Per-asset-class filename overrides
///
/// Unset entries fall back to the built-in patterns of the composer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilenameOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
}
