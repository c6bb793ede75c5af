use std::path::PathBuf;

use serde::Serialize;
use serde_json::Value;

/// Server-rendered shell, relative to the client output directory
pub const SSR_SHELL: &str = "../server/index.ssr.html";

/// Single-page shell, relative to the client output directory
pub const SPA_SHELL: &str = "../server/index.spa.html";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlTemplateOptions {
    pub filename: String,
    pub template: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minify: Option<Value>,
    /// Whether asset tags are injected into the document
    pub inject: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunks_sort_mode: Option<String>,
}

impl HtmlTemplateOptions {
    /// Shell rendered by the server; assets are added at render time
    pub fn ssr(template: PathBuf, minify: Option<Value>) -> Self {
        Self {
            filename: SSR_SHELL.to_string(),
            template,
            minify,
            inject: false,
            chunks_sort_mode: None,
        }
    }

    /// Fallback shell for client-only rendering
    pub fn spa(template: PathBuf, minify: Option<Value>) -> Self {
        Self {
            filename: SPA_SHELL.to_string(),
            template,
            minify,
            inject: true,
            chunks_sort_mode: Some("dependency".to_string()),
        }
    }
}
