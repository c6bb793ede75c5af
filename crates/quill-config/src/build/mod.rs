//! Build feature flags and options shared by every variant.

mod filenames;
mod helpers;
mod html;
mod loaders;
mod optimization;
mod toggle;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use filenames::FilenameOverrides;
pub use html::HtmlOptions;
pub use loaders::{LoaderOptions, TsLoaderOptions};
pub use optimization::{
    CacheGroupOptions, ChunksMode, OptimizationOptions, RuntimeChunk, SplitChunksFeatures,
    SplitChunksOptions,
};
pub use toggle::FeatureToggle;

pub(crate) use helpers::{
    default_app_template_path, default_build_dir, default_root_dir, default_router_base,
};
use helpers::{default_public_path, default_terser, default_true};

/// Build options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildOptions {
    /// Emit a server-rendered shell next to the single-page shell
    #[serde(default = "default_true")]
    pub ssr: bool,

    /// Static bundle analysis (`true` or analyzer options)
    #[serde(default)]
    pub analyze: FeatureToggle,

    /// Suppress interactive output (progress bars, analyzer auto-open)
    #[serde(default)]
    pub quiet: bool,

    /// Friendly error reporting in development
    #[serde(default = "default_true")]
    pub friendly_errors: bool,

    /// Extract CSS into separate files
    #[serde(default)]
    pub extract_css: bool,

    /// CSS minification (`true` or minifier options)
    #[serde(default)]
    pub optimize_css: FeatureToggle,

    /// TypeScript type checking (`true` or type-checker options)
    #[serde(default)]
    pub type_check: FeatureToggle,

    /// Script minification (`true` or minifier options)
    #[serde(default = "default_terser")]
    pub terser: FeatureToggle,

    /// Enable minifier caching
    #[serde(default = "default_true")]
    pub cache: bool,

    /// Public path of emitted assets (absolute URL or path below the router base)
    #[serde(default = "default_public_path")]
    pub public_path: String,

    #[serde(default)]
    pub split_chunks: SplitChunksFeatures,

    #[serde(default)]
    pub optimization: OptimizationOptions,

    #[serde(default)]
    pub html: HtmlOptions,

    #[serde(default)]
    pub loaders: LoaderOptions,

    #[serde(default)]
    pub filenames: FilenameOverrides,
}

impl BuildOptions {
    /// Create from serde_json::Value (for programmatic config from DB/API)
    ///
    /// # Example
    ///
    /// ```
    /// use quill_config::BuildOptions;
    /// use serde_json::json;
    ///
    /// let options = BuildOptions::from_value(json!({
    ///     "ssr": false,
    ///     "analyze": true
    /// }))
    /// .unwrap();
    /// assert!(!options.ssr);
    /// assert!(options.analyze.is_enabled());
    /// ```
    pub fn from_value(value: Value) -> Result<Self, crate::error::ConfigError> {
        serde_json::from_value(value).map_err(|e| crate::error::ConfigError::InvalidValue {
            field: "build".to_string(),
            hint: Some(e.to_string()),
        })
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            ssr: true,
            analyze: FeatureToggle::default(),
            quiet: false,
            friendly_errors: true,
            extract_css: false,
            optimize_css: FeatureToggle::default(),
            type_check: FeatureToggle::default(),
            terser: default_terser(),
            cache: true,
            public_path: default_public_path(),
            split_chunks: SplitChunksFeatures::default(),
            optimization: OptimizationOptions::default(),
            html: HtmlOptions::default(),
            loaders: LoaderOptions::default(),
            filenames: FilenameOverrides::default(),
        }
    }
}
