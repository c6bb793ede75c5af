//! Build-time plugin descriptors.
//!
//! Plugins are not implemented here. Each variant of [`Plugin`] names one
//! plugin the engine instantiates, together with its constructor options.
//! Order in the assembled list is significant.

mod analyzer;
mod html;
mod type_check;

use std::path::PathBuf;

use serde::Serialize;

use crate::env::EnvironmentMap;

pub use analyzer::BundleAnalyzerOptions;
pub use html::{HtmlTemplateOptions, SPA_SHELL, SSR_SHELL};
pub use type_check::{
    ModuleTypeChecker, TYPE_CHECKER_MISSING, TYPE_CHECKER_PACKAGE, TypeCheckerFactory,
    TypeCheckerOptions,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "plugin", content = "options", rename_all = "kebab-case")]
pub enum Plugin {
    /// Works around file watchers reporting stale timestamps on startup
    TimeFix,
    #[serde(rename_all = "camelCase")]
    ExtractCss {
        filename: String,
        chunk_filename: String,
    },
    VueLoader,
    /// Drops known-noisy bundler warnings
    WarningIgnore,
    BuildProgress {
        name: String,
        color: String,
        quiet: bool,
    },
    HtmlTemplate(HtmlTemplateOptions),
    /// Writes the client manifest the server renderer reads
    SsrClientManifest {
        filename: String,
    },
    /// Compile-time constant substitution
    Define(EnvironmentMap),
    HotModuleReplacement,
    BundleAnalyzer(BundleAnalyzerOptions),
    /// Coordinates legacy and modern builds sharing one output directory
    #[serde(rename_all = "camelCase")]
    ModernMode {
        target_dir: PathBuf,
        is_modern_build: bool,
    },
    CrossOrigin {
        crossorigin: String,
    },
    TypeChecker {
        module: PathBuf,
        options: TypeCheckerOptions,
    },
    #[serde(rename_all = "camelCase")]
    FriendlyErrors {
        clear_console: bool,
        log_level: String,
    },
}

impl Plugin {
    /// Stable identifier, matching the serialized `plugin` tag
    pub fn name(&self) -> &'static str {
        match self {
            Plugin::TimeFix => "time-fix",
            Plugin::ExtractCss { .. } => "extract-css",
            Plugin::VueLoader => "vue-loader",
            Plugin::WarningIgnore => "warning-ignore",
            Plugin::BuildProgress { .. } => "build-progress",
            Plugin::HtmlTemplate(_) => "html-template",
            Plugin::SsrClientManifest { .. } => "ssr-client-manifest",
            Plugin::Define(_) => "define",
            Plugin::HotModuleReplacement => "hot-module-replacement",
            Plugin::BundleAnalyzer(_) => "bundle-analyzer",
            Plugin::ModernMode { .. } => "modern-mode",
            Plugin::CrossOrigin { .. } => "cross-origin",
            Plugin::TypeChecker { .. } => "type-checker",
            Plugin::FriendlyErrors { .. } => "friendly-errors",
        }
    }

    /// Friendly-errors reporter as configured for development
    pub fn friendly_errors() -> Self {
        Plugin::FriendlyErrors {
            clear_console: false,
            log_level: "WARNING".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn name_matches_serialized_tag() {
        let plugins = [
            Plugin::TimeFix,
            Plugin::VueLoader,
            Plugin::friendly_errors(),
            Plugin::SsrClientManifest {
                filename: "../server/client.manifest.json".to_string(),
            },
            Plugin::Define(EnvironmentMap::new()),
        ];
        for plugin in plugins {
            let value = serde_json::to_value(&plugin).unwrap();
            assert_eq!(value["plugin"], json!(plugin.name()));
        }
    }

    #[test]
    fn unit_plugins_have_no_options() {
        assert_eq!(
            serde_json::to_value(Plugin::HotModuleReplacement).unwrap(),
            json!({ "plugin": "hot-module-replacement" })
        );
    }

    #[test]
    fn friendly_errors_options_are_camel_case() {
        assert_eq!(
            serde_json::to_value(Plugin::friendly_errors()).unwrap()["options"],
            json!({ "clearConsole": false, "logLevel": "WARNING" })
        );
    }
}
