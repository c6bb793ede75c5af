//! The bundler configuration produced by the final stage.

use std::path::PathBuf;

use indexmap::IndexMap;
use quill_config::Mode;
use serde::Serialize;

use crate::naming::FileNames;
use crate::optimization::Optimization;
use crate::plugins::Plugin;

/// Largest entry point, in bytes, before the bundler warns
pub const MAX_ENTRYPOINT_SIZE: u64 = 1000 * 1024;

/// Fully-populated configuration for one variant, ready for the engine
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundlerConfig {
    pub name: String,
    pub mode: Mode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub devtool: Option<String>,
    /// Entry name → modules, loaded in order
    pub entry: IndexMap<String, Vec<String>>,
    pub output: OutputOptions,
    pub optimization: Optimization,
    pub performance: PerformanceOptions,
    pub plugins: Vec<Plugin>,
    pub file_names: FileNames,
}

impl BundlerConfig {
    /// Find the first plugin with the given name
    pub fn plugin(&self, name: &str) -> Option<&Plugin> {
        self.plugins.iter().find(|plugin| plugin.name() == name)
    }

    pub fn plugin_names(&self) -> Vec<&'static str> {
        self.plugins.iter().map(Plugin::name).collect()
    }

    /// Pretty JSON for the engine
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    pub path: PathBuf,
    pub filename: String,
    pub chunk_filename: String,
    pub public_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceOptions {
    pub max_entrypoint_size: u64,
    /// `None` disables size hints
    #[serde(serialize_with = "hints_or_false")]
    pub hints: Option<String>,
}

fn hints_or_false<S: serde::Serializer>(hints: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    match hints {
        Some(level) => serializer.serialize_str(level),
        None => serializer.serialize_bool(false),
    }
}
