use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Static bundle analyzer options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleAnalyzerOptions {
    pub analyzer_mode: String,
    pub default_sizes: String,
    pub generate_stats_file: bool,
    pub open_analyzer: bool,
    pub report_filename: PathBuf,
    pub stats_filename: PathBuf,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BundleAnalyzerOptions {
    /// Reports for variant `name` land in `<build_dir>/stats`
    pub fn new(stats_dir: PathBuf, name: &str, quiet: bool) -> Self {
        Self {
            analyzer_mode: "static".to_string(),
            default_sizes: "gzip".to_string(),
            generate_stats_file: true,
            open_analyzer: !quiet,
            report_filename: stats_dir.join(format!("{name}.html")),
            stats_filename: stats_dir.join(format!("{name}.json")),
            extra: Map::new(),
        }
    }
}
