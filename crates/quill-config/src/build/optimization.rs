use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::build::helpers::default_name_delimiter;

/// Which chunk types a split-chunk rule applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunksMode {
    /// Initial and async chunks
    #[default]
    All,
    /// Only dynamically imported chunks
    Async,
    /// Only entry chunks
    Initial,
}

/// Runtime chunk extraction strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeChunk {
    /// One runtime chunk shared by all entries
    #[default]
    Single,
    /// One runtime chunk per entry
    Multiple,
    /// Runtime inlined into each entry
    None,
}

/// User-declared optimization defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptimizationOptions {
    /// Force minimization on or off (defaults to production builds only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimize: Option<bool>,

    #[serde(default)]
    pub runtime_chunk: RuntimeChunk,

    #[serde(default)]
    pub split_chunks: SplitChunksOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitChunksOptions {
    #[serde(default)]
    pub chunks: ChunksMode,

    #[serde(default = "default_name_delimiter")]
    pub automatic_name_delimiter: String,

    /// Named grouping rules, kept in declaration order
    #[serde(default)]
    pub cache_groups: IndexMap<String, CacheGroupOptions>,
}

impl Default for SplitChunksOptions {
    fn default() -> Self {
        Self {
            chunks: ChunksMode::All,
            automatic_name_delimiter: default_name_delimiter(),
            cache_groups: IndexMap::new(),
        }
    }
}

/// A single chunk-grouping rule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheGroupOptions {
    /// Regular expression matched against module paths
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunks: Option<ChunksMode>,

    #[serde(default)]
    pub priority: i32,

    /// Output chunk name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reuse_existing_chunk: Option<bool>,
}

/// Code-splitting feature switches
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SplitChunksFeatures {
    /// Bundle small, widely shared framework packages into one `commons` chunk
    #[serde(default)]
    pub commons: bool,
}
