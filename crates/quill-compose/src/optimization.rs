//! Code-splitting output of the optimization stage.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use quill_config::{CacheGroupOptions, ChunksMode, OptimizationOptions, RuntimeChunk};
use regex::Regex;
use serde::Serialize;

use crate::minimizer::Minimizer;

/// Name of the shared framework chunk
pub const COMMONS_GROUP: &str = "commons";

/// Small, widely shared runtime and framework packages bundled into `commons`
pub const COMMONS_PACKAGES: &[&str] = &[
    "vue",
    "vue-loader",
    "vue-router",
    "vuex",
    "vue-meta",
    "core-js",
    "@babel/runtime",
    "axios",
    "webpack",
    "setimmediate",
    "timers-browserify",
    "process",
    "regenerator-runtime",
    "cookie",
    "js-cookie",
    "is-buffer",
    "dotprop",
    "nuxt.js",
];

static COMMONS_TEST: Lazy<String> = Lazy::new(|| {
    let packages: Vec<String> = COMMONS_PACKAGES.iter().map(|p| regex::escape(p)).collect();
    format!(r"node_modules[\\/]({})[\\/]", packages.join("|"))
});

/// Optimization section of the bundler configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Optimization {
    pub minimize: bool,
    pub runtime_chunk: RuntimeChunk,
    pub split_chunks: SplitChunks,
    /// Filled by the final stage when minimizing
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub minimizer: Vec<Minimizer>,
}

impl Optimization {
    /// Resolve the user optimization options for a build
    pub fn from_options(options: &OptimizationOptions, dev: bool) -> Self {
        Self {
            minimize: options.minimize.unwrap_or(!dev),
            runtime_chunk: options.runtime_chunk,
            split_chunks: SplitChunks {
                chunks: options.split_chunks.chunks,
                automatic_name_delimiter: options.split_chunks.automatic_name_delimiter.clone(),
                cache_groups: options
                    .split_chunks
                    .cache_groups
                    .iter()
                    .map(|(name, group)| (name.clone(), CacheGroup::from(group)))
                    .collect(),
            },
            minimizer: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitChunks {
    pub chunks: ChunksMode,
    pub automatic_name_delimiter: String,
    pub cache_groups: IndexMap<String, CacheGroup>,
}

impl SplitChunks {
    /// Add the `commons` group unless one is already declared.
    ///
    /// Returns whether a group was added.
    pub fn add_commons_group(&mut self) -> bool {
        if self.cache_groups.contains_key(COMMONS_GROUP) {
            return false;
        }
        self.cache_groups
            .insert(COMMONS_GROUP.to_string(), CacheGroup::commons());
        true
    }
}

/// Chunk-grouping rule as handed to the bundler
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunks: Option<ChunksMode>,
    pub priority: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reuse_existing_chunk: Option<bool>,
}

impl CacheGroup {
    /// The shared framework group
    pub fn commons() -> Self {
        Self {
            test: Some(COMMONS_TEST.clone()),
            chunks: Some(ChunksMode::All),
            priority: 10,
            name: Some(COMMONS_GROUP.to_string()),
            reuse_existing_chunk: None,
        }
    }

    /// Whether a module path falls into this group.
    ///
    /// Groups without a test match everything; an invalid pattern matches nothing.
    pub fn matches(&self, module_path: &str) -> bool {
        match &self.test {
            None => true,
            Some(pattern) => Regex::new(pattern)
                .map(|re| re.is_match(module_path))
                .unwrap_or(false),
        }
    }
}

impl From<&CacheGroupOptions> for CacheGroup {
    fn from(options: &CacheGroupOptions) -> Self {
        Self {
            test: options.test.clone(),
            chunks: options.chunks,
            priority: options.priority,
            name: options.name.clone(),
            reuse_existing_chunk: options.reuse_existing_chunk,
        }
    }
}
