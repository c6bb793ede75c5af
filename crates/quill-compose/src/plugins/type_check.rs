//! Optional TypeScript type checking.
//!
//! The checker is an optional package of the project. Whether it is installed
//! is decided before composition; the composer only receives a factory when
//! it is.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Plugin;

/// Package providing the type checker
pub const TYPE_CHECKER_PACKAGE: &str = "fork-ts-checker-webpack-plugin";

/// Warning emitted when type checking is requested but unavailable
pub const TYPE_CHECKER_MISSING: &str =
    "Install `fork-ts-checker-webpack-plugin` as a dev dependency to enable TypeScript type checking";

/// Builds the type-checker plugin from resolved options
pub trait TypeCheckerFactory: Send + Sync {
    fn create(&self, options: TypeCheckerOptions) -> Plugin;
}

/// Type checker loaded from an installed package directory
#[derive(Debug, Clone)]
pub struct ModuleTypeChecker {
    module: PathBuf,
}

impl ModuleTypeChecker {
    pub fn new(module: impl Into<PathBuf>) -> Self {
        Self {
            module: module.into(),
        }
    }

    pub fn module(&self) -> &Path {
        &self.module
    }
}

impl TypeCheckerFactory for ModuleTypeChecker {
    fn create(&self, options: TypeCheckerOptions) -> Plugin {
        Plugin::TypeChecker {
            module: self.module.clone(),
            options,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeCheckerOptions {
    /// Check `<script lang="ts">` blocks of single-file components
    pub vue: bool,
    pub tsconfig: PathBuf,
    /// Lint configuration, serialized as `false` when absent
    #[serde(with = "path_or_false")]
    pub tslint: Option<PathBuf>,
    pub formatter: String,
    pub logger: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TypeCheckerOptions {
    pub fn new(root_dir: &Path, tslint: Option<PathBuf>) -> Self {
        Self {
            vue: true,
            tsconfig: root_dir.join("tsconfig.json"),
            tslint,
            formatter: "codeframe".to_string(),
            logger: "quill".to_string(),
            extra: Map::new(),
        }
    }
}

mod path_or_false {
    use std::path::PathBuf;

    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<S: Serializer>(path: &Option<PathBuf>, serializer: S) -> Result<S::Ok, S::Error> {
        match path {
            Some(path) => serializer.serialize_str(&path.to_string_lossy()),
            None => serializer.serialize_bool(false),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<PathBuf>, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(path) => Ok(Some(PathBuf::from(path))),
            _ => Ok(None),
        }
    }
}
