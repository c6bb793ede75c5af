use serde::{Deserialize, Serialize};

use crate::build::helpers::default_true;

/// Script loader settings that influence plugin selection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoaderOptions {
    #[serde(default)]
    pub ts: TsLoaderOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TsLoaderOptions {
    /// The TypeScript loader only strips types; nothing else checks them
    #[serde(default = "default_true")]
    pub transpile_only: bool,
}

impl Default for TsLoaderOptions {
    fn default() -> Self {
        Self {
            transpile_only: true,
        }
    }
}
