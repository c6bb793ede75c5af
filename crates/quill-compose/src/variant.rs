//! Variant identity.
//!
//! A variant is one of the build pipelines run for a project. The identity
//! decides filename prefixes, manifest names and which conditional branches of
//! the stages fire.

use serde::Serialize;

/// Small record distinguishing the client, modern-client and server pipelines
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantIdentity {
    pub name: String,
    pub is_server: bool,
    pub is_modern: bool,
}

impl VariantIdentity {
    pub fn new(name: impl Into<String>, is_server: bool, is_modern: bool) -> Self {
        Self {
            name: name.into(),
            is_server,
            is_modern,
        }
    }

    /// Legacy browser bundle
    pub fn client() -> Self {
        Self::new("client", false, false)
    }

    /// Modern (ES2015+) browser bundle
    pub fn modern() -> Self {
        Self::new("modern", false, true)
    }

    /// Server renderer bundle
    pub fn server() -> Self {
        Self::new("server", true, false)
    }

    pub fn is_client(&self) -> bool {
        !self.is_server
    }

    /// Output subdirectory below `<build_dir>/dist`
    ///
    /// Legacy and modern client bundles share one directory.
    pub fn dist_subdir(&self) -> &'static str {
        if self.is_server { "server" } else { "client" }
    }

    /// Progress bar color used by the build reporter
    pub fn color(&self) -> &'static str {
        match (self.is_server, self.is_modern) {
            (true, _) => "orange",
            (false, true) => "blue",
            (false, false) => "green",
        }
    }
}

impl std::fmt::Display for VariantIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
