//! Side-effect boundary of the composer.
//!
//! Stages never touch the filesystem or a logger directly; they ask the
//! probe. Tests swap in [`MemoryProbe`] to observe warnings.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

/// Filesystem existence checks and operator warnings
pub trait EnvironmentProbe: Send + Sync {
    fn file_exists(&self, path: &Path) -> bool;

    /// Report a non-fatal problem to the operator
    fn warn(&self, message: &str);
}

/// Real filesystem, warnings through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProbe;

impl EnvironmentProbe for SystemProbe {
    fn file_exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }
}

/// In-memory probe recording every warning
#[derive(Debug, Default)]
pub struct MemoryProbe {
    files: HashSet<PathBuf>,
    warnings: Mutex<Vec<String>>,
}

impl MemoryProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretend `path` exists
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.insert(path.into());
        self
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().clone()
    }
}

impl EnvironmentProbe for MemoryProbe {
    fn file_exists(&self, path: &Path) -> bool {
        self.files.contains(path)
    }

    fn warn(&self, message: &str) {
        self.warnings.lock().push(message.to_string());
    }
}
