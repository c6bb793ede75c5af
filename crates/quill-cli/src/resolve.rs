//! Optional package resolution.
//!
//! Optional plugins are packages the project may or may not have installed.
//! They are looked up once, before composition, the way Node resolves bare
//! specifiers: `node_modules/<name>` in the project directory and each of its
//! ancestors.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use quill_compose::{Extensions, ModuleTypeChecker, TYPE_CHECKER_PACKAGE};
use quill_config::BuildContext;

/// Resolves installed packages below `node_modules` directories
#[derive(Debug, Clone)]
pub struct NodeModulesResolver {
    root: PathBuf,
}

impl NodeModulesResolver {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Directory of the installed package, if any
    pub fn resolve(&self, package: &str) -> Option<PathBuf> {
        self.root.ancestors().find_map(|dir| {
            let candidate = dir.join("node_modules").join(package);
            candidate.join("package.json").is_file().then_some(candidate)
        })
    }
}

/// Capabilities for composing `context` from the project in `cwd`
///
/// The type checker is only looked up when type checking is requested.
pub fn extensions_for(context: &BuildContext, cwd: &Path) -> Extensions {
    let extensions = Extensions::new();
    if !context.build.type_check.is_enabled() {
        return extensions;
    }

    let resolver = NodeModulesResolver::new(cwd.join(&context.paths.root_dir));
    match resolver.resolve(TYPE_CHECKER_PACKAGE) {
        Some(module) => {
            tracing::debug!(module = %module.display(), "type checker resolved");
            extensions.with_type_checker(Arc::new(ModuleTypeChecker::new(module)))
        }
        None => extensions,
    }
}
