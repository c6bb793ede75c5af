//! The staged composition pipeline.
//!
//! A [`Variant`] exposes one method per stage. Every method defaults to the
//! shared [`BasePipeline`]; a variant overrides a stage by calling the base
//! and extending its output, or by replacing it outright.
//!
//! Stages never call each other directly. They go through the
//! [`StageContext`], which dispatches to the outermost variant, so an override
//! in a wrapping variant is seen by every stage of the wrapped one.

mod base;
mod client;
mod modern;

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use quill_config::{BuildContext, ModernMode};
use rayon::prelude::*;

use crate::config::BundlerConfig;
use crate::env::EnvironmentMap;
use crate::minimizer::Minimizer;
use crate::naming::AssetClass;
use crate::optimization::Optimization;
use crate::plugins::{Plugin, TypeCheckerFactory};
use crate::probe::{EnvironmentProbe, SystemProbe};
use crate::variant::VariantIdentity;

pub use base::BasePipeline;
pub use client::ClientVariant;
pub use modern::ModernVariant;

/// One build pipeline
pub trait Variant: Send + Sync {
    fn identity(&self) -> VariantIdentity;

    /// Compile-time constants
    fn env(&self, cx: &StageContext<'_>) -> EnvironmentMap {
        cx.base().env(cx)
    }

    /// Output filename pattern for an asset class
    fn file_name(&self, cx: &StageContext<'_>, class: AssetClass) -> String {
        cx.base().file_name(cx, class)
    }

    /// Code-splitting rules
    fn optimization(&self, cx: &StageContext<'_>) -> Optimization {
        cx.base().optimization(cx)
    }

    /// Minification transforms, in application order
    fn minimizer(&self, cx: &StageContext<'_>) -> Vec<Minimizer> {
        cx.base().minimizer(cx)
    }

    /// Build-time plugins, in application order
    fn plugins(&self, cx: &StageContext<'_>) -> Vec<Plugin> {
        cx.base().plugins(cx)
    }

    /// Assemble the final configuration
    fn config(&self, cx: &StageContext<'_>) -> BundlerConfig {
        cx.base().config(cx)
    }
}

/// Capabilities injected by the caller
#[derive(Clone)]
pub struct Extensions {
    probe: Arc<dyn EnvironmentProbe>,
    type_checker: Option<Arc<dyn TypeCheckerFactory>>,
}

impl Extensions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_probe(mut self, probe: Arc<dyn EnvironmentProbe>) -> Self {
        self.probe = probe;
        self
    }

    /// Provide the type checker; without one, type checking degrades to a warning
    pub fn with_type_checker(mut self, factory: Arc<dyn TypeCheckerFactory>) -> Self {
        self.type_checker = Some(factory);
        self
    }

    pub fn probe(&self) -> &dyn EnvironmentProbe {
        self.probe.as_ref()
    }

    pub fn type_checker(&self) -> Option<&dyn TypeCheckerFactory> {
        self.type_checker.as_deref()
    }
}

impl Default for Extensions {
    fn default() -> Self {
        Self {
            probe: Arc::new(SystemProbe),
            type_checker: None,
        }
    }
}

impl fmt::Debug for Extensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extensions")
            .field("type_checker", &self.type_checker.is_some())
            .finish_non_exhaustive()
    }
}

/// Everything a stage may read during one composition
pub struct StageContext<'a> {
    pub build: &'a BuildContext,
    pub identity: &'a VariantIdentity,
    pub extensions: &'a Extensions,
    variant: &'a dyn Variant,
}

impl<'a> StageContext<'a> {
    pub fn new(
        build: &'a BuildContext,
        identity: &'a VariantIdentity,
        extensions: &'a Extensions,
        variant: &'a dyn Variant,
    ) -> Self {
        Self {
            build,
            identity,
            extensions,
            variant,
        }
    }

    /// Shared default stages
    pub fn base(&self) -> &'static BasePipeline {
        &BasePipeline
    }

    pub fn is_dev(&self) -> bool {
        self.build.is_dev()
    }

    pub fn probe(&self) -> &dyn EnvironmentProbe {
        self.extensions.probe()
    }

    /// `<root_dir>/<build_dir>`
    pub fn build_dir(&self) -> PathBuf {
        self.build.paths.root_dir.join(&self.build.paths.build_dir)
    }

    pub fn env(&self) -> EnvironmentMap {
        self.variant.env(self)
    }

    pub fn file_name(&self, class: AssetClass) -> String {
        self.variant.file_name(self, class)
    }

    pub fn optimization(&self) -> Optimization {
        self.variant.optimization(self)
    }

    pub fn minimizer(&self) -> Vec<Minimizer> {
        self.variant.minimizer(self)
    }

    pub fn plugins(&self) -> Vec<Plugin> {
        self.variant.plugins(self)
    }
}

/// Compose the configuration of one variant.
///
/// Pure apart from the probe: equal inputs give structurally equal output.
pub fn compose(variant: &dyn Variant, build: &BuildContext, extensions: &Extensions) -> BundlerConfig {
    let identity = variant.identity();
    let span = tracing::debug_span!("compose", variant = %identity, mode = %build.mode);
    let _guard = span.enter();

    let cx = StageContext::new(build, &identity, extensions, variant);
    let config = variant.config(&cx);

    tracing::debug!(
        plugins = config.plugins.len(),
        entries = config.entry.len(),
        "composed bundler config"
    );
    config
}

/// Client variants to build for a context
///
/// The legacy client always; the modern client when modern mode is `client`.
pub fn client_variants(build: &BuildContext) -> Vec<Box<dyn Variant>> {
    let mut variants: Vec<Box<dyn Variant>> = vec![Box::new(ClientVariant::new())];
    if build.modern == Some(ModernMode::Client) {
        variants.push(Box::new(ModernVariant::new()));
    }
    variants
}

/// Compose every client variant concurrently, in [`client_variants`] order
pub fn compose_variants(build: &BuildContext, extensions: &Extensions) -> Vec<BundlerConfig> {
    client_variants(build)
        .par_iter()
        .map(|variant| compose(variant.as_ref(), build, extensions))
        .collect()
}
