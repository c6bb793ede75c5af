#![allow(dead_code)]

use std::sync::Arc;

use quill_compose::{BundlerConfig, ClientVariant, Extensions, MemoryProbe, ModernVariant, Variant, compose};
use quill_config::BuildContext;

pub fn production() -> BuildContext {
    let mut build = BuildContext::production();
    build.paths.root_dir = "/app".into();
    build
}

pub fn development() -> BuildContext {
    let mut build = BuildContext::default();
    build.paths.root_dir = "/app".into();
    build
}

pub fn client(build: &BuildContext) -> BundlerConfig {
    compose(&ClientVariant::new(), build, &Extensions::default())
}

pub fn modern(build: &BuildContext) -> BundlerConfig {
    compose(&ModernVariant::new(), build, &Extensions::default())
}

/// Compose with a recording probe and return its warnings
pub fn compose_recording(
    variant: &dyn Variant,
    build: &BuildContext,
    extensions: Extensions,
) -> (BundlerConfig, Vec<String>) {
    let probe = Arc::new(MemoryProbe::new());
    let extensions = extensions.with_probe(probe.clone());
    let config = compose(variant, build, &extensions);
    (config, probe.warnings())
}
