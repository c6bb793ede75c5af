//! Tests for default values and edge cases.

use quill_config::{
    BuildContext, BuildOptions, ChunksMode, FeatureToggle, HotClientOptions, Mode,
    OptimizationOptions, QuillConfig, RuntimeChunk,
};
use std::path::PathBuf;

#[test]
fn build_context_defaults() {
    let context = BuildContext::default();
    assert_eq!(context.mode, Mode::Development);
    assert!(context.modern.is_none());
    assert!(!context.is_static);
    assert_eq!(context.paths.root_dir, PathBuf::from("."));
    assert_eq!(context.paths.build_dir, PathBuf::from(".quill"));
    assert_eq!(context.router.base, "/");
    assert!(context.render.crossorigin.is_none());
    assert!(context.env.is_empty());
}

#[test]
fn build_options_defaults() {
    let build = BuildOptions::default();
    assert!(build.ssr);
    assert!(!build.analyze.is_enabled());
    assert!(!build.quiet);
    assert!(build.friendly_errors);
    assert!(!build.extract_css);
    assert!(!build.optimize_css.is_enabled());
    assert!(!build.type_check.is_enabled());
    assert_eq!(build.terser, FeatureToggle::Flag(true));
    assert!(build.cache);
    assert_eq!(build.public_path, "/_quill/");
    assert!(!build.split_chunks.commons);
    assert!(build.loaders.ts.transpile_only);
}

#[test]
fn empty_document_matches_default() {
    let from_empty = BuildContext::from_value(serde_json::json!({})).unwrap();
    assert_eq!(from_empty, BuildContext::default());
}

#[test]
fn optimization_defaults() {
    let optimization = OptimizationOptions::default();
    assert!(optimization.minimize.is_none());
    assert_eq!(optimization.runtime_chunk, RuntimeChunk::Single);
    assert_eq!(optimization.split_chunks.chunks, ChunksMode::All);
    assert_eq!(optimization.split_chunks.automatic_name_delimiter, ".");
    assert!(optimization.split_chunks.cache_groups.is_empty());
}

#[test]
fn hot_client_defaults() {
    let client = HotClientOptions::default();
    assert!(client.reload);
    assert_eq!(client.timeout, 30_000);
    assert_eq!(client.ansi_colors, serde_json::json!({}));
    assert_eq!(client.overlay_styles, serde_json::json!({}));
    assert!(client.extra.is_empty());
}

#[test]
fn missing_profile_on_default_config() {
    let config = QuillConfig::default();
    assert!(config.materialize_profile(Some("nonexistent")).is_err());
}

#[test]
fn no_profile_returns_base_context() {
    let config = QuillConfig::default();
    let context = config.materialize_profile(None).unwrap();
    assert_eq!(context, BuildContext::default());
}
