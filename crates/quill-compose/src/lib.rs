//! Bundler configuration composer for the browser build variants.
//!
//! A [`BuildContext`](quill_config::BuildContext) describes what a build should
//! do; [`compose`] turns it into the [`BundlerConfig`] one variant hands to the
//! bundler engine. Composition is pure: the context is only read, and side
//! effects (existence checks, warnings) go through the [`EnvironmentProbe`]
//! carried by [`Extensions`].
//!
//! ```
//! use quill_compose::{ClientVariant, Extensions, compose};
//! use quill_config::BuildContext;
//!
//! let config = compose(&ClientVariant::new(), &BuildContext::production(), &Extensions::default());
//! assert_eq!(config.name, "client");
//! assert_eq!(config.output.filename, "[contenthash:7].js");
//! ```

pub mod config;
pub mod env;
pub mod hmr;
pub mod minimizer;
pub mod naming;
pub mod optimization;
pub mod pipeline;
pub mod plugins;
pub mod probe;
pub mod url;
pub mod variant;

mod merge;

pub use config::{BundlerConfig, MAX_ENTRYPOINT_SIZE, OutputOptions, PerformanceOptions};
pub use env::EnvironmentMap;
pub use minimizer::{Minimizer, ScriptMinifierOptions, TerserOptions};
pub use naming::{AssetClass, FileNames};
pub use optimization::{COMMONS_GROUP, COMMONS_PACKAGES, CacheGroup, Optimization, SplitChunks};
pub use pipeline::{
    BasePipeline, ClientVariant, Extensions, ModernVariant, StageContext, Variant,
    client_variants, compose, compose_variants,
};
pub use plugins::{
    BundleAnalyzerOptions, HtmlTemplateOptions, ModuleTypeChecker, Plugin, TYPE_CHECKER_MISSING,
    TYPE_CHECKER_PACKAGE, TypeCheckerFactory, TypeCheckerOptions,
};
pub use probe::{EnvironmentProbe, MemoryProbe, SystemProbe};
pub use url::{is_url, join_url_path};
pub use variant::VariantIdentity;
