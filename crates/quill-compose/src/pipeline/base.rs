//! Default stages shared by every variant.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{BundlerConfig, MAX_ENTRYPOINT_SIZE, OutputOptions, PerformanceOptions};
use crate::env::EnvironmentMap;
use crate::merge::merge_options;
use crate::minimizer::{Minimizer, ScriptMinifierOptions};
use crate::naming::{AssetClass, FileNames};
use crate::optimization::Optimization;
use crate::plugins::Plugin;
use crate::url::{is_url, join_url_path};

use super::StageContext;

/// Source map style used while developing
pub const DEV_DEVTOOL: &str = "cheap-module-eval-source-map";

static HASH_PLACEHOLDER: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"\[(chunkhash|contenthash|hash)(?::(\d+))?\]").ok());

/// The default stage table
#[derive(Debug, Clone, Copy, Default)]
pub struct BasePipeline;

impl BasePipeline {
    pub fn env(&self, cx: &StageContext<'_>) -> EnvironmentMap {
        let mode = cx.build.mode.as_str();
        let mut env = EnvironmentMap::new();
        env.insert_str("process.env.NODE_ENV", mode);
        env.insert_str("process.mode", mode);
        env.insert_bool("process.static", cx.build.is_static);
        for (key, value) in &cx.build.env {
            env.insert_value(format!("process.env.{key}"), value);
        }
        env
    }

    pub fn file_name(&self, cx: &StageContext<'_>, class: AssetClass) -> String {
        if let Some(name) = override_for(cx, class) {
            return name.to_string();
        }

        let dev = cx.is_dev();
        match class {
            AssetClass::App | AssetClass::Chunk => {
                let stem = if dev { "[name]" } else { "[contenthash:7]" };
                let modern = if cx.identity.is_modern { ".modern" } else { "" };
                format!("{stem}{modern}.js")
            }
            AssetClass::Css if dev => "[name].css".to_string(),
            AssetClass::Css => "css/[contenthash:7].css".to_string(),
            _ if dev => "[path][name].[ext]".to_string(),
            AssetClass::Img => "img/[name].[contenthash:7].[ext]".to_string(),
            AssetClass::Font => "fonts/[name].[contenthash:7].[ext]".to_string(),
            AssetClass::Video => "videos/[name].[contenthash:7].[ext]".to_string(),
        }
    }

    pub fn optimization(&self, cx: &StageContext<'_>) -> Optimization {
        Optimization::from_options(&cx.build.build.optimization, cx.is_dev())
    }

    pub fn minimizer(&self, cx: &StageContext<'_>) -> Vec<Minimizer> {
        let build = &cx.build.build;
        let Some(overrides) = build.terser.options() else {
            return Vec::new();
        };

        let defaults = ScriptMinifierOptions::new(build.cache, cx.identity.is_modern);
        vec![Minimizer::Terser(merge_options(defaults, &overrides, "terser", cx.probe()))]
    }

    pub fn plugins(&self, cx: &StageContext<'_>) -> Vec<Plugin> {
        let build = &cx.build.build;
        let mut plugins = Vec::new();

        if cx.is_dev() {
            plugins.push(Plugin::TimeFix);
        }

        if build.extract_css {
            let css = cx.file_name(AssetClass::Css);
            plugins.push(Plugin::ExtractCss {
                filename: css.clone(),
                chunk_filename: css,
            });
        }

        plugins.push(Plugin::VueLoader);
        plugins.push(Plugin::WarningIgnore);
        plugins.push(Plugin::BuildProgress {
            name: cx.identity.name.clone(),
            color: cx.identity.color().to_string(),
            quiet: build.quiet,
        });

        plugins
    }

    pub fn config(&self, cx: &StageContext<'_>) -> BundlerConfig {
        let dev = cx.is_dev();
        if dev {
            warn_hashed_dev_file_names(cx);
        }

        let file_names = FileNames::from_fn(|class| cx.file_name(class));

        let mut optimization = cx.optimization();
        if optimization.minimize && optimization.minimizer.is_empty() {
            optimization.minimizer = cx.minimizer();
        }

        let public_path = &cx.build.build.public_path;
        let public_path = if is_url(public_path) {
            public_path.clone()
        } else {
            join_url_path(&[&cx.build.router.base, public_path])
        };

        BundlerConfig {
            name: cx.identity.name.clone(),
            mode: cx.build.mode,
            devtool: dev.then(|| DEV_DEVTOOL.to_string()),
            entry: IndexMap::new(),
            output: OutputOptions {
                path: cx.build_dir().join("dist").join(cx.identity.dist_subdir()),
                filename: file_names.app.clone(),
                chunk_filename: file_names.chunk.clone(),
                public_path,
            },
            optimization,
            performance: PerformanceOptions {
                max_entrypoint_size: MAX_ENTRYPOINT_SIZE,
                hints: (!dev).then(|| "warning".to_string()),
            },
            plugins: cx.plugins(),
            file_names,
        }
    }
}

fn override_for<'a>(cx: &StageContext<'a>, class: AssetClass) -> Option<&'a str> {
    let overrides = &cx.build.build.filenames;
    match class {
        AssetClass::App => overrides.app.as_deref(),
        AssetClass::Chunk => overrides.chunk.as_deref(),
        AssetClass::Css => overrides.css.as_deref(),
        AssetClass::Img => overrides.img.as_deref(),
        AssetClass::Font => overrides.font.as_deref(),
        AssetClass::Video => overrides.video.as_deref(),
    }
}

/// Hashed names keep every rebuild in memory while the dev server runs
fn warn_hashed_dev_file_names(cx: &StageContext<'_>) {
    for class in AssetClass::ALL {
        let Some(name) = override_for(cx, class) else {
            continue;
        };
        let captures = HASH_PLACEHOLDER.as_ref().and_then(|re| re.captures(name));
        if let Some(captures) = captures {
            cx.probe().warn(&format!(
                "Notice: do not use [{}] in {class} filenames in development, it leaks memory",
                &captures[1]
            ));
        }
    }
}
