//! The browser client variant.

use crate::config::BundlerConfig;
use crate::env::EnvironmentMap;
use crate::hmr::{EVENT_SOURCE_POLYFILL, client_entry};
use crate::merge::merge_options;
use crate::minimizer::Minimizer;
use crate::naming::AssetClass;
use crate::optimization::Optimization;
use crate::plugins::{
    BundleAnalyzerOptions, HtmlTemplateOptions, Plugin, TYPE_CHECKER_MISSING, TypeCheckerOptions,
};
use crate::variant::VariantIdentity;

use super::{StageContext, Variant};

/// Entry module generated into the build directory
pub const CLIENT_ENTRY: &str = "client.js";

/// Legacy browser bundle, also the building block of the modern variant
#[derive(Debug, Clone)]
pub struct ClientVariant {
    identity: VariantIdentity,
}

impl ClientVariant {
    pub fn new() -> Self {
        Self::with_identity(VariantIdentity::client())
    }

    /// Client stages under another identity
    pub fn with_identity(identity: VariantIdentity) -> Self {
        Self { identity }
    }
}

impl Default for ClientVariant {
    fn default() -> Self {
        Self::new()
    }
}

impl Variant for ClientVariant {
    fn identity(&self) -> VariantIdentity {
        self.identity.clone()
    }

    fn env(&self, cx: &StageContext<'_>) -> EnvironmentMap {
        let mut env = cx.base().env(cx);
        env.insert_str("process.env.VUE_ENV", "client");
        env.insert_bool("process.browser", !cx.identity.is_server);
        env.insert_bool("process.client", cx.identity.is_client());
        env.insert_bool("process.server", cx.identity.is_server);
        env.insert_bool("process.modern", cx.identity.is_modern);
        env
    }

    fn file_name(&self, cx: &StageContext<'_>, class: AssetClass) -> String {
        // Analysis reports list scripts by chunk name
        if !cx.is_dev() && cx.build.build.analyze.is_enabled() && class.is_script() {
            let prefix = if cx.identity.is_modern { "modern-" } else { "" };
            return format!("{prefix}[name].js");
        }
        cx.base().file_name(cx, class)
    }

    fn optimization(&self, cx: &StageContext<'_>) -> Optimization {
        let mut optimization = cx.base().optimization(cx);
        if cx.build.build.split_chunks.commons {
            optimization.split_chunks.add_commons_group();
        }
        optimization
    }

    fn minimizer(&self, cx: &StageContext<'_>) -> Vec<Minimizer> {
        let mut minimizer = cx.base().minimizer(cx);
        if let Some(options) = cx.build.build.optimize_css.options() {
            minimizer.push(Minimizer::Css(options));
        }
        minimizer
    }

    fn plugins(&self, cx: &StageContext<'_>) -> Vec<Plugin> {
        let mut plugins = cx.base().plugins(cx);
        let context = cx.build;
        let build = &context.build;
        let template = context.paths.root_dir.join(&context.paths.app_template_path);

        if build.ssr {
            plugins.push(Plugin::HtmlTemplate(HtmlTemplateOptions::ssr(
                template.clone(),
                build.html.minify.clone(),
            )));
        }
        plugins.push(Plugin::HtmlTemplate(HtmlTemplateOptions::spa(
            template,
            build.html.minify.clone(),
        )));

        plugins.push(Plugin::SsrClientManifest {
            filename: format!("../server/{}.manifest.json", cx.identity.name),
        });
        plugins.push(Plugin::Define(cx.env()));

        if cx.is_dev() {
            plugins.push(Plugin::HotModuleReplacement);
        }

        if !cx.is_dev() {
            if let Some(overrides) = build.analyze.options() {
                let defaults =
                    BundleAnalyzerOptions::new(cx.build_dir().join("stats"), &cx.identity.name, build.quiet);
                plugins.push(Plugin::BundleAnalyzer(merge_options(
                    defaults,
                    &overrides,
                    "analyze",
                    cx.probe(),
                )));
            }
        }

        if context.modern.is_some() {
            plugins.push(Plugin::ModernMode {
                target_dir: cx.build_dir().join("dist").join("client"),
                is_modern_build: cx.identity.is_modern,
            });
        }

        if let Some(crossorigin) = &context.render.crossorigin {
            plugins.push(Plugin::CrossOrigin {
                crossorigin: crossorigin.clone(),
            });
        }

        if let Some(plugin) = type_checker(cx) {
            plugins.push(plugin);
        }

        plugins
    }

    fn config(&self, cx: &StageContext<'_>) -> BundlerConfig {
        let mut config = cx.base().config(cx);
        let context = cx.build;

        let client_module = cx.build_dir().join(CLIENT_ENTRY).to_string_lossy().into_owned();
        let app = if cx.is_dev() {
            let hot_client = client_entry(
                &context.hot_middleware.client,
                &context.router.base,
                &cx.identity.name,
            );
            vec![EVENT_SOURCE_POLYFILL.to_string(), hot_client, client_module]
        } else {
            vec![client_module]
        };
        config.entry.insert("app".to_string(), app);

        let build = &context.build;
        if cx.is_dev() && !build.quiet && build.friendly_errors {
            config.plugins.push(Plugin::friendly_errors());
        }

        config
    }
}

/// Type checking runs once per build, on the legacy bundle, and only when the
/// script loader itself skips it.
fn type_checker(cx: &StageContext<'_>) -> Option<Plugin> {
    let build = &cx.build.build;
    let overrides = build.type_check.options()?;
    if cx.identity.is_modern || !build.loaders.ts.transpile_only {
        return None;
    }

    let Some(factory) = cx.extensions.type_checker() else {
        cx.probe().warn(TYPE_CHECKER_MISSING);
        return None;
    };

    let root_dir = &cx.build.paths.root_dir;
    let tslint = root_dir.join("tslint.json");
    let tslint = cx.probe().file_exists(&tslint).then_some(tslint);
    let defaults = TypeCheckerOptions::new(root_dir, tslint);
    Some(factory.create(merge_options(
        defaults,
        &overrides,
        "type_check",
        cx.probe(),
    )))
}
