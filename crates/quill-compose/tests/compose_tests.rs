//! End-to-end composition of the client variants.

mod helpers;

use std::path::PathBuf;
use std::sync::Arc;

use helpers::{client, compose_recording, development, modern, production};
use quill_compose::{
    AssetClass, COMMONS_GROUP, ClientVariant, Extensions, MemoryProbe, Minimizer, ModernVariant,
    ModuleTypeChecker, Plugin, TYPE_CHECKER_MISSING, compose, compose_variants,
};
use quill_config::{BuildContext, CacheGroupOptions, FeatureToggle, ModernMode};
use serde_json::json;

#[test]
fn commons_group_is_added_once() {
    let mut build = production();
    build.build.split_chunks.commons = true;

    let config = client(&build);
    let groups = &config.optimization.split_chunks.cache_groups;
    assert_eq!(groups.len(), 1);

    let commons = &groups[COMMONS_GROUP];
    assert_eq!(commons.priority, 10);
    assert_eq!(commons.chunks, Some(quill_config::ChunksMode::All));
    assert_eq!(commons.name.as_deref(), Some(COMMONS_GROUP));
    assert!(commons.matches("/app/node_modules/vuex/dist/vuex.esm.js"));

    let mut again = config.optimization.split_chunks.clone();
    assert!(!again.add_commons_group());
    assert_eq!(again, config.optimization.split_chunks);
}

#[test]
fn user_commons_group_is_kept() {
    let mut build = production();
    build.build.split_chunks.commons = true;
    build.build.optimization.split_chunks.cache_groups.insert(
        COMMONS_GROUP.to_string(),
        CacheGroupOptions {
            test: Some("node_modules".to_string()),
            priority: -5,
            ..Default::default()
        },
    );

    let config = client(&build);
    let commons = &config.optimization.split_chunks.cache_groups[COMMONS_GROUP];
    assert_eq!(commons.priority, -5);
    assert_eq!(commons.test.as_deref(), Some("node_modules"));
}

#[test]
fn commons_is_off_by_default() {
    let config = client(&production());
    assert!(config.optimization.split_chunks.cache_groups.is_empty());
}

#[test]
fn css_minimizer_follows_script_minimizer() {
    let mut build = production();
    let config = client(&build);
    assert_eq!(config.optimization.minimizer.len(), 1);

    build.build.optimize_css = FeatureToggle::Flag(true);
    let config = client(&build);
    let minimizer = &config.optimization.minimizer;
    assert_eq!(minimizer.len(), 2);
    assert_eq!(minimizer[0].name(), "terser");
    assert_eq!(minimizer[1], Minimizer::Css(serde_json::Map::new()));
}

#[test]
fn css_minimizer_receives_options() {
    let mut build = production();
    build.build.terser = FeatureToggle::Flag(false);
    build.build.optimize_css = serde_json::from_value(json!({ "safe": true })).unwrap();

    let config = client(&build);
    let minimizer = &config.optimization.minimizer;
    assert_eq!(minimizer.len(), 1);
    let Minimizer::Css(options) = &minimizer[0] else {
        panic!("expected css minimizer");
    };
    assert_eq!(options["safe"], json!(true));
}

#[test]
fn modern_analysis_names_scripts_by_chunk() {
    let mut build = production();
    build.build.analyze = FeatureToggle::Flag(true);

    let legacy = client(&build);
    assert_eq!(legacy.file_names.get(AssetClass::App), "[name].js");
    assert_eq!(legacy.file_names.get(AssetClass::Chunk), "[name].js");

    let modern = modern(&build);
    assert_eq!(modern.file_names.get(AssetClass::App), "modern-[name].js");
    assert_eq!(modern.file_names.get(AssetClass::Chunk), "modern-[name].js");
    assert_eq!(modern.output.chunk_filename, "modern-[name].js");
    assert_eq!(
        modern.file_names.get(AssetClass::Font),
        "fonts/[name].[contenthash:7].[ext]"
    );
}

#[test]
fn analysis_naming_is_production_only() {
    let mut build = development();
    build.build.analyze = FeatureToggle::Flag(true);
    let config = modern(&build);
    assert_eq!(config.file_names.get(AssetClass::Chunk), "[name].modern.js");
    assert!(config.plugin("bundle-analyzer").is_none());
}

#[test]
fn hmr_path_ignores_trailing_base_slash() {
    for base in ["/app", "/app/"] {
        let mut build = development();
        build.router.base = base.to_string();
        let config = client(&build);
        let hot_client = &config.entry["app"][1];
        assert!(
            hot_client.contains("&path=%2Fapp%2F__webpack_hmr%2Fclient&"),
            "unexpected hot client entry {hot_client}"
        );
    }
}

#[test]
fn hot_client_styles_under_client_key_names_survive() {
    let mut build = BuildContext::from_value(json!({
        "hot_middleware": {
            "client": {
                "ansiColors": { "red": "ff0000" },
                "overlayStyles": { "color": "#fff" }
            }
        }
    }))
    .unwrap();
    build.paths.root_dir = "/app".into();

    let config = client(&build);
    let hot_client = &config.entry["app"][1];
    assert!(hot_client.contains("&ansiColors=%7B%22red%22%3A%22ff0000%22%7D&"));
    assert!(hot_client.contains("&overlayStyles=%7B%22color%22%3A%22%23fff%22%7D&"));
}

#[test]
fn html_shells_follow_ssr() {
    let mut build = production();
    build.build.ssr = false;
    let config = client(&build);
    let shells: Vec<_> = config
        .plugins
        .iter()
        .filter_map(|plugin| match plugin {
            Plugin::HtmlTemplate(options) => Some(options),
            _ => None,
        })
        .collect();
    assert_eq!(shells.len(), 1);
    assert_eq!(shells[0].filename, "../server/index.spa.html");
    assert!(shells[0].inject);

    build.build.ssr = true;
    build.build.html.minify = Some(json!({ "collapseWhitespace": true }));
    let config = client(&build);
    let shells: Vec<_> = config
        .plugins
        .iter()
        .filter_map(|plugin| match plugin {
            Plugin::HtmlTemplate(options) => Some(options),
            _ => None,
        })
        .collect();
    assert_eq!(shells.len(), 2);
    assert_eq!(shells[0].filename, "../server/index.ssr.html");
    assert!(!shells[0].inject);
    assert_eq!(shells[0].minify, Some(json!({ "collapseWhitespace": true })));
    assert_eq!(shells[1].chunks_sort_mode.as_deref(), Some("dependency"));
    assert_eq!(
        shells[0].template,
        PathBuf::from("/app/.quill/views/app.template.html")
    );
}

#[test]
fn analyzer_open_mirrors_quiet() {
    for quiet in [false, true] {
        let mut build = production();
        build.build.analyze = FeatureToggle::Flag(true);
        build.build.quiet = quiet;

        let config = client(&build);
        let Some(Plugin::BundleAnalyzer(options)) = config.plugin("bundle-analyzer") else {
            panic!("analyzer missing");
        };
        assert_eq!(options.open_analyzer, !quiet);
        assert_eq!(options.default_sizes, "gzip");
        assert_eq!(options.report_filename, PathBuf::from("/app/.quill/stats/client.html"));
        assert_eq!(options.stats_filename, PathBuf::from("/app/.quill/stats/client.json"));
    }
}

#[test]
fn analyzer_options_merge_over_defaults() {
    let mut build = production();
    build.build.analyze = serde_json::from_value(json!({
        "analyzerMode": "server",
        "analyzerPort": 8888
    }))
    .unwrap();

    let config = client(&build);
    let Some(Plugin::BundleAnalyzer(options)) = config.plugin("bundle-analyzer") else {
        panic!("analyzer missing");
    };
    assert_eq!(options.analyzer_mode, "server");
    assert_eq!(options.extra["analyzerPort"], json!(8888));
    assert!(options.generate_stats_file);
}

#[test]
fn ill_typed_analyzer_options_keep_defaults_and_warn() {
    let mut build = production();
    build.build.analyze = serde_json::from_value(json!({ "openAnalyzer": "yes" })).unwrap();

    let (config, warnings) = compose_recording(&ClientVariant::new(), &build, Extensions::default());
    let Some(Plugin::BundleAnalyzer(options)) = config.plugin("bundle-analyzer") else {
        panic!("analyzer missing");
    };
    assert!(options.open_analyzer);
    assert_eq!(options.analyzer_mode, "static");
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("analyze"));
}

#[test]
fn identical_contexts_compose_equal_configs() {
    let mut build = production();
    build.build.split_chunks.commons = true;
    build.build.optimize_css = FeatureToggle::Flag(true);
    build.env.insert("API".to_string(), json!("https://api"));

    assert_eq!(client(&build), client(&build.clone()));
    assert_eq!(
        serde_json::to_string(&modern(&build)).unwrap(),
        serde_json::to_string(&modern(&build)).unwrap()
    );
}

#[test]
fn missing_type_checker_warns_once_and_continues() {
    let mut build = development();
    build.build.type_check = FeatureToggle::Flag(true);

    let (config, warnings) = compose_recording(&ClientVariant::new(), &build, Extensions::default());
    assert_eq!(warnings, [TYPE_CHECKER_MISSING]);
    assert!(config.plugin("type-checker").is_none());
    assert_eq!(config.plugin_names().last(), Some(&"friendly-errors"));
}

#[test]
fn type_checker_is_skipped_for_modern_builds() {
    let mut build = production();
    build.build.type_check = FeatureToggle::Flag(true);

    let (config, warnings) = compose_recording(&ModernVariant::new(), &build, Extensions::default());
    assert!(warnings.is_empty());
    assert!(config.plugin("type-checker").is_none());
}

#[test]
fn type_checker_is_skipped_when_the_loader_checks() {
    let mut build = production();
    build.build.type_check = FeatureToggle::Flag(true);
    build.build.loaders.ts.transpile_only = false;

    let (config, warnings) = compose_recording(&ClientVariant::new(), &build, Extensions::default());
    assert!(warnings.is_empty());
    assert!(config.plugin("type-checker").is_none());
}

#[test]
fn injected_type_checker_builds_plugin() {
    let mut build = production();
    build.build.type_check = serde_json::from_value(json!({ "async": false })).unwrap();
    let module = PathBuf::from("/app/node_modules/fork-ts-checker-webpack-plugin");
    let extensions = Extensions::new().with_type_checker(Arc::new(ModuleTypeChecker::new(&module)));

    let (config, warnings) = compose_recording(&ClientVariant::new(), &build, extensions);
    assert!(warnings.is_empty());
    let Some(Plugin::TypeChecker { module: resolved, options }) = config.plugins.last() else {
        panic!("type checker should be the last plugin");
    };
    assert_eq!(resolved, &module);
    assert!(options.vue);
    assert_eq!(options.tsconfig, PathBuf::from("/app/tsconfig.json"));
    assert_eq!(options.tslint, None);
    assert_eq!(options.formatter, "codeframe");
    assert_eq!(options.extra["async"], json!(false));
}

#[test]
fn type_checker_picks_up_existing_lint_config() {
    let mut build = production();
    build.build.type_check = FeatureToggle::Flag(true);
    let probe = Arc::new(MemoryProbe::new().with_file("/app/tslint.json"));
    let extensions = Extensions::new()
        .with_probe(probe.clone())
        .with_type_checker(Arc::new(ModuleTypeChecker::new("/app/node_modules/checker")));

    let config = compose(&ClientVariant::new(), &build, &extensions);
    assert!(probe.warnings().is_empty());
    let Some(Plugin::TypeChecker { options, .. }) = config.plugin("type-checker") else {
        panic!("type checker missing");
    };
    assert_eq!(options.tslint, Some(PathBuf::from("/app/tslint.json")));

    let value = serde_json::to_value(options).unwrap();
    assert_eq!(value["tslint"], json!("/app/tslint.json"));
}

#[test]
fn compose_variants_follows_modern_mode() {
    let mut build = production();
    let configs = compose_variants(&build, &Extensions::default());
    let names: Vec<_> = configs.iter().map(|config| config.name.as_str()).collect();
    assert_eq!(names, ["client"]);
    assert!(configs[0].plugin("modern-mode").is_none());

    build.modern = Some(ModernMode::Client);
    let configs = compose_variants(&build, &Extensions::default());
    let names: Vec<_> = configs.iter().map(|config| config.name.as_str()).collect();
    assert_eq!(names, ["client", "modern"]);

    let flags: Vec<_> = configs
        .iter()
        .filter_map(|config| match config.plugin("modern-mode") {
            Some(Plugin::ModernMode { is_modern_build, .. }) => Some(*is_modern_build),
            _ => None,
        })
        .collect();
    assert_eq!(flags, [false, true]);
}

#[test]
fn serialized_config_uses_engine_field_names() {
    let value = serde_json::to_value(client(&development())).unwrap();
    assert_eq!(value["devtool"], json!("cheap-module-eval-source-map"));
    assert_eq!(value["performance"]["hints"], json!(false));
    assert_eq!(value["performance"]["maxEntrypointSize"], json!(1_024_000));
    assert_eq!(value["output"]["publicPath"], json!("/_quill/"));
    assert_eq!(value["optimization"]["runtimeChunk"], json!("single"));
    assert_eq!(value["optimization"]["splitChunks"]["automaticNameDelimiter"], json!("."));
    assert!(value["optimization"].get("minimizer").is_none());
    assert_eq!(value["plugins"][0], json!({ "plugin": "time-fix" }));
}
