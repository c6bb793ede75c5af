//! Property-based tests for composition purity and stage idempotence.

mod helpers;

use helpers::{client, modern};
use proptest::prelude::*;
use quill_compose::COMMONS_GROUP;
use quill_config::{BuildContext, FeatureToggle, Mode, ModernMode};

fn context_strategy() -> impl Strategy<Value = BuildContext> {
    (
        prop::bool::ANY,
        prop::bool::ANY,
        prop::bool::ANY,
        prop::bool::ANY,
        prop::bool::ANY,
        prop::bool::ANY,
        "(/[a-z]{1,8}){0,3}/?",
    )
        .prop_map(|(dev, commons, analyze, quiet, ssr, modern, base)| {
            let mut build = BuildContext::default();
            build.mode = if dev { Mode::Development } else { Mode::Production };
            build.modern = modern.then_some(ModernMode::Client);
            build.router.base = if base.is_empty() { "/".to_string() } else { base };
            build.build.split_chunks.commons = commons;
            build.build.analyze = FeatureToggle::Flag(analyze);
            build.build.quiet = quiet;
            build.build.ssr = ssr;
            build
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn composition_is_deterministic(build in context_strategy()) {
        prop_assert_eq!(client(&build), client(&build));
        prop_assert_eq!(modern(&build), modern(&build));
    }

    #[test]
    fn commons_stage_is_idempotent(build in context_strategy()) {
        let config = client(&build);
        let mut split = config.optimization.split_chunks.clone();
        prop_assert!(!split.add_commons_group() || !build.build.split_chunks.commons);
        let count = config
            .optimization
            .split_chunks
            .cache_groups
            .keys()
            .filter(|name| name.as_str() == COMMONS_GROUP)
            .count();
        prop_assert_eq!(count, usize::from(build.build.split_chunks.commons));
    }

    #[test]
    fn hmr_path_never_doubles_separators(build in context_strategy()) {
        let config = client(&build);
        if build.is_dev() {
            let hot_client = &config.entry["app"][1];
            prop_assert!(!hot_client.contains("%2F%2F"), "doubled separator in {}", hot_client);
        } else {
            prop_assert_eq!(config.entry["app"].len(), 1);
        }
    }

    #[test]
    fn composing_never_mutates_the_context(build in context_strategy()) {
        let before = build.clone();
        let _ = client(&build);
        let _ = modern(&build);
        prop_assert_eq!(before, build);
    }
}
