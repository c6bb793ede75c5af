//! Tests for configuration profiles and merging behavior.

use quill_config::{ConfigDiscovery, ConfigError, Mode};
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) {
    fs::write(dir.path().join("quill.toml"), content).expect("write config");
}

#[test]
fn profile_overrides_build_options() {
    let dir = TempDir::new().expect("tempdir");
    write_config(
        &dir,
        r#"
mode = "development"

[build]
ssr = true
quiet = false

[profiles.production]
mode = "production"

[profiles.production.build]
quiet = true
analyze = true
"#,
    );

    let context = ConfigDiscovery::new(dir.path())
        .load_with_profile("production")
        .expect("load with profile");

    assert_eq!(context.mode, Mode::Production);
    assert!(context.build.quiet);
    assert!(context.build.analyze.is_enabled());
    assert!(context.build.ssr);
}

#[test]
fn profile_replaces_arrays_and_merges_maps() {
    let dir = TempDir::new().expect("tempdir");
    write_config(
        &dir,
        r#"
[env]
A = "1"
B = "2"

[hot_middleware.client]
timeout = 1000
paths = ["a", "b"]

[profiles.ci.env]
B = "3"

[profiles.ci.hot_middleware.client]
paths = ["c"]
"#,
    );

    let context = ConfigDiscovery::new(dir.path())
        .load_with_profile("ci")
        .expect("load with profile");

    assert_eq!(context.env["A"], serde_json::json!("1"));
    assert_eq!(context.env["B"], serde_json::json!("3"));
    assert_eq!(context.hot_middleware.client.timeout, 1000);
    assert_eq!(
        context.hot_middleware.client.extra["paths"],
        serde_json::json!(["c"])
    );
}

#[test]
fn invalid_profile_value_is_reported() {
    let dir = TempDir::new().expect("tempdir");
    write_config(
        &dir,
        r#"
[profiles.broken]
mode = "staging"
"#,
    );

    let err = ConfigDiscovery::new(dir.path())
        .load_with_profile("broken")
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidProfileOverride { .. }));
    assert!(err.to_string().contains("broken"));
}

#[test]
fn profile_names_keep_declaration_order() {
    let dir = TempDir::new().expect("tempdir");
    write_config(
        &dir,
        r#"
[profiles.staging]
[profiles.ci]
[profiles.production]
"#,
    );

    let config = ConfigDiscovery::new(dir.path()).load().expect("load");
    let names: Vec<_> = config.profile_names().collect();
    assert_eq!(names, ["staging", "ci", "production"]);
}
