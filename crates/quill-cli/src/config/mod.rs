//! Layered configuration loading.
//!
//! Sources, lowest priority first:
//!
//! 1. Built-in defaults
//! 2. `quill.toml`, the `quill` field of `package.json`, or `--config`
//! 3. `QUILL__*` environment variables (`QUILL__BUILD__QUIET=true`)
//! 4. The selected profile
//! 5. Command-line flags

mod loading;

pub use loading::{ENV_PREFIX, LoadOptions, cli_overrides, load_context};
