pub mod build;
pub mod config;
pub mod context;
pub mod discovery;
pub mod error;
pub mod hot;
pub mod validation;

// Re-export main types
pub use build::*;
pub use config::*;
pub use context::*;
pub use error::*;
pub use hot::*;

// Re-export discovery and validation
pub use discovery::{
    CONFIG_FILE_NAME, ConfigDiscovery, PACKAGE_JSON_FIELD, discover, discover_with_profile,
    load_value,
};
pub use validation::{ConfigValidator, FsValidator, SchemaValidator, validate_fs, validate_schema};
