//! Quill CLI - composes client bundler configurations from build intentions.
//!
//! This crate provides the `quill` binary on top of `quill-config` and
//! `quill-compose`: it layers configuration from file, environment and flags,
//! resolves optional packages of the project, and writes the composed
//! configurations as JSON.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`config`] - Layered configuration loading with figment
//! - [`resolve`] - Optional package resolution below `node_modules`
//! - [`commands`] - `compose` and `check`
//! - [`error`] - Error types with actionable hints
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Colored status lines
//!
//! # Example
//!
//! ```rust,no_run
//! use quill_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod resolve;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
