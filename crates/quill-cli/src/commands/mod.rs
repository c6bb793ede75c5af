//! Command implementations for the Quill CLI.
//!
//! - [`compose`] - Compose and emit bundler configurations
//! - [`check`] - Configuration validation
//!
//! Each command provides an `execute` function that takes the parsed command
//! arguments and returns a Result.

pub mod check;
pub mod compose;

pub use check::execute as check_execute;
pub use compose::execute as compose_execute;
