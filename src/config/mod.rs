//! Configuration for help rendering.
//!
//! Argument values are never read from configuration; only presentation
//! settings live here.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::HelpConfig;
