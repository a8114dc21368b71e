//! Configuration loading and schema definitions
//!
//! Settings come from an optional TOML file, then `AYUSH_*` environment
//! variables.

mod loader;
mod schema;

pub use loader::{Config, ENV_CORPUS, ENV_LIMIT, ENV_LOG_LEVEL, ENV_THRESHOLD};
pub use schema::*;
