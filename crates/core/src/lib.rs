//! Core utilities for Ayush Bridge tools
//!
//! This crate provides shared functionality for the command-line front end:
//!
//! - **Error handling**: errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with environment overrides
//!
//! # Example
//!
//! ```rust,no_run
//! use ayush_core::config::Config;
//!
//! let config = Config::load(None).expect("invalid configuration");
//! let options = config.schema.search.rank_options();
//! assert!(options.limit > 0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;

pub use error::{Error, ErrorCode, Result, ResultExt};

