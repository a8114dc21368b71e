//! CLI utilities for Ayush Bridge tools
//!
//! Provides shared CLI functionality:
//! - Status messages and error reports
//! - Result tables and score breakdowns
//! - Progress indicators

#![warn(missing_docs)]

pub mod output;
pub mod progress;
