//! CLI argument definitions for leysync
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

mod core;
mod export;

pub use core::{Cli, Commands};
pub use export::ExportArgs;
