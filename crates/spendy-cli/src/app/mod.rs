//! Application-level utilities for the Spendy CLI.
//!
//! This module provides:
//! - Config and data directory resolution
//! - Storage backend selection
//! - The per-invocation `AppContext`

mod context;
mod resolver;

pub use context::{AppContext, Now};
pub use resolver::resolve_config_path;
