// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for headlint.
//!
//! This module handles loading `headlint.toml`, resolving `extends` against
//! built-in presets and other files, and validating the result.

pub mod default;
mod loader;
pub mod preset;
mod schema;

pub use default::default_config;
pub use loader::{
    find_config_file, find_config_file_from, load_config, load_config_from, merge_configs,
    parse_config, resolve_config,
};
pub use schema::*;
