// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading, `extends` resolution and merging.

use crate::commit::HeaderParser;
use crate::error::{ConfigError, Result};
use crate::rules::RuleName;
use regex::Regex;
use std::path::{Path, PathBuf};

use super::default::default_config;
use super::preset::preset;
use super::schema::{LintConfig, ResolvedConfig};

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["headlint.toml", ".headlint.toml", ".config/headlint.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        // Try parent directory
        if !current.pop() {
            break;
        }
    }

    // Also check user's home directory
    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }
    }

    // Check XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("headlint").join("config.toml");
        if config_path.exists() {
            return Some(config_path);
        }
    }

    None
}

/// Load and resolve configuration from the default locations.
pub fn load_config() -> Result<ResolvedConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using project defaults");
            resolve_config(default_config(), None)
        }
    }
}

/// Load and resolve configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<ResolvedConfig> {
    let config = read_config_file(path)?;
    resolve_config(config, path.parent())
}

/// Read a single configuration file without resolving `extends`.
pub fn read_config_file(path: &Path) -> Result<LintConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        }
        .into());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
        message: format!("Failed to read config file {}: {}", path.display(), e),
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<LintConfig> {
    toml::from_str(content).map_err(|e| {
        ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        }
        .into()
    })
}

/// Merge two configurations, with the overlay taking precedence.
///
/// Rules are replaced whole by name, ignores accumulate, and the overlay's
/// parser and `default_ignores` win when set. `extends` is not merged.
pub fn merge_configs(base: LintConfig, overlay: LintConfig) -> LintConfig {
    let mut rules = base.rules;
    rules.extend(overlay.rules);

    let mut ignores = base.ignores;
    ignores.extend(overlay.ignores);

    LintConfig {
        extends: Vec::new(),
        default_ignores: overlay.default_ignores.or(base.default_ignores),
        ignores,
        parser: overlay.parser.or(base.parser),
        rules,
    }
}

/// Resolve `extends`, validate every rule and compile-check the patterns.
///
/// `base_dir` is where relative `.toml` entries in `extends` are looked up.
pub fn resolve_config(config: LintConfig, base_dir: Option<&Path>) -> Result<ResolvedConfig> {
    let mut chain = Vec::new();
    let flat = flatten(config, base_dir, &mut chain)?;

    let parser = flat.parser.unwrap_or_default();
    HeaderParser::new(&parser)?;

    for pattern in &flat.ignores {
        Regex::new(pattern).map_err(|e| ConfigError::InvalidValue {
            key: "ignores".to_string(),
            message: format!("'{}': {}", pattern, e),
        })?;
    }

    let mut rules = std::collections::BTreeMap::new();
    for (name, spec) in flat.rules {
        let rule = name
            .parse::<RuleName>()
            .map_err(|_| ConfigError::UnknownRule { name: name.clone() })?;
        rule.check_spec(&spec)
            .map_err(|message| ConfigError::InvalidValue {
                key: format!("rules.{}", name),
                message,
            })?;
        rules.insert(rule, spec);
    }

    tracing::debug!("Resolved {} rule(s)", rules.len());

    Ok(ResolvedConfig {
        default_ignores: flat.default_ignores.unwrap_or(true),
        ignores: flat.ignores,
        parser,
        rules,
    })
}

fn flatten(
    config: LintConfig,
    base_dir: Option<&Path>,
    chain: &mut Vec<PathBuf>,
) -> Result<LintConfig> {
    let mut acc = LintConfig::default();

    for entry in &config.extends {
        let base = if entry.ends_with(".toml") {
            let path = match base_dir {
                Some(dir) => dir.join(entry),
                None => PathBuf::from(entry),
            };
            let key = path.canonicalize().unwrap_or_else(|_| path.clone());
            if chain.contains(&key) {
                return Err(ConfigError::ExtendsCycle { path }.into());
            }

            tracing::debug!("Extending from file: {:?}", path);
            chain.push(key);
            let loaded = read_config_file(&path)?;
            let flat = flatten(loaded, path.parent(), chain)?;
            chain.pop();
            flat
        } else {
            tracing::debug!("Extending from preset: {}", entry);
            preset(entry)?
        };

        acc = merge_configs(acc, base);
    }

    Ok(merge_configs(acc, config))
}
