// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! headlint - commit header linter
//!
//! Parses the first line of a commit message with a configurable regular
//! expression, maps its capture groups to `type`, `scope` and `subject`, and
//! evaluates a set of rules against the result.
//!
//! # Features
//!
//! - **Header Pattern**: regex-driven parsing with a checked group-to-field mapping
//! - **Rules**: length, case, enum, full-stop, emptiness and body/footer rules
//! - **Presets**: `extends` the conventional rule-set or other config files
//! - **Git Hooks**: installs a `commit-msg` hook that lints every commit
//!
//! # Example
//!
//! ```no_run
//! use headlint::config::ResolvedConfig;
//! use headlint::rules::LintEngine;
//!
//! let config = ResolvedConfig::load().unwrap();
//! let engine = LintEngine::new(config).unwrap();
//!
//! let outcome = engine.lint_str("feat(auth): add login flow (#42)").unwrap();
//! assert!(outcome.is_valid());
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod hooks;
pub mod rules;

// Re-exports for convenience
pub use config::ResolvedConfig;
pub use error::{HeadlintError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of headlint.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
