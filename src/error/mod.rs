// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for headlint.
//!
//! Lint findings (pattern mismatches, rule violations) are not errors; they
//! are reported through [`crate::rules::LintOutcome`]. The types here cover
//! everything that stops headlint from producing an outcome at all.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for headlint operations.
#[derive(Error, Debug)]
pub enum HeadlintError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Lint errors
    #[error("Lint error: {0}")]
    Lint(#[from] LintError),

    // Hook errors
    #[error("Hook error: {0}")]
    Hook(#[from] HookError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Unknown rule: '{name}'")]
    UnknownRule { name: String },

    #[error("Unknown preset in extends: '{name}'")]
    UnknownPreset { name: String },

    #[error("Circular extends detected at {path}")]
    ExtendsCycle { path: PathBuf },

    #[error("Invalid header pattern: {message}")]
    InvalidPattern { message: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Invalid commit reference: {reference}")]
    InvalidReference { reference: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },
}

/// Errors raised while linting input, as opposed to lint findings.
#[derive(Error, Debug)]
pub enum LintError {
    #[error("Empty commit message")]
    EmptyMessage,

    #[error("{errors} error(s), {warnings} warning(s) found")]
    Failed { errors: usize, warnings: usize },
}

/// Hook-related errors.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Failed to install hook '{hook}': {message}")]
    InstallFailed { hook: String, message: String },

    #[error("Hook already exists: {hook}")]
    AlreadyExists { hook: String },

    #[error("Hook not found: {hook}")]
    NotFound { hook: String },

    #[error("Failed to remove hook '{hook}': {message}")]
    RemoveFailed { hook: String, message: String },

    #[error("Failed to render hook '{hook}': {message}")]
    RenderFailed { hook: String, message: String },
}

/// Result type alias for headlint operations.
pub type Result<T> = std::result::Result<T, HeadlintError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| HeadlintError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/path/to/headlint.toml"),
        };
        assert!(err.to_string().contains("/path/to/headlint.toml"));
    }

    #[test]
    fn test_unknown_rule_display() {
        let err = ConfigError::UnknownRule {
            name: "subject-shout".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown rule: 'subject-shout'");
    }

    #[test]
    fn test_lint_failed_display() {
        let err = LintError::Failed {
            errors: 2,
            warnings: 1,
        };
        assert!(err.to_string().contains("2 error(s)"));
        assert!(err.to_string().contains("1 warning(s)"));
    }

    #[test]
    fn test_headlint_error_from_config_error() {
        let config_err = ConfigError::UnknownPreset {
            name: "airbnb".to_string(),
        };
        let err: HeadlintError = config_err.into();
        assert!(err.to_string().contains("airbnb"));
    }

    #[test]
    fn test_result_ext_context() {
        let io: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let err = io.context("reading message").unwrap_err();
        assert_eq!(err.to_string(), "reading message: missing");
    }
}
