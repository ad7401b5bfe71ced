// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The project configuration used when no config file is found.

use super::preset::CONVENTIONAL;
use super::schema::{Applicability, LintConfig, ParserConfig, RuleSpec, RuleValue, Severity};

/// Header shape: `type(scope): subject (#N)` or `type: subject (#N)`.
pub const PROJECT_HEADER_PATTERN: &str =
    r"^(feat|fix|refac|test|chore|docs)(?:\(([a-z0-9_-]+)\))?: (.+) \(#\d+\)$";

/// Commit types this project accepts.
pub const PROJECT_TYPES: &[&str] = &["feat", "fix", "refac", "test", "chore", "docs"];

/// The project header parser.
pub fn project_parser() -> ParserConfig {
    ParserConfig::new(PROJECT_HEADER_PATTERN, &["type", "scope", "subject"])
}

/// Get the default configuration.
pub fn default_config() -> LintConfig {
    let mut config = LintConfig {
        extends: vec![CONVENTIONAL.to_string()],
        parser: Some(project_parser()),
        ..LintConfig::default()
    };

    let error = Severity::Error;
    let rules = [
        (
            "header-max-length",
            RuleSpec::new(error, Applicability::Always).with_value(RuleValue::Number(72)),
        ),
        (
            "type-case",
            RuleSpec::new(error, Applicability::Always)
                .with_value(RuleValue::Text("lower-case".to_string())),
        ),
        (
            "subject-max-length",
            RuleSpec::new(error, Applicability::Always).with_value(RuleValue::Number(50)),
        ),
        (
            "subject-full-stop",
            RuleSpec::new(error, Applicability::Never)
                .with_value(RuleValue::Text(".".to_string())),
        ),
        (
            "type-enum",
            RuleSpec::new(error, Applicability::Always).with_value(RuleValue::List(
                PROJECT_TYPES.iter().map(|t| t.to_string()).collect(),
            )),
        ),
        // The pattern already shapes the subject; only the budgets above apply
        (
            "subject-case",
            RuleSpec::new(Severity::Disabled, Applicability::Never),
        ),
        (
            "subject-empty",
            RuleSpec::new(Severity::Disabled, Applicability::Never),
        ),
    ];
    for (name, spec) in rules {
        config.rules.insert(name.to_string(), spec);
    }

    config
}

/// Generate the config file written by `headlint init`.
pub fn example_config() -> &'static str {
    r#"# headlint configuration
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

# Base rule-sets, applied before the rules below
extends = ["@commitlint/config-conventional"]

# Skip merge, revert and fixup!/squash! messages
default_ignores = true

# Extra regexes for messages that should not be linted
ignores = []

# Header: type(scope): subject (#N)
[parser]
header_pattern = '^(feat|fix|refac|test|chore|docs)(?:\(([a-z0-9_-]+)\))?: (.+) \(#\d+\)$'
header_correspondence = ["type", "scope", "subject"]

# [level, applicability, value]
# level: 0 = off, 1 = warning, 2 = error
[rules]
"header-max-length" = [2, "always", 72]
"type-case" = [2, "always", "lower-case"]
"subject-max-length" = [2, "always", 50]
"subject-full-stop" = [2, "never", "."]
"type-enum" = [2, "always", ["feat", "fix", "refac", "test", "chore", "docs"]]

# Inherited subject rules the header pattern makes redundant
"subject-case" = [0, "never"]
"subject-empty" = [0, "never"]
"#
}
