// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in rule-sets that `extends` can name.

use crate::error::ConfigError;

use super::schema::{Applicability, LintConfig, ParserConfig, RuleSpec, RuleValue, Severity};

/// The conventional-commits preset.
pub const CONVENTIONAL: &str = "@commitlint/config-conventional";

/// Resolve a preset by name.
pub fn preset(name: &str) -> Result<LintConfig, ConfigError> {
    match name {
        CONVENTIONAL | "conventional" | "config-conventional" => Ok(conventional()),
        _ => Err(ConfigError::UnknownPreset {
            name: name.to_string(),
        }),
    }
}

/// Names accepted by [`preset`].
pub fn preset_names() -> &'static [&'static str] {
    &[CONVENTIONAL, "conventional", "config-conventional"]
}

fn rule(level: Severity, when: Applicability, value: Option<RuleValue>) -> RuleSpec {
    RuleSpec {
        severity: level,
        applicability: when,
        value,
    }
}

fn list(items: &[&str]) -> RuleValue {
    RuleValue::List(items.iter().map(|s| s.to_string()).collect())
}

fn conventional() -> LintConfig {
    use Applicability::{Always, Never};
    use Severity::{Error, Warning};

    let rules = [
        ("body-leading-blank", rule(Warning, Always, None)),
        (
            "body-max-line-length",
            rule(Error, Always, Some(RuleValue::Number(100))),
        ),
        ("footer-leading-blank", rule(Warning, Always, None)),
        (
            "footer-max-line-length",
            rule(Error, Always, Some(RuleValue::Number(100))),
        ),
        (
            "header-max-length",
            rule(Error, Always, Some(RuleValue::Number(100))),
        ),
        ("header-trim", rule(Error, Always, None)),
        (
            "subject-case",
            rule(
                Error,
                Never,
                Some(list(&[
                    "sentence-case",
                    "start-case",
                    "pascal-case",
                    "upper-case",
                ])),
            ),
        ),
        ("subject-empty", rule(Error, Never, None)),
        (
            "subject-full-stop",
            rule(Error, Never, Some(RuleValue::Text(".".to_string()))),
        ),
        (
            "type-case",
            rule(Error, Always, Some(RuleValue::Text("lower-case".to_string()))),
        ),
        ("type-empty", rule(Error, Never, None)),
        (
            "type-enum",
            rule(
                Error,
                Always,
                Some(list(&[
                    "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert",
                    "style", "test",
                ])),
            ),
        ),
    ];

    LintConfig {
        parser: Some(ParserConfig::conventional()),
        rules: rules
            .into_iter()
            .map(|(name, spec)| (name.to_string(), spec))
            .collect(),
        ..LintConfig::default()
    }
}
