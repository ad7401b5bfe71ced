// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule names and the parameter each rule expects.

use serde::{Deserialize, Serialize};

use crate::config::RuleSpec;

use super::case::TextCase;

/// Every rule headlint knows how to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleName {
    HeaderMaxLength,
    HeaderMinLength,
    HeaderTrim,
    TypeEnum,
    TypeCase,
    TypeEmpty,
    TypeMaxLength,
    TypeMinLength,
    ScopeEnum,
    ScopeCase,
    ScopeEmpty,
    ScopeMaxLength,
    SubjectMaxLength,
    SubjectMinLength,
    SubjectFullStop,
    SubjectEmpty,
    SubjectCase,
    BodyLeadingBlank,
    BodyMaxLineLength,
    BodyEmpty,
    FooterLeadingBlank,
    FooterMaxLineLength,
}

/// What kind of third tuple element a rule takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// No parameter; any value given is ignored.
    None,
    /// A required non-negative integer.
    Number,
    /// A required case name or list of case names.
    Case,
    /// A required list of allowed values.
    List,
    /// An optional string.
    Text,
}

impl RuleName {
    /// Get the configuration name of the rule.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleName::HeaderMaxLength => "header-max-length",
            RuleName::HeaderMinLength => "header-min-length",
            RuleName::HeaderTrim => "header-trim",
            RuleName::TypeEnum => "type-enum",
            RuleName::TypeCase => "type-case",
            RuleName::TypeEmpty => "type-empty",
            RuleName::TypeMaxLength => "type-max-length",
            RuleName::TypeMinLength => "type-min-length",
            RuleName::ScopeEnum => "scope-enum",
            RuleName::ScopeCase => "scope-case",
            RuleName::ScopeEmpty => "scope-empty",
            RuleName::ScopeMaxLength => "scope-max-length",
            RuleName::SubjectMaxLength => "subject-max-length",
            RuleName::SubjectMinLength => "subject-min-length",
            RuleName::SubjectFullStop => "subject-full-stop",
            RuleName::SubjectEmpty => "subject-empty",
            RuleName::SubjectCase => "subject-case",
            RuleName::BodyLeadingBlank => "body-leading-blank",
            RuleName::BodyMaxLineLength => "body-max-line-length",
            RuleName::BodyEmpty => "body-empty",
            RuleName::FooterLeadingBlank => "footer-leading-blank",
            RuleName::FooterMaxLineLength => "footer-max-line-length",
        }
    }

    /// The parameter kind this rule expects.
    pub fn value_kind(&self) -> ValueKind {
        match self {
            RuleName::HeaderMaxLength
            | RuleName::HeaderMinLength
            | RuleName::TypeMaxLength
            | RuleName::TypeMinLength
            | RuleName::ScopeMaxLength
            | RuleName::SubjectMaxLength
            | RuleName::SubjectMinLength
            | RuleName::BodyMaxLineLength
            | RuleName::FooterMaxLineLength => ValueKind::Number,
            RuleName::TypeCase | RuleName::ScopeCase | RuleName::SubjectCase => ValueKind::Case,
            RuleName::TypeEnum | RuleName::ScopeEnum => ValueKind::List,
            RuleName::SubjectFullStop => ValueKind::Text,
            RuleName::HeaderTrim
            | RuleName::TypeEmpty
            | RuleName::ScopeEmpty
            | RuleName::SubjectEmpty
            | RuleName::BodyLeadingBlank
            | RuleName::BodyEmpty
            | RuleName::FooterLeadingBlank => ValueKind::None,
        }
    }

    /// Check that a spec carries the parameter this rule needs.
    ///
    /// Disabled rules are not checked, so `[0, "never"]` is enough to turn one off.
    pub fn check_spec(&self, spec: &RuleSpec) -> Result<(), String> {
        if !spec.is_enabled() {
            return Ok(());
        }
        let value = spec.value.as_ref();

        match self.value_kind() {
            ValueKind::None => Ok(()),
            ValueKind::Number => value
                .and_then(|v| v.as_number())
                .map(|_| ())
                .ok_or_else(|| "expected a number as the third element".to_string()),
            ValueKind::Text => match value {
                None => Ok(()),
                Some(v) if v.as_text().is_some() => Ok(()),
                Some(_) => Err("expected a string as the third element".to_string()),
            },
            ValueKind::List => value
                .and_then(|v| v.as_list())
                .map(|_| ())
                .ok_or_else(|| "expected a list of strings as the third element".to_string()),
            ValueKind::Case => {
                let cases = value
                    .and_then(|v| v.as_list())
                    .ok_or_else(|| "expected a case name or list of case names".to_string())?;
                if cases.is_empty() {
                    return Err("expected at least one case name".to_string());
                }
                for case in cases {
                    case.parse::<TextCase>()?;
                }
                Ok(())
            }
        }
    }

    /// Get all rule names.
    pub fn all() -> &'static [RuleName] {
        &[
            RuleName::HeaderMaxLength,
            RuleName::HeaderMinLength,
            RuleName::HeaderTrim,
            RuleName::TypeEnum,
            RuleName::TypeCase,
            RuleName::TypeEmpty,
            RuleName::TypeMaxLength,
            RuleName::TypeMinLength,
            RuleName::ScopeEnum,
            RuleName::ScopeCase,
            RuleName::ScopeEmpty,
            RuleName::ScopeMaxLength,
            RuleName::SubjectMaxLength,
            RuleName::SubjectMinLength,
            RuleName::SubjectFullStop,
            RuleName::SubjectEmpty,
            RuleName::SubjectCase,
            RuleName::BodyLeadingBlank,
            RuleName::BodyMaxLineLength,
            RuleName::BodyEmpty,
            RuleName::FooterLeadingBlank,
            RuleName::FooterMaxLineLength,
        ]
    }
}

impl std::str::FromStr for RuleName {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleName::all()
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or(())
    }
}

impl std::fmt::Display for RuleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
