// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines the structures loaded from `headlint.toml` and the resolved form
//! the lint engine runs against.

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use crate::rules::RuleName;

/// A configuration file as written on disk.
///
/// `extends` entries are resolved first, in order, and the remaining fields
/// of this file are layered on top of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LintConfig {
    /// Presets or other config files this one builds on.
    pub extends: Vec<String>,

    /// Whether the built-in ignore patterns (merges, reverts, fixups) apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_ignores: Option<bool>,

    /// Additional regexes; matching messages are not linted.
    pub ignores: Vec<String>,

    /// Header parser settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser: Option<ParserConfig>,

    /// Rule overrides keyed by rule name.
    pub rules: BTreeMap<String, RuleSpec>,
}

/// How a commit header is split into fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Regular expression matched against the header line.
    #[serde(alias = "headerPattern")]
    pub header_pattern: String,

    /// Field names for capture groups 1..N, in order.
    #[serde(alias = "headerCorrespondence")]
    pub header_correspondence: Vec<String>,
}

impl ParserConfig {
    /// Build a parser config from a pattern and its field names.
    pub fn new(pattern: impl Into<String>, correspondence: &[&str]) -> Self {
        Self {
            header_pattern: pattern.into(),
            header_correspondence: correspondence.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// The conventional-commits header parser used when nothing overrides it.
    pub fn conventional() -> Self {
        Self::new(
            r"^(\w*)(?:\((.*)\))?!?: (.*)$",
            &["type", "scope", "subject"],
        )
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::conventional()
    }
}

/// Rule severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Severity {
    /// Level 0: the rule is not evaluated.
    Disabled,
    /// Level 1: reported, does not fail the lint.
    Warning,
    /// Level 2: reported and fails the lint.
    Error,
}

impl Severity {
    /// Get the string representation of the severity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Disabled => "off",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, String> {
        match level {
            0 => Ok(Severity::Disabled),
            1 => Ok(Severity::Warning),
            2 => Ok(Severity::Error),
            other => Err(format!("invalid severity level {} (expected 0, 1 or 2)", other)),
        }
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Disabled => 0,
            Severity::Warning => 1,
            Severity::Error => 2,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a rule's condition must hold or must not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Applicability {
    Always,
    Never,
}

impl Applicability {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Applicability::Always => "always",
            Applicability::Never => "never",
        }
    }

    /// Apply this applicability to the raw outcome of a rule's condition.
    pub fn passes(&self, condition: bool) -> bool {
        match self {
            Applicability::Always => condition,
            Applicability::Never => !condition,
        }
    }
}

impl fmt::Display for Applicability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The rule-specific parameter, the optional third tuple element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    Number(usize),
    Text(String),
    List(Vec<String>),
}

impl RuleValue {
    /// The value as a number, if it is one.
    pub fn as_number(&self) -> Option<usize> {
        match self {
            RuleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The value as a single string, if it is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RuleValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The value as a list of strings. A single string is a one-element list.
    pub fn as_list(&self) -> Option<Vec<&str>> {
        match self {
            RuleValue::Text(s) => Some(vec![s.as_str()]),
            RuleValue::List(items) => Some(items.iter().map(String::as_str).collect()),
            RuleValue::Number(_) => None,
        }
    }
}

impl fmt::Display for RuleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleValue::Number(n) => write!(f, "{}", n),
            RuleValue::Text(s) => write!(f, "{}", s),
            RuleValue::List(items) => write!(f, "{}", items.join(", ")),
        }
    }
}

/// A rule declaration: `[severity, applicability]` or
/// `[severity, applicability, value]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec {
    pub severity: Severity,
    pub applicability: Applicability,
    pub value: Option<RuleValue>,
}

impl RuleSpec {
    /// Create a rule spec without a value.
    pub fn new(severity: Severity, applicability: Applicability) -> Self {
        Self {
            severity,
            applicability,
            value: None,
        }
    }

    /// Set the rule-specific value.
    pub fn with_value(mut self, value: RuleValue) -> Self {
        self.value = Some(value);
        self
    }

    /// Whether the rule should be evaluated at all.
    pub fn is_enabled(&self) -> bool {
        self.severity != Severity::Disabled
    }
}

impl Serialize for RuleSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.value.is_some() { 3 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.severity)?;
        seq.serialize_element(&self.applicability)?;
        if let Some(ref value) = self.value {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for RuleSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RuleSpecVisitor;

        impl<'de> Visitor<'de> for RuleSpecVisitor {
            type Value = RuleSpec;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a rule tuple [level, \"always\" | \"never\", value?]")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RuleSpec, A::Error> {
                let severity: Severity = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let applicability: Applicability = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                let value: Option<RuleValue> = seq.next_element()?;

                if seq.next_element::<de::IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(4, &self));
                }

                Ok(RuleSpec {
                    severity,
                    applicability,
                    value,
                })
            }
        }

        deserializer.deserialize_seq(RuleSpecVisitor)
    }
}

/// A fully resolved configuration: presets applied, rule names checked and
/// parser settings validated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedConfig {
    /// Whether the built-in ignore patterns apply.
    pub default_ignores: bool,

    /// Additional ignore regexes.
    pub ignores: Vec<String>,

    /// Header parser settings.
    pub parser: ParserConfig,

    /// Effective rules.
    pub rules: BTreeMap<RuleName, RuleSpec>,
}

impl ResolvedConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Look up the effective spec for a rule.
    pub fn rule(&self, name: RuleName) -> Option<&RuleSpec> {
        self.rules.get(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    struct Wrapper {
        rule: RuleSpec,
    }

    #[test]
    fn test_parse_rule_spec_with_number() {
        let parsed: Wrapper = toml::from_str(r#"rule = [2, "always", 72]"#).unwrap();
        assert_eq!(parsed.rule.severity, Severity::Error);
        assert_eq!(parsed.rule.applicability, Applicability::Always);
        assert_eq!(parsed.rule.value, Some(RuleValue::Number(72)));
    }

    #[test]
    fn test_parse_rule_spec_without_value() {
        let parsed: Wrapper = toml::from_str(r#"rule = [1, "never"]"#).unwrap();
        assert_eq!(parsed.rule.severity, Severity::Warning);
        assert_eq!(parsed.rule.applicability, Applicability::Never);
        assert!(parsed.rule.value.is_none());
    }

    #[test]
    fn test_parse_rule_spec_with_list() {
        let parsed: Wrapper =
            toml::from_str(r#"rule = [2, "always", ["feat", "fix"]]"#).unwrap();
        assert_eq!(
            parsed.rule.value,
            Some(RuleValue::List(vec!["feat".to_string(), "fix".to_string()]))
        );
    }

    #[test]
    fn test_reject_bad_severity() {
        let parsed: Result<Wrapper, _> = toml::from_str(r#"rule = [3, "always"]"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_reject_bad_applicability() {
        let parsed: Result<Wrapper, _> = toml::from_str(r#"rule = [2, "sometimes"]"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_reject_short_and_long_tuples() {
        assert!(toml::from_str::<Wrapper>(r#"rule = [2]"#).is_err());
        assert!(toml::from_str::<Wrapper>(r#"rule = [2, "always", 1, 2]"#).is_err());
    }

    #[test]
    fn test_rule_spec_serializes_as_tuple() {
        let wrapper = Wrapper {
            rule: RuleSpec::new(Severity::Error, Applicability::Never)
                .with_value(RuleValue::Text(".".to_string())),
        };
        let json = serde_json::to_string(&wrapper).unwrap();
        assert_eq!(json, r#"{"rule":[2,"never","."]}"#);
    }

    #[test]
    fn test_parser_config_camel_case_aliases() {
        let parser: ParserConfig = toml::from_str(
            r#"
headerPattern = '^(\w+): (.+)$'
headerCorrespondence = ["type", "subject"]
"#,
        )
        .unwrap();
        assert_eq!(parser.header_correspondence, vec!["type", "subject"]);
    }

    #[test]
    fn test_applicability_passes() {
        assert!(Applicability::Always.passes(true));
        assert!(!Applicability::Always.passes(false));
        assert!(Applicability::Never.passes(false));
        assert!(!Applicability::Never.passes(true));
    }

    #[test]
    fn test_rule_value_as_list() {
        assert_eq!(RuleValue::Text("a".into()).as_list(), Some(vec!["a"]));
        assert_eq!(RuleValue::Number(3).as_list(), None);
    }
}
