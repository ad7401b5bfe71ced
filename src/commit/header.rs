// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Regex-driven header parsing.

use crate::config::ParserConfig;
use crate::error::ConfigError;
use regex::Regex;

/// A semantic field a capture group can be mapped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    Type,
    Scope,
    Subject,
}

impl std::str::FromStr for HeaderField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "type" => Ok(HeaderField::Type),
            "scope" => Ok(HeaderField::Scope),
            "subject" => Ok(HeaderField::Subject),
            _ => Err(()),
        }
    }
}

/// Fields extracted from a header that matched the pattern.
///
/// Groups that did not participate in the match, or matched the empty
/// string, are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedHeader {
    pub commit_type: Option<String>,
    pub scope: Option<String>,
    pub subject: Option<String>,
}

/// A compiled header pattern plus its group-to-field mapping.
#[derive(Debug, Clone)]
pub struct HeaderParser {
    regex: Regex,
    fields: Vec<HeaderField>,
}

impl HeaderParser {
    /// Compile a parser, checking the correspondence against the pattern.
    pub fn new(config: &ParserConfig) -> Result<Self, ConfigError> {
        let regex =
            Regex::new(&config.header_pattern).map_err(|e| ConfigError::InvalidPattern {
                message: e.to_string(),
            })?;

        // captures_len counts the implicit whole-match group
        let groups = regex.captures_len() - 1;
        if config.header_correspondence.len() != groups {
            return Err(ConfigError::InvalidValue {
                key: "parser.header_correspondence".to_string(),
                message: format!(
                    "{} field name(s) given but the header pattern has {} capture group(s)",
                    config.header_correspondence.len(),
                    groups
                ),
            });
        }

        let mut fields = Vec::with_capacity(groups);
        for name in &config.header_correspondence {
            let field = name
                .parse::<HeaderField>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "parser.header_correspondence".to_string(),
                    message: format!(
                        "unknown field '{}' (expected type, scope or subject)",
                        name
                    ),
                })?;
            if fields.contains(&field) {
                return Err(ConfigError::InvalidValue {
                    key: "parser.header_correspondence".to_string(),
                    message: format!("field '{}' listed more than once", name),
                });
            }
            fields.push(field);
        }

        Ok(Self { regex, fields })
    }

    /// Parse a header line. Returns `None` when the pattern does not match.
    pub fn parse(&self, header: &str) -> Option<ParsedHeader> {
        let captures = self.regex.captures(header)?;
        let mut parsed = ParsedHeader::default();

        for (index, field) in self.fields.iter().enumerate() {
            let value = captures
                .get(index + 1)
                .map(|m| m.as_str())
                .filter(|s| !s.is_empty())
                .map(str::to_string);

            match field {
                HeaderField::Type => parsed.commit_type = value,
                HeaderField::Scope => parsed.scope = value,
                HeaderField::Subject => parsed.subject = value,
            }
        }

        Some(parsed)
    }

    /// The pattern source.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default::project_parser;

    fn project() -> HeaderParser {
        HeaderParser::new(&project_parser()).unwrap()
    }

    #[test]
    fn test_parse_with_scope() {
        let parsed = project().parse("feat(auth): add login flow (#42)").unwrap();
        assert_eq!(parsed.commit_type.as_deref(), Some("feat"));
        assert_eq!(parsed.scope.as_deref(), Some("auth"));
        assert_eq!(parsed.subject.as_deref(), Some("add login flow"));
    }

    #[test]
    fn test_parse_without_scope() {
        let parsed = project().parse("chore: bump deps. (#7)").unwrap();
        assert_eq!(parsed.commit_type.as_deref(), Some("chore"));
        assert!(parsed.scope.is_none());
        assert_eq!(parsed.subject.as_deref(), Some("bump deps."));
    }

    #[test]
    fn test_missing_space_before_issue_is_mismatch() {
        assert!(project().parse("feat(auth): add login flow.(#42)").is_none());
    }

    #[test]
    fn test_missing_issue_suffix_is_mismatch() {
        assert!(project().parse("feat(auth): add login flow").is_none());
    }

    #[test]
    fn test_capitalized_type_is_mismatch() {
        assert!(project().parse("Feat: add x (#1)").is_none());
    }

    #[test]
    fn test_uppercase_scope_is_mismatch() {
        assert!(project().parse("fix(Auth): x (#1)").is_none());
    }

    #[test]
    fn test_issue_digits_unbounded() {
        let parsed = project().parse("fix: x (#99999999999999999999)").unwrap();
        assert_eq!(parsed.subject.as_deref(), Some("x"));
    }

    #[test]
    fn test_correspondence_length_must_match_groups() {
        let config = ParserConfig::new(r"^(\w+): (.+)$", &["type", "scope", "subject"]);
        let err = HeaderParser::new(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let config = ParserConfig::new(r"^(\w+): (.+)$", &["type", "ticket"]);
        assert!(HeaderParser::new(&config).is_err());
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let config = ParserConfig::new(r"^(\w+", &["type"]);
        assert!(matches!(
            HeaderParser::new(&config),
            Err(ConfigError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_conventional_empty_type_is_none() {
        let parser = HeaderParser::new(&ParserConfig::conventional()).unwrap();
        let parsed = parser.parse(": add thing").unwrap();
        assert!(parsed.commit_type.is_none());
        assert_eq!(parsed.subject.as_deref(), Some("add thing"));
    }
}
