// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Lint outcome types.

use crate::cli::args::OutputFormat;
use crate::config::Severity;
use console::{style, Style};

/// Pseudo rule name reported when the header does not match the pattern.
pub const HEADER_PATTERN: &str = "header-pattern";

/// The two ways a message can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// The header did not match the configured pattern; no fields were extracted.
    PatternMismatch,
    /// The header parsed but a rule's condition did not hold.
    RuleViolation,
}

impl IssueKind {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::PatternMismatch => "pattern-mismatch",
            IssueKind::RuleViolation => "rule-violation",
        }
    }
}

/// A single lint finding.
#[derive(Debug, Clone)]
pub struct LintIssue {
    /// What kind of failure this is.
    pub kind: IssueKind,
    /// Rule name, or [`HEADER_PATTERN`] for a mismatch.
    pub rule: String,
    /// Warning or error.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    pub suggestion: Option<String>,
    /// Line number where the issue was found.
    pub line: Option<usize>,
}

impl LintIssue {
    /// Whether this issue fails the lint.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Format the issue for terminal output.
    pub fn format(&self) -> String {
        let prefix = if self.is_error() {
            style("✗").red().bold()
        } else {
            style("⚠").yellow().bold()
        };

        let code_style = if self.is_error() {
            Style::new().red()
        } else {
            Style::new().yellow()
        };

        let mut output = format!(
            "{} {} {}",
            prefix,
            self.message,
            code_style.apply_to(format!("[{}]", self.rule))
        );

        if let Some(ref suggestion) = self.suggestion {
            output.push_str(&format!(
                "\n  {} {}",
                style("→").dim(),
                style(suggestion).dim()
            ));
        }

        output
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "kind": self.kind.as_str(),
            "rule": self.rule,
            "severity": u8::from(self.severity),
            "message": self.message,
            "suggestion": self.suggestion,
            "line": self.line,
        })
    }
}

/// Result of linting one commit message.
#[derive(Debug, Clone)]
pub struct LintOutcome {
    /// The message that was linted.
    pub input: String,
    /// Commit SHA if linting an existing commit.
    pub commit_sha: Option<String>,
    /// Whether the message matched an ignore pattern and was skipped.
    pub ignored: bool,
    /// Error-level findings.
    pub errors: Vec<LintIssue>,
    /// Warning-level findings.
    pub warnings: Vec<LintIssue>,
}

impl LintOutcome {
    /// Create a new, empty outcome.
    pub fn new(input: String) -> Self {
        Self {
            input,
            commit_sha: None,
            ignored: false,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Record an issue under errors or warnings by its severity.
    pub fn push(&mut self, issue: LintIssue) {
        match issue.severity {
            Severity::Error => self.errors.push(issue),
            Severity::Warning => self.warnings.push(issue),
            Severity::Disabled => {}
        }
    }

    /// Check if the lint passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether the header failed to match the pattern.
    pub fn is_pattern_mismatch(&self) -> bool {
        self.errors
            .iter()
            .any(|e| e.kind == IssueKind::PatternMismatch)
    }

    /// Get the total number of issues.
    pub fn issue_count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// Whether a rule reported anything.
    pub fn has_issue(&self, rule: &str) -> bool {
        self.errors
            .iter()
            .chain(self.warnings.iter())
            .any(|i| i.rule == rule)
    }

    /// The header line of the input.
    pub fn header(&self) -> &str {
        self.input.lines().next().unwrap_or("")
    }

    /// Print the outcome to stdout.
    pub fn print(&self, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => println!(
                "{}",
                serde_json::to_string_pretty(&self.to_json()).unwrap_or_default()
            ),
            _ => self.print_text(),
        }
    }

    /// Print in text format.
    fn print_text(&self) {
        let status = if self.ignored {
            style("○").dim()
        } else if self.is_valid() {
            style("✓").green().bold()
        } else {
            style("✗").red().bold()
        };

        match self.commit_sha {
            Some(ref sha) => {
                let short_sha = &sha[..7.min(sha.len())];
                println!("{} {} {}", status, style(short_sha).cyan(), self.header());
            }
            None => println!("{} {}", status, self.header()),
        }

        for error in &self.errors {
            println!("  {}", error.format());
        }

        for warning in &self.warnings {
            println!("  {}", warning.format());
        }

        if self.issue_count() > 0 {
            println!("  {}", style(self.summary()).dim());
        }
    }

    /// The outcome as a JSON value.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "valid": self.is_valid(),
            "ignored": self.ignored,
            "commit": self.commit_sha,
            "input": self.input,
            "errors": self.errors.iter().map(LintIssue::to_json).collect::<Vec<_>>(),
            "warnings": self.warnings.iter().map(LintIssue::to_json).collect::<Vec<_>>(),
        })
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.ignored {
            "Ignored".to_string()
        } else if self.is_valid() {
            if self.warnings.is_empty() {
                "Valid".to_string()
            } else {
                format!("Valid ({} warnings)", self.warnings.len())
            }
        } else {
            format!(
                "Invalid ({} errors, {} warnings)",
                self.errors.len(),
                self.warnings.len()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(rule: &str, severity: Severity) -> LintIssue {
        LintIssue {
            kind: IssueKind::RuleViolation,
            rule: rule.to_string(),
            severity,
            message: "Test message".to_string(),
            suggestion: None,
            line: Some(1),
        }
    }

    #[test]
    fn test_outcome_valid() {
        let outcome = LintOutcome::new("feat: test (#1)".to_string());
        assert!(outcome.is_valid());
        assert_eq!(outcome.issue_count(), 0);
        assert_eq!(outcome.summary(), "Valid");
    }

    #[test]
    fn test_push_routes_by_severity() {
        let mut outcome = LintOutcome::new("test".to_string());
        outcome.push(issue("type-enum", Severity::Error));
        outcome.push(issue("body-leading-blank", Severity::Warning));
        outcome.push(issue("type-case", Severity::Disabled));

        assert!(!outcome.is_valid());
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.has_issue("body-leading-blank"));
        assert!(!outcome.has_issue("type-case"));
    }

    #[test]
    fn test_issue_format() {
        let mut with_hint = issue("subject-full-stop", Severity::Error);
        with_hint.suggestion = Some("Remove it".to_string());

        let formatted = with_hint.format();
        assert!(formatted.contains("subject-full-stop"));
        assert!(formatted.contains("Test message"));
        assert!(formatted.contains("Remove it"));
    }

    #[test]
    fn test_summary() {
        let mut outcome = LintOutcome::new("test".to_string());
        outcome.push(issue("warn", Severity::Warning));
        assert!(outcome.summary().contains("1 warnings"));

        outcome.push(issue("err", Severity::Error));
        assert!(outcome.summary().contains("Invalid"));
    }

    #[test]
    fn test_json_shape() {
        let mut outcome = LintOutcome::new("chore: bump deps. (#7)".to_string());
        outcome.push(issue("subject-full-stop", Severity::Error));

        let json = outcome.to_json();
        assert_eq!(json["valid"], false);
        assert_eq!(json["errors"][0]["rule"], "subject-full-stop");
        assert_eq!(json["errors"][0]["severity"], 2);
        assert_eq!(json["errors"][0]["kind"], "rule-violation");
    }
}
