// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Lint engine: ignores, header parsing and rule evaluation.

use crate::commit::{CommitMessage, HeaderParser};
use crate::config::{ResolvedConfig, Severity};
use crate::error::Result;
use crate::git;

use super::builtin::evaluate;
use super::ignore::Ignores;
use super::validator::{IssueKind, LintIssue, LintOutcome, HEADER_PATTERN};

/// Lint engine for commit messages.
#[derive(Debug, Clone)]
pub struct LintEngine {
    config: ResolvedConfig,
    parser: HeaderParser,
    ignores: Ignores,
}

impl LintEngine {
    /// Create a new engine, compiling the header pattern and ignores.
    pub fn new(config: ResolvedConfig) -> Result<Self> {
        let parser = HeaderParser::new(&config.parser)?;
        let ignores = Ignores::new(&config)?;

        Ok(Self {
            config,
            parser,
            ignores,
        })
    }

    /// The configuration this engine runs.
    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Lint a parsed commit message.
    ///
    /// A header that does not match the pattern yields a single
    /// pattern-mismatch error and no rule runs. Otherwise every enabled rule
    /// is evaluated and all failures are reported.
    pub fn lint(&self, message: &CommitMessage) -> LintOutcome {
        let text = message.text();
        let mut outcome = LintOutcome::new(text.clone());

        if self.ignores.is_ignored(&text) {
            tracing::debug!("Message ignored: {}", message.header);
            outcome.ignored = true;
            return outcome;
        }

        let Some(header) = self.parser.parse(&message.header) else {
            tracing::debug!("Header did not match pattern: {}", message.header);
            outcome.push(LintIssue {
                kind: IssueKind::PatternMismatch,
                rule: HEADER_PATTERN.to_string(),
                severity: Severity::Error,
                message: format!(
                    "header does not match the expected pattern {}",
                    self.parser.pattern()
                ),
                suggestion: Some("Use the form: type(scope): subject (#issue)".to_string()),
                line: Some(1),
            });
            return outcome;
        };

        for (rule, spec) in &self.config.rules {
            if let Some(issue) = evaluate(*rule, spec, message, &header) {
                tracing::debug!("Rule {} failed: {}", rule, issue.message);
                outcome.push(issue);
            }
        }

        outcome
    }

    /// Lint a commit message string.
    pub fn lint_str(&self, message: &str) -> Result<LintOutcome> {
        let parsed = CommitMessage::parse(message)?;
        Ok(self.lint(&parsed))
    }

    /// Check a specific commit by reference.
    pub fn check_commit(&self, reference: &str) -> Result<LintOutcome> {
        let message = git::get_commit_message(reference)?;
        let sha = git::resolve_commit(reference)?;
        Ok(self.lint_commit(sha, &message))
    }

    /// Check a range of commits (`from..to`).
    pub fn check_range(&self, range: &str) -> Result<Vec<LintOutcome>> {
        let commits = git::get_commit_range(range)?;
        Ok(self.lint_commits(commits))
    }

    /// Lint `(sha, message)` pairs; one bad commit does not stop the rest.
    pub fn lint_commits(&self, commits: Vec<(String, String)>) -> Vec<LintOutcome> {
        commits
            .into_iter()
            .map(|(sha, message)| self.lint_commit(sha, &message))
            .collect()
    }

    /// Lint an existing commit. An empty message is a failed outcome, not an error.
    fn lint_commit(&self, sha: String, message: &str) -> LintOutcome {
        let mut outcome = match CommitMessage::parse(message) {
            Ok(parsed) => self.lint(&parsed),
            Err(e) => {
                tracing::warn!("Commit {} has no usable message: {}", sha, e);
                let mut outcome = LintOutcome::new(String::new());
                outcome.push(LintIssue {
                    kind: IssueKind::PatternMismatch,
                    rule: HEADER_PATTERN.to_string(),
                    severity: Severity::Error,
                    message: "commit message is empty".to_string(),
                    suggestion: None,
                    line: Some(1),
                });
                outcome
            }
        };
        outcome.commit_sha = Some(sha);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{default_config, resolve_config, parse_config};

    fn project_engine() -> LintEngine {
        LintEngine::new(resolve_config(default_config(), None).unwrap()).unwrap()
    }

    #[test]
    fn test_valid_header_passes() {
        let outcome = project_engine()
            .lint_str("feat(auth): add login flow (#42)")
            .unwrap();
        assert!(outcome.is_valid());
        assert_eq!(outcome.issue_count(), 0);
    }

    #[test]
    fn test_headers_within_budgets_pass() {
        let engine = project_engine();
        let headers = [
            "feat: Add login flow (#42)",
            "fix(api): ADD X (#1)",
            "docs:   (#3)",
            "test(parser): cover 3 edge cases (#8)",
            "chore(deps): bump \"Regex\" to v1 (#15)",
            "refac(core_io): Split Reader Into Parts (#77)",
            "feat: x (#1)",
        ];

        for header in headers {
            let outcome = engine.lint_str(header).unwrap();
            assert!(outcome.is_valid(), "{} should pass: {:?}", header, outcome.errors);
            assert!(outcome.errors.is_empty());
        }
    }

    #[test]
    fn test_empty_commit_message_does_not_stop_range() {
        let outcomes = project_engine().lint_commits(vec![
            ("a1".to_string(), "feat: add x (#1)".to_string()),
            ("b2".to_string(), String::new()),
            ("c3".to_string(), "oops".to_string()),
        ]);

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].is_valid());
        assert!(outcomes[1].is_pattern_mismatch());
        assert_eq!(outcomes[1].commit_sha.as_deref(), Some("b2"));
        assert!(outcomes[2].is_pattern_mismatch());
    }

    #[test]
    fn test_full_stop_before_issue_is_mismatch() {
        let outcome = project_engine()
            .lint_str("feat(auth): add login flow.(#42)")
            .unwrap();
        assert!(outcome.is_pattern_mismatch());
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].rule, HEADER_PATTERN);
    }

    #[test]
    fn test_long_subject_reports_every_violation() {
        let outcome = project_engine()
            .lint_str(
                "feat(auth): add login flow with a very long subject that exceeds fifty characters (#42)",
            )
            .unwrap();
        assert!(!outcome.is_pattern_mismatch());
        assert!(outcome.has_issue("subject-max-length"));
        assert!(outcome.has_issue("header-max-length"));
        assert!(!outcome.is_valid());
    }

    #[test]
    fn test_capitalized_type_is_mismatch() {
        let outcome = project_engine().lint_str("Feat: add x (#1)").unwrap();
        assert!(outcome.is_pattern_mismatch());
        assert!(!outcome.has_issue("type-case"));
    }

    #[test]
    fn test_subject_full_stop() {
        let outcome = project_engine().lint_str("chore: bump deps. (#7)").unwrap();
        assert!(!outcome.is_pattern_mismatch());
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.has_issue("subject-full-stop"));
    }

    #[test]
    fn test_large_issue_number_matches() {
        let outcome = project_engine()
            .lint_str("fix: x (#99999999999999999999)")
            .unwrap();
        assert!(outcome.is_valid());
    }

    #[test]
    fn test_missing_issue_suffix_only_mismatch() {
        let outcome = project_engine().lint_str("feat: add login flow").unwrap();
        assert!(outcome.is_pattern_mismatch());
        assert_eq!(outcome.issue_count(), 1);
    }

    #[test]
    fn test_issue_suffix_overflows_header_budget() {
        let subject = "s".repeat(50);
        let message = format!("refac(persistence-layer): {} (#1234)", subject);
        let outcome = project_engine().lint_str(&message).unwrap();
        assert!(outcome.has_issue("header-max-length"));
        assert!(!outcome.has_issue("subject-max-length"));
    }

    #[test]
    fn test_inherited_warning_does_not_fail() {
        let outcome = project_engine()
            .lint_str("fix: handle timeout (#3)\nretry once")
            .unwrap();
        assert!(outcome.is_valid());
        assert!(outcome.warnings.iter().any(|w| w.rule == "body-leading-blank"));
    }

    #[test]
    fn test_merge_commit_ignored() {
        let outcome = project_engine()
            .lint_str("Merge branch 'main' into feature/login")
            .unwrap();
        assert!(outcome.ignored);
        assert!(outcome.is_valid());
    }

    #[test]
    fn test_custom_config_without_extends() {
        let config = parse_config(
            r#"
[parser]
header_pattern = '^(\w+): (.+)$'
header_correspondence = ["type", "subject"]

[rules]
"type-enum" = [1, "always", ["feat"]]
"#,
        )
        .unwrap();
        let engine = LintEngine::new(resolve_config(config, None).unwrap()).unwrap();

        let outcome = engine.lint_str("fix: anything goes").unwrap();
        assert!(outcome.is_valid());
        assert_eq!(outcome.warnings.len(), 1);
    }
}
