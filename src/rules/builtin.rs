// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in rules.
//!
//! Every rule is a predicate over a message whose header already matched
//! the pattern. `always` requires the predicate to hold, `never` requires it
//! not to. Rules over a field the header did not provide pass.

use crate::commit::{CommitMessage, ParsedHeader};
use crate::config::{Applicability, RuleSpec};

use super::case::TextCase;
use super::name::RuleName;
use super::validator::{IssueKind, LintIssue};

/// Evaluate one rule. Returns an issue when the rule fails.
pub fn evaluate(
    rule: RuleName,
    spec: &RuleSpec,
    message: &CommitMessage,
    header: &ParsedHeader,
) -> Option<LintIssue> {
    if !spec.is_enabled() {
        return None;
    }

    let finding = match rule {
        RuleName::HeaderMaxLength => max_length("header", Some(&message.header), spec),
        RuleName::HeaderMinLength => min_length("header", Some(&message.header), spec),
        RuleName::HeaderTrim => check_header_trim(&message.header, spec),
        RuleName::TypeEnum => enum_of("type", header.commit_type.as_deref(), spec),
        RuleName::TypeCase => case_of("type", header.commit_type.as_deref(), spec),
        RuleName::TypeEmpty => empty("type", header.commit_type.as_deref(), spec),
        RuleName::TypeMaxLength => max_length("type", header.commit_type.as_deref(), spec),
        RuleName::TypeMinLength => min_length("type", header.commit_type.as_deref(), spec),
        RuleName::ScopeEnum => check_scope_enum(header.scope.as_deref(), spec),
        RuleName::ScopeCase => check_scope_case(header.scope.as_deref(), spec),
        RuleName::ScopeEmpty => empty("scope", header.scope.as_deref(), spec),
        RuleName::ScopeMaxLength => max_length("scope", header.scope.as_deref(), spec),
        RuleName::SubjectMaxLength => max_length("subject", header.subject.as_deref(), spec),
        RuleName::SubjectMinLength => min_length("subject", header.subject.as_deref(), spec),
        RuleName::SubjectFullStop => check_subject_full_stop(header.subject.as_deref(), spec),
        RuleName::SubjectEmpty => empty("subject", header.subject.as_deref(), spec),
        RuleName::SubjectCase => case_of("subject", header.subject.as_deref(), spec),
        RuleName::BodyLeadingBlank => leading_blank(
            "body",
            message.body.is_some(),
            message.body_has_leading_blank(),
            spec,
        ),
        RuleName::BodyMaxLineLength => max_line_length("body", message.body.as_deref(), spec),
        RuleName::BodyEmpty => empty("body", message.body.as_deref(), spec),
        RuleName::FooterLeadingBlank => leading_blank(
            "footer",
            message.footer.is_some(),
            message.footer_has_leading_blank(),
            spec,
        ),
        RuleName::FooterMaxLineLength => {
            max_line_length("footer", message.footer.as_deref(), spec)
        }
    }?;

    Some(LintIssue {
        kind: IssueKind::RuleViolation,
        rule: rule.as_str().to_string(),
        severity: spec.severity,
        message: finding.message,
        suggestion: finding.suggestion,
        line: Some(finding.line),
    })
}

/// What a failing rule reports, before severity and name are attached.
struct Finding {
    message: String,
    suggestion: Option<String>,
    line: usize,
}

impl Finding {
    fn new(message: String) -> Self {
        Self {
            message,
            suggestion: None,
            line: 1,
        }
    }

    fn suggest(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }
}

fn must(when: Applicability) -> &'static str {
    match when {
        Applicability::Always => "must",
        Applicability::Never => "must not",
    }
}

fn number(spec: &RuleSpec) -> Option<usize> {
    spec.value.as_ref().and_then(|v| v.as_number())
}

fn cases(spec: &RuleSpec) -> Vec<TextCase> {
    spec.value
        .as_ref()
        .and_then(|v| v.as_list())
        .unwrap_or_default()
        .into_iter()
        .filter_map(|c| c.parse().ok())
        .collect()
}

fn case_names(cases: &[TextCase]) -> String {
    cases
        .iter()
        .map(TextCase::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn max_length(field: &str, value: Option<&str>, spec: &RuleSpec) -> Option<Finding> {
    let value = value?;
    let max = number(spec)?;
    let len = value.chars().count();

    if spec.applicability.passes(len <= max) {
        return None;
    }

    Some(
        Finding::new(format!(
            "{} {} be longer than {} characters, current length is {}",
            field,
            match spec.applicability {
                Applicability::Always => "must not",
                Applicability::Never => "must",
            },
            max,
            len
        ))
        .suggest(format!("Shorten the {} to {} characters or less", field, max)),
    )
}

fn min_length(field: &str, value: Option<&str>, spec: &RuleSpec) -> Option<Finding> {
    let value = value?;
    let min = number(spec)?;
    let len = value.chars().count();

    if spec.applicability.passes(len >= min) {
        return None;
    }

    Some(
        Finding::new(format!(
            "{} {} be at least {} characters, current length is {}",
            field,
            must(spec.applicability),
            min,
            len
        ))
        .suggest(format!("Add more detail to the {}", field)),
    )
}

fn max_line_length(field: &str, value: Option<&str>, spec: &RuleSpec) -> Option<Finding> {
    let value = value?;
    let max = number(spec)?;
    let longest = value.lines().map(|l| l.chars().count()).max().unwrap_or(0);

    if spec.applicability.passes(longest <= max) {
        return None;
    }

    Some(
        Finding::new(format!(
            "{}'s lines {} be longer than {} characters",
            field,
            match spec.applicability {
                Applicability::Always => "must not",
                Applicability::Never => "must",
            },
            max
        ))
        .suggest(format!("Wrap {} lines at {} characters", field, max)),
    )
}

fn empty(field: &str, value: Option<&str>, spec: &RuleSpec) -> Option<Finding> {
    let is_empty = value.map(|v| v.trim().is_empty()).unwrap_or(true);

    if spec.applicability.passes(is_empty) {
        return None;
    }

    Some(Finding::new(format!(
        "{} {} be empty",
        field,
        must(spec.applicability)
    )))
}

fn enum_of(field: &str, value: Option<&str>, spec: &RuleSpec) -> Option<Finding> {
    let value = value?;
    let allowed = spec.value.as_ref().and_then(|v| v.as_list())?;

    if spec.applicability.passes(allowed.contains(&value)) {
        return None;
    }

    Some(
        Finding::new(format!(
            "{} {} be one of [{}]",
            field,
            must(spec.applicability),
            allowed.join(", ")
        ))
        .suggest(format!("'{}' is not accepted here", value)),
    )
}

fn case_of(field: &str, value: Option<&str>, spec: &RuleSpec) -> Option<Finding> {
    let value = value?;
    let cases = cases(spec);
    let matched = cases.iter().any(|c| c.matches(value));

    if spec.applicability.passes(matched) {
        return None;
    }

    Some(Finding::new(format!(
        "{} {} be {}",
        field,
        must(spec.applicability),
        case_names(&cases)
    )))
}

fn leading_blank(
    field: &str,
    present: bool,
    has_blank: bool,
    spec: &RuleSpec,
) -> Option<Finding> {
    if !present || spec.applicability.passes(has_blank) {
        return None;
    }

    Some(
        Finding::new(format!(
            "{} {} have a leading blank line",
            field,
            must(spec.applicability)
        ))
        .at_line(2),
    )
}

/// Check that the header has no surrounding whitespace.
fn check_header_trim(header: &str, spec: &RuleSpec) -> Option<Finding> {
    let trimmed = header.trim() == header;

    if spec.applicability.passes(trimmed) {
        return None;
    }

    Some(
        Finding::new(format!(
            "header {} have leading or trailing whitespace",
            match spec.applicability {
                Applicability::Always => "must not",
                Applicability::Never => "must",
            }
        ))
        .suggest("Remove whitespace around the header"),
    )
}

/// Check every scope in a `,` or `/` separated list against the allowed values.
fn check_scope_enum(scope: Option<&str>, spec: &RuleSpec) -> Option<Finding> {
    let scope = scope?;
    let allowed = spec.value.as_ref().and_then(|v| v.as_list())?;
    let all_allowed = scope
        .split([',', '/'])
        .map(str::trim)
        .all(|s| allowed.contains(&s));

    if spec.applicability.passes(all_allowed) {
        return None;
    }

    Some(Finding::new(format!(
        "scope {} be one of [{}]",
        must(spec.applicability),
        allowed.join(", ")
    )))
}

fn check_scope_case(scope: Option<&str>, spec: &RuleSpec) -> Option<Finding> {
    let scope = scope?;
    let cases = cases(spec);
    let matched = scope
        .split([',', '/'])
        .map(str::trim)
        .all(|s| cases.iter().any(|c| c.matches(s)));

    if spec.applicability.passes(matched) {
        return None;
    }

    Some(Finding::new(format!(
        "scope {} be {}",
        must(spec.applicability),
        case_names(&cases)
    )))
}

/// Check the subject's trailing character.
fn check_subject_full_stop(subject: Option<&str>, spec: &RuleSpec) -> Option<Finding> {
    let subject = subject?;
    let stop = spec
        .value
        .as_ref()
        .and_then(|v| v.as_text())
        .unwrap_or(".");
    let ends = subject.ends_with(stop);

    if spec.applicability.passes(ends) {
        return None;
    }

    Some(match spec.applicability {
        Applicability::Never => Finding::new(format!("subject may not end with '{}'", stop))
            .suggest(format!("Remove the trailing '{}'", stop)),
        Applicability::Always => Finding::new(format!("subject must end with '{}'", stop)),
    })
}
