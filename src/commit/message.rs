// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and splitting.

use crate::error::{HeadlintError, LintError, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A footer trailer line: `Token: value`, `Token #ref` or a breaking-change note.
    static ref TRAILER_REGEX: Regex =
        Regex::new(r"^(?:BREAKING[ -]CHANGE: |[A-Za-z][\w-]*(?:: | #))").unwrap();
}

/// Git's scissors marker; everything below it is dropped by `git commit --cleanup=scissors`.
const SCISSORS: &str = "# ------------------------ >8 ------------------------";

/// A commit message split into header, body and footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    /// First line.
    pub header: String,
    /// Lines between the header and the footer.
    pub body: Option<String>,
    /// Trailing block of trailers.
    pub footer: Option<String>,
    lines: Vec<String>,
    footer_start: Option<usize>,
}

impl CommitMessage {
    /// Parse a commit message from a string.
    ///
    /// Git comment lines (`#`) and everything below a scissors line are
    /// dropped, as are leading and trailing blank lines.
    pub fn parse(message: &str) -> Result<Self> {
        let mut lines: Vec<String> = Vec::new();
        for line in message.lines() {
            if line.starts_with(SCISSORS) {
                break;
            }
            if line.starts_with('#') {
                continue;
            }
            lines.push(line.trim_end_matches('\r').to_string());
        }

        while lines.last().map(|l| l.trim().is_empty()).unwrap_or(false) {
            lines.pop();
        }
        let leading = lines.iter().take_while(|l| l.trim().is_empty()).count();
        lines.drain(..leading);

        if lines.is_empty() {
            return Err(HeadlintError::Lint(LintError::EmptyMessage));
        }

        let footer_start = find_footer_start(&lines);
        let body_end = footer_start.unwrap_or(lines.len());

        let body = lines[1..body_end]
            .join("\n")
            .trim_matches('\n')
            .to_string();
        let body = if body.trim().is_empty() {
            None
        } else {
            Some(body)
        };
        let footer = footer_start.map(|start| lines[start..].join("\n"));

        Ok(Self {
            header: lines[0].clone(),
            body,
            footer,
            lines,
            footer_start,
        })
    }

    /// Whether the line after the header is blank (true when there is no second line).
    pub fn body_has_leading_blank(&self) -> bool {
        self.lines
            .get(1)
            .map(|l| l.trim().is_empty())
            .unwrap_or(true)
    }

    /// Whether the line before the footer is blank (true when there is no footer).
    pub fn footer_has_leading_blank(&self) -> bool {
        match self.footer_start {
            Some(start) => self.lines[start - 1].trim().is_empty(),
            None => true,
        }
    }

    /// The cleaned message text.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// The footer is the earliest line after the header from which every
/// remaining non-blank line is a trailer or a continuation of one.
fn find_footer_start(lines: &[String]) -> Option<usize> {
    let mut start = None;

    for (index, line) in lines.iter().enumerate().skip(1).rev() {
        if line.trim().is_empty() {
            if start.is_some() {
                break;
            }
            continue;
        }
        if TRAILER_REGEX.is_match(line) {
            start = Some(index);
        } else if line.starts_with(char::is_whitespace) {
            continue;
        } else {
            break;
        }
    }

    start
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header_only() {
        let msg = CommitMessage::parse("feat(auth): add login flow (#42)\n").unwrap();
        assert_eq!(msg.header, "feat(auth): add login flow (#42)");
        assert!(msg.body.is_none());
        assert!(msg.footer.is_none());
        assert!(msg.body_has_leading_blank());
        assert!(msg.footer_has_leading_blank());
    }

    #[test]
    fn test_parse_body_and_footer() {
        let msg = CommitMessage::parse(
            "fix: handle timeout (#3)\n\nRetry once before giving up.\n\nReviewed-by: Kim\nRefs #3\n",
        )
        .unwrap();
        assert_eq!(msg.body.as_deref(), Some("Retry once before giving up."));
        assert_eq!(msg.footer.as_deref(), Some("Reviewed-by: Kim\nRefs #3"));
        assert!(msg.footer_has_leading_blank());
    }

    #[test]
    fn test_strips_comments_and_scissors() {
        let msg = CommitMessage::parse(
            "docs: fix typo (#5)\n# Please enter the commit message\n\n# ------------------------ >8 ------------------------\ndiff --git a/x b/x\n",
        )
        .unwrap();
        assert_eq!(msg.header, "docs: fix typo (#5)");
        assert!(msg.body.is_none());
        assert_eq!(msg.text(), "docs: fix typo (#5)");
    }

    #[test]
    fn test_missing_body_leading_blank() {
        let msg = CommitMessage::parse("fix: x (#1)\nbody right away").unwrap();
        assert!(!msg.body_has_leading_blank());
    }

    #[test]
    fn test_missing_footer_leading_blank() {
        let msg = CommitMessage::parse("fix: x (#1)\n\nsome body\nSigned-off-by: A <a@b.c>").unwrap();
        assert_eq!(msg.footer.as_deref(), Some("Signed-off-by: A <a@b.c>"));
        assert!(!msg.footer_has_leading_blank());
    }

    #[test]
    fn test_breaking_change_footer() {
        let msg =
            CommitMessage::parse("feat: drop v1 api (#9)\n\nBREAKING CHANGE: v1 is gone\n  use v2")
                .unwrap();
        assert_eq!(
            msg.footer.as_deref(),
            Some("BREAKING CHANGE: v1 is gone\n  use v2")
        );
        assert!(msg.body.is_none());
    }

    #[test]
    fn test_empty_message() {
        let result = CommitMessage::parse("# only a comment\n\n");
        assert!(matches!(
            result,
            Err(HeadlintError::Lint(LintError::EmptyMessage))
        ));
    }
}
