// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook script templates.

use crate::error::{HookError, Result};
use handlebars::{no_escape, Handlebars};
use serde::Serialize;

/// Marker written into every generated script, used to recognise our hooks.
pub const HOOK_MARKER: &str = "headlint Git Hook";

const COMMIT_MSG_TEMPLATE: &str = r#"#!/bin/sh
# {{marker}}
# Generated by headlint v{{version}}
#
# Lints the commit message before the commit is created.
# Remove with: headlint hooks uninstall

{{binary}} check --edit "$1"
"#;

/// Git hooks headlint can install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookTemplate {
    CommitMsg,
}

#[derive(Serialize)]
struct HookContext<'a> {
    marker: &'a str,
    version: &'a str,
    binary: &'a str,
}

impl HookTemplate {
    /// The hook's file name inside the hooks directory.
    pub fn filename(&self) -> &'static str {
        match self {
            HookTemplate::CommitMsg => "commit-msg",
        }
    }

    /// Get all hook templates.
    pub fn all() -> &'static [HookTemplate] {
        &[HookTemplate::CommitMsg]
    }

    /// Render the hook script, invoking `binary` to lint.
    pub fn generate(&self, binary: &str) -> Result<String> {
        let source = match self {
            HookTemplate::CommitMsg => COMMIT_MSG_TEMPLATE,
        };

        let mut registry = Handlebars::new();
        registry.register_escape_fn(no_escape);
        registry.set_strict_mode(true);

        let context = HookContext {
            marker: HOOK_MARKER,
            version: crate::version::VERSION,
            binary,
        };

        registry.render_template(source, &context).map_err(|e| {
            HookError::RenderFailed {
                hook: self.filename().to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }
}

impl std::str::FromStr for HookTemplate {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "commit-msg" | "commit_msg" => Ok(HookTemplate::CommitMsg),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_msg_script() {
        let script = HookTemplate::CommitMsg.generate("/usr/local/bin/headlint").unwrap();
        assert!(script.starts_with("#!/bin/sh\n"));
        assert!(script.contains(HOOK_MARKER));
        assert!(script.contains("/usr/local/bin/headlint check --edit \"$1\""));
        assert!(script.contains(crate::version::VERSION));
    }

    #[test]
    fn test_binary_path_not_escaped() {
        let script = HookTemplate::CommitMsg.generate("a&b").unwrap();
        assert!(script.contains("a&b check"));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("commit-msg".parse::<HookTemplate>(), Ok(HookTemplate::CommitMsg));
        assert!("pre-push".parse::<HookTemplate>().is_err());
    }
}
