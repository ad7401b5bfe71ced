// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Messages that are skipped instead of linted.

use crate::config::ResolvedConfig;
use crate::error::{ConfigError, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Merge, revert and autosquash messages produced by git and hosting tools.
    static ref DEFAULT_IGNORES: Vec<Regex> = [
        r"(?m)^((Merge pull request)|(Merge (.*?) into (.*?)|(Merge branch (.*?)))(?:\r?\n)*$)",
        r"(?m)^(Merge tag (.*?))(?:\r?\n)*$",
        r"^(R|r)evert (.*)",
        r"^(amend|fixup|squash)!",
        r"^(Merged (.*?)(in|into) (.*)|Merged PR (.*): (.*))",
        r"^Merge remote-tracking branch(\s*)(.*)",
        r"^Automatic merge(.*)",
        r"^Auto-merged (.*?) into (.*)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect();
}

/// Compiled ignore patterns.
#[derive(Debug, Clone)]
pub struct Ignores {
    use_defaults: bool,
    custom: Vec<Regex>,
}

impl Ignores {
    /// Compile the ignore settings of a resolved configuration.
    pub fn new(config: &ResolvedConfig) -> Result<Self> {
        let custom = config
            .ignores
            .iter()
            .map(|p| {
                Regex::new(p).map_err(|e| ConfigError::InvalidValue {
                    key: "ignores".to_string(),
                    message: format!("'{}': {}", p, e),
                })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            use_defaults: config.default_ignores,
            custom,
        })
    }

    /// Whether a message should be skipped.
    ///
    /// Built-in patterns look at the header only; custom patterns see the
    /// whole message.
    pub fn is_ignored(&self, message: &str) -> bool {
        let header = message.lines().next().unwrap_or("");

        if self.use_defaults && DEFAULT_IGNORES.iter().any(|re| re.is_match(header)) {
            return true;
        }

        self.custom.iter().any(|re| re.is_match(message))
    }
}
