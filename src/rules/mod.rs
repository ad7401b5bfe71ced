// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit linting.
//!
//! This module provides the built-in rules, the case predicates they use,
//! ignore handling, and the engine that ties them to a resolved config.

mod builtin;
mod case;
mod engine;
mod ignore;
mod name;
mod validator;

pub use builtin::evaluate;
pub use case::TextCase;
pub use engine::LintEngine;
pub use ignore::Ignores;
pub use name::{RuleName, ValueKind};
pub use validator::{IssueKind, LintIssue, LintOutcome, HEADER_PATTERN};
