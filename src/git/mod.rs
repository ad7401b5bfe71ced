// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Reads commit messages by revision or range so existing history can be
//! linted, and locates the hooks directory.

mod repo;

pub use repo::{
    get_commit_message, get_commit_range, open_repo, resolve_commit, Repository,
};
