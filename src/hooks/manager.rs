// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook manager for installing and managing git hooks.

use crate::error::{HeadlintError, HookError, Result};
use crate::git;
use std::fs;
use std::path::{Path, PathBuf};

use super::templates::{HookTemplate, HOOK_MARKER};

/// Manager for git hooks.
pub struct HookManager {
    hooks_dir: PathBuf,
    binary: String,
}

impl HookManager {
    /// Create a new hook manager for the current repository.
    pub fn new() -> Result<Self> {
        let repo = git::open_repo()?;
        Self::for_dir(repo.hooks_dir())
    }

    /// Create a hook manager for an explicit hooks directory.
    pub fn for_dir(hooks_dir: PathBuf) -> Result<Self> {
        // Ensure hooks directory exists
        if !hooks_dir.exists() {
            fs::create_dir_all(&hooks_dir).map_err(|e| {
                HeadlintError::Hook(HookError::InstallFailed {
                    hook: "all".to_string(),
                    message: format!("Failed to create hooks directory: {}", e),
                })
            })?;
        }

        Ok(Self {
            hooks_dir,
            binary: "headlint".to_string(),
        })
    }

    /// Set the command the hook invokes.
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Install a specific hook.
    pub fn install_hook(&self, hook_name: &str, force: bool) -> Result<()> {
        let template = parse_hook(hook_name)?;
        self.install_template(&template, force)
    }

    /// Install all hooks.
    pub fn install_all(&self, force: bool) -> Result<()> {
        for template in HookTemplate::all() {
            self.install_template(template, force)?;
        }
        Ok(())
    }

    /// Install a hook from a template.
    fn install_template(&self, template: &HookTemplate, force: bool) -> Result<()> {
        let hook_path = self.hooks_dir.join(template.filename());
        let backup_path = self
            .hooks_dir
            .join(format!("{}.backup", template.filename()));

        let foreign = hook_path.exists() && !self.is_headlint_hook(&hook_path)?;

        if foreign && !force {
            return Err(HeadlintError::Hook(HookError::AlreadyExists {
                hook: template.filename().to_string(),
            }));
        }

        // Keep a foreign hook around so uninstall can restore it
        if foreign {
            fs::rename(&hook_path, &backup_path).map_err(|e| {
                HeadlintError::Hook(HookError::InstallFailed {
                    hook: template.filename().to_string(),
                    message: format!("Failed to backup existing hook: {}", e),
                })
            })?;
        }

        let script = template.generate(&self.binary)?;
        fs::write(&hook_path, &script).map_err(|e| {
            HeadlintError::Hook(HookError::InstallFailed {
                hook: template.filename().to_string(),
                message: format!("Failed to write hook: {}", e),
            })
        })?;

        make_executable(&hook_path).map_err(|e| {
            HeadlintError::Hook(HookError::InstallFailed {
                hook: template.filename().to_string(),
                message: format!("Failed to set permissions: {}", e),
            })
        })?;

        tracing::debug!("Installed hook at {:?}", hook_path);

        Ok(())
    }

    /// Uninstall a specific hook.
    pub fn uninstall_hook(&self, hook_name: &str) -> Result<()> {
        let template = parse_hook(hook_name)?;

        let hook_path = self.hooks_dir.join(template.filename());
        let backup_path = self
            .hooks_dir
            .join(format!("{}.backup", template.filename()));

        if !hook_path.exists() {
            return Ok(()); // Nothing to uninstall
        }

        // Only remove if it's our hook
        if !self.is_headlint_hook(&hook_path)? {
            return Err(HeadlintError::Hook(HookError::RemoveFailed {
                hook: hook_name.to_string(),
                message: "Hook was not installed by headlint".to_string(),
            }));
        }

        fs::remove_file(&hook_path).map_err(|e| {
            HeadlintError::Hook(HookError::RemoveFailed {
                hook: hook_name.to_string(),
                message: format!("Failed to remove hook: {}", e),
            })
        })?;

        // Restore backup if exists
        if backup_path.exists() {
            fs::rename(&backup_path, &hook_path).map_err(|e| {
                HeadlintError::Hook(HookError::RemoveFailed {
                    hook: hook_name.to_string(),
                    message: format!("Failed to restore backup: {}", e),
                })
            })?;
        }

        Ok(())
    }

    /// Uninstall all hooks.
    pub fn uninstall_all(&self) -> Result<()> {
        for template in HookTemplate::all() {
            self.uninstall_hook(template.filename())?;
        }
        Ok(())
    }

    /// Get the status of all hooks.
    pub fn status(&self) -> Result<Vec<(String, bool)>> {
        let mut status = Vec::new();

        for template in HookTemplate::all() {
            let hook_path = self.hooks_dir.join(template.filename());
            let installed =
                hook_path.exists() && self.is_headlint_hook(&hook_path).unwrap_or(false);
            status.push((template.filename().to_string(), installed));
        }

        Ok(status)
    }

    /// Check if a hook was installed by headlint.
    fn is_headlint_hook(&self, path: &Path) -> Result<bool> {
        let content = fs::read_to_string(path).map_err(|e| {
            HeadlintError::Hook(HookError::InstallFailed {
                hook: path.display().to_string(),
                message: format!("Failed to read hook: {}", e),
            })
        })?;

        Ok(content.contains(HOOK_MARKER))
    }
}

fn parse_hook(hook_name: &str) -> Result<HookTemplate> {
    hook_name.parse::<HookTemplate>().map_err(|_| {
        HeadlintError::Hook(HookError::NotFound {
            hook: hook_name.to_string(),
        })
    })
}

#[cfg(unix)]
fn make_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manager() -> (TempDir, HookManager) {
        let dir = TempDir::new().unwrap();
        let manager = HookManager::for_dir(dir.path().join("hooks")).unwrap();
        (dir, manager)
    }

    #[test]
    fn test_install_and_uninstall() {
        let (dir, manager) = manager();
        let hook = dir.path().join("hooks").join("commit-msg");

        manager.install_hook("commit-msg", false).unwrap();
        assert!(hook.exists());
        assert_eq!(manager.status().unwrap(), vec![("commit-msg".to_string(), true)]);

        manager.uninstall_all().unwrap();
        assert!(!hook.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_installed_hook_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let (dir, manager) = manager();
        manager.install_all(false).unwrap();

        let mode = fs::metadata(dir.path().join("hooks").join("commit-msg"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o111, 0o111);
    }

    #[test]
    fn test_foreign_hook_needs_force_and_is_restored() {
        let (dir, manager) = manager();
        let hook = dir.path().join("hooks").join("commit-msg");
        fs::write(&hook, "#!/bin/sh\nexit 0\n").unwrap();

        assert!(matches!(
            manager.install_hook("commit-msg", false),
            Err(HeadlintError::Hook(HookError::AlreadyExists { .. }))
        ));

        manager.install_hook("commit-msg", true).unwrap();
        assert!(fs::read_to_string(&hook).unwrap().contains(HOOK_MARKER));

        manager.uninstall_hook("commit-msg").unwrap();
        assert_eq!(fs::read_to_string(&hook).unwrap(), "#!/bin/sh\nexit 0\n");
    }

    #[test]
    fn test_reinstall_own_hook_without_force() {
        let (_dir, manager) = manager();
        manager.install_all(false).unwrap();
        manager.install_all(false).unwrap();
    }

    #[test]
    fn test_unknown_hook() {
        let (_dir, manager) = manager();
        assert!(matches!(
            manager.install_hook("pre-push", false),
            Err(HeadlintError::Hook(HookError::NotFound { .. }))
        ));
    }

    #[test]
    fn test_custom_binary() {
        let (dir, manager) = manager();
        let manager = manager.with_binary("/opt/headlint");
        manager.install_all(false).unwrap();

        let script = fs::read_to_string(dir.path().join("hooks").join("commit-msg")).unwrap();
        assert!(script.contains("/opt/headlint check --edit"));
    }
}
