// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::config::ResolvedConfig;
use crate::error::{ConfigError, HeadlintError, LintError, Result, ResultExt};
use std::io::{IsTerminal, Read};

use super::args::{CheckArgs, Cli, Commands, HooksAction, InitArgs, OutputFormat};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    // Commands that do not need a configuration
    match cli.effective_command() {
        Commands::Version => return run_version(),
        Commands::Init(args) => return run_init(args),
        Commands::Hooks(args) => return run_hooks(args.action),
        _ => {}
    }

    let config = load_config(&cli)?;

    match cli.effective_command() {
        Commands::Check(args) => run_check(&cli, config, args),
        Commands::Config => run_config(&cli, &config),
        Commands::Version | Commands::Init(_) | Commands::Hooks(_) => Ok(()),
    }
}

fn load_config(cli: &Cli) -> Result<ResolvedConfig> {
    if let Some(config_path) = &cli.config {
        ResolvedConfig::load_from(config_path)
    } else {
        ResolvedConfig::load()
    }
}

/// Run the check command.
fn run_check(cli: &Cli, config: ResolvedConfig, args: CheckArgs) -> Result<()> {
    use crate::rules::LintEngine;

    tracing::debug!("Running check command with args: {:?}", args);

    let engine = LintEngine::new(config)?;

    let outcomes = if let Some(ref rev) = args.rev {
        if rev.contains("..") {
            engine.check_range(rev)?
        } else {
            vec![engine.check_commit(rev)?]
        }
    } else if let Some(ref path) = args.edit {
        let message = std::fs::read_to_string(path)
            .context(format!("Failed to read {}", path.display()))?;
        vec![engine.lint_str(&message)?]
    } else if let Some(ref message) = args.message {
        vec![engine.lint_str(message)?]
    } else {
        vec![engine.lint_str(&read_stdin()?)?]
    };

    let errors: usize = outcomes.iter().map(|o| o.errors.len()).sum();
    let warnings: usize = outcomes.iter().map(|o| o.warnings.len()).sum();

    for outcome in &outcomes {
        outcome.print(cli.format);
    }

    // Determine exit status
    if errors > 0 || (cli.strict && warnings > 0) {
        Err(HeadlintError::Lint(LintError::Failed { errors, warnings }))
    } else {
        Ok(())
    }
}

fn read_stdin() -> Result<String> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(HeadlintError::WithContext {
            context: "check".to_string(),
            message: "No input: pass a message, --edit <FILE>, --rev <REV> or pipe to stdin"
                .to_string(),
        });
    }

    let mut message = String::new();
    stdin
        .read_to_string(&mut message)
        .context("Failed to read stdin")?;
    Ok(message)
}

/// Run the config command.
fn run_config(cli: &Cli, config: &ResolvedConfig) -> Result<()> {
    let rendered = match cli.format {
        Some(OutputFormat::Json) => {
            serde_json::to_string_pretty(config).context("Failed to render configuration")?
        }
        _ => toml::to_string_pretty(config).context("Failed to render configuration")?,
    };

    println!("{}", rendered);
    Ok(())
}

/// Run the hooks command.
fn run_hooks(action: HooksAction) -> Result<()> {
    use crate::hooks::HookManager;

    tracing::debug!("Running hooks command");

    let manager = HookManager::new()?;

    match action {
        HooksAction::Install {
            hook,
            force,
            binary,
        } => {
            let manager = match binary {
                Some(binary) => manager.with_binary(binary),
                None => manager,
            };
            if let Some(hook_name) = hook {
                manager.install_hook(&hook_name, force)?;
                println!("✓ Installed {} hook", hook_name);
            } else {
                manager.install_all(force)?;
                println!("✓ Installed all hooks");
            }
        }
        HooksAction::Uninstall { hook } => {
            if let Some(hook_name) = hook {
                manager.uninstall_hook(&hook_name)?;
                println!("✓ Uninstalled {} hook", hook_name);
            } else {
                manager.uninstall_all()?;
                println!("✓ Uninstalled all hooks");
            }
        }
        HooksAction::Status => {
            for (hook, installed) in manager.status()? {
                let icon = if installed { "✓" } else { "✗" };
                println!("{} {}", icon, hook);
            }
        }
    }

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("headlint {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    use crate::config::default::example_config;

    tracing::debug!("Running init command with args: {:?}", args);

    if args.path.exists() && !args.force {
        return Err(HeadlintError::Config(ConfigError::AlreadyExists { path: args.path }));
    }

    std::fs::write(&args.path, example_config()).context("Failed to write configuration")?;

    println!("✓ Created {}", args.path.display());

    Ok(())
}
