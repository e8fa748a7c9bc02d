use crate::cli::parser::Commands;
use crate::config::{Config, migrate};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info, success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: run_migrate,
        edit_config,
        editor,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- CHECK ----
        if *check {
            if !path.exists() {
                warning(format!("No configuration file at {} (defaults in use)", path.display()));
            } else {
                let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
                let missing = migrate::missing_keys(&content)?;
                if missing.is_empty() {
                    success("Configuration file is complete.");
                } else {
                    warning(format!("Missing fields: {}", missing.join(", ")));
                    info("Run `shiftrecon config --migrate` to add them.");
                }
            }
        }

        // ---- MIGRATE ----
        if *run_migrate {
            if !path.exists() {
                Config::init(Some(path))?;
            } else if !migrate::migrate_file(path)? {
                success("Configuration already up to date.");
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            edit(path, editor.as_deref());
        }
    }

    Ok(())
}

/// Editor from `$EDITOR` / `$VISUAL`, else the platform default.
fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn run_editor(editor: &str, path: &Path) -> bool {
    Command::new(editor)
        .arg(path)
        .status()
        .is_ok_and(|s| s.success())
}

fn edit(path: &Path, requested: Option<&str>) {
    let fallback = default_editor();
    let editor = requested.unwrap_or(fallback.as_str());

    if run_editor(editor, path) {
        success(format!("Configuration file edited using '{editor}'"));
        return;
    }
    if editor == fallback {
        error(format!("Failed to run editor '{editor}'"));
        return;
    }

    warning(format!("Editor '{editor}' not available, falling back to '{fallback}'"));
    if run_editor(&fallback, path) {
        success(format!("Configuration file edited using fallback '{fallback}'"));
    } else {
        error(format!("Failed to edit configuration file using fallback '{fallback}'"));
    }
}
