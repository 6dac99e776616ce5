use crate::config::Config;
use crate::errors::AppResult;

use crate::cli::parser::Commands;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            if run_editor(&editor_to_use, &path) {
                println!(
                    "✅ Configuration file edited successfully using '{}'",
                    editor_to_use
                );
            } else {
                eprintln!(
                    "⚠️  Editor '{}' not available, falling back to '{}'",
                    editor_to_use, default_editor
                );

                if run_editor(&default_editor, &path) {
                    println!(
                        "✅ Configuration file edited successfully using fallback '{}'",
                        default_editor
                    );
                } else {
                    eprintln!(
                        "❌ Failed to edit configuration file using fallback '{}'",
                        default_editor
                    );
                }
            }

            // the edited file must still parse
            Config::load()?;
        }
    }

    Ok(())
}

fn run_editor(editor: &str, path: &std::path::Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}
