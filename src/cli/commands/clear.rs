use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Durability;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        let mut repo = super::open_repository(cfg)?;

        if repo.is_empty() {
            info("Nothing to clear.");
            return Ok(());
        }

        let prompt = format!(
            "Clear ALL {} feeding session(s)? This action is irreversible.",
            repo.len()
        );
        if !*yes && !super::ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = repo.len();
        match repo.clear() {
            Durability::Saved => {
                repo.record("clear", "", &format!("Cleared {} session(s)", removed));
                success("Feeding history cleared.");
            }
            Durability::Unsaved(reason) => {
                return Err(AppError::StorageWrite {
                    key: crate::storage::FEED_LOGS_KEY.to_string(),
                    reason,
                });
            }
        }
    }
    Ok(())
}
