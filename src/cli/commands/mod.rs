pub mod clear;
pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod profile;
pub mod report;
pub mod track;

use crate::config::Config;
use crate::core::FeedLogRepository;
use crate::errors::AppResult;
use crate::storage::SqliteStore;
use crate::ui::messages::warning;
use std::io::{self, Write};

/// Open the configured database and load the feed log from it.
pub(crate) fn open_repository(cfg: &Config) -> AppResult<FeedLogRepository> {
    let store = SqliteStore::open(&cfg.database)?;
    Ok(FeedLogRepository::load(Box::new(store)))
}

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
