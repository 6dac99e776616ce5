use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::storage::SqliteStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let mut store = SqliteStore::open(&cfg.database)?;
        LogLogic::print_log(store.pool())?;
    }

    Ok(())
}
