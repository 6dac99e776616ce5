use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::stats;
use crate::errors::AppResult;
use crate::models::FeedSession;
use crate::storage::{FEED_LOGS_KEY, SqliteStore, load_json};
use crate::ui::messages::warning;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};
use tracing::warn;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        check,
        vacuum,
        info,
    } = cmd
    {
        let mut store = SqliteStore::open(&cfg.database)?;

        //
        // 1) INFO
        //
        if *info {
            // an unreadable log is reported, never fatal
            let sessions = match load_json::<Vec<FeedSession>>(&store, FEED_LOGS_KEY) {
                Ok(list) => list.unwrap_or_default(),
                Err(e) => {
                    warn!(error = %e, "showing database info without sessions");
                    warning(format!("Stored sessions are unreadable: {}", e));
                    Vec::new()
                }
            };
            stats::print_db_info(store.pool(), &sessions)?;
        }

        //
        // 2) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = store
                .pool()
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        //
        // 3) VACUUM
        //
        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            store.pool().conn.execute_batch("VACUUM;")?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
