use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::storage::{SqliteStore, Store};
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database with all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_path = cfg.database.clone();

    println!("⚙️  Initializing feedlogger…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    let mut store = SqliteStore::open(&db_path)?;
    success(format!("Database initialized at {}", &db_path));

    if let Err(e) = store.record(
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    println!("🎉 feedlogger initialization completed!");
    Ok(())
}
