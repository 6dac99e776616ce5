use crate::config::Config;
use crate::core::FeedLogRepository;
use crate::errors::AppResult;
use crate::shell;
use crate::storage::MemoryStore;
use crate::ui::messages::warning;
use tracing::warn;

/// Handle the `track` command: the interactive shell.
/// An unusable database does not stop tracking; the session then runs
/// on an in-memory store.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let repo = match super::open_repository(cfg) {
        Ok(repo) => repo,
        Err(e) => {
            warn!(error = %e, database = %cfg.database, "falling back to in-memory storage");
            warning(format!(
                "Cannot open {} ({}). Feeds recorded now will not be kept.",
                cfg.database, e
            ));
            FeedLogRepository::load(Box::new(MemoryStore::new()))
        }
    };

    shell::run(cfg, repo)
}
