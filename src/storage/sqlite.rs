use super::Store;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::{kv, log};
use crate::errors::{AppError, AppResult};

/// Store backed by the `kv_store` table of the SQLite database.
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    /// Open the database and bring the schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn pool(&mut self) -> &mut DbPool {
        &mut self.pool
    }
}

impl Store for SqliteStore {
    fn load(&self, key: &str) -> AppResult<Option<String>> {
        kv::get_value(&self.pool.conn, key).map_err(|e| AppError::StorageRead {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }

    fn save(&mut self, key: &str, value: &str) -> AppResult<()> {
        kv::put_value(&self.pool.conn, key, value).map_err(|e| AppError::StorageWrite {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }

    fn record(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        log::ttlog(&self.pool.conn, operation, target, message)
    }
}
