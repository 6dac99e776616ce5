//! Persistent Store: a key-value durable storage for the serialized log
//! collection and the optional user profile.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::errors::{AppError, AppResult};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Key holding the JSON array of stored sessions.
pub const FEED_LOGS_KEY: &str = "feedLogs";
/// Key holding the JSON user profile.
pub const PROFILE_KEY: &str = "userProfile";

pub trait Store {
    /// Raw value stored under `key`, `None` when the key was never written.
    fn load(&self, key: &str) -> AppResult<Option<String>>;

    /// Fully overwrite the value stored under `key`.
    fn save(&mut self, key: &str, value: &str) -> AppResult<()>;

    /// Append an audit line. Stores without an audit trail ignore it.
    fn record(&mut self, _operation: &str, _target: &str, _message: &str) -> AppResult<()> {
        Ok(())
    }
}

/// Load and deserialize a JSON value.
/// A malformed value is reported as `StorageRead`.
pub fn load_json<T: DeserializeOwned>(store: &dyn Store, key: &str) -> AppResult<Option<T>> {
    match store.load(key)? {
        None => Ok(None),
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| AppError::StorageRead {
                key: key.to_string(),
                reason: e.to_string(),
            }),
    }
}

pub fn save_json<T: Serialize + ?Sized>(
    store: &mut dyn Store,
    key: &str,
    value: &T,
) -> AppResult<()> {
    let raw = serde_json::to_string(value)?;
    store.save(key, &raw)
}
