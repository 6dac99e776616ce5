//! Feed Log Repository: owns the stored sessions (newest first) and their
//! persistence. Every mutation rewrites the whole `feedLogs` value.

use crate::core::history::{self, DayBucket};
use crate::errors::AppError;
use crate::models::{FeedSession, UserProfile};
use crate::storage::{self, FEED_LOGS_KEY, PROFILE_KEY, Store};
use chrono::TimeZone;
use tracing::{debug, warn};

/// Outcome of a write to the persistent store.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Durability {
    Saved,
    /// The in-memory state changed but could not be written.
    Unsaved(String),
}

impl Durability {
    pub fn is_saved(&self) -> bool {
        matches!(self, Durability::Saved)
    }
}

pub struct FeedLogRepository {
    sessions: Vec<FeedSession>,
    store: Box<dyn Store>,
}

impl FeedLogRepository {
    /// Read the full collection from `store`. Missing data gives an empty
    /// log; unreadable or malformed data is logged and also gives an empty log.
    pub fn load(store: Box<dyn Store>) -> Self {
        let sessions = match storage::load_json::<Vec<FeedSession>>(store.as_ref(), FEED_LOGS_KEY) {
            Ok(Some(list)) => list,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "starting with an empty feed log");
                Vec::new()
            }
        };
        debug!(count = sessions.len(), "feed log loaded");

        Self { sessions, store }
    }

    /// Stored sessions, newest first.
    pub fn sessions(&self) -> &[FeedSession] {
        &self.sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Most recently committed session.
    pub fn latest(&self) -> Option<&FeedSession> {
        self.sessions.first()
    }

    pub fn max_id(&self) -> Option<i64> {
        self.sessions.iter().map(|s| s.id).max()
    }

    /// Prepend a committed session and persist the collection.
    pub fn append(&mut self, session: FeedSession) -> Durability {
        self.sessions.insert(0, session);
        self.persist()
    }

    /// Drop every session and persist the empty collection.
    pub fn clear(&mut self) -> Durability {
        self.sessions.clear();
        self.persist()
    }

    pub fn group_by_calendar_date<Tz: TimeZone>(&self, tz: &Tz) -> Vec<DayBucket> {
        history::group_by_calendar_date(&self.sessions, tz)
    }

    /// Stored profile, `None` when absent or unreadable.
    pub fn profile(&self) -> Option<UserProfile> {
        match storage::load_json::<UserProfile>(self.store.as_ref(), PROFILE_KEY) {
            Ok(p) => p,
            Err(e) => {
                warn!(error = %e, "ignoring stored profile");
                None
            }
        }
    }

    pub fn save_profile(&mut self, profile: &UserProfile) -> Durability {
        match storage::save_json(self.store.as_mut(), PROFILE_KEY, profile) {
            Ok(()) => Durability::Saved,
            Err(e) => unsaved(e),
        }
    }

    /// Append an audit line. Failures are logged and otherwise ignored.
    pub fn record(&mut self, operation: &str, target: &str, message: &str) {
        if let Err(e) = self.store.record(operation, target, message) {
            warn!(error = %e, operation, "failed to write internal log");
        }
    }

    fn persist(&mut self) -> Durability {
        match storage::save_json(self.store.as_mut(), FEED_LOGS_KEY, &self.sessions) {
            Ok(()) => Durability::Saved,
            Err(e) => unsaved(e),
        }
    }
}

fn unsaved(e: AppError) -> Durability {
    warn!(error = %e, "in-memory state is not durable");
    Durability::Unsaved(e.to_string())
}
