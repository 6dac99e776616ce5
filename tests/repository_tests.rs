use feedlogger::core::{Durability, FeedLogRepository};
use feedlogger::models::{FeedType, UserProfile};
use feedlogger::storage::{FEED_LOGS_KEY, MemoryStore, PROFILE_KEY, SqliteStore};
use tempfile::tempdir;

mod common;
use common::{at, session};

#[test]
fn test_load_missing_key_is_empty() {
    let repo = FeedLogRepository::load(Box::new(MemoryStore::new()));
    assert!(repo.is_empty());
    assert!(repo.latest().is_none());
    assert!(repo.profile().is_none());
}

#[test]
fn test_load_malformed_json_starts_empty() {
    let store = MemoryStore::new().with_value(FEED_LOGS_KEY, "{not json");
    let mut repo = FeedLogRepository::load(Box::new(store.clone()));
    assert!(repo.is_empty());

    // the next write replaces the malformed value
    let s = session(1, at(2025, 3, 1, 12, 0), 10, FeedType::Breast, true, false);
    assert_eq!(repo.append(s), Durability::Saved);
    assert!(store.raw(FEED_LOGS_KEY).unwrap().starts_with('['));
}

#[test]
fn test_load_read_failure_starts_empty() {
    let store = MemoryStore::new();
    store.set_fail_reads(true);
    let repo = FeedLogRepository::load(Box::new(store));
    assert!(repo.is_empty());
}

#[test]
fn test_legacy_records_default_burp_and_vomit() {
    let raw = r#"[{"id":7,"startTime":"2025-03-01T12:00:00Z",
        "endTime":"2025-03-01T12:10:00Z","duration":600,"feedType":"breast"}]"#;
    let repo = FeedLogRepository::load(Box::new(MemoryStore::new().with_value(FEED_LOGS_KEY, raw)));

    let s = repo.latest().unwrap();
    assert_eq!(s.id, 7);
    assert!(!s.burp);
    assert!(!s.vomit);
    assert!(s.missed_burp());
}

#[test]
fn test_append_is_newest_first_and_survives_reload() {
    let store = MemoryStore::new();
    let mut repo = FeedLogRepository::load(Box::new(store.clone()));

    let first = session(1, at(2025, 3, 1, 10, 0), 10, FeedType::Breast, true, false);
    let second = session(2, at(2025, 3, 1, 12, 0), 10, FeedType::Formula, false, true);
    let _ = repo.append(first.clone());
    let _ = repo.append(second.clone());

    assert_eq!(repo.sessions(), &[second.clone(), first.clone()]);

    let reloaded = FeedLogRepository::load(Box::new(store));
    assert_eq!(reloaded.sessions(), &[second, first]);
    assert_eq!(reloaded.max_id(), Some(2));
}

#[test]
fn test_write_failure_reports_unsaved() {
    let store = MemoryStore::new();
    store.set_fail_writes(true);
    let mut repo = FeedLogRepository::load(Box::new(store.clone()));

    let s = session(1, at(2025, 3, 1, 12, 0), 10, FeedType::Breast, true, false);
    match repo.append(s) {
        Durability::Unsaved(reason) => assert!(reason.contains("feedLogs")),
        Durability::Saved => panic!("write should have failed"),
    }
    assert_eq!(repo.len(), 1);
    assert!(store.raw(FEED_LOGS_KEY).is_none());
}

#[test]
fn test_profile_roundtrip_and_malformed_profile() {
    let store = MemoryStore::new();
    let mut repo = FeedLogRepository::load(Box::new(store.clone()));

    let mut profile = UserProfile::default();
    profile.merge(Some("Anna".into()), None, Some("  ".into()));
    assert!(repo.save_profile(&profile).is_saved());

    let loaded = repo.profile().unwrap();
    assert_eq!(loaded.mother(), Some("Anna"));
    assert_eq!(loaded.child(), None);
    assert_eq!(loaded.age(), None);
    assert!(store.raw(PROFILE_KEY).unwrap().contains("motherName"));

    let store = MemoryStore::new().with_value(PROFILE_KEY, "42");
    let broken = FeedLogRepository::load(Box::new(store));
    assert!(broken.profile().is_none());
}

#[test]
fn test_sqlite_store_persists_between_opens() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("feeds.sqlite");
    let db_path = db_path.to_string_lossy().to_string();

    let s = session(5, at(2025, 3, 1, 12, 0), 10, FeedType::Formula, false, false);
    {
        let store = SqliteStore::open(&db_path).unwrap();
        let mut repo = FeedLogRepository::load(Box::new(store));
        assert!(repo.append(s.clone()).is_saved());
        repo.record("save", "5", "saved");
    }

    let store = SqliteStore::open(&db_path).unwrap();
    let repo = FeedLogRepository::load(Box::new(store));
    assert_eq!(repo.sessions(), &[s]);
}

#[test]
fn test_sqlite_migrations_are_idempotent() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("twice.sqlite");
    let db_path = db_path.to_string_lossy().to_string();

    SqliteStore::open(&db_path).unwrap();
    let mut store = SqliteStore::open(&db_path).unwrap();

    let applied: i64 = store
        .pool()
        .conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(applied, 2);
}
