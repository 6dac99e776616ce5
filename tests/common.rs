#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Duration, TimeZone, Utc};
use feedlogger::core::FeedLogRepository;
use feedlogger::models::{FeedSession, FeedType};
use feedlogger::storage::SqliteStore;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn fl() -> Command {
    cargo_bin_cmd!("feedlogger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_feedlogger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Starts near midday UTC keep the local calendar date stable for the usual test timezones.
pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

pub fn session(
    id: i64,
    start: DateTime<Utc>,
    minutes: i64,
    feed_type: FeedType,
    burp: bool,
    vomit: bool,
) -> FeedSession {
    FeedSession {
        id,
        start_time: start,
        end_time: start + Duration::minutes(minutes),
        duration: minutes * 60,
        feed_type,
        burp,
        vomit,
    }
}

/// Initialize the DB and store `sessions` (given oldest first) through the library.
pub fn init_db_with_sessions(db_path: &str, sessions: Vec<FeedSession>) {
    fl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    let store = SqliteStore::open(db_path).expect("open db");
    let mut repo = FeedLogRepository::load(Box::new(store));
    for s in sessions {
        assert!(repo.append(s).is_saved());
    }
}

/// Three feeds on 2025-03-01 and one on 2025-03-02.
pub fn sample_sessions() -> Vec<FeedSession> {
    vec![
        session(1, at(2025, 3, 1, 10, 0), 20, FeedType::Breast, true, false),
        session(2, at(2025, 3, 1, 11, 30), 15, FeedType::Formula, false, true),
        session(3, at(2025, 3, 1, 13, 0), 25, FeedType::Breast, true, false),
        session(4, at(2025, 3, 2, 12, 0), 10, FeedType::Formula, false, false),
    ]
}
