use chrono::Duration;
use feedlogger::core::ticker::{NoopScheduler, RecordingScheduler};
use feedlogger::core::{
    ConfirmOutcome, FeedLogRepository, FeedTracker, ManualClock, SessionState, StartOutcome,
    StopOutcome, TickerKind, ToggleOutcome,
};
use feedlogger::models::FeedType;
use feedlogger::storage::{FEED_LOGS_KEY, MemoryStore};

mod common;
use common::{at, session};

struct Harness {
    tracker: FeedTracker,
    clock: ManualClock,
    scheduler: RecordingScheduler,
    store: MemoryStore,
}

fn harness_with(store: MemoryStore) -> Harness {
    let clock = ManualClock::new(at(2025, 3, 1, 12, 0));
    let scheduler = RecordingScheduler::new();
    let repo = FeedLogRepository::load(Box::new(store.clone()));
    let tracker = FeedTracker::new(repo, Box::new(clock.clone()), Box::new(scheduler.clone()));
    Harness {
        tracker,
        clock,
        scheduler,
        store,
    }
}

fn harness() -> Harness {
    harness_with(MemoryStore::new())
}

#[test]
fn test_fresh_tracker_is_idle_without_ticker() {
    let h = harness();
    assert_eq!(h.tracker.state(), &SessionState::Idle);
    assert_eq!(h.tracker.since_last_feed_seconds(), 0);
    assert!(h.scheduler.active().is_empty());
}

#[test]
fn test_start_runs_feed_ticker() {
    let mut h = harness();
    let outcome = h.tracker.start();

    assert_eq!(outcome, StartOutcome::Started(at(2025, 3, 1, 12, 0)));
    assert!(h.tracker.is_feeding());
    assert_eq!(h.tracker.elapsed_seconds(), 0);
    assert_eq!(h.scheduler.active(), vec![TickerKind::FeedElapsed]);
    assert_eq!(h.tracker.start(), StartOutcome::AlreadyRunning);
}

#[test]
fn test_tick_recomputes_elapsed_from_clock() {
    let mut h = harness();
    let _ = h.tracker.start();

    h.clock.advance(Duration::seconds(75));
    assert!(h.tracker.tick(TickerKind::FeedElapsed));
    assert_eq!(h.tracker.elapsed_seconds(), 75);

    // a late tick of the wrong kind changes nothing
    assert!(!h.tracker.tick(TickerKind::SinceLastFeed));
    assert_eq!(h.tracker.elapsed_seconds(), 75);
}

#[test]
fn test_stop_cancels_ticker_and_floors_duration() {
    let mut h = harness();
    let _ = h.tracker.start();
    h.clock.advance(Duration::milliseconds(90_999));

    let pending = match h.tracker.stop() {
        StopOutcome::Stopped(p) => p,
        other => panic!("unexpected {other:?}"),
    };

    assert_eq!(pending.duration, 90);
    assert_eq!(pending.id, h.clock_now_millis());
    assert!(h.scheduler.active().is_empty());
    assert!(!h.tracker.is_feeding());
    assert!(h.tracker.draft().is_some());
    assert_eq!(h.tracker.stop(), StopOutcome::NotRunning);
}

impl Harness {
    fn clock_now_millis(&self) -> i64 {
        use feedlogger::core::Clock;
        self.clock.now().timestamp_millis()
    }
}

#[test]
fn test_start_rejected_while_awaiting_annotation() {
    let mut h = harness();
    let _ = h.tracker.start();
    let _ = h.tracker.stop();

    assert_eq!(h.tracker.start(), StartOutcome::AwaitingAnnotation);
    assert_eq!(h.tracker.toggle(), ToggleOutcome::Rejected);
    assert!(h.tracker.draft().is_some());
}

#[test]
fn test_confirm_requires_feed_type() {
    let mut h = harness();
    let _ = h.tracker.start();
    let _ = h.tracker.stop();

    assert_eq!(h.tracker.confirm(), ConfirmOutcome::MissingFeedType);
    assert!(h.tracker.draft().is_some());
    assert!(h.tracker.repository().is_empty());
    assert!(h.store.raw(FEED_LOGS_KEY).is_none());
}

#[test]
fn test_confirm_commits_and_persists() {
    let mut h = harness();
    let _ = h.tracker.start();
    h.clock.advance(Duration::minutes(12));
    let _ = h.tracker.stop();

    assert!(h.tracker.select_feed_type(FeedType::Formula));
    assert_eq!(h.tracker.toggle_burp(), Some(true));
    assert_eq!(h.tracker.toggle_vomit(), Some(true));
    assert_eq!(h.tracker.toggle_vomit(), Some(false));

    let session = match h.tracker.confirm() {
        ConfirmOutcome::Committed {
            session,
            durability,
        } => {
            assert!(durability.is_saved());
            session
        }
        other => panic!("unexpected {other:?}"),
    };

    assert_eq!(session.duration, 720);
    assert_eq!(session.feed_type, FeedType::Formula);
    assert!(session.burp);
    assert!(!session.vomit);
    assert_eq!(h.tracker.state(), &SessionState::Idle);
    assert_eq!(h.tracker.repository().latest(), Some(&session));
    assert!(h.store.raw(FEED_LOGS_KEY).unwrap().contains("\"feedType\":\"formula\""));
    assert_eq!(h.store.audit_operations(), vec!["start", "stop", "save"]);

    // back to idle with history: the since-last-feed ticker runs
    assert_eq!(h.scheduler.active(), vec![TickerKind::SinceLastFeed]);
    assert_eq!(h.tracker.since_last_feed_seconds(), 0);
}

#[test]
fn test_annotations_ignored_outside_pending() {
    let mut h = harness();
    assert!(!h.tracker.select_feed_type(FeedType::Breast));
    assert_eq!(h.tracker.toggle_burp(), None);
    assert_eq!(h.tracker.toggle_vomit(), None);
    assert_eq!(h.tracker.confirm(), ConfirmOutcome::NothingPending);
}

#[test]
fn test_since_last_feed_tracks_newest_session() {
    let newest = session(2, at(2025, 3, 1, 11, 0), 30, FeedType::Breast, true, false);
    let older = session(1, at(2025, 3, 1, 8, 0), 30, FeedType::Formula, true, false);
    let raw = serde_json::to_string(&vec![newest, older]).unwrap();
    let mut h = harness_with(MemoryStore::new().with_value(FEED_LOGS_KEY, &raw));

    // newest ended 11:30, clock is at 12:00
    assert_eq!(h.tracker.since_last_feed_seconds(), 1800);
    assert_eq!(h.scheduler.active(), vec![TickerKind::SinceLastFeed]);

    h.clock.advance(Duration::seconds(61));
    assert!(h.tracker.tick(TickerKind::SinceLastFeed));
    assert_eq!(h.tracker.since_last_feed_seconds(), 1861);

    // starting a feed swaps the tickers
    let _ = h.tracker.start();
    assert_eq!(h.scheduler.active(), vec![TickerKind::FeedElapsed]);
}

#[test]
fn test_ids_are_unique_within_same_millisecond() {
    let mut h = harness();
    let mut ids = Vec::new();

    for _ in 0..3 {
        let _ = h.tracker.start();
        match h.tracker.stop() {
            StopOutcome::Stopped(p) => ids.push(p.id),
            other => panic!("unexpected {other:?}"),
        }
        h.tracker.select_feed_type(FeedType::Breast);
        let _ = h.tracker.confirm();
    }

    assert_eq!(ids[1], ids[0] + 1);
    assert_eq!(ids[2], ids[0] + 2);
}

#[test]
fn test_ids_skip_past_stored_ids() {
    let stored = session(i64::MAX / 2, at(2025, 3, 1, 11, 0), 10, FeedType::Breast, true, false);
    let raw = serde_json::to_string(&vec![stored]).unwrap();
    let mut h = harness_with(MemoryStore::new().with_value(FEED_LOGS_KEY, &raw));

    let _ = h.tracker.start();
    match h.tracker.stop() {
        StopOutcome::Stopped(p) => assert_eq!(p.id, i64::MAX / 2 + 1),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_clear_resets_history_and_idle_ticker() {
    let mut h = harness();
    let _ = h.tracker.start();
    let _ = h.tracker.stop();
    h.tracker.select_feed_type(FeedType::Breast);
    let _ = h.tracker.confirm();
    h.clock.advance(Duration::minutes(5));
    h.tracker.tick(TickerKind::SinceLastFeed);
    assert_eq!(h.tracker.since_last_feed_seconds(), 300);

    assert!(h.tracker.clear().is_saved());

    assert!(h.tracker.repository().is_empty());
    assert_eq!(h.tracker.since_last_feed_seconds(), 0);
    assert!(h.scheduler.active().is_empty());
    assert_eq!(h.store.raw(FEED_LOGS_KEY).as_deref(), Some("[]"));
}

#[test]
fn test_clear_keeps_running_feed() {
    let mut h = harness();
    let _ = h.tracker.start();

    let _ = h.tracker.clear();

    assert!(h.tracker.is_feeding());
    assert_eq!(h.scheduler.active(), vec![TickerKind::FeedElapsed]);
}

#[test]
fn test_write_failure_keeps_session_in_memory() {
    let mut h = harness();
    h.store.set_fail_writes(true);
    let _ = h.tracker.start();
    let _ = h.tracker.stop();
    h.tracker.select_feed_type(FeedType::Breast);

    match h.tracker.confirm() {
        ConfirmOutcome::Committed { durability, .. } => assert!(!durability.is_saved()),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(h.tracker.repository().len(), 1);
    assert!(h.store.raw(FEED_LOGS_KEY).is_none());
}

#[test]
fn test_toggle_starts_and_stops() {
    let mut h = harness();
    assert!(matches!(h.tracker.toggle(), ToggleOutcome::Started(_)));
    h.clock.advance(Duration::seconds(3));
    match h.tracker.toggle() {
        ToggleOutcome::Stopped(p) => assert_eq!(p.duration, 3),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(h.scheduler.started(), vec![TickerKind::FeedElapsed]);
}

#[test]
fn test_noop_scheduler_still_tracks_state() {
    let clock = ManualClock::new(at(2025, 3, 1, 12, 0));
    let repo = FeedLogRepository::load(Box::new(MemoryStore::new()));
    let mut tracker = FeedTracker::new(repo, Box::new(clock.clone()), Box::new(NoopScheduler));

    let _ = tracker.start();
    assert_eq!(tracker.active_ticker(), Some(TickerKind::FeedElapsed));
    clock.advance(Duration::seconds(42));
    assert!(tracker.tick(TickerKind::FeedElapsed));
    assert_eq!(tracker.elapsed_seconds(), 42);
}
