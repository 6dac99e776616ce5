use chrono::{FixedOffset, Utc};
use feedlogger::core::history::{gap_before, group_by_calendar_date};
use feedlogger::core::DayPager;
use feedlogger::models::FeedType;

mod common;
use common::{at, session};

#[test]
fn test_grouping_is_lossless_and_newest_day_first() {
    // newest first, as stored
    let sessions = vec![
        session(4, at(2025, 3, 3, 12, 0), 10, FeedType::Breast, true, false),
        session(3, at(2025, 3, 1, 20, 0), 10, FeedType::Formula, true, false),
        session(2, at(2025, 3, 1, 8, 0), 10, FeedType::Breast, true, false),
        session(1, at(2025, 2, 28, 23, 0), 10, FeedType::Breast, true, false),
    ];

    let buckets = group_by_calendar_date(&sessions, &Utc);

    let keys: Vec<String> = buckets.iter().map(|b| b.key()).collect();
    assert_eq!(keys, vec!["2025-03-03", "2025-03-01", "2025-02-28"]);
    assert_eq!(buckets[0].label, "Monday, March 3");

    let ids: Vec<i64> = buckets[1].sessions.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![3, 2]);

    let flattened: Vec<i64> = buckets
        .iter()
        .flat_map(|b| b.sessions.iter().map(|s| s.id))
        .collect();
    assert_eq!(flattened, vec![4, 3, 2, 1]);
}

#[test]
fn test_grouping_uses_given_timezone() {
    let sessions = vec![session(1, at(2025, 2, 28, 23, 0), 10, FeedType::Breast, true, false)];
    let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();

    let buckets = group_by_calendar_date(&sessions, &plus_two);
    assert_eq!(buckets[0].key(), "2025-03-01");
}

#[test]
fn test_grouping_empty_log() {
    assert!(group_by_calendar_date(&[], &Utc).is_empty());
}

#[test]
fn test_gap_before_uses_next_element() {
    let sessions = vec![
        session(3, at(2025, 3, 1, 14, 0), 30, FeedType::Breast, true, false),
        session(2, at(2025, 3, 1, 11, 0), 30, FeedType::Breast, true, false),
        session(1, at(2025, 3, 1, 8, 0), 30, FeedType::Breast, true, false),
    ];

    assert_eq!(gap_before(&sessions[0], &sessions), Some(9000));
    assert_eq!(gap_before(&sessions[1], &sessions), Some(9000));
    assert_eq!(gap_before(&sessions[2], &sessions), None);

    let stranger = session(99, at(2025, 3, 1, 20, 0), 5, FeedType::Formula, true, false);
    assert_eq!(gap_before(&stranger, &sessions), None);
}

#[test]
fn test_gap_before_overlap_is_none() {
    let sessions = vec![
        session(2, at(2025, 3, 1, 10, 15), 30, FeedType::Breast, true, false),
        session(1, at(2025, 3, 1, 10, 0), 30, FeedType::Breast, true, false),
    ];
    assert_eq!(gap_before(&sessions[0], &sessions), None);
}

#[test]
fn test_pager_edges_and_reset() {
    let mut pager = DayPager::new();
    pager.sync(3, 5);

    assert_eq!(pager.index(), 0);
    assert!(!pager.newer());
    assert!(pager.older());
    assert!(pager.older());
    assert!(!pager.older());
    assert_eq!(pager.index(), 2);
    assert!(!pager.has_older());
    assert!(pager.has_newer());

    // same log: position kept
    pager.sync(3, 5);
    assert_eq!(pager.index(), 2);

    // a new session jumps back to the newest day
    pager.sync(3, 6);
    assert_eq!(pager.index(), 0);

    pager.sync(0, 0);
    assert_eq!(pager.index(), 0);
    assert!(!pager.older());
    assert!(!pager.newer());
}
