use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{fl, init_db_with_sessions, sample_sessions, setup_test_db};

#[test]
fn test_track_start_stop_save() {
    let db_path = setup_test_db("track_save");
    init_db_with_sessions(&db_path, vec![]);

    fl().args(["--db", &db_path, "track"])
        .write_stdin("start\nstop\ntype breast\nburp\nsave\nquit\n")
        .assert()
        .success()
        .stdout(contains("Feeding started at"))
        .stdout(contains("Session complete: 00:00:00"))
        .stdout(contains("Session saved: Breast Milk for 00:00:00."))
        .stdout(contains("Bye!"));

    fl().args(["--db", &db_path, "report"])
        .assert()
        .success()
        .stdout(contains("Total Sessions Logged: 1"))
        .stdout(contains("- Breast Milk Feeds: 1"))
        .stdout(contains("- Sessions without Burp: 0 time(s)"));
}

#[test]
fn test_track_save_requires_feed_type() {
    let db_path = setup_test_db("track_no_type");
    init_db_with_sessions(&db_path, vec![]);

    fl().args(["--db", &db_path, "track"])
        .write_stdin("toggle\ntoggle\nsave\nstart\nquit\n")
        .assert()
        .success()
        .stdout(contains("Select a feed type before saving"))
        .stdout(contains("Save the stopped session first"))
        .stdout(contains("The stopped session was not saved."));

    fl().args(["--db", &db_path, "report"])
        .assert()
        .success()
        .stdout(contains("Total Sessions Logged: 0"));
}

#[test]
fn test_track_warns_when_quitting_a_running_feed() {
    let db_path = setup_test_db("track_running_quit");
    init_db_with_sessions(&db_path, vec![]);

    fl().args(["--db", &db_path, "track"])
        .write_stdin("start\nstart\n")
        .assert()
        .success()
        .stdout(contains("A feed is already running."))
        .stdout(contains("A feed was still running"));
}

#[test]
fn test_track_history_paging() {
    let db_path = setup_test_db("track_history");
    init_db_with_sessions(&db_path, sample_sessions());

    fl().args(["--db", &db_path, "track"])
        .write_stdin("history\nnewer\nolder\nolder\nquit\n")
        .assert()
        .success()
        .stdout(contains("Sunday, March 2"))
        .stdout(contains("Already at the newest day."))
        .stdout(contains("Saturday, March 1"))
        .stdout(contains("Already at the oldest day."));
}

#[test]
fn test_track_clear_asks_for_confirmation() {
    let db_path = setup_test_db("track_clear");
    init_db_with_sessions(&db_path, sample_sessions());

    fl().args(["--db", &db_path, "track"])
        .write_stdin("clear\nno\nclear\ny\nhistory\nquit\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."))
        .stdout(contains("Feeding history cleared."))
        .stdout(contains("No feeding sessions logged yet."));
}

#[test]
fn test_track_unknown_command() {
    let db_path = setup_test_db("track_unknown");
    init_db_with_sessions(&db_path, vec![]);

    fl().args(["--db", &db_path, "track"])
        .write_stdin("dance\ntype juice\nquit\n")
        .assert()
        .success()
        .stdout(contains("Unknown command 'dance'"))
        .stdout(contains("Unknown feed type 'juice'"))
        .stdout(contains("Session saved").not());
}
