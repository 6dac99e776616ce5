use feedlogger::core::session::TrackerView;
use feedlogger::ui::views::live_line;

fn view(is_feeding: bool, elapsed: i64, since: i64) -> TrackerView {
    TrackerView {
        is_feeding,
        elapsed_seconds: elapsed,
        since_last_feed_seconds: since,
        draft: None,
    }
}

#[test]
fn test_live_line_while_feeding() {
    let line = live_line(&view(true, 75, 0), true).expect("running feed has a live line");
    assert!(line.contains("Feeding Time"));
    assert!(line.contains("00:01:15"));
}

#[test]
fn test_live_line_since_last_feed() {
    let line = live_line(&view(false, 0, 3661), true).expect("idle with history");
    assert!(line.contains("Time Since Last Feed"));
    assert!(line.contains("01:01:01"));
}

#[test]
fn test_no_live_line_without_counter() {
    assert!(live_line(&view(false, 0, 0), false).is_none());
}
