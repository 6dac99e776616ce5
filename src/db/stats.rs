use crate::db::kv::list_keys;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::FeedSession;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use chrono::Local;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, sessions: &[FeedSession]) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(&pool.path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, pool.path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) STORED KEYS
    //
    let keys = list_keys(&pool.conn)?;
    println!("{}• Stored keys:{}", CYAN, RESET);
    if keys.is_empty() {
        println!("    {GREY}--{RESET}");
    }
    for (key, updated_at) in keys {
        println!("    {} {}(updated {}){}", key, GREY, updated_at, RESET);
    }

    //
    // 3) SESSIONS + DATE RANGE
    //
    println!(
        "{}• Total sessions:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        sessions.len(),
        RESET
    );

    let first = sessions.iter().map(|s| s.start_date_in(&Local)).min();
    let last = sessions.iter().map(|s| s.start_date_in(&Local)).max();

    let fmt = |d: Option<chrono::NaiveDate>| {
        d.map(|d| d.to_string())
            .unwrap_or_else(|| format!("{GREY}--{RESET}"))
    };

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt(first));
    println!("    to:   {}", fmt(last));

    //
    // 4) AVERAGE FEEDS/DAY
    //
    if let (Some(f), Some(l)) = (first, last) {
        let days = (l - f).num_days() + 1;
        let avg = sessions.len() as f64 / days as f64;
        println!("{}• Average feeds/day:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}
