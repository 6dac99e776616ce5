use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::ui::views::print_day;
use crate::utils::date;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { day, all } = cmd {
        let repo = super::open_repository(cfg)?;
        let buckets = repo.group_by_calendar_date(&Local);

        if buckets.is_empty() {
            info("No feeding sessions logged yet.");
            return Ok(());
        }

        if *all {
            for bucket in &buckets {
                print_day(bucket, repo.sessions(), cfg);
            }
            return Ok(());
        }

        let bucket = match day {
            Some(d) => {
                let wanted = date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?;
                match buckets.iter().find(|b| b.date == wanted) {
                    Some(b) => b,
                    None => {
                        info(format!("No feeding sessions on {}.", wanted));
                        return Ok(());
                    }
                }
            }
            None => &buckets[0],
        };

        print_day(bucket, repo.sessions(), cfg);
    }
    Ok(())
}
