//! Interactive tracking shell.
//!
//! One cooperative loop on a current-thread runtime: every input line and
//! every ticker message is handled to completion before the next one.

pub mod command;
pub mod ticker;

use crate::config::Config;
use crate::core::history::DayPager;
use crate::core::report::build_report;
use crate::core::session::{
    ConfirmOutcome, FeedTracker, StartOutcome, StopOutcome, ToggleOutcome,
};
use crate::core::{Durability, FeedLogRepository, SystemClock};
use crate::errors::AppResult;
use crate::models::PendingSession;
use crate::ui::messages::{info, success, warning};
use crate::ui::views::{live_line, print_day, print_status};
use crate::utils::formatting::secs2clock;
use chrono::{DateTime, Local, Utc};
use command::{HELP, ShellCommand};
use ticker::TokioScheduler;
use std::io::{IsTerminal, Write};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

enum Flow {
    Continue,
    Quit,
}

/// Browsing state of the display layer.
struct Shell<'a> {
    cfg: &'a Config,
    tracker: FeedTracker,
    pager: DayPager,
    awaiting_clear: bool,
    /// Redraw the counter in place on every tick (interactive terminals only).
    live: bool,
}

pub fn run(cfg: &Config, repo: FeedLogRepository) -> AppResult<()> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let result = rt.block_on(run_loop(cfg, repo));
    // a pending stdin read cannot be cancelled; do not wait for it
    rt.shutdown_background();
    result
}

async fn run_loop(cfg: &Config, repo: FeedLogRepository) -> AppResult<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let tracker = FeedTracker::new(
        repo,
        Box::new(SystemClock),
        Box::new(TokioScheduler::new(tx)),
    );

    let mut shell = Shell {
        cfg,
        tracker,
        pager: DayPager::new(),
        awaiting_clear: false,
        live: std::io::stdout().is_terminal(),
    };

    println!("🍼 feedlogger: type 'help' for commands.");
    shell.status();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if let Flow::Quit = shell.handle_line(&line) {
                    break;
                }
            }
            Some(kind) = rx.recv() => {
                if shell.tracker.tick(kind) {
                    shell.redraw();
                }
            }
        }
    }

    shell.farewell();
    Ok(())
}

impl Shell<'_> {
    fn handle_line(&mut self, line: &str) -> Flow {
        if self.awaiting_clear {
            self.awaiting_clear = false;
            self.answer_clear(line);
            return Flow::Continue;
        }

        match ShellCommand::parse(line) {
            ShellCommand::Start => self.start(),
            ShellCommand::Stop => self.stop(),
            ShellCommand::Toggle => match self.tracker.toggle() {
                ToggleOutcome::Started(at) => self.announce_start(at),
                ToggleOutcome::Stopped(pending) => announce_stop(&pending),
                ToggleOutcome::Rejected => {
                    warning("Save the stopped session first (type breast|formula, then save).")
                }
            },
            ShellCommand::Type(ft) => {
                if self.tracker.select_feed_type(ft) {
                    info(format!("Feed type: {}", ft));
                } else {
                    warning("No stopped session to annotate.");
                }
            }
            ShellCommand::Burp => match self.tracker.toggle_burp() {
                Some(on) => info(format!("Burp: {}", if on { "yes" } else { "no" })),
                None => warning("No stopped session to annotate."),
            },
            ShellCommand::Vomit => match self.tracker.toggle_vomit() {
                Some(on) => info(format!("Vomit: {}", if on { "yes" } else { "no" })),
                None => warning("No stopped session to annotate."),
            },
            ShellCommand::Save => self.save(),
            ShellCommand::Status => self.status(),
            ShellCommand::History => self.history(),
            ShellCommand::Older => {
                self.sync_pager();
                if self.pager.older() {
                    self.history();
                } else {
                    info("Already at the oldest day.");
                }
            }
            ShellCommand::Newer => {
                self.sync_pager();
                if self.pager.newer() {
                    self.history();
                } else {
                    info("Already at the newest day.");
                }
            }
            ShellCommand::Report => {
                let repo = self.tracker.repository();
                let profile = repo.profile();
                println!("{}", build_report(repo.sessions(), profile.as_ref()));
                self.tracker
                    .repository_mut()
                    .record("report", "", "Report generated");
            }
            ShellCommand::Clear => {
                if self.tracker.repository().is_empty() {
                    info("Nothing to clear.");
                } else {
                    warning(
                        "Clear all feeding history? This cannot be undone. Confirm [y/N]:",
                    );
                    self.awaiting_clear = true;
                }
            }
            ShellCommand::Help => println!("{}", HELP),
            ShellCommand::Quit => return Flow::Quit,
            ShellCommand::Empty => {}
            ShellCommand::InvalidType(arg) => {
                warning(format!("Unknown feed type '{}'. Use 'breast' or 'formula'.", arg))
            }
            ShellCommand::Unknown(word) => {
                warning(format!("Unknown command '{}'. Type 'help'.", word))
            }
        }

        Flow::Continue
    }

    fn announce_start(&self, at: DateTime<Utc>) {
        success(format!(
            "Feeding started at {}.",
            at.with_timezone(&Local).format(self.cfg.clock_pattern())
        ));
    }

    fn start(&mut self) {
        match self.tracker.start() {
            StartOutcome::Started(at) => self.announce_start(at),
            StartOutcome::AlreadyRunning => warning("A feed is already running."),
            StartOutcome::AwaitingAnnotation => {
                warning("Save the stopped session first (type breast|formula, then save).")
            }
        }
    }

    fn stop(&mut self) {
        match self.tracker.stop() {
            StopOutcome::Stopped(pending) => announce_stop(&pending),
            StopOutcome::NotRunning => warning("No feed is running."),
        }
    }

    fn save(&mut self) {
        match self.tracker.confirm() {
            ConfirmOutcome::Committed {
                session,
                durability,
            } => {
                success(format!(
                    "Session saved: {} for {}.",
                    session.feed_type,
                    secs2clock(session.duration)
                ));
                warn_if_unsaved(&durability);
            }
            ConfirmOutcome::MissingFeedType => {
                warning("Select a feed type before saving (type breast|formula).")
            }
            ConfirmOutcome::NothingPending => warning("There is no stopped session to save."),
        }
    }

    fn answer_clear(&mut self, answer: &str) {
        if matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            let durability = self.tracker.clear();
            success("Feeding history cleared.");
            warn_if_unsaved(&durability);
        } else {
            info("Operation cancelled.");
        }
    }

    fn redraw(&self) {
        if !self.live {
            return;
        }
        let has_history = !self.tracker.repository().is_empty();
        if let Some(line) = live_line(&self.tracker.view(), has_history) {
            print!("\r\x1b[2K{}", line);
            let _ = std::io::stdout().flush();
        }
    }

    fn status(&self) {
        print_status(
            &self.tracker.view(),
            !self.tracker.repository().is_empty(),
        );
    }

    fn sync_pager(&mut self) {
        let repo = self.tracker.repository();
        let days = repo.group_by_calendar_date(&Local).len();
        self.pager.sync(days, repo.len());
    }

    fn history(&mut self) {
        self.sync_pager();
        let repo = self.tracker.repository();
        let buckets = repo.group_by_calendar_date(&Local);

        match buckets.get(self.pager.index()) {
            Some(bucket) => {
                print_day(bucket, repo.sessions(), self.cfg);
                let mut nav = Vec::new();
                if self.pager.has_older() {
                    nav.push("'older' for the previous day");
                }
                if self.pager.has_newer() {
                    nav.push("'newer' for the next day");
                }
                if !nav.is_empty() {
                    info(nav.join(", "));
                }
            }
            None => info("No feeding sessions logged yet."),
        }
    }

    fn farewell(&self) {
        if self.tracker.is_feeding() {
            warning("A feed was still running; it has not been saved.");
        } else if self.tracker.draft().is_some() {
            warning("The stopped session was not saved.");
        }
        info("Bye!");
    }
}

fn announce_stop(pending: &PendingSession) {
    success(format!("Session complete: {}", secs2clock(pending.duration)));
    info("Set the feed type (type breast|formula), optionally burp / vomit, then save.");
}

fn warn_if_unsaved(durability: &Durability) {
    if let Durability::Unsaved(reason) = durability {
        warning(format!(
            "Changes are kept for this run only, saving failed: {}",
            reason
        ));
    }
}
