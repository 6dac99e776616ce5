//! Session State Machine: one feed at a time, Idle → Running →
//! PendingAnnotation → Idle.
//!
//! The tracker owns the in-flight session and the ticker of the current
//! state. Committed sessions are handed to the `FeedLogRepository`.

use crate::core::clock::Clock;
use crate::core::repository::{Durability, FeedLogRepository};
use crate::core::ticker::{Scheduler, TickerHandle, TickerKind};
use crate::models::{FeedSession, FeedType, PendingSession};
use crate::utils::time::seconds_between;
use chrono::{DateTime, Utc};
use tracing::debug;

/// A stopped session with its annotations so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub pending: PendingSession,
    pub feed_type: Option<FeedType>,
    pub burp: bool,
    pub vomit: bool,
}

impl Draft {
    fn new(pending: PendingSession) -> Self {
        Self {
            pending,
            feed_type: None,
            burp: false,
            vomit: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Running { start_time: DateTime<Utc> },
    PendingAnnotation(Draft),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    Started(DateTime<Utc>),
    AlreadyRunning,
    /// A stopped session still has to be saved.
    AwaitingAnnotation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopOutcome {
    Stopped(PendingSession),
    NotRunning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    Started(DateTime<Utc>),
    Stopped(PendingSession),
    /// The switch is locked while a draft awaits its annotation.
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Committed {
        session: FeedSession,
        durability: Durability,
    },
    /// No feed type chosen yet; nothing changed.
    MissingFeedType,
    NothingPending,
}

/// What the display layer needs to render the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerView {
    pub is_feeding: bool,
    pub elapsed_seconds: i64,
    pub since_last_feed_seconds: i64,
    pub draft: Option<Draft>,
}

pub struct FeedTracker {
    state: SessionState,
    repo: FeedLogRepository,
    clock: Box<dyn Clock>,
    scheduler: Box<dyn Scheduler>,
    ticker: Option<TickerHandle>,
    elapsed_seconds: i64,
    since_last_feed_seconds: i64,
    last_id: i64,
}

impl FeedTracker {
    /// Start Idle. With a non-empty log the time since the last feed is
    /// computed right away and its ticker starts.
    pub fn new(
        repo: FeedLogRepository,
        clock: Box<dyn Clock>,
        scheduler: Box<dyn Scheduler>,
    ) -> Self {
        let mut tracker = Self {
            state: SessionState::Idle,
            repo,
            clock,
            scheduler,
            ticker: None,
            elapsed_seconds: 0,
            since_last_feed_seconds: 0,
            last_id: 0,
        };
        tracker.enter(SessionState::Idle);
        tracker
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_feeding(&self) -> bool {
        matches!(self.state, SessionState::Running { .. })
    }

    pub fn draft(&self) -> Option<&Draft> {
        match &self.state {
            SessionState::PendingAnnotation(d) => Some(d),
            _ => None,
        }
    }

    pub fn elapsed_seconds(&self) -> i64 {
        self.elapsed_seconds
    }

    pub fn since_last_feed_seconds(&self) -> i64 {
        self.since_last_feed_seconds
    }

    /// Kind of the ticker currently held, if any.
    pub fn active_ticker(&self) -> Option<TickerKind> {
        self.ticker.as_ref().map(TickerHandle::kind)
    }

    pub fn repository(&self) -> &FeedLogRepository {
        &self.repo
    }

    pub fn repository_mut(&mut self) -> &mut FeedLogRepository {
        &mut self.repo
    }

    pub fn view(&self) -> TrackerView {
        TrackerView {
            is_feeding: self.is_feeding(),
            elapsed_seconds: self.elapsed_seconds,
            since_last_feed_seconds: self.since_last_feed_seconds,
            draft: self.draft().cloned(),
        }
    }

    /// Idle → Running(now). Ignored in any other state.
    pub fn start(&mut self) -> StartOutcome {
        match self.state {
            SessionState::Idle => {}
            SessionState::Running { .. } => return StartOutcome::AlreadyRunning,
            SessionState::PendingAnnotation(_) => return StartOutcome::AwaitingAnnotation,
        }

        let now = self.clock.now();
        self.elapsed_seconds = 0;
        self.enter(SessionState::Running { start_time: now });
        self.repo
            .record("start", "", &format!("Feed started at {}", now.to_rfc3339()));

        StartOutcome::Started(now)
    }

    /// Running → PendingAnnotation with a fresh id. Ignored otherwise.
    pub fn stop(&mut self) -> StopOutcome {
        let start_time = match self.state {
            SessionState::Running { start_time } => start_time,
            _ => return StopOutcome::NotRunning,
        };

        let now = self.clock.now();
        let id = self.next_id(now);
        let pending = PendingSession::new(id, start_time, now);
        self.elapsed_seconds = pending.duration;

        self.enter(SessionState::PendingAnnotation(Draft::new(pending.clone())));
        self.repo.record(
            "stop",
            &id.to_string(),
            &format!("Feed stopped after {} s", pending.duration),
        );

        StopOutcome::Stopped(pending)
    }

    /// The start/stop switch.
    pub fn toggle(&mut self) -> ToggleOutcome {
        if self.is_feeding() {
            match self.stop() {
                StopOutcome::Stopped(p) => ToggleOutcome::Stopped(p),
                StopOutcome::NotRunning => ToggleOutcome::Rejected,
            }
        } else {
            match self.start() {
                StartOutcome::Started(at) => ToggleOutcome::Started(at),
                _ => ToggleOutcome::Rejected,
            }
        }
    }

    /// Set the draft feed type. Returns false when no draft exists.
    pub fn select_feed_type(&mut self, feed_type: FeedType) -> bool {
        match &mut self.state {
            SessionState::PendingAnnotation(d) => {
                d.feed_type = Some(feed_type);
                true
            }
            _ => false,
        }
    }

    /// Flip the draft burp flag, returning its new value.
    pub fn toggle_burp(&mut self) -> Option<bool> {
        match &mut self.state {
            SessionState::PendingAnnotation(d) => {
                d.burp = !d.burp;
                Some(d.burp)
            }
            _ => None,
        }
    }

    /// Flip the draft vomit flag, returning its new value.
    pub fn toggle_vomit(&mut self) -> Option<bool> {
        match &mut self.state {
            SessionState::PendingAnnotation(d) => {
                d.vomit = !d.vomit;
                Some(d.vomit)
            }
            _ => None,
        }
    }

    /// PendingAnnotation → Idle, committing the session to the log.
    /// Without a feed type this is a no-op.
    pub fn confirm(&mut self) -> ConfirmOutcome {
        let (feed_type, draft) = match &self.state {
            SessionState::PendingAnnotation(d) => match d.feed_type {
                Some(ft) => (ft, d.clone()),
                None => return ConfirmOutcome::MissingFeedType,
            },
            _ => return ConfirmOutcome::NothingPending,
        };

        let session = draft
            .pending
            .into_session(feed_type, draft.burp, draft.vomit);
        let durability = self.repo.append(session.clone());
        self.repo.record(
            "save",
            &session.id.to_string(),
            &format!(
                "{} feed of {} s saved (burp={}, vomit={})",
                session.feed_type.ft_as_str(),
                session.duration,
                session.burp,
                session.vomit
            ),
        );

        self.enter(SessionState::Idle);

        ConfirmOutcome::Committed {
            session,
            durability,
        }
    }

    /// Empty the log. The confirmation prompt belongs to the display layer.
    pub fn clear(&mut self) -> Durability {
        let removed = self.repo.len();
        let durability = self.repo.clear();
        self.since_last_feed_seconds = 0;

        if matches!(self.state, SessionState::Idle) {
            self.ticker = None;
        }
        self.repo
            .record("clear", "", &format!("Cleared {} session(s)", removed));

        durability
    }

    /// Recompute the counter owned by `kind` from the wall clock.
    /// Ticks from a ticker that is no longer active are ignored.
    pub fn tick(&mut self, kind: TickerKind) -> bool {
        if self.active_ticker() != Some(kind) {
            return false;
        }

        match (&self.state, kind) {
            (SessionState::Running { start_time }, TickerKind::FeedElapsed) => {
                self.elapsed_seconds = seconds_between(*start_time, self.clock.now()).max(0);
                true
            }
            (SessionState::Idle, TickerKind::SinceLastFeed) => {
                self.refresh_since_last_feed();
                true
            }
            _ => false,
        }
    }

    /// Every state change goes through here so the previous ticker is
    /// always dropped before the next one is acquired.
    fn enter(&mut self, state: SessionState) {
        self.ticker = None;
        debug!(?state, "tracker state change");

        let kind = match &state {
            SessionState::Running { .. } => Some(TickerKind::FeedElapsed),
            SessionState::Idle if !self.repo.is_empty() => Some(TickerKind::SinceLastFeed),
            _ => None,
        };
        self.state = state;

        if matches!(self.state, SessionState::Idle) {
            self.refresh_since_last_feed();
        }
        self.ticker = kind.map(|k| self.scheduler.schedule(k));
    }

    fn refresh_since_last_feed(&mut self) {
        self.since_last_feed_seconds = match self.repo.latest() {
            Some(last) => seconds_between(last.end_time, self.clock.now()).max(0),
            None => 0,
        };
    }

    /// Epoch milliseconds of the stop instant, bumped past any id already
    /// handed out or stored.
    fn next_id(&mut self, now: DateTime<Utc>) -> i64 {
        let floor = self.last_id.max(self.repo.max_id().unwrap_or(0));
        let candidate = now.timestamp_millis();
        let id = if candidate <= floor { floor + 1 } else { candidate };
        self.last_id = id;
        id
    }
}
