//! Periodic once-per-second tasks owned by the tracker states.
//!
//! A `TickerHandle` is acquired on state entry and cancels its task when
//! dropped, so replacing or clearing the handle releases the ticker on every
//! path that leaves the state.

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerKind {
    /// Elapsed time of the running feed.
    FeedElapsed,
    /// Time since the end of the newest stored feed.
    SinceLastFeed,
}

pub struct TickerHandle {
    kind: TickerKind,
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TickerHandle {
    pub fn new(kind: TickerKind, cancel: impl FnOnce() + 'static) -> Self {
        Self {
            kind,
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Handle with nothing to cancel.
    pub fn detached(kind: TickerKind) -> Self {
        Self { kind, cancel: None }
    }

    pub fn kind(&self) -> TickerKind {
        self.kind
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for TickerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TickerHandle").field("kind", &self.kind).finish()
    }
}

pub trait Scheduler {
    fn schedule(&self, kind: TickerKind) -> TickerHandle;
}

/// Scheduler for one-shot commands: nothing ever ticks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopScheduler;

impl Scheduler for NoopScheduler {
    fn schedule(&self, kind: TickerKind) -> TickerHandle {
        TickerHandle::detached(kind)
    }
}

/// Keeps track of which tickers are alive. Clones share the bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct RecordingScheduler {
    active: Rc<RefCell<Vec<TickerKind>>>,
    started: Rc<RefCell<Vec<TickerKind>>>,
}

impl RecordingScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tickers scheduled and not yet cancelled.
    pub fn active(&self) -> Vec<TickerKind> {
        self.active.borrow().clone()
    }

    /// Every ticker ever scheduled, in order.
    pub fn started(&self) -> Vec<TickerKind> {
        self.started.borrow().clone()
    }
}

impl Scheduler for RecordingScheduler {
    fn schedule(&self, kind: TickerKind) -> TickerHandle {
        self.active.borrow_mut().push(kind);
        self.started.borrow_mut().push(kind);

        let active = Rc::clone(&self.active);
        TickerHandle::new(kind, move || {
            let mut list = active.borrow_mut();
            if let Some(pos) = list.iter().position(|k| *k == kind) {
                list.remove(pos);
            }
        })
    }
}
