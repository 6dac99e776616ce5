//! Tokio-backed ticker scheduler for the interactive shell.

use crate::core::ticker::{Scheduler, TickerHandle, TickerKind};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::{MissedTickBehavior, interval};

const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Spawns one interval task per ticker; each tick sends its kind back to
/// the shell loop. Dropping the handle aborts the task.
pub struct TokioScheduler {
    tx: UnboundedSender<TickerKind>,
}

impl TokioScheduler {
    pub fn new(tx: UnboundedSender<TickerKind>) -> Self {
        Self { tx }
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, kind: TickerKind) -> TickerHandle {
        let tx = self.tx.clone();
        let task = tokio::spawn(async move {
            let mut ticks = interval(TICK_PERIOD);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // the first tick completes immediately
            ticks.tick().await;
            loop {
                ticks.tick().await;
                if tx.send(kind).is_err() {
                    break;
                }
            }
        });

        TickerHandle::new(kind, move || task.abort())
    }
}
