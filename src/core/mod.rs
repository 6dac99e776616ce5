pub mod calculator;
pub mod clock;
pub mod history;
pub mod log;
pub mod report;
pub mod repository;
pub mod session;
pub mod ticker;

pub use clock::{Clock, ManualClock, SystemClock};
pub use history::{DayBucket, DayPager};
pub use repository::{Durability, FeedLogRepository};
pub use session::{
    ConfirmOutcome, FeedTracker, SessionState, StartOutcome, StopOutcome, ToggleOutcome,
};
pub use ticker::{Scheduler, TickerHandle, TickerKind};
