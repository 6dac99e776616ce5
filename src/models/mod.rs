pub mod feed_session;
pub mod feed_type;
pub mod profile;

pub use feed_session::{FeedSession, PendingSession};
pub use feed_type::FeedType;
pub use profile::UserProfile;
