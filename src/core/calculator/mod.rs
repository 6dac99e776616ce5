pub mod gaps;
pub mod stats;
