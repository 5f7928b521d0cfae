pub mod dto;

pub use dto::{CountBucket, OverviewStats, UNSPECIFIED_HABITAT};
