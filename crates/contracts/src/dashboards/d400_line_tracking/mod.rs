pub mod counters;

pub use counters::{StageCounters, TrackingCounters};
