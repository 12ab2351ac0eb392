//! Monthly/quarterly aggregation and growth metrics.
//!
//! - `buckets`: calendar keys and the accumulators folded from daily records
//! - `growth`: YoY/QoQ growth series and the summary figures

pub mod buckets;
pub mod growth;

pub use buckets::{CategoryTotals, MonthKey, PeriodBuckets, QuarterKey};
pub use growth::{compute_growth, growth_pct};
