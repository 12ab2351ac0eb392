//! Data sources for the pipeline.
//!
//! - `random`: the randomness seam the generator draws from
//! - `sample`: synthetic daily registration records

pub mod random;
pub mod sample;

pub use random::RandomSource;
pub use sample::{FOUR_WHEELER_FILL_MAX, MAX_DAILY_TOTAL, MIN_DAILY_TOTAL, generate_registrations};
