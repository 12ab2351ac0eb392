//! Shared report pipeline: generate -> bucket -> growth.
//!
//! `run_report` picks the RNG from the config; `run_report_with_rng` takes
//! any `RandomSource`, which is what tests use.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::data::{RandomSource, generate_registrations};
use crate::domain::{RegistrationReport, ReportConfig};
use crate::error::AppError;
use crate::metrics::compute_growth;

/// Execute the full pipeline with a seeded or entropy-backed RNG.
pub fn run_report(config: &ReportConfig) -> Result<RegistrationReport, AppError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    run_report_with_rng(config, &mut rng)
}

/// Execute the pipeline drawing from `rng`.
pub fn run_report_with_rng<R: RandomSource>(
    config: &ReportConfig,
    rng: &mut R,
) -> Result<RegistrationReport, AppError> {
    let records = generate_registrations(config.start_date(), config.end_date, rng);
    compute_growth(&records)
}
