//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and the environment
//! - generates synthetic registrations
//! - aggregates monthly/quarterly growth
//! - writes the JSON report

use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::debug;

use crate::cli::Cli;
use crate::domain::ReportConfig;
use crate::error::{AppError, EXIT_FAILURE};

pub mod pipeline;

/// Environment variable consulted when `--seed` is not given.
pub const SEED_ENV: &str = "REGMETRICS_SEED";

/// Entry point for the `regmetrics` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let env = Environment::load();
    crate::logging::init(cli.verbosity(), env.rust_log.as_deref());

    let today = Local::now().date_naive();
    let config = report_config_from_args(&cli, today, env.seed)?;
    debug!(?config, "resolved configuration");

    let report = pipeline::run_report(&config)?;
    let rendered = crate::io::render_report(&report, config.pretty)?;

    if let Some(path) = &config.output {
        crate::io::write_report_file(path, &rendered)?;
    }
    crate::io::write_report(std::io::stdout().lock(), &rendered)
}

/// Environment variables the run reads, captured after `.env` is merged in.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    pub rust_log: Option<String>,
    pub seed: Option<String>,
}

impl Environment {
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        // Non-UTF-8 variables are skipped rather than aborting the run.
        Self::from_vars(std::env::vars_os().filter_map(|(key, value)| {
            Some((key.into_string().ok()?, value.into_string().ok()?))
        }))
    }

    pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut env = Self::default();
        for (key, value) in vars {
            match key.as_str() {
                "RUST_LOG" => env.rust_log = Some(value),
                SEED_ENV => env.seed = Some(value),
                _ => {}
            }
        }
        env
    }
}

pub fn report_config_from_args(
    cli: &Cli,
    today: NaiveDate,
    seed_env: Option<String>,
) -> Result<ReportConfig, AppError> {
    Ok(ReportConfig {
        end_date: today,
        years: ReportConfig::DEFAULT_YEARS,
        seed: resolve_seed(cli.seed, seed_env.as_deref())?,
        pretty: cli.pretty,
        output: cli.output.clone(),
    })
}

/// `--seed` wins over the environment; a blank variable counts as unset.
fn resolve_seed(flag: Option<u64>, env_value: Option<&str>) -> Result<Option<u64>, AppError> {
    if flag.is_some() {
        return Ok(flag);
    }
    match env_value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse::<u64>()
            .map(Some)
            .map_err(|e| {
                AppError::new(EXIT_FAILURE, format!("Invalid {SEED_ENV} '{raw}': {e}"))
            }),
    }
}
