//! Diagnostic logging.
//!
//! Logs go to stderr so stdout only ever carries the JSON document. The
//! default level is `warn`, which keeps a normal run silent; `RUST_LOG`
//! (from the process environment or `.env`) overrides the CLI flags.

use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    fn default_directive(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "debug",
        }
    }
}

/// Filter directive for a run: a non-blank `RUST_LOG` wins over the flags.
pub fn filter_directive(verbosity: Verbosity, rust_log: Option<&str>) -> String {
    match rust_log.map(str::trim) {
        Some(directive) if !directive.is_empty() => directive.to_string(),
        _ => verbosity.default_directive().to_string(),
    }
}

pub fn init(verbosity: Verbosity, rust_log: Option<&str>) {
    let filter = EnvFilter::try_new(filter_directive(verbosity, rust_log))
        .unwrap_or_else(|_| EnvFilter::new(verbosity.default_directive()));

    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
