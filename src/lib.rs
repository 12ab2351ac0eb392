//! `reg-metrics` library crate.
//!
//! The binary (`regmetrics`) is a thin wrapper around this library so that
//! the generator and the aggregator are testable without spawning processes.

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod metrics;
