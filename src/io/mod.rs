//! Input/output helpers.
//!
//! - report rendering and emission to stdout or a file (`export`)

pub mod export;

pub use export::*;
