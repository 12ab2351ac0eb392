//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the fixed manufacturer set (`Manufacturer`)
//! - generated daily records (`DailyOverallRecord`, `ManufacturerRecord`)
//! - monthly growth rows and the final report (`VehicleTypeGrowth`, `RegistrationReport`)
//! - the run configuration (`ReportConfig`)

pub mod types;

pub use types::*;
