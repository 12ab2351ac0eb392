//! Emit the growth report as JSON.
//!
//! The document is rendered to a string first and written in one go, so a
//! failure while serializing never leaves partial JSON on stdout.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::RegistrationReport;
use crate::error::{AppError, EXIT_FAILURE};

/// Serialize the report, compact by default.
pub fn render_report(report: &RegistrationReport, pretty: bool) -> Result<String, AppError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    };
    rendered.map_err(|e| AppError::new(EXIT_FAILURE, format!("Failed to serialize report: {e}")))
}

/// Write a rendered document plus a trailing newline, then flush.
pub fn write_report<W: Write>(mut writer: W, rendered: &str) -> Result<(), AppError> {
    writeln!(writer, "{rendered}")
        .and_then(|()| writer.flush())
        .map_err(|e| AppError::new(EXIT_FAILURE, format!("Failed to write report: {e}")))
}

/// Write a rendered document to `path`, replacing any existing file.
pub fn write_report_file(path: &Path, rendered: &str) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(
            EXIT_FAILURE,
            format!("Failed to create report file '{}': {e}", path.display()),
        )
    })?;
    write_report(file, rendered)
}
