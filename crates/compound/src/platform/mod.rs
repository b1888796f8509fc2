//! Platform abstraction layer for native/web compatibility.
//!
//! The [`Exporter`] trait delivers a [`CsvExport`] to the user: native builds
//! write it to a directory on disk, web builds hand it to the browser as a
//! download.

#[cfg(feature = "native")]
pub mod native;

#[cfg(feature = "web")]
pub mod web;

use crate::export::CsvExport;
use crate::state::AppState;

#[cfg(feature = "native")]
pub use native::FileExporter;

#[cfg(feature = "web")]
pub use web::BrowserDownload;

/// Error types for export operations
#[derive(Debug)]
pub enum ExportError {
    /// I/O error (directory not writable, disk full, etc.)
    Io(String),
    /// A platform API needed for the export is missing
    NotAvailable(String),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Io(msg) => write!(f, "IO error: {}", msg),
            ExportError::NotAvailable(msg) => write!(f, "Export not available: {}", msg),
        }
    }
}

impl std::error::Error for ExportError {}

/// Delivers CSV exports to the user.
pub trait Exporter {
    /// Deliver the export, returning a description of where it went.
    fn export(&self, export: &CsvExport) -> Result<String, ExportError>;
}

/// Run the export queued by a key handler, if any, and report the outcome in
/// the status bar.
pub fn run_pending_export(state: &mut AppState, exporter: &dyn Exporter) {
    if !state.take_export_request() {
        return;
    }

    let Some(export) = CsvExport::from_state(state) else {
        state.set_error("Nothing to export: the current input is invalid");
        return;
    };

    match exporter.export(&export) {
        Ok(location) => {
            tracing::info!(file = %export.filename, location = %location, "Series exported");
            state.set_info(format!("Exported to {}", location));
        }
        Err(e) => {
            tracing::error!(file = %export.filename, error = %e, "Export failed");
            state.set_error(format!("Export failed: {}", e));
        }
    }
}
