//! Compound growth/decay calculator
//!
//! Terminal (and browser) front end for [`compound_core`]:
//! - An editable parameter form that recomputes on every keystroke
//! - A year-by-year results table with the final year highlighted
//! - A line chart of the series
//! - CSV export to disk (native) or as a browser download (web)

// ============================================================================
// Application modules
// ============================================================================

#[cfg(feature = "native")]
pub mod app;
pub mod components;
pub mod event;
pub mod export;
pub mod layout;
pub mod logging;
pub mod platform;
pub mod settings;
pub mod state;
pub mod util;

#[cfg(feature = "web")]
pub mod web;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(all(test, feature = "native"))]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

#[cfg(feature = "native")]
pub use app::App;
pub use export::CsvExport;
#[cfg(feature = "native")]
pub use logging::init_logging;
#[cfg(feature = "web")]
pub use logging::init_logging_web;
pub use platform::{ExportError, Exporter};
pub use settings::{ParameterOverrides, Settings};
pub use state::{AppState, InputError};
