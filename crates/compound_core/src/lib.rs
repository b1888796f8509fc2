//! Compound growth and decay series
//!
//! This crate computes the year-by-year value of a principal compounded at a
//! fixed annual rate, either growing or decaying, and serializes the result as
//! CSV. It has no knowledge of any user interface.
//!
//! ```
//! use compound_core::{CompoundingFrequency, Parameters, compute, to_csv};
//!
//! let params = Parameters::new(1000.0, 12.0, 1)
//!     .with_compounding(CompoundingFrequency::Monthly);
//! let series = compute(&params);
//! assert_eq!(series.len(), 2);
//! assert_eq!(to_csv(&series), "Year,Value\n0,1000.00\n1,1126.83");
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod calculator;
pub mod csv;
pub mod error;
pub mod validation;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use calculator::{compute, effective_rate};
pub use csv::{CSV_HEADER, format_value, to_csv};
pub use error::ParameterError;
pub use model::{CompoundingFrequency, Direction, Parameters, Series, SeriesPoint};
pub use validation::{is_valid, validate};
