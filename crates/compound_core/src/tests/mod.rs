//! Integration tests for the compound series calculator
//!
//! Tests are organized by topic:
//! - `scenarios` - Worked examples with known values
//! - `properties` - Property-based checks of series invariants
//! - `export` - CSV output for computed series

mod export;
mod scenarios;
