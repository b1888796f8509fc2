//! Value types shared by the calculator and its callers.

mod parameters;
mod series;

pub use parameters::{CompoundingFrequency, Direction, Parameters};
pub use series::{Series, SeriesPoint};
