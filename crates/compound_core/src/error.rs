use std::fmt;

/// Reasons a set of [`Parameters`](crate::model::Parameters) cannot produce a series
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterError {
    /// Initial value is zero, negative or NaN
    NonPositiveInitialValue(f64),
    /// The series must span at least one year
    ZeroYears,
    /// Rate is NaN or infinite
    NonFiniteRate(f64),
    /// At least one compounding period per year is required
    ZeroCompoundingFrequency,
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterError::NonPositiveInitialValue(value) => {
                write!(f, "initial value must be positive (got {value})")
            }
            ParameterError::ZeroYears => write!(f, "number of years must be at least 1"),
            ParameterError::NonFiniteRate(rate) => {
                write!(f, "rate must be a finite number (got {rate})")
            }
            ParameterError::ZeroCompoundingFrequency => {
                write!(f, "compounding frequency must be at least once per year")
            }
        }
    }
}

impl std::error::Error for ParameterError {}
