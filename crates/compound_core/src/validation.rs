//! Parameter validation.
//!
//! Validation never panics and has no side effects. Callers that only need a
//! yes/no answer use [`is_valid`]; callers that want to tell the user what is
//! wrong use [`validate`].

use crate::error::ParameterError;
use crate::model::Parameters;

/// Check parameters, reporting the first failing rule.
///
/// Rules are checked in order: initial value, years, rate, compounding frequency.
pub fn validate(params: &Parameters) -> Result<(), ParameterError> {
    if params.initial_value.is_nan() || params.initial_value <= 0.0 {
        return Err(ParameterError::NonPositiveInitialValue(params.initial_value));
    }
    if params.years == 0 {
        return Err(ParameterError::ZeroYears);
    }
    if !params.rate_percent.is_finite() {
        return Err(ParameterError::NonFiniteRate(params.rate_percent));
    }
    if params.compounding_frequency == 0 {
        return Err(ParameterError::ZeroCompoundingFrequency);
    }
    Ok(())
}

/// Whether `compute` will produce a non-empty series for these parameters.
pub fn is_valid(params: &Parameters) -> bool {
    validate(params).is_ok()
}
