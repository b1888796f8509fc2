//! The compounding series calculator.

use crate::model::{Parameters, Series, SeriesPoint};
use crate::validation::is_valid;

/// Signed decimal rate used in the formula.
///
/// `5%` growth gives `0.05`, `5%` decay gives `-0.05`.
pub fn effective_rate(params: &Parameters) -> f64 {
    params.direction.sign() * (params.rate_percent / 100.0)
}

/// Compute the value at the end of every year from `0` to `params.years` inclusive.
///
/// Each point is `P * (1 + rate / n) ^ (n * year)` where `rate` is the
/// [`effective_rate`] and `n` the compounding frequency. Invalid parameters
/// produce an empty series.
pub fn compute(params: &Parameters) -> Series {
    if !is_valid(params) {
        return Series::default();
    }

    let rate = effective_rate(params);
    let n = f64::from(params.compounding_frequency);
    let base = 1.0 + rate / n;

    (0..=params.years)
        .map(|year| {
            let periods = n * f64::from(year);
            SeriesPoint::new(year, params.initial_value * base.powf(periods))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CompoundingFrequency;

    #[test]
    fn test_invalid_parameters_yield_empty_series() {
        assert!(compute(&Parameters::new(0.0, 5.0, 10)).is_empty());
        assert!(compute(&Parameters::new(100.0, 5.0, 0)).is_empty());
        assert!(compute(&Parameters::new(100.0, f64::NAN, 10)).is_empty());
        assert!(compute(&Parameters::new(100.0, 5.0, 10).with_frequency(0)).is_empty());
    }

    #[test]
    fn test_effective_rate_sign() {
        let growth = Parameters::new(100.0, 5.0, 1).growth();
        let decay = growth.decay();
        assert_eq!(effective_rate(&growth), 0.05);
        assert_eq!(effective_rate(&decay), -0.05);
    }

    #[test]
    fn test_zero_rate_is_flat() {
        let params = Parameters::new(250.0, 0.0, 5).with_compounding(CompoundingFrequency::Monthly);
        let series = compute(&params);
        assert!(series.iter().all(|p| p.value == 250.0));
    }

    #[test]
    fn test_non_standard_frequency() {
        // Daily compounding is not offered in the UI but is well defined
        let params = Parameters::new(100.0, 10.0, 1).with_frequency(365);
        let expected = 100.0 * (1.0_f64 + 0.10 / 365.0).powf(365.0);
        let actual = compute(&params).final_value().unwrap();
        assert!((actual - expected).abs() < 1e-9);
    }
}
