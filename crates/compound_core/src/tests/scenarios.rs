//! Worked examples checked against hand-computed values

use crate::calculator::compute;
use crate::csv::format_value;
use crate::model::{CompoundingFrequency, Parameters};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "Expected {expected}, got {actual}"
    );
}

/// 100 at 5% compounded annually for two years
#[test]
fn test_annual_growth_two_years() {
    let series = compute(&Parameters::new(100.0, 5.0, 2).growth());

    let years: Vec<u32> = series.iter().map(|p| p.year).collect();
    assert_eq!(years, vec![0, 1, 2]);

    assert_eq!(series.points()[0].value, 100.0);
    assert_close(series.points()[1].value, 105.0);
    assert_close(series.points()[2].value, 110.25);

    let formatted: Vec<String> = series.iter().map(|p| format_value(p.value)).collect();
    assert_eq!(formatted, vec!["100.00", "105.00", "110.25"]);
}

/// The same parameters in decay mode mirror the growth rate
#[test]
fn test_annual_decay_two_years() {
    let series = compute(&Parameters::new(100.0, 5.0, 2).decay());

    assert_eq!(series.points()[0].value, 100.0);
    assert_close(series.points()[1].value, 95.0);
    assert_close(series.points()[2].value, 90.25);

    let formatted: Vec<String> = series.iter().map(|p| format_value(p.value)).collect();
    assert_eq!(formatted, vec!["100.00", "95.00", "90.25"]);
}

/// 12% compounded monthly is 1% per period over twelve periods
#[test]
fn test_monthly_growth_one_year() {
    let params = Parameters::new(1000.0, 12.0, 1).with_compounding(CompoundingFrequency::Monthly);
    let series = compute(&params);

    assert_eq!(series.len(), 2);
    let expected = 1000.0 * 1.01_f64.powi(12);
    assert_close(series.final_value().unwrap(), expected);
    assert_eq!(format_value(series.final_value().unwrap()), "1126.83");
}

/// Quarterly compounding grows faster than annual at the same nominal rate
#[test]
fn test_more_frequent_compounding_grows_faster() {
    let annual = compute(&Parameters::new(100.0, 8.0, 10));
    let quarterly =
        compute(&Parameters::new(100.0, 8.0, 10).with_compounding(CompoundingFrequency::Quarterly));

    assert!(quarterly.final_value().unwrap() > annual.final_value().unwrap());
}

/// A 100% decay compounded annually wipes out the principal after one year
#[test]
fn test_full_decay_reaches_zero() {
    let series = compute(&Parameters::new(100.0, 100.0, 3).decay());
    assert_eq!(series.points()[0].value, 100.0);
    assert!(series.iter().skip(1).all(|p| p.value == 0.0));
}

/// Negative rates are accepted; the toggle still negates whatever was entered
#[test]
fn test_negative_rate_in_decay_mode_grows() {
    let series = compute(&Parameters::new(100.0, -5.0, 1).decay());
    assert_close(series.final_value().unwrap(), 105.0);
}
