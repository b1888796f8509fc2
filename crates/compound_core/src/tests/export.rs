//! CSV output for computed series

use crate::calculator::compute;
use crate::csv::{CSV_HEADER, to_csv};
use crate::model::Parameters;

#[test]
fn test_growth_series_csv() {
    let csv = to_csv(&compute(&Parameters::new(100.0, 5.0, 2)));
    assert_eq!(csv, "Year,Value\n0,100.00\n1,105.00\n2,110.25");
}

#[test]
fn test_csv_has_one_row_per_year() {
    let params = Parameters::new(100.0, 5.0, 30);
    let csv = to_csv(&compute(&params));

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), params.years as usize + 2);
    assert_eq!(lines[0], CSV_HEADER);
    assert!(lines[1].starts_with("0,"));
    assert!(lines.last().unwrap().starts_with("30,"));
    assert!(!csv.ends_with('\n'));
}

#[test]
fn test_invalid_parameters_export_header_only() {
    assert_eq!(to_csv(&compute(&Parameters::new(-5.0, 5.0, 2))), CSV_HEADER);
}
