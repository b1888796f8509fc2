//! CSV text for a computed series.

use crate::model::Series;

/// Header row of the exported CSV.
pub const CSV_HEADER: &str = "Year,Value";

/// Format a value with exactly two decimal digits.
pub fn format_value(value: f64) -> String {
    format!("{value:.2}")
}

/// Serialize a series as `Year,Value` rows joined by `\n`, without a trailing newline.
///
/// Neither field can contain a comma, so no quoting is done.
pub fn to_csv(series: &Series) -> String {
    let mut lines = Vec::with_capacity(series.len() + 1);
    lines.push(CSV_HEADER.to_string());
    lines.extend(
        series
            .iter()
            .map(|point| format!("{},{}", point.year, format_value(point.value))),
    );
    lines.join("\n")
}
