//! Number formatting for the table, chart axes and summary line.

pub use compound_core::format_value;

/// Format a fraction as a percentage, e.g. `0.0525` as `5.25%`
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Format a signed percentage change with an explicit sign, e.g. `+62.89%`
pub fn format_change(ratio: f64) -> String {
    if ratio >= 0.0 {
        format!("+{}", format_percentage(ratio))
    } else {
        format_percentage(ratio)
    }
}

/// Format a value in compact form for axis labels (e.g. 2.1M, 450K, 50.25)
pub fn format_compact(value: f64) -> String {
    let abs_value = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs_value >= 1_000_000_000.0 {
        format!("{}{:.1}B", sign, abs_value / 1_000_000_000.0)
    } else if abs_value >= 1_000_000.0 {
        format!("{}{:.1}M", sign, abs_value / 1_000_000.0)
    } else if abs_value >= 10_000.0 {
        format!("{}{:.0}K", sign, abs_value / 1_000.0)
    } else {
        format!("{}{:.2}", sign, abs_value)
    }
}
