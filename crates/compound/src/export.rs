//! CSV export payloads.
//!
//! The text itself comes from [`compound_core::to_csv`]; this module only adds
//! the file name and MIME type that a platform [`Exporter`](crate::platform::Exporter)
//! needs to deliver it.

use compound_core::{Direction, Parameters, Series, to_csv};

use crate::state::AppState;

pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8";

/// File name for an export, e.g. `compound_growth_10years.csv`.
pub fn export_filename(direction: Direction, years: u32) -> String {
    format!("compound_{}_{}years.csv", direction.file_tag(), years)
}

/// A named CSV document ready to be written or downloaded.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvExport {
    pub filename: String,
    pub contents: String,
}

impl CsvExport {
    pub fn new(parameters: &Parameters, series: &Series) -> Self {
        Self {
            filename: export_filename(parameters.direction, parameters.years),
            contents: to_csv(series),
        }
    }

    /// Build the export for the current series, if the form is valid.
    pub fn from_state(state: &AppState) -> Option<Self> {
        state
            .computation
            .as_ref()
            .ok()
            .map(|c| Self::new(&c.parameters, &c.series))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compound_core::compute;

    #[test]
    fn test_export_filename() {
        assert_eq!(
            export_filename(Direction::Growth, 10),
            "compound_growth_10years.csv"
        );
        assert_eq!(
            export_filename(Direction::Decay, 1),
            "compound_decay_1years.csv"
        );
    }

    #[test]
    fn test_export_contents() {
        let params = Parameters::new(100.0, 5.0, 2).decay();
        let export = CsvExport::new(&params, &compute(&params));
        assert_eq!(export.filename, "compound_decay_2years.csv");
        assert_eq!(export.contents, "Year,Value\n0,100.00\n1,95.00\n2,90.25");
    }

    #[test]
    fn test_no_export_for_invalid_form() {
        let mut state = AppState::default();
        state.form.rate.value = "abc".to_string();
        state.recompute();
        assert_eq!(CsvExport::from_state(&state), None);
    }
}
