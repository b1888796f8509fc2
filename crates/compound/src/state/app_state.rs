use compound_core::{Parameters, Series, compute};

use super::errors::InputError;
use super::form::FormState;

/// Parameters together with the series computed from them.
#[derive(Debug, Clone, PartialEq)]
pub struct Computation {
    pub parameters: Parameters,
    pub series: Series,
}

/// Transient message shown in the status bar.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub form: FormState,
    /// Result of the latest recomputation
    pub computation: Result<Computation, InputError>,
    /// First visible row of the results table
    pub table_scroll: usize,
    pub status: Option<StatusMessage>,
    /// Set by key handlers; consumed by the platform exporter
    pub export_requested: bool,
    pub exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Parameters::default())
    }
}

impl AppState {
    pub fn new(initial: &Parameters) -> Self {
        let form = FormState::from_parameters(initial);
        Self {
            computation: evaluate(&form),
            form,
            table_scroll: 0,
            status: None,
            export_requested: false,
            exit: false,
        }
    }

    /// Recompute the series from the current form contents.
    ///
    /// Called after every edit.
    pub fn recompute(&mut self) {
        self.computation = evaluate(&self.form);

        match &self.computation {
            Ok(computation) => {
                let last_row = computation.series.len().saturating_sub(1);
                self.table_scroll = self.table_scroll.min(last_row);
                tracing::debug!(
                    years = computation.parameters.years,
                    final_value = ?computation.series.final_value(),
                    "Series recomputed"
                );
            }
            Err(e) => {
                self.table_scroll = 0;
                tracing::debug!(error = %e, "Form input rejected");
            }
        }
    }

    pub fn series(&self) -> Option<&Series> {
        self.computation.as_ref().ok().map(|c| &c.series)
    }

    pub fn parameters(&self) -> Option<&Parameters> {
        self.computation.as_ref().ok().map(|c| &c.parameters)
    }

    pub fn input_error(&self) -> Option<&InputError> {
        self.computation.as_ref().err()
    }

    /// Move the first visible table row by `delta`, keeping a full page of
    /// `page_size` rows on screen.
    pub fn scroll_table(&mut self, delta: isize, page_size: usize) {
        let rows = self.series().map(Series::len).unwrap_or(0);
        let max = rows.saturating_sub(page_size.max(1));
        self.table_scroll = self
            .table_scroll
            .min(max)
            .saturating_add_signed(delta)
            .min(max);
    }

    /// Queue an export of the current series. Ignored while the input is invalid.
    pub fn request_export(&mut self) {
        if self.series().is_some() {
            self.export_requested = true;
        } else {
            self.set_error("Nothing to export: fix the highlighted input first");
        }
    }

    pub fn take_export_request(&mut self) -> bool {
        std::mem::take(&mut self.export_requested)
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage::error(text));
    }

    pub fn set_info(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage::info(text));
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }
}

fn evaluate(form: &FormState) -> Result<Computation, InputError> {
    form.parameters().map(|parameters| Computation {
        series: compute(&parameters),
        parameters,
    })
}
