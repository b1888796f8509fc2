//! Editable form holding the raw text of each parameter field.

use compound_core::{CompoundingFrequency, Direction, Parameters, validate};

use super::errors::InputError;

/// Largest number of years the form will compute. Every keystroke recomputes
/// the whole series, so the horizon is bounded here rather than in the core.
pub const MAX_YEARS: u32 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    InitialValue,
    Rate,
    Years,
    Frequency,
    Direction,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::InitialValue,
        FormField::Rate,
        FormField::Years,
        FormField::Frequency,
        FormField::Direction,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::InitialValue => "Initial Number",
            FormField::Rate => "Percentage Increase/Decrease (%)",
            FormField::Years => "Number of Years",
            FormField::Frequency => "Compounding Frequency",
            FormField::Direction => "Mode",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            FormField::InitialValue => 0,
            FormField::Rate => 1,
            FormField::Years => 2,
            FormField::Frequency => 3,
            FormField::Direction => 4,
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Single-line text field with a cursor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextField {
    pub value: String,
    pub cursor_pos: usize,
}

impl TextField {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            cursor_pos: value.len(),
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.value.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            self.value.remove(self.cursor_pos);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor_pos < self.value.len() {
            self.value.remove(self.cursor_pos);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_pos < self.value.len() {
            self.cursor_pos += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.value.len();
    }
}

/// Characters accepted by the numeric text fields.
///
/// Only ASCII is accepted, so byte offsets and char offsets coincide.
pub fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}

#[derive(Debug, Clone)]
pub struct FormState {
    pub initial_value: TextField,
    pub rate: TextField,
    pub years: TextField,
    pub frequency: CompoundingFrequency,
    pub direction: Direction,
    pub focused: FormField,
}

impl Default for FormState {
    fn default() -> Self {
        Self::from_parameters(&Parameters::default())
    }
}

impl FormState {
    /// Pre-fill the form from a set of parameters.
    ///
    /// Frequencies outside the supported choices fall back to annual compounding.
    pub fn from_parameters(params: &Parameters) -> Self {
        Self {
            initial_value: TextField::new(&params.initial_value.to_string()),
            rate: TextField::new(&params.rate_percent.to_string()),
            years: TextField::new(&params.years.to_string()),
            frequency: params.compounding().unwrap_or_default(),
            direction: params.direction,
            focused: FormField::InitialValue,
        }
    }

    /// The text field for `field`, or `None` for the selector fields.
    pub fn text_field_mut(&mut self, field: FormField) -> Option<&mut TextField> {
        match field {
            FormField::InitialValue => Some(&mut self.initial_value),
            FormField::Rate => Some(&mut self.rate),
            FormField::Years => Some(&mut self.years),
            FormField::Frequency | FormField::Direction => None,
        }
    }

    pub fn text_field(&self, field: FormField) -> Option<&TextField> {
        match field {
            FormField::InitialValue => Some(&self.initial_value),
            FormField::Rate => Some(&self.rate),
            FormField::Years => Some(&self.years),
            FormField::Frequency | FormField::Direction => None,
        }
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    /// Parse and validate the form.
    pub fn parameters(&self) -> Result<Parameters, InputError> {
        let initial_value = parse_number(&self.initial_value.value, FormField::InitialValue)?;
        let rate_percent = parse_number(&self.rate.value, FormField::Rate)?;
        let years = parse_years(&self.years.value)?;

        let params = Parameters {
            initial_value,
            rate_percent,
            years,
            compounding_frequency: self.frequency.periods_per_year(),
            direction: self.direction,
        };
        validate(&params)?;
        Ok(params)
    }
}

fn parse_number(input: &str, field: FormField) -> Result<f64, InputError> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| InputError::parse(field, input))
}

/// Years parse as a signed integer so that "0" and "-3" reach validation and
/// report a non-positive duration instead of a parse failure.
fn parse_years(input: &str) -> Result<u32, InputError> {
    let years = input
        .trim()
        .parse::<i64>()
        .map_err(|_| InputError::parse(FormField::Years, input))?;

    if years > i64::from(MAX_YEARS) {
        return Err(InputError::TooManyYears { max: MAX_YEARS });
    }
    Ok(u32::try_from(years.max(0)).unwrap_or(0))
}
