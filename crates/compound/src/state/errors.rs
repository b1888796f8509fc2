//! Error types for form input.

use compound_core::ParameterError;

use super::form::FormField;

/// Why the form cannot currently produce a series.
///
/// Malformed text and well-formed but unusable values are kept apart so the
/// status bar can say which one happened; both suppress the results equally.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    /// A text field does not hold a number of the expected kind
    Parse { field: FormField, input: String },
    /// The years field exceeds what the form will compute
    TooManyYears { max: u32 },
    /// Parsed parameters failed validation
    Invalid(ParameterError),
}

impl InputError {
    pub fn parse(field: FormField, input: &str) -> Self {
        InputError::Parse {
            field,
            input: input.to_string(),
        }
    }
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::Parse { field, input } if input.trim().is_empty() => {
                write!(f, "{} is empty", field.label())
            }
            InputError::Parse { field, input } => {
                write!(f, "{} is not a number: '{}'", field.label(), input)
            }
            InputError::TooManyYears { max } => {
                write!(f, "number of years is limited to {}", max)
            }
            InputError::Invalid(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParameterError> for InputError {
    fn from(err: ParameterError) -> Self {
        InputError::Invalid(err)
    }
}
