mod app_state;
mod errors;
mod form;

pub use app_state::{AppState, Computation, StatusMessage};
pub use errors::InputError;
pub use form::{FormField, FormState, MAX_YEARS, TextField, is_numeric_char};
