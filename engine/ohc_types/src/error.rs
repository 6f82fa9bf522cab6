use serde::Serialize;
use thiserror::Error;

/// Reasons a supplied input cannot be graded.
///
/// A missing input is not an error: blank fields simply produce no result.
/// These variants cover values that were supplied but cannot be trusted.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputError {
    #[error("{field}: '{raw}' is not a number")]
    NotANumber { field: &'static str, raw: String },
    #[error("{field}: '{raw}' is not a finite value")]
    NotFinite { field: &'static str, raw: String },
    #[error("{field}: {raw} must not be negative")]
    Negative { field: &'static str, raw: String },
    #[error("height must be greater than zero, got {raw}")]
    NonPositiveHeight { raw: String },
    #[error("{field}: unknown value '{raw}'")]
    UnknownToken { field: &'static str, raw: String },
    #[error("unknown sex '{0}', expected male or female")]
    UnknownSex(String),
}

impl InputError {
    /// Input key the error refers to, if it concerns a single field.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            InputError::NotANumber { field, .. }
            | InputError::NotFinite { field, .. }
            | InputError::Negative { field, .. }
            | InputError::UnknownToken { field, .. } => Some(*field),
            InputError::NonPositiveHeight { .. } => Some("height"),
            InputError::UnknownSex(_) => None,
        }
    }
}
