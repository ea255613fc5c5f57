//! Field violations reported by form validation.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FieldViolation {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} does not match {expected}")]
    Mismatch {
        field: &'static str,
        expected: &'static str,
    },
}
