//! # Error Types
//!
//! Validation errors for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! tally-core   ValidationError   - input validation failures
//! tally-store  StoreError        - persistence failures (separate crate)
//! apps/pos     ShellError        - what command callers see
//!
//! Flow: ValidationError ─┐
//!       StoreError ──────┴──► ShellError ──► host shell
//! ```
//!
//! ## Design Principles
//! 1. `thiserror` derive macros, never manual impls
//! 2. Context (field name, value) inside the variant
//! 3. Errors are enum variants, never String

use thiserror::Error;

/// Input validation errors.
///
/// Raised by the draft constructors in [`crate::types`] and the helpers
/// in [`crate::validation`] before anything touches storage.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// A monetary amount was negative where only zero or more is valid.
    #[error("{field} must not be negative")]
    NegativeAmount { field: String },
}

/// Convenience alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::NegativeAmount {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must not be negative");
    }
}
