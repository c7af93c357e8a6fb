//! # Shell Error Type
//!
//! Unified error type for application commands.
//!
//! Every command returns `Result<T, ShellError>`; lower-layer errors
//! (validation failures from tally-core, storage failures from
//! tally-store) are mapped here into a machine-readable `code` plus a
//! human-readable `message`, which is the shape a host UI wants to
//! display or branch on:
//!
//! ```json
//! {
//!   "code": "NOT_FOUND",
//!   "message": "Product not found: 9b2f..."
//! }
//! ```

use serde::Serialize;
use tally_core::ValidationError;
use tally_store::StoreError;

/// Error returned from application commands.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Storage operation failed
    StoreError,

    /// Checkout flow used out of order (submit with nothing payable,
    /// confirm with no pending receipt, ...)
    CheckoutError,

    /// Bundled sample dataset could not be parsed
    BootstrapError,

    /// Anything else
    Internal,
}

impl ShellError {
    /// Creates a new shell error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ShellError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ShellError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ShellError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a checkout flow error.
    pub fn checkout(message: impl Into<String>) -> Self {
        ShellError::new(ErrorCode::CheckoutError, message)
    }
}

/// Converts storage errors to shell errors.
impl From<StoreError> for ShellError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => ShellError::not_found(&entity, &id),
            StoreError::UniqueViolation { field, value } => ShellError::new(
                ErrorCode::ValidationError,
                format!("{} '{}' already exists", field, value),
            ),
            StoreError::ConnectionFailed(_) => {
                ShellError::new(ErrorCode::StoreError, "Database connection failed")
            }
            StoreError::MigrationFailed(_) => {
                ShellError::new(ErrorCode::StoreError, "Database migration failed")
            }
            StoreError::QueryFailed(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Database query failed: {}", e);
                ShellError::new(ErrorCode::StoreError, "Database operation failed")
            }
            StoreError::PoolExhausted => {
                ShellError::new(ErrorCode::StoreError, "Database pool exhausted")
            }
            StoreError::Serialization(e) => {
                tracing::error!("Snapshot serialization failed: {}", e);
                ShellError::new(ErrorCode::StoreError, "Sale snapshot could not be decoded")
            }
            StoreError::PasswordHash(e) => {
                tracing::error!("Password hashing failed: {}", e);
                ShellError::new(ErrorCode::Internal, "Credential processing failed")
            }
            StoreError::Internal(e) => {
                tracing::error!("Internal store error: {}", e);
                ShellError::new(ErrorCode::StoreError, "Database operation failed")
            }
        }
    }
}

/// Converts field validation errors to shell errors.
impl From<ValidationError> for ShellError {
    fn from(err: ValidationError) -> Self {
        ShellError::validation(err.to_string())
    }
}

/// Converts sample-dataset parse failures to shell errors.
impl From<serde_json::Error> for ShellError {
    fn from(err: serde_json::Error) -> Self {
        ShellError::new(
            ErrorCode::BootstrapError,
            format!("Sample dataset is malformed: {}", err),
        )
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ShellError {}
