//! # API Error Type
//!
//! Unified error type for CLI commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow                                           │
//! │                                                                         │
//! │  Command Function ── Result<String, ApiError>                           │
//! │         │                                                               │
//! │         ├── CoreError::InvalidSize ──────────┐                          │
//! │         ├── CoreError::InvalidOrderCount ────┤                          │
//! │         ├── ConfigError ─────────────────────┼──► ApiError ──► stderr   │
//! │         └── unreadable / malformed input ────┘     (text or JSON)       │
//! │                                                                         │
//! │  exit status 1                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! With `--json` the caller receives:
//! ```json
//! { "code": "INVALID_SIZE", "message": "Invalid pizza size: huge" }
//! ```

use pizza_core::CoreError;
use serde::Serialize;

use crate::config::ConfigError;

/// Error reported by a command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Size unknown or missing from the catalog
    InvalidSize,

    /// Order count below 1
    InvalidOrderCount,

    /// Catalog prices too large to add up
    PriceOverflow,

    /// Field-level validation failed
    ValidationError,

    /// Environment or catalog file is unusable
    ConfigError,

    /// Input file missing or malformed
    InputError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates an input error.
    pub fn input(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InputError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::InvalidSize(_) => ErrorCode::InvalidSize,
            CoreError::InvalidOrderCount(_) => ErrorCode::InvalidOrderCount,
            CoreError::PriceOverflow(_) => ErrorCode::PriceOverflow,
            CoreError::Validation(_) => ErrorCode::ValidationError,
        };
        ApiError::new(code, err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

/// Anything that escapes with `anyhow` context is an input problem.
impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::input(format!("{err:#}"))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
