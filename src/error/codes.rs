//! Standardized error codes for machine-parseable output.
//!
//! Error codes follow a numeric taxonomy:
//! - 1xx: Validation errors
//! - 2xx: Bundle state errors
//! - 3xx: Config errors
//! - 5xx: Network errors
//! - 6xx: Storage errors
//! - 9xx: Internal errors

use serde::{Deserialize, Serialize};

/// Standardized error codes for robot mode output.
///
/// Each variant maps to a numeric code (e.g., `InvalidProduct` -> E101).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================
    // Validation errors (1xx)
    // ========================================
    /// E101: Product is missing an id or has an invalid price/rating
    InvalidProduct,
    /// E102: Input failed validation
    ValidationFailed,

    // ========================================
    // Bundle state errors (2xx)
    // ========================================
    /// E201: Operation needs an optimized bundle but none is present
    NoOptimization,
    /// E202: Slot index does not exist in the current bundle
    SlotOutOfRange,
    /// E203: Optimize response was superseded by a newer request
    StaleResponse,

    // ========================================
    // Config errors (3xx)
    // ========================================
    /// E302: Config file has invalid syntax or values
    ConfigInvalid,
    /// E304: Required config value is missing
    ConfigMissingRequired,

    // ========================================
    // Network errors (5xx)
    // ========================================
    /// E501: Optimizer service failed or was unreachable
    OptimizerUnavailable,

    // ========================================
    // Storage errors (6xx)
    // ========================================
    /// E601: Persisted state could not be read or written
    StorageError,
    /// E604: SQLite returned an error
    DatabaseError,
    /// E605: Data could not be (de)serialized
    SerializationError,

    // ========================================
    // Internal errors (9xx)
    // ========================================
    /// E904: Internal invariant check failed
    InvariantViolation,
    /// E905: Generic not found
    NotFound,
    /// E906: IO operation failed
    IoError,
}

impl ErrorCode {
    /// Get the numeric error code (e.g., `InvalidProduct` -> 101).
    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            Self::InvalidProduct => 101,
            Self::ValidationFailed => 102,

            Self::NoOptimization => 201,
            Self::SlotOutOfRange => 202,
            Self::StaleResponse => 203,

            Self::ConfigInvalid => 302,
            Self::ConfigMissingRequired => 304,

            Self::OptimizerUnavailable => 501,

            Self::StorageError => 601,
            Self::DatabaseError => 604,
            Self::SerializationError => 605,

            Self::InvariantViolation => 904,
            Self::NotFound => 905,
            Self::IoError => 906,
        }
    }

    /// Get the error code as a formatted string (e.g., "E101").
    #[must_use]
    pub fn code_string(&self) -> String {
        format!("E{}", self.numeric())
    }

    /// Get the default suggestion for this error code.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::InvalidProduct => "Every product needs a non-empty id and a finite, non-negative price",
            Self::ValidationFailed => "Check the input values and try again",

            Self::NoOptimization => "Run `cartwise optimize` to request an optimized bundle first",
            Self::SlotOutOfRange => "Use a slot index shown by `cartwise optimize`",
            Self::StaleResponse => "A newer optimize request is in flight; this response was dropped",

            Self::ConfigInvalid => "Check TOML syntax and value types in the config file",
            Self::ConfigMissingRequired => "Set the missing value in config.toml or via its CARTWISE_* variable",

            Self::OptimizerUnavailable => "Check optimizer.endpoint and network connectivity, then retry",

            Self::StorageError => "Check permissions on the storage path or switch storage.backend",
            Self::DatabaseError => "The state database may be corrupted. Remove it to start from an empty cart",
            Self::SerializationError => "The data format may be corrupted. Check input data for validity",

            Self::InvariantViolation => "Internal invariant failed. This is a bug. Please report with full context",
            Self::NotFound => "The requested resource was not found. Check the identifier",
            Self::IoError => "File operation failed. Check path exists and permissions are correct",
        }
    }

    /// Check if this error is potentially recoverable by the user.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::InvariantViolation | Self::DatabaseError)
    }

    /// Get the category name for this error code.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.numeric() / 100 {
            1 => "validation",
            2 => "bundle",
            3 => "config",
            5 => "network",
            6 => "storage",
            _ => "internal",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code_string())
    }
}
