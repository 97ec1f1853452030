//! Error handling for cartwise.
//!
//! This module provides:
//! - [`CartwiseError`]: The main error enum for all cart and bundle operations
//! - [`ErrorCode`]: Standardized error codes for machine parsing
//! - [`StructuredError`]: Rich error type with suggestion and context for robot output

mod codes;

use std::io;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use codes::ErrorCode;

/// Main error type for cartwise operations.
#[derive(Error, Debug)]
pub enum CartwiseError {
    #[error("Invalid product {product_id}: {reason}")]
    InvalidProduct { product_id: String, reason: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Stale optimize response: sequence {sequence} superseded by {latest}")]
    StaleResponse { sequence: u64, latest: u64 },

    #[error("Bundle invariant violated: {0}")]
    InvariantViolation(String),

    #[error("Optimizer request failed: {0}")]
    ExternalFetch(String),

    #[error("No optimized bundle is present")]
    NoOptimization,

    #[error("Slot index {index} out of range (bundle has {len} slots)")]
    SlotOutOfRange { index: usize, len: usize },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Missing required config: {0}")]
    MissingConfig(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl CartwiseError {
    /// Shorthand for a product-level validation failure.
    pub fn invalid_product(product_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidProduct {
            product_id: product_id.into(),
            reason: reason.into(),
        }
    }

    /// Get the error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidProduct { .. } => ErrorCode::InvalidProduct,
            Self::Validation(_) => ErrorCode::ValidationFailed,
            Self::StaleResponse { .. } => ErrorCode::StaleResponse,
            Self::InvariantViolation(_) => ErrorCode::InvariantViolation,
            Self::ExternalFetch(_) => ErrorCode::OptimizerUnavailable,
            Self::NoOptimization => ErrorCode::NoOptimization,
            Self::SlotOutOfRange { .. } => ErrorCode::SlotOutOfRange,
            Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::MissingConfig(_) => ErrorCode::ConfigMissingRequired,
            Self::Storage(_) => ErrorCode::StorageError,
            Self::Database(_) => ErrorCode::DatabaseError,
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) => ErrorCode::SerializationError,
            Self::NotFound(_) => ErrorCode::NotFound,
        }
    }

    /// Whether the error should be shown to the user.
    ///
    /// Superseded optimize responses are dropped silently.
    #[must_use]
    pub const fn is_user_facing(&self) -> bool {
        !matches!(self, Self::StaleResponse { .. })
    }

    /// Get context information for this error as JSON.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::InvalidProduct { product_id, reason } => {
                Some(serde_json::json!({ "product_id": product_id, "reason": reason }))
            }
            Self::StaleResponse { sequence, latest } => {
                Some(serde_json::json!({ "sequence": sequence, "latest": latest }))
            }
            Self::SlotOutOfRange { index, len } => {
                Some(serde_json::json!({ "slot_index": index, "slot_count": len }))
            }
            Self::MissingConfig(key) => Some(serde_json::json!({ "config_key": key })),
            _ => None,
        }
    }

    /// Convert this error to a structured error.
    #[must_use]
    pub fn to_structured(&self) -> StructuredError {
        StructuredError::from_error(self)
    }
}

/// A structured error with machine-readable code, suggestion, and context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// The error code (e.g., "INVALID_PRODUCT")
    pub code: ErrorCode,

    /// The numeric error code (e.g., 101)
    pub numeric_code: u16,

    /// Human-readable error message
    pub message: String,

    /// Actionable suggestion for recovery
    pub suggestion: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,

    pub recoverable: bool,

    /// Error category (e.g., "validation", "network")
    pub category: String,
}

impl StructuredError {
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            numeric_code: code.numeric(),
            suggestion: code.suggestion().to_string(),
            context: None,
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
            code,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn from_error(err: &CartwiseError) -> Self {
        let mut structured = Self::new(err.code(), err.to_string());
        structured.context = err.context();
        structured
    }

    /// Attach context to this error.
    #[must_use]
    pub fn with_context(mut self, context: Value) -> Self {
        self.context = Some(context);
        self
    }
}

impl std::fmt::Display for StructuredError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code.code_string(), self.message)
    }
}

pub type Result<T> = std::result::Result<T, CartwiseError>;
