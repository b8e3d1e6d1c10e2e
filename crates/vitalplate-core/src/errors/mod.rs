// ABOUTME: Unified error handling for the Vitalplate workspace
// ABOUTME: Defines ErrorCode, AppError, AppResult and re-exports the typed rule/validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalplate

//! # Unified Error Handling System
//!
//! Two typed errors make up the domain taxonomy:
//!
//! - [`InvalidRuleError`] is raised while a rule catalog is being loaded, never while
//!   a panel is analyzed.
//! - [`ValidationError`] is raised by the orchestrating layer for structurally invalid
//!   caller input (for example a restaurant search without a location).
//!
//! [`AppError`] wraps both (and catalog failures) behind a stable [`ErrorCode`]
//! so transports can map failures without inspecting variants.

mod rule;
mod validation;

pub use rule::InvalidRuleError;
pub use validation::ValidationError;

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Authorization (1000-1999)
    /// Caller does not own the resource it tried to change
    #[serde(rename = "PERMISSION_DENIED")]
    PermissionDenied = 1004,

    // Validation (3000-3999)
    /// Caller input is structurally invalid
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A required field is missing
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// A numeric value is outside its valid range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Configuration (6000-6999)
    /// A biomarker rule in the catalog is malformed
    #[serde(rename = "INVALID_RULE")]
    InvalidRule = 6003,

    // Internal Errors (9000-9999)
    /// Catalog storage could not be read
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// Data serialization/deserialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get the HTTP status code a transport layer should use for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::PermissionDenied => 403,
            Self::InvalidInput | Self::MissingRequiredField | Self::ValueOutOfRange => 400,
            Self::InvalidRule | Self::StorageError | Self::SerializationError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::PermissionDenied => "You do not have permission to perform this action",
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::InvalidRule => "A biomarker rule is malformed",
            Self::StorageError => "Catalog storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the service layer
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<InvalidRuleError> for AppError {
    fn from(error: InvalidRuleError) -> Self {
        Self::new(ErrorCode::InvalidRule, error.to_string()).with_source(error)
    }
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        let code = match &error {
            ValidationError::MissingLocation { .. } | ValidationError::MissingIngredients { .. } => {
                ErrorCode::MissingRequiredField
            }
            ValidationError::CoordinatesOutOfRange { .. }
            | ValidationError::NonPositiveRadius(_) => ErrorCode::ValueOutOfRange,
            ValidationError::UnknownMode(_) => ErrorCode::InvalidInput,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
