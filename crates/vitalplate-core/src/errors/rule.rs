// ABOUTME: Error type for malformed biomarker rules detected at catalog load time
// ABOUTME: Covers unknown comparison operators, unusable thresholds, and blank identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalplate

use thiserror::Error;

/// A biomarker rule that cannot be evaluated safely.
///
/// Raised once when a rule catalog is loaded so that a bad rule can never
/// intermittently fail a per-request analysis.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidRuleError {
    /// Operator is not one of `<`, `>`, `<=`, `>=`
    #[error("rule '{marker_key}': unknown operator '{operator}'")]
    UnknownOperator {
        /// Lab field the rule reads
        marker_key: String,
        /// Operator text as it appeared in the catalog
        operator: String,
    },

    /// Threshold is zero, negative, or not finite; severity divides by it
    #[error("rule '{marker_key}': threshold must be a positive finite number, got {threshold}")]
    UnusableThreshold {
        /// Lab field the rule reads
        marker_key: String,
        /// Offending threshold
        threshold: f64,
    },

    /// A required identifier is empty
    #[error("rule is missing required field '{field}'")]
    BlankField {
        /// Name of the empty field
        field: &'static str,
    },
}

impl InvalidRuleError {
    /// Create an "unknown operator" error
    #[must_use]
    pub fn unknown_operator(marker_key: impl Into<String>, operator: impl Into<String>) -> Self {
        Self::UnknownOperator {
            marker_key: marker_key.into(),
            operator: operator.into(),
        }
    }

    /// Create an "unusable threshold" error
    #[must_use]
    pub fn unusable_threshold(marker_key: impl Into<String>, threshold: f64) -> Self {
        Self::UnusableThreshold {
            marker_key: marker_key.into(),
            threshold,
        }
    }
}
