// ABOUTME: Caller-facing validation errors checked by the orchestrating layer
// ABOUTME: Missing inputs, out-of-range locations, bad search radii, and unknown request modes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalplate

use thiserror::Error;

/// Structurally invalid caller input.
///
/// The engine itself never produces these; they are preconditions enforced
/// before any engine operation runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A location is required for the requested mode but was not supplied
    #[error("mode '{mode}' requires a location (lat, lon)")]
    MissingLocation {
        /// Request mode that needs the location
        mode: String,
    },

    /// The mode plans from the user's own ingredients but none were supplied
    #[error("mode '{mode}' requires at least one available ingredient")]
    MissingIngredients {
        /// Request mode that needs the ingredients
        mode: String,
    },

    /// Latitude or longitude outside decimal-degree bounds
    #[error("coordinates out of range: lat={lat}, lon={lon}")]
    CoordinatesOutOfRange {
        /// Supplied latitude
        lat: f64,
        /// Supplied longitude
        lon: f64,
    },

    /// Search radius must be a positive number of kilometers
    #[error("search radius must be positive, got {0} km")]
    NonPositiveRadius(f64),

    /// Request mode is not recognised
    #[error("unknown mode: {0}")]
    UnknownMode(String),
}
