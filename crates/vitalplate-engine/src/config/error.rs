// ABOUTME: Errors raised while building or validating the engine configuration
// ABOUTME: Covers unparseable environment overrides and out-of-range scoring values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalplate

use thiserror::Error;

/// Why an [`EngineConfig`](super::EngineConfig) was rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Two thresholds that must be ordered are not
    #[error("thresholds out of order: {0}")]
    InvalidRange(&'static str),

    /// An environment override could not be parsed into its field type
    #[error("cannot parse override: {0}")]
    Parse(String),

    /// A scoring weight is negative or not finite
    #[error("bad scoring weight: {0}")]
    InvalidWeights(&'static str),

    /// A count, distance, or factor is outside its allowed range
    #[error("value out of range: {0}")]
    ValueOutOfRange(&'static str),
}
