// ABOUTME: Supplement recommendation outputs
// ABOUTME: SupplementRecommendation entries plus the always-present disclaimer entry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalplate

use serde::{Deserialize, Serialize};

use super::priority::Priority;

/// One supplement suggestion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SupplementRecommendation {
    /// Supplement name
    pub name: String,
    /// Dosing band
    pub dose: String,
    /// High when the driving deficit is severe
    pub priority: Priority,
    /// Preferred chemical form
    pub form: String,
    /// Usage note
    pub note: String,
    /// Safety warning, when one applies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Entry in a supplement recommendation list
///
/// Serialized untagged: supplements as objects with `name`/`dose`/..., the disclaimer
/// as `{"disclaimer": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Recommendation {
    /// A supplement suggestion
    Supplement(SupplementRecommendation),
    /// Terminal disclaimer
    Disclaimer {
        /// Disclaimer text
        disclaimer: String,
    },
}

impl Recommendation {
    /// The supplement, if this entry is one
    #[must_use]
    pub const fn as_supplement(&self) -> Option<&SupplementRecommendation> {
        match self {
            Self::Supplement(supplement) => Some(supplement),
            Self::Disclaimer { .. } => None,
        }
    }

    /// Whether this entry is the disclaimer
    #[must_use]
    pub const fn is_disclaimer(&self) -> bool {
        matches!(self, Self::Disclaimer { .. })
    }
}
