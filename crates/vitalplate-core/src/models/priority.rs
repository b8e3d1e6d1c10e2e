// ABOUTME: Priority levels shared by shopping items and supplement suggestions
// ABOUTME: Serialized in lowercase (high, medium, low)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalplate

use serde::{Deserialize, Serialize};

/// Priority of a shopping item or supplement suggestion
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Act on this first
    High,
    /// Worth doing
    Medium,
    /// Nice to have
    Low,
}

impl Priority {
    /// Shopping priority from how many plan recipes need an ingredient
    #[must_use]
    pub const fn from_count(count: usize) -> Self {
        match count {
            0 | 1 => Self::Low,
            2 => Self::Medium,
            _ => Self::High,
        }
    }

    /// Supplement priority from deficit severity
    #[must_use]
    pub fn from_severity(severity: f64, strong_above: f64) -> Self {
        if severity > strong_above {
            Self::High
        } else {
            Self::Medium
        }
    }
}
