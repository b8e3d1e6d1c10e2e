// ABOUTME: Free-form user preferences attached to a planning request
// ABOUTME: Only the available-ingredients list is interpreted; other keys are carried through
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalplate

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// User preferences for meal planning
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Preferences {
    /// Ingredients the user already has
    #[serde(default)]
    pub available: Vec<String>,
    /// Any other preference keys (diet, allergies, ...), kept verbatim
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Preferences {
    /// Preferences with only an available-ingredients list
    #[must_use]
    pub fn with_available(available: Vec<String>) -> Self {
        Self {
            available,
            extra: BTreeMap::new(),
        }
    }

    /// The explicit list when non-empty, otherwise the preference list
    #[must_use]
    pub fn effective_available<'a>(&'a self, explicit: Option<&'a [String]>) -> &'a [String] {
        match explicit {
            Some(list) if !list.is_empty() => list,
            _ => &self.available,
        }
    }
}
