// ABOUTME: Deficit model emitted when a biomarker rule fires
// ABOUTME: Carries the rule context plus a severity normalized to [0, 1]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalplate

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::biomarker::{BiomarkerRule, ComparisonOperator};

/// A detected nutritional deficit or risk marker
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Deficit {
    /// Deficit tag (e.g. `iron`, `glycemic_control`)
    pub marker: String,
    /// Lab field that triggered the deficit
    pub marker_key: String,
    /// Measured lab value
    pub value: f64,
    /// Rule threshold
    pub threshold: f64,
    /// Rule operator
    pub operator: ComparisonOperator,
    /// Human-readable reason
    pub why: String,
    /// Nutrient or goal → guidance text
    pub targets: BTreeMap<String, String>,
    /// Helpful foods
    pub foods: Vec<String>,
    /// Distance past the threshold, normalized to [0, 1]
    pub severity: f64,
}

impl Deficit {
    /// Build a deficit from the rule that fired
    #[must_use]
    pub fn from_rule(rule: &BiomarkerRule, value: f64, severity: f64) -> Self {
        Self {
            marker: rule.deficit_tag().to_owned(),
            marker_key: rule.marker_key().to_owned(),
            value,
            threshold: rule.threshold(),
            operator: rule.operator(),
            why: rule.reason().to_owned(),
            targets: rule.targets().clone(),
            foods: rule.foods().to_vec(),
            severity,
        }
    }
}
