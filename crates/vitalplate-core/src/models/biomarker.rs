// ABOUTME: Biomarker rule model with load-time validation
// ABOUTME: ComparisonOperator, the raw BiomarkerRuleRecord, and the validated BiomarkerRule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalplate

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::InvalidRuleError;

/// Sparse lab panel: biomarker name → measured value
pub type LabPanel = BTreeMap<String, f64>;

/// Comparison applied between a lab value and a rule threshold
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    /// Value strictly below the threshold
    #[serde(rename = "<")]
    LessThan,
    /// Value strictly above the threshold
    #[serde(rename = ">")]
    GreaterThan,
    /// Value at or below the threshold
    #[serde(rename = "<=")]
    LessOrEqual,
    /// Value at or above the threshold
    #[serde(rename = ">=")]
    GreaterOrEqual,
}

impl ComparisonOperator {
    /// Parse the textual operator used in rule catalogs
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim() {
            "<" => Some(Self::LessThan),
            ">" => Some(Self::GreaterThan),
            "<=" => Some(Self::LessOrEqual),
            ">=" => Some(Self::GreaterOrEqual),
            _ => None,
        }
    }

    /// Textual form of the operator
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::LessOrEqual => "<=",
            Self::GreaterOrEqual => ">=",
        }
    }

    /// Whether the rule fires for `value` against `threshold`
    #[must_use]
    pub fn matches(&self, value: f64, threshold: f64) -> bool {
        match self {
            Self::LessThan => value < threshold,
            Self::GreaterThan => value > threshold,
            Self::LessOrEqual => value <= threshold,
            Self::GreaterOrEqual => value >= threshold,
        }
    }

    /// True for the "too low" family of operators
    #[must_use]
    pub const fn flags_low_values(&self) -> bool {
        matches!(self, Self::LessThan | Self::LessOrEqual)
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unvalidated rule as it appears in a catalog file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BiomarkerRuleRecord {
    /// Lab field to read (e.g. `ferritin`)
    pub marker_key: String,
    /// Comparison operator text
    pub operator: String,
    /// Threshold compared against the lab value
    pub threshold: f64,
    /// Deficit tag emitted when the rule fires (e.g. `iron`)
    pub deficit_tag: String,
    /// Short human-readable reason
    #[serde(alias = "reason_template")]
    pub reason: String,
    /// Nutrient or goal → guidance text
    #[serde(default)]
    pub targets: BTreeMap<String, String>,
    /// Foods that help, in display order
    #[serde(default)]
    pub foods: Vec<String>,
}

/// A validated biomarker rule.
///
/// Only constructible through [`BiomarkerRule::try_new`] (or deserialization, which
/// runs the same checks), so every rule the engine evaluates has a known operator and
/// a positive finite threshold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "BiomarkerRuleRecord", into = "BiomarkerRuleRecord")]
pub struct BiomarkerRule {
    marker_key: String,
    operator: ComparisonOperator,
    threshold: f64,
    deficit_tag: String,
    reason: String,
    targets: BTreeMap<String, String>,
    foods: Vec<String>,
}

impl BiomarkerRule {
    /// Validate a raw record into a rule
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRuleError`] when the marker key or deficit tag is blank, the
    /// operator is not one of `<`, `>`, `<=`, `>=`, or the threshold is not a positive
    /// finite number.
    pub fn try_new(record: BiomarkerRuleRecord) -> Result<Self, InvalidRuleError> {
        if record.marker_key.trim().is_empty() {
            return Err(InvalidRuleError::BlankField {
                field: "marker_key",
            });
        }
        if record.deficit_tag.trim().is_empty() {
            return Err(InvalidRuleError::BlankField {
                field: "deficit_tag",
            });
        }
        let operator = ComparisonOperator::parse(&record.operator).ok_or_else(|| {
            InvalidRuleError::unknown_operator(&record.marker_key, &record.operator)
        })?;
        if !record.threshold.is_finite() || record.threshold <= 0.0 {
            return Err(InvalidRuleError::unusable_threshold(
                &record.marker_key,
                record.threshold,
            ));
        }

        Ok(Self {
            marker_key: record.marker_key,
            operator,
            threshold: record.threshold,
            deficit_tag: record.deficit_tag,
            reason: record.reason,
            targets: record.targets,
            foods: record.foods,
        })
    }

    /// Lab field this rule reads
    #[must_use]
    pub fn marker_key(&self) -> &str {
        &self.marker_key
    }

    /// Comparison operator
    #[must_use]
    pub const fn operator(&self) -> ComparisonOperator {
        self.operator
    }

    /// Threshold value (always positive and finite)
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Deficit tag emitted when this rule fires
    #[must_use]
    pub fn deficit_tag(&self) -> &str {
        &self.deficit_tag
    }

    /// Human-readable reason
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Nutrient or goal guidance
    #[must_use]
    pub const fn targets(&self) -> &BTreeMap<String, String> {
        &self.targets
    }

    /// Helpful foods in display order
    #[must_use]
    pub fn foods(&self) -> &[String] {
        &self.foods
    }
}

impl TryFrom<BiomarkerRuleRecord> for BiomarkerRule {
    type Error = InvalidRuleError;

    fn try_from(record: BiomarkerRuleRecord) -> Result<Self, Self::Error> {
        Self::try_new(record)
    }
}

impl From<BiomarkerRule> for BiomarkerRuleRecord {
    fn from(rule: BiomarkerRule) -> Self {
        Self {
            marker_key: rule.marker_key,
            operator: rule.operator.as_str().to_owned(),
            threshold: rule.threshold,
            deficit_tag: rule.deficit_tag,
            reason: rule.reason,
            targets: rule.targets,
            foods: rule.foods,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(operator: &str, threshold: f64) -> BiomarkerRuleRecord {
        BiomarkerRuleRecord {
            marker_key: "ferritin".to_owned(),
            operator: operator.to_owned(),
            threshold,
            deficit_tag: "iron".to_owned(),
            reason: "low ferritin".to_owned(),
            targets: BTreeMap::new(),
            foods: vec!["lentils".to_owned()],
        }
    }

    #[test]
    fn test_valid_rule_is_accepted() {
        let rule = BiomarkerRule::try_new(record("<", 30.0)).unwrap();
        assert_eq!(rule.operator(), ComparisonOperator::LessThan);
        assert_eq!(rule.deficit_tag(), "iron");
    }

    #[test]
    fn test_unknown_operator_is_rejected() {
        let err = BiomarkerRule::try_new(record("==", 30.0)).unwrap_err();
        assert!(matches!(err, InvalidRuleError::UnknownOperator { .. }));
    }

    #[test]
    fn test_unusable_thresholds_are_rejected() {
        for threshold in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = BiomarkerRule::try_new(record(">", threshold)).unwrap_err();
            assert!(matches!(err, InvalidRuleError::UnusableThreshold { .. }));
        }
    }

    #[test]
    fn test_blank_tag_is_rejected() {
        let mut raw = record("<", 30.0);
        raw.deficit_tag = "  ".to_owned();
        assert_eq!(
            BiomarkerRule::try_new(raw).unwrap_err(),
            InvalidRuleError::BlankField {
                field: "deficit_tag"
            }
        );
    }

    #[test]
    fn test_deserialization_runs_validation() {
        let json = r#"{"marker_key":"crp","operator":"!","threshold":3,"deficit_tag":"inflammation","reason":"x"}"#;
        assert!(serde_json::from_str::<BiomarkerRule>(json).is_err());

        let json = r#"{"marker_key":"crp","operator":">","threshold":3,"deficit_tag":"inflammation","reason_template":"elevated CRP"}"#;
        let rule: BiomarkerRule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.reason(), "elevated CRP");
        assert!(rule.foods().is_empty());
    }

    #[test]
    fn test_operator_boundaries() {
        assert!(!ComparisonOperator::LessThan.matches(30.0, 30.0));
        assert!(ComparisonOperator::LessOrEqual.matches(30.0, 30.0));
        assert!(!ComparisonOperator::GreaterThan.matches(5.6, 5.6));
        assert!(ComparisonOperator::GreaterOrEqual.matches(5.6, 5.6));
    }
}
