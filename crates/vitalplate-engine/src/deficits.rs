// ABOUTME: Evaluates a lab panel against biomarker rules to detect deficits
// ABOUTME: Severity is the relative distance past the threshold, clamped to [0, 1]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalplate

//! Deficit detection
//!
//! Rules are validated when loaded, so evaluation here cannot fail: a missing or
//! non-finite lab value simply means the rule does not fire.

use std::cmp::Ordering;

use vitalplate_core::models::{BiomarkerRule, ComparisonOperator, Deficit, LabPanel};

/// Turns lab values into severity-scored deficits
#[derive(Debug, Clone, Copy, Default)]
pub struct DeficitAnalyzer;

impl DeficitAnalyzer {
    /// Create an analyzer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Evaluate every rule against the panel.
    ///
    /// Output is ordered by severity descending, ties broken by marker ascending.
    #[must_use]
    pub fn analyze(&self, labs: &LabPanel, rules: &[BiomarkerRule]) -> Vec<Deficit> {
        let mut deficits: Vec<Deficit> = rules
            .iter()
            .filter_map(|rule| {
                let value = *labs.get(rule.marker_key())?;
                if !value.is_finite() || !rule.operator().matches(value, rule.threshold()) {
                    return None;
                }
                let severity = severity(value, rule.threshold(), rule.operator());
                Some(Deficit::from_rule(rule, value, severity))
            })
            .collect();

        deficits.sort_by(compare_deficits);
        deficits
    }
}

/// Severity of a triggered rule, in [0, 1]
#[must_use]
pub fn severity(value: f64, threshold: f64, operator: ComparisonOperator) -> f64 {
    let deviation = if operator.flags_low_values() {
        (threshold - value) / threshold
    } else {
        (value - threshold) / threshold
    };
    clamp01(deviation)
}

fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

fn compare_deficits(a: &Deficit, b: &Deficit) -> Ordering {
    b.severity
        .total_cmp(&a.severity)
        .then_with(|| a.marker.cmp(&b.marker))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use vitalplate_core::models::BiomarkerRuleRecord;

    use super::*;

    fn rule(marker_key: &str, operator: &str, threshold: f64, tag: &str) -> BiomarkerRule {
        BiomarkerRule::try_new(BiomarkerRuleRecord {
            marker_key: marker_key.to_owned(),
            operator: operator.to_owned(),
            threshold,
            deficit_tag: tag.to_owned(),
            reason: format!("{marker_key} out of range"),
            targets: BTreeMap::new(),
            foods: Vec::new(),
        })
        .unwrap()
    }

    fn labs(entries: &[(&str, f64)]) -> LabPanel {
        entries.iter().map(|(k, v)| ((*k).to_owned(), *v)).collect()
    }

    #[test]
    fn test_low_ferritin_is_iron_deficit() {
        let rules = [rule("ferritin", "<", 30.0, "iron")];
        let deficits = DeficitAnalyzer::new().analyze(&labs(&[("ferritin", 20.0)]), &rules);
        assert_eq!(deficits.len(), 1);
        assert_eq!(deficits[0].marker, "iron");
        assert!((deficits[0].severity - 0.333).abs() < 0.001);
    }

    #[test]
    fn test_high_hba1c_is_glycemic_deficit() {
        let rules = [rule("hba1c", ">", 5.6, "glycemic_control")];
        let deficits = DeficitAnalyzer::new().analyze(&labs(&[("hba1c", 6.0)]), &rules);
        assert_eq!(deficits[0].marker, "glycemic_control");
        assert!((deficits[0].severity - 0.0714).abs() < 0.001);
    }

    #[test]
    fn test_at_threshold_does_not_fire_strict_rule() {
        let rules = [rule("ferritin", "<", 30.0, "iron")];
        let deficits = DeficitAnalyzer::new().analyze(&labs(&[("ferritin", 30.0)]), &rules);
        assert!(deficits.is_empty());
    }

    #[test]
    fn test_inclusive_rule_at_threshold_has_zero_severity() {
        let rules = [rule("ferritin", "<=", 30.0, "iron")];
        let deficits = DeficitAnalyzer::new().analyze(&labs(&[("ferritin", 30.0)]), &rules);
        assert_eq!(deficits.len(), 1);
        assert!(deficits[0].severity.abs() < 1e-12);
    }

    #[test]
    fn test_severity_is_clamped() {
        assert!((severity(-10.0, 30.0, ComparisonOperator::LessThan) - 1.0).abs() < 1e-12);
        assert!((severity(500.0, 100.0, ComparisonOperator::GreaterThan) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_missing_and_non_finite_values_are_skipped() {
        let rules = [
            rule("ferritin", "<", 30.0, "iron"),
            rule("b12", "<", 300.0, "b12"),
        ];
        let deficits = DeficitAnalyzer::new().analyze(&labs(&[("b12", f64::NAN)]), &rules);
        assert!(deficits.is_empty());
    }

    #[test]
    fn test_ordering_by_severity_then_marker() {
        let rules = [
            rule("x", "<", 10.0, "zeta"),
            rule("y", "<", 10.0, "alpha"),
            rule("z", "<", 10.0, "mid"),
        ];
        let panel = labs(&[("x", 5.0), ("y", 5.0), ("z", 1.0)]);
        let markers: Vec<String> = DeficitAnalyzer::new()
            .analyze(&panel, &rules)
            .into_iter()
            .map(|d| d.marker)
            .collect();
        assert_eq!(markers, ["mid", "alpha", "zeta"]);
    }
}
