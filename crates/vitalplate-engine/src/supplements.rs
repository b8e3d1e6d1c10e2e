// ABOUTME: Maps detected deficits to supplement suggestions with severity-banded doses
// ABOUTME: Fixed lookup table plus an always-appended disclaimer entry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalplate

use vitalplate_core::constants::messages::SUPPLEMENT_DISCLAIMER;
use vitalplate_core::models::{Deficit, Priority, Recommendation, SupplementRecommendation};

use crate::config::SupplementConfig;

/// One row of the supplement table
#[derive(Debug, Clone, Copy)]
struct SupplementEntry {
    markers: &'static [&'static str],
    name: &'static str,
    strong_dose: &'static str,
    standard_dose: &'static str,
    form: &'static str,
    note: &'static str,
    warning: Option<&'static str>,
}

const SUPPLEMENT_TABLE: &[SupplementEntry] = &[
    SupplementEntry {
        markers: &["vitamin_d"],
        name: "Vitamin D3",
        strong_dose: "2000-4000 IU/day",
        standard_dose: "1000-2000 IU/day",
        form: "Cholecalciferol (D3)",
        note: "Take with a meal containing fat for better absorption. Re-check levels in 2-3 months.",
        warning: None,
    },
    SupplementEntry {
        markers: &["b12"],
        name: "Vitamin B12",
        strong_dose: "1000 mcg/day (sublingual)",
        standard_dose: "500 mcg/day",
        form: "Methylcobalamin (preferred)",
        note: "Methylcobalamin or cyanocobalamin. Can be taken sublingually.",
        warning: None,
    },
    SupplementEntry {
        markers: &["iron"],
        name: "Iron",
        strong_dose: "18-27 mg/day elemental iron",
        standard_dose: "18-27 mg/day elemental iron",
        form: "Iron bisglycinate",
        note: "Chelated iron bisglycinate has fewer side effects. Take apart from coffee, tea, \
               and calcium, and with vitamin C for better absorption.",
        warning: Some("Consult a doctor if the deficiency is severe."),
    },
    SupplementEntry {
        markers: &["folate"],
        name: "Folate (B9)",
        strong_dose: "400-800 mcg/day",
        standard_dose: "400-800 mcg/day",
        form: "L-methylfolate",
        note: "Methylfolate is preferred over folic acid.",
        warning: None,
    },
    SupplementEntry {
        markers: &["triglycerides", "ldl"],
        name: "Omega-3 (EPA/DHA)",
        strong_dose: "1-2 g/day EPA+DHA",
        standard_dose: "1-2 g/day EPA+DHA",
        form: "Triglyceride form (preferred)",
        note: "High-quality fish oil or algae oil (vegan option), or 2-3 servings of oily fish per week.",
        warning: None,
    },
    SupplementEntry {
        markers: &["inflammation", "glycemic_control"],
        name: "Magnesium",
        strong_dose: "300-400 mg/day",
        standard_dose: "300-400 mg/day",
        form: "Magnesium citrate or glycinate",
        note: "Citrate or glycinate forms. Supports glucose control and lowers inflammation.",
        warning: None,
    },
];

/// Suggests supplements for a set of deficits
#[derive(Debug, Clone, Default)]
pub struct SupplementAdvisor {
    config: SupplementConfig,
}

impl SupplementAdvisor {
    /// Advisor with default banding
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advisor with explicit banding
    #[must_use]
    pub const fn with_config(config: SupplementConfig) -> Self {
        Self { config }
    }

    /// One entry per table row whose markers appear in `deficits`, in table order,
    /// followed by the disclaimer.
    #[must_use]
    pub fn recommend(&self, deficits: &[Deficit]) -> Vec<Recommendation> {
        let mut recommendations: Vec<Recommendation> = SUPPLEMENT_TABLE
            .iter()
            .filter_map(|entry| {
                let severity = deficits
                    .iter()
                    .filter(|d| entry.markers.contains(&d.marker.as_str()))
                    .map(|d| d.severity)
                    .reduce(f64::max)?;
                Some(Recommendation::Supplement(self.build(entry, severity)))
            })
            .collect();

        recommendations.push(Recommendation::Disclaimer {
            disclaimer: SUPPLEMENT_DISCLAIMER.to_owned(),
        });
        recommendations
    }

    fn build(&self, entry: &SupplementEntry, severity: f64) -> SupplementRecommendation {
        let strong = severity > self.config.strong_dose_severity;
        SupplementRecommendation {
            name: entry.name.to_owned(),
            dose: if strong {
                entry.strong_dose
            } else {
                entry.standard_dose
            }
            .to_owned(),
            priority: Priority::from_severity(severity, self.config.strong_dose_severity),
            form: entry.form.to_owned(),
            note: entry.note.to_owned(),
            warning: entry.warning.map(str::to_owned),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use vitalplate_core::models::ComparisonOperator;

    use super::*;

    fn deficit(marker: &str, severity: f64) -> Deficit {
        Deficit {
            marker: marker.to_owned(),
            marker_key: marker.to_owned(),
            value: 1.0,
            threshold: 2.0,
            operator: ComparisonOperator::LessThan,
            why: String::new(),
            targets: BTreeMap::new(),
            foods: Vec::new(),
            severity,
        }
    }

    #[test]
    fn test_no_deficits_yields_only_disclaimer() {
        let recs = SupplementAdvisor::new().recommend(&[]);
        assert_eq!(recs.len(), 1);
        assert!(recs[0].is_disclaimer());
    }

    #[test]
    fn test_dose_band_follows_severity() {
        let advisor = SupplementAdvisor::new();
        let strong = advisor.recommend(&[deficit("vitamin_d", 0.8)]);
        let mild = advisor.recommend(&[deficit("vitamin_d", 0.2)]);

        let strong = strong[0].as_supplement().unwrap();
        let mild = mild[0].as_supplement().unwrap();
        assert_eq!(strong.dose, "2000-4000 IU/day");
        assert_eq!(strong.priority, Priority::High);
        assert_eq!(mild.dose, "1000-2000 IU/day");
        assert_eq!(mild.priority, Priority::Medium);
    }

    #[test]
    fn test_shared_entry_appears_once_with_max_severity() {
        let recs =
            SupplementAdvisor::new().recommend(&[deficit("ldl", 0.2), deficit("triglycerides", 0.9)]);
        let names: Vec<&str> = recs
            .iter()
            .filter_map(Recommendation::as_supplement)
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, ["Omega-3 (EPA/DHA)"]);
        assert_eq!(recs[0].as_supplement().unwrap().priority, Priority::High);
    }

    #[test]
    fn test_table_order_and_unmapped_markers() {
        let recs = SupplementAdvisor::new().recommend(&[
            deficit("iron", 0.3),
            deficit("unknown_marker", 0.9),
            deficit("vitamin_d", 0.1),
        ]);
        let names: Vec<&str> = recs
            .iter()
            .filter_map(Recommendation::as_supplement)
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, ["Vitamin D3", "Iron"]);
        assert!(recs[1].as_supplement().unwrap().warning.is_some());
        assert!(recs.last().unwrap().is_disclaimer());
    }
}
