// ABOUTME: Shopping list aggregation across a selected meal plan
// ABOUTME: Counts missing ingredients, keeps first-seen amounts, and ranks by how often each is needed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalplate

use std::collections::{HashMap, HashSet};

use vitalplate_core::models::{PlanItem, Priority, ShoppingItem};

use crate::config::EngineConfig;
use crate::recipes::lowercase_set;

/// Builds a prioritized shopping list from a plan
#[derive(Debug, Clone)]
pub struct ShoppingListBuilder {
    pantry: HashSet<String>,
}

impl Default for ShoppingListBuilder {
    fn default() -> Self {
        Self::with_pantry(&EngineConfig::default().pantry_staples)
    }
}

impl ShoppingListBuilder {
    /// Builder with the default pantry staples
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder with explicit pantry staples (matched case-insensitively)
    #[must_use]
    pub fn with_pantry(pantry_staples: &[String]) -> Self {
        Self {
            pantry: lowercase_set(pantry_staples),
        }
    }

    /// Aggregate every plan ingredient the user still needs.
    ///
    /// Ingredients in `available` (exact spelling) or in the pantry are skipped.
    /// Output is ordered by count descending then name ascending.
    #[must_use]
    pub fn build(&self, plan: &[PlanItem], available: Option<&[String]>) -> Vec<ShoppingItem> {
        let available: HashSet<&str> = available
            .unwrap_or_default()
            .iter()
            .map(String::as_str)
            .collect();

        // name → (count, first-seen amount)
        let mut tally: HashMap<&str, (usize, &str)> = HashMap::new();
        for item in plan {
            for ingredient in &item.recipe.ingredients {
                let name = ingredient.name.as_str();
                if available.contains(name) || self.pantry.contains(&name.to_lowercase()) {
                    continue;
                }
                tally
                    .entry(name)
                    .and_modify(|(count, _)| *count += 1)
                    .or_insert((1, ingredient.amount.as_str()));
            }
        }

        let mut items: Vec<ShoppingItem> = tally
            .into_iter()
            .map(|(name, (count, amount))| ShoppingItem {
                ingredient: name.to_owned(),
                count,
                amount: amount.to_owned(),
                priority: Priority::from_count(count),
            })
            .collect();
        items.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.ingredient.cmp(&b.ingredient))
        });
        items
    }
}
