// ABOUTME: Recipe catalog models and meal-plan outputs
// ABOUTME: Recipe, Ingredient, PlanItem, and ShoppingItem definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalplate

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::priority::Priority;

const fn default_time_min() -> u32 {
    30
}

const fn default_difficulty() -> u8 {
    2
}

/// Ingredient line of a recipe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ingredient {
    /// Ingredient name as written in the recipe
    pub name: String,
    /// Free-text amount (e.g. "150 g", "1 pc")
    #[serde(default)]
    pub amount: String,
}

impl Ingredient {
    /// Create an ingredient line
    #[must_use]
    pub fn new(name: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
        }
    }
}

/// A recipe from the public catalog or owned by a user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Preparation time in minutes
    #[serde(default = "default_time_min")]
    pub time_min: u32,
    /// Ingredient lines in recipe order
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Preparation steps
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Tags, including deficit markers the recipe helps with
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Nutrient name → amount per serving
    #[serde(default)]
    pub nutrients: BTreeMap<String, f64>,
    /// Difficulty, 1 (easy) upward
    #[serde(default = "default_difficulty")]
    pub difficulty: u8,
    /// Owning user for user-created recipes; `None` for the public catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl Recipe {
    /// Lowercased ingredient names
    #[must_use]
    pub fn ingredient_names_lowercase(&self) -> BTreeSet<String> {
        self.ingredients
            .iter()
            .map(|ingredient| ingredient.name.to_lowercase())
            .collect()
    }

    /// Whether the recipe belongs to the public catalog
    #[must_use]
    pub const fn is_public(&self) -> bool {
        self.owner.is_none()
    }
}

/// A recipe selected into a meal plan, with its explanation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanItem {
    /// The selected recipe
    #[serde(flatten)]
    pub recipe: Recipe,
    /// Matched deficit markers, comma-joined, or "balanced"
    pub why: String,
    /// Display explanation
    pub match_reason: String,
}

/// An ingredient to buy for a meal plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShoppingItem {
    /// Ingredient name (first-seen spelling)
    pub ingredient: String,
    /// Number of plan recipes needing it
    pub count: usize,
    /// Amount from the first plan recipe that lists it
    pub amount: String,
    /// Derived from `count`
    pub priority: Priority,
}
