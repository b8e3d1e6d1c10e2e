// ABOUTME: Recipe selection for deficit-driven meal plans
// ABOUTME: Availability filter, multi-criteria scoring, and tag-diverse greedy top-K selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalplate

//! Recipe selection
//!
//! Scoring rewards recipes tagged with a deficit marker, recipes whose nutrients cover
//! a deficit's targets, recipes that use what the user already has, and recipes that
//! are quick and easy. Selection is greedy by score with a per-tag cap so one theme
//! cannot fill the whole plan.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use rayon::prelude::*;
use vitalplate_core::constants::{display_names, messages};
use vitalplate_core::models::{Deficit, PlanItem, Preferences, Recipe};

use crate::config::{EngineConfig, RecipeScoringConfig};

/// Lowercase a list of names into a lookup set
pub(crate) fn lowercase_set(names: &[String]) -> HashSet<String> {
    names.iter().map(|name| name.to_lowercase()).collect()
}

/// Selects a diverse, deficit-targeted meal plan from a recipe catalog
#[derive(Debug, Clone)]
pub struct RecipeSelector {
    config: RecipeScoringConfig,
    pantry: HashSet<String>,
}

impl Default for RecipeSelector {
    fn default() -> Self {
        Self::from_engine_config(&EngineConfig::default())
    }
}

impl RecipeSelector {
    /// Selector with default weights and pantry staples
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selector with explicit weights and pantry staples
    #[must_use]
    pub fn with_config(config: RecipeScoringConfig, pantry_staples: &[String]) -> Self {
        Self {
            config,
            pantry: lowercase_set(pantry_staples),
        }
    }

    /// Selector configured from the full engine configuration
    #[must_use]
    pub fn from_engine_config(config: &EngineConfig) -> Self {
        Self::with_config(config.recipe.clone(), &config.pantry_staples)
    }

    /// Build a plan of at most `target_count` recipes.
    ///
    /// The available list is the explicit one when non-empty, otherwise the one in
    /// `preferences`. An empty catalog or no deficits yields a shorter plan, never an
    /// error.
    #[must_use]
    pub fn select(
        &self,
        deficits: &[Deficit],
        recipes: &[Recipe],
        preferences: &Preferences,
        available: Option<&[String]>,
        target_count: usize,
    ) -> Vec<PlanItem> {
        let available = lowercase_set(preferences.effective_available(available));

        let mut scored: Vec<(&Recipe, f64)> = recipes
            .par_iter()
            .filter(|recipe| available.is_empty() || self.is_cookable(recipe, &available))
            .map(|recipe| (recipe, self.score(recipe, deficits, &available)))
            .collect();
        scored.sort_by(|(a, sa), (b, sb)| compare_scored(a, *sa, b, *sb));

        self.pick_diverse(&scored, target_count)
            .into_iter()
            .map(|recipe| explain(recipe, deficits))
            .collect()
    }

    /// Score a recipe against deficits and a lowercase available-ingredient set
    #[must_use]
    pub fn score(&self, recipe: &Recipe, deficits: &[Deficit], available: &HashSet<String>) -> f64 {
        let cfg = &self.config;
        let mut score = 0.0;

        for deficit in deficits {
            if recipe.tags.contains(&deficit.marker) {
                score += cfg.tag_weight * (1.0 + deficit.severity);
            }
            let target_hits = deficit
                .targets
                .keys()
                .filter(|target| recipe.nutrients.contains_key(*target))
                .count();
            score += count_as_f64(target_hits)
                * cfg.target_weight
                * cfg.target_severity_factor.mul_add(deficit.severity, 1.0);
        }

        if !available.is_empty() {
            let overlap = recipe
                .ingredient_names_lowercase()
                .iter()
                .filter(|name| available.contains(*name))
                .count();
            score += count_as_f64(overlap) * cfg.available_overlap_weight;
        }

        if recipe.time_min <= cfg.quick_time_min {
            score += cfg.quick_time_bonus;
        } else if recipe.time_min <= cfg.moderate_time_min {
            score += cfg.moderate_time_bonus;
        }

        score += (f64::from(cfg.difficulty_baseline) - f64::from(recipe.difficulty))
            * cfg.difficulty_weight;

        score
    }

    /// Ingredients the recipe still needs beyond what is available and the pantry
    #[must_use]
    pub fn missing_ingredients(&self, recipe: &Recipe, available: &HashSet<String>) -> Vec<String> {
        recipe
            .ingredient_names_lowercase()
            .into_iter()
            .filter(|name| !available.contains(name) && !self.pantry.contains(name))
            .collect()
    }

    fn is_cookable(&self, recipe: &Recipe, available: &HashSet<String>) -> bool {
        self.missing_ingredients(recipe, available).len() <= self.config.max_missing_ingredients
    }

    fn pick_diverse<'a>(&self, scored: &[(&'a Recipe, f64)], target_count: usize) -> Vec<&'a Recipe> {
        let mut selected = Vec::new();
        let mut used_ids: HashSet<&str> = HashSet::new();
        let mut used_tags: HashMap<&str, usize> = HashMap::new();

        for (recipe, _) in scored {
            if selected.len() >= target_count {
                break;
            }
            if used_ids.contains(recipe.id.as_str()) {
                continue;
            }
            let saturated = recipe.tags.iter().any(|tag| {
                used_tags.get(tag.as_str()).copied().unwrap_or(0) >= self.config.max_recipes_per_tag
            });
            if saturated {
                continue;
            }

            used_ids.insert(recipe.id.as_str());
            for tag in &recipe.tags {
                *used_tags.entry(tag.as_str()).or_insert(0) += 1;
            }
            selected.push(*recipe);
        }

        selected
    }
}

fn compare_scored(a: &Recipe, score_a: f64, b: &Recipe, score_b: f64) -> Ordering {
    score_b.total_cmp(&score_a).then_with(|| a.id.cmp(&b.id))
}

fn count_as_f64(count: usize) -> f64 {
    count as f64
}

/// Attach `why` and `match_reason` to a selected recipe
fn explain(recipe: &Recipe, deficits: &[Deficit]) -> PlanItem {
    let mut matched: Vec<&str> = Vec::new();
    for deficit in deficits {
        let marker = deficit.marker.as_str();
        if recipe.tags.contains(marker) && !matched.contains(&marker) {
            matched.push(marker);
        }
    }

    let (why, match_reason) = if matched.is_empty() {
        (
            messages::WHY_BALANCED.to_owned(),
            messages::RECIPE_BALANCED.to_owned(),
        )
    } else {
        let names: Vec<&str> = matched
            .iter()
            .take(messages::MAX_REASON_ITEMS)
            .map(|marker| display_names::lookup(display_names::MARKERS, marker))
            .collect();
        (
            matched.join(", "),
            format!("{}{}", messages::RECIPE_MATCH_PREFIX, names.join(", ")),
        )
    };

    PlanItem {
        recipe: recipe.clone(),
        why,
        match_reason,
    }
}
