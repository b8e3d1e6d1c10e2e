// ABOUTME: Scoring configuration for the recommendation engine
// ABOUTME: Defaults, validation, and VITALPLATE_* environment overrides for every weight and limit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalplate

//! Engine Configuration
//!
//! Every weight the scorers use lives here so deployments can tune them without a
//! rebuild. Defaults reproduce the reference scoring exactly. Configuration is loaded
//! once by the caller and passed explicitly to the components that need it.

mod error;

pub use error::ConfigError;

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use vitalplate_core::constants::{geo, nutrients, pantry};

/// Complete engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// Recipe scoring and plan selection
    pub recipe: RecipeScoringConfig,
    /// Restaurant dish scoring
    pub dish: DishScoringConfig,
    /// Supplement dose banding
    pub supplement: SupplementConfig,
    /// Ingredients assumed present in every kitchen
    pub pantry_staples: Vec<String>,
}

/// Weights and limits for recipe selection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeScoringConfig {
    /// Points per deficit marker found in a recipe's tags, scaled by (1 + severity)
    pub tag_weight: f64,
    /// Points per deficit target found in a recipe's nutrients
    pub target_weight: f64,
    /// Severity multiplier applied to target matches
    pub target_severity_factor: f64,
    /// Points per recipe ingredient the user already has
    pub available_overlap_weight: f64,
    /// Recipes at or under this many minutes get the quick bonus
    pub quick_time_min: u32,
    /// Bonus for quick recipes
    pub quick_time_bonus: f64,
    /// Recipes at or under this many minutes get the moderate bonus
    pub moderate_time_min: u32,
    /// Bonus for moderately quick recipes
    pub moderate_time_bonus: f64,
    /// Difficulty at which the simplicity bonus reaches zero
    pub difficulty_baseline: u8,
    /// Points per difficulty step below the baseline
    pub difficulty_weight: f64,
    /// Ingredients a recipe may still need beyond what is available
    pub max_missing_ingredients: usize,
    /// How many plan recipes may share one tag
    pub max_recipes_per_tag: usize,
    /// Default plan length
    pub plan_target_count: usize,
}

/// Weights and limits for restaurant dish ranking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DishScoringConfig {
    /// Score every dish starts from
    pub base_score: f64,
    /// Points per deficit marker present as a dish nutrient, scaled by (1 + severity)
    pub marker_weight: f64,
    /// Points per deficit target present as a dish nutrient
    pub target_weight: f64,
    /// Severity multiplier applied to target matches
    pub target_severity_factor: f64,
    /// Points per generally valuable nutrient in the dish
    pub valuable_nutrient_weight: f64,
    /// Nutrients that earn the valuable-nutrient bonus
    pub valuable_nutrients: Vec<String>,
    /// Penalty per kilometer of distance
    pub distance_penalty_per_km: f64,
    /// Distance beyond which the penalty stops growing
    pub distance_penalty_cap_km: f64,
    /// Default search radius
    pub max_distance_km: f64,
    /// Default number of dishes returned
    pub result_limit: usize,
    /// Earth radius used by the haversine distance
    pub earth_radius_km: f64,
}

/// Supplement dose banding
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SupplementConfig {
    /// Severity above which the strong dose band and high priority apply
    pub strong_dose_severity: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            recipe: RecipeScoringConfig::default(),
            dish: DishScoringConfig::default(),
            supplement: SupplementConfig::default(),
            pantry_staples: pantry::DEFAULT_STAPLES
                .iter()
                .map(|s| (*s).to_owned())
                .collect(),
        }
    }
}

impl Default for RecipeScoringConfig {
    fn default() -> Self {
        Self {
            tag_weight: 3.0,
            target_weight: 1.0,
            target_severity_factor: 0.5,
            available_overlap_weight: 0.3,
            quick_time_min: 15,
            quick_time_bonus: 0.5,
            moderate_time_min: 30,
            moderate_time_bonus: 0.2,
            difficulty_baseline: 3,
            difficulty_weight: 0.2,
            max_missing_ingredients: 2,
            max_recipes_per_tag: 2,
            plan_target_count: 7,
        }
    }
}

impl Default for DishScoringConfig {
    fn default() -> Self {
        Self {
            base_score: 5.0,
            marker_weight: 2.0,
            target_weight: 1.0,
            target_severity_factor: 0.5,
            valuable_nutrient_weight: 0.3,
            valuable_nutrients: nutrients::VALUABLE.iter().map(|s| (*s).to_owned()).collect(),
            distance_penalty_per_km: 0.1,
            distance_penalty_cap_km: 10.0,
            max_distance_km: 10.0,
            result_limit: 20,
            earth_radius_km: geo::EARTH_RADIUS_KM,
        }
    }
}

impl Default for SupplementConfig {
    fn default() -> Self {
        Self {
            strong_dose_severity: 0.5,
        }
    }
}

fn weight_ok(weight: f64) -> bool {
    weight.is_finite() && weight >= 0.0
}

impl EngineConfig {
    /// Defaults with `VITALPLATE_*` environment overrides applied, then validated
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unparseable value or the
    /// resulting configuration fails validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error for negative or non-finite weights, zero caps, out-of-order
    /// time bonus thresholds, or a non-positive Earth radius
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.recipe.validate()?;
        self.dish.validate()?;
        self.supplement.validate()?;
        if self.pantry_staples.iter().any(|s| s.trim().is_empty()) {
            return Err(ConfigError::ValueOutOfRange(
                "pantry staples must not contain blank entries",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_list(env_var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect();
        }
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Recipe scoring
        Self::apply_env_var("VITALPLATE_RECIPE_TAG_WEIGHT", &mut self.recipe.tag_weight)?;
        Self::apply_env_var(
            "VITALPLATE_RECIPE_TARGET_WEIGHT",
            &mut self.recipe.target_weight,
        )?;
        Self::apply_env_var(
            "VITALPLATE_RECIPE_AVAILABLE_WEIGHT",
            &mut self.recipe.available_overlap_weight,
        )?;
        Self::apply_env_var(
            "VITALPLATE_RECIPE_MAX_MISSING",
            &mut self.recipe.max_missing_ingredients,
        )?;
        Self::apply_env_var(
            "VITALPLATE_RECIPE_MAX_PER_TAG",
            &mut self.recipe.max_recipes_per_tag,
        )?;
        Self::apply_env_var(
            "VITALPLATE_PLAN_TARGET_COUNT",
            &mut self.recipe.plan_target_count,
        )?;

        // Dish scoring
        Self::apply_env_var("VITALPLATE_DISH_BASE_SCORE", &mut self.dish.base_score)?;
        Self::apply_env_var("VITALPLATE_DISH_MARKER_WEIGHT", &mut self.dish.marker_weight)?;
        Self::apply_env_var(
            "VITALPLATE_DISH_DISTANCE_PENALTY",
            &mut self.dish.distance_penalty_per_km,
        )?;
        Self::apply_env_var(
            "VITALPLATE_DISH_MAX_DISTANCE_KM",
            &mut self.dish.max_distance_km,
        )?;
        Self::apply_env_var("VITALPLATE_DISH_LIMIT", &mut self.dish.result_limit)?;

        // Supplements
        Self::apply_env_var(
            "VITALPLATE_SUPPLEMENT_STRONG_SEVERITY",
            &mut self.supplement.strong_dose_severity,
        )?;

        Self::apply_env_list("VITALPLATE_PANTRY_STAPLES", &mut self.pantry_staples);

        Ok(self)
    }
}

impl RecipeScoringConfig {
    /// Validate recipe scoring values
    ///
    /// # Errors
    ///
    /// Returns an error for negative weights, zero caps, or out-of-order time thresholds
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = [
            self.tag_weight,
            self.target_weight,
            self.target_severity_factor,
            self.available_overlap_weight,
            self.quick_time_bonus,
            self.moderate_time_bonus,
            self.difficulty_weight,
        ];
        if !weights.into_iter().all(weight_ok) {
            return Err(ConfigError::InvalidWeights(
                "recipe scoring weights must be finite and non-negative",
            ));
        }
        if self.quick_time_min > self.moderate_time_min {
            return Err(ConfigError::InvalidRange(
                "quick_time_min must be <= moderate_time_min",
            ));
        }
        if self.max_recipes_per_tag == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_recipes_per_tag must be at least 1",
            ));
        }
        if self.plan_target_count == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "plan_target_count must be at least 1",
            ));
        }
        Ok(())
    }
}

impl DishScoringConfig {
    /// Validate dish scoring values
    ///
    /// # Errors
    ///
    /// Returns an error for negative weights, a non-positive radius or Earth radius,
    /// or a zero result limit
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = [
            self.base_score,
            self.marker_weight,
            self.target_weight,
            self.target_severity_factor,
            self.valuable_nutrient_weight,
            self.distance_penalty_per_km,
            self.distance_penalty_cap_km,
        ];
        if !weights.into_iter().all(weight_ok) {
            return Err(ConfigError::InvalidWeights(
                "dish scoring weights must be finite and non-negative",
            ));
        }
        if !(self.earth_radius_km.is_finite() && self.earth_radius_km > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "earth_radius_km must be positive",
            ));
        }
        if !(self.max_distance_km.is_finite() && self.max_distance_km > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "max_distance_km must be positive",
            ));
        }
        if self.result_limit == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "result_limit must be at least 1",
            ));
        }
        Ok(())
    }
}

impl SupplementConfig {
    /// Validate supplement banding
    ///
    /// # Errors
    ///
    /// Returns an error when the strong-dose severity is outside [0, 1]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.strong_dose_severity) {
            return Err(ConfigError::ValueOutOfRange(
                "strong_dose_severity must be within [0, 1]",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_negative_weight_is_rejected() {
        let mut config = EngineConfig::default();
        config.recipe.tag_weight = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_time_thresholds_must_be_ordered() {
        let mut config = EngineConfig::default();
        config.recipe.quick_time_min = 40;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_zero_earth_radius_is_rejected() {
        let mut config = EngineConfig::default();
        config.dish.earth_radius_km = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_config_serializes_to_json() {
        let json = serde_json::to_value(EngineConfig::default()).unwrap();
        assert_eq!(json["recipe"]["plan_target_count"], 7);
        assert_eq!(json["dish"]["result_limit"], 20);
    }
}
