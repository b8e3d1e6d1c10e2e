// ABOUTME: NutritionEngine facade holding every configured component
// ABOUTME: Lets callers run the whole recommendation pipeline from one EngineConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalplate

use vitalplate_core::models::{
    BiomarkerRule, Deficit, GeoPoint, LabPanel, PlanItem, Preferences, Recipe, Recommendation,
    Restaurant, ScoredDish, ShoppingItem,
};

use crate::config::EngineConfig;
use crate::deficits::DeficitAnalyzer;
use crate::dishes::DishRecommender;
use crate::recipes::RecipeSelector;
use crate::shopping::ShoppingListBuilder;
use crate::supplements::SupplementAdvisor;

/// All engine components configured from a single [`EngineConfig`]
#[derive(Debug, Clone)]
pub struct NutritionEngine {
    config: EngineConfig,
    analyzer: DeficitAnalyzer,
    advisor: SupplementAdvisor,
    selector: RecipeSelector,
    shopping: ShoppingListBuilder,
    dishes: DishRecommender,
}

impl Default for NutritionEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl NutritionEngine {
    /// Build every component from `config`
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            analyzer: DeficitAnalyzer::new(),
            advisor: SupplementAdvisor::with_config(config.supplement.clone()),
            selector: RecipeSelector::from_engine_config(&config),
            shopping: ShoppingListBuilder::with_pantry(&config.pantry_staples),
            dishes: DishRecommender::with_config(config.dish.clone()),
            config,
        }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Detect deficits
    #[must_use]
    pub fn analyze(&self, labs: &LabPanel, rules: &[BiomarkerRule]) -> Vec<Deficit> {
        self.analyzer.analyze(labs, rules)
    }

    /// Supplement suggestions plus disclaimer
    #[must_use]
    pub fn supplements(&self, deficits: &[Deficit]) -> Vec<Recommendation> {
        self.advisor.recommend(deficits)
    }

    /// Meal plan; `target_count` defaults to the configured plan length
    #[must_use]
    pub fn plan(
        &self,
        deficits: &[Deficit],
        recipes: &[Recipe],
        preferences: &Preferences,
        available: Option<&[String]>,
        target_count: Option<usize>,
    ) -> Vec<PlanItem> {
        let count = target_count.unwrap_or(self.config.recipe.plan_target_count);
        self.selector
            .select(deficits, recipes, preferences, available, count)
    }

    /// Shopping list for a plan
    #[must_use]
    pub fn shopping_list(&self, plan: &[PlanItem], available: Option<&[String]>) -> Vec<ShoppingItem> {
        self.shopping.build(plan, available)
    }

    /// Ranked dishes; radius and limit default to the configured values
    #[must_use]
    pub fn dishes(
        &self,
        deficits: &[Deficit],
        restaurants: &[Restaurant],
        location: GeoPoint,
        max_distance_km: Option<f64>,
        limit: Option<usize>,
    ) -> Vec<ScoredDish> {
        self.dishes.recommend(
            deficits,
            restaurants,
            location,
            max_distance_km.unwrap_or(self.config.dish.max_distance_km),
            limit.unwrap_or(self.config.dish.result_limit),
        )
    }
}
