// ABOUTME: NutritionService orchestrating catalogs and the recommendation engine per request
// ABOUTME: Validates request modes and locations, fetches catalog snapshots, and assembles reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalplate

//! # Nutrition Service
//!
//! The request-level entry point. Each call fetches a fresh snapshot from the
//! catalogs, runs the pure engine over it, and returns a serializable report.
//!
//! Three request modes exist:
//! - `diy`: meal plan from public and user-owned recipes, plus a shopping list
//! - `restaurants`: ranked dishes near a location
//! - `pantry`: meal plan restricted to ingredients the caller already has

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use vitalplate_core::constants::modes;
use vitalplate_core::errors::{AppResult, ValidationError};
use vitalplate_core::models::{
    Deficit, GeoPoint, LabPanel, PlanItem, Preferences, Recipe, Recommendation, ScoredDish,
    ShoppingItem,
};
use vitalplate_engine::{EngineConfig, NutritionEngine};

use crate::catalog::{RecipeCatalog, RestaurantCatalog, RuleCatalog};

/// What a generate request should produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestMode {
    /// Cook at home from the recipe catalog
    Diy,
    /// Eat out near a location
    Restaurants,
    /// Cook only from ingredients already on hand
    Pantry,
}

impl RequestMode {
    /// Wire name of the mode
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Diy => modes::DIY,
            Self::Restaurants => modes::RESTAURANTS,
            Self::Pantry => modes::PANTRY,
        }
    }
}

impl fmt::Display for RequestMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            modes::DIY => Ok(Self::Diy),
            modes::RESTAURANTS => Ok(Self::Restaurants),
            modes::PANTRY => Ok(Self::Pantry),
            _ => Err(ValidationError::UnknownMode(s.to_owned())),
        }
    }
}

/// Input to [`NutritionService::generate`]
///
/// `mode` stays a plain string so an unrecognised value surfaces as
/// [`ValidationError::UnknownMode`] instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// `diy`, `restaurants`, or `pantry`
    pub mode: String,
    /// Lab values keyed by marker
    #[serde(default)]
    pub labs: LabPanel,
    /// Free-form preferences, optionally with an `available` list
    #[serde(default)]
    pub preferences: Preferences,
    /// Required for `restaurants`
    #[serde(default)]
    pub location: Option<GeoPoint>,
    /// Ingredients on hand; overrides `preferences.available` when non-empty
    #[serde(default)]
    pub available: Vec<String>,
    /// Owner whose private recipes join the candidate pool
    #[serde(default)]
    pub user_id: Option<String>,
    /// Plan length override
    #[serde(default)]
    pub plan_size: Option<usize>,
    /// Search radius override for `restaurants`
    #[serde(default)]
    pub max_distance_km: Option<f64>,
    /// Result cap override for `restaurants`
    #[serde(default)]
    pub limit: Option<usize>,
}

impl GenerateRequest {
    /// Request for `mode` over `labs` with everything else defaulted
    #[must_use]
    pub fn new(mode: impl Into<String>, labs: LabPanel) -> Self {
        Self {
            mode: mode.into(),
            labs,
            ..Self::default()
        }
    }
}

/// Deficits plus supplement advice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    /// Detected deficits, most severe first
    pub deficits: Vec<Deficit>,
    /// Supplement suggestions ending with the disclaimer
    pub vitamins: Vec<Recommendation>,
}

/// Output of [`NutritionService::generate`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateReport {
    /// Mode that produced this report
    pub mode: RequestMode,
    /// When the report was assembled
    pub generated_at: DateTime<Utc>,
    /// Detected deficits, most severe first
    pub deficits: Vec<Deficit>,
    /// Supplement suggestions ending with the disclaimer
    pub vitamins: Vec<Recommendation>,
    /// Meal plan (`diy`, `pantry`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<Vec<PlanItem>>,
    /// Missing ingredients across the plan (`diy`, `pantry`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shopping_list: Option<Vec<ShoppingItem>>,
    /// Ranked nearby dishes (`restaurants`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurants: Option<Vec<ScoredDish>>,
    /// Ingredients the plan was restricted to (`pantry`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected: Option<Vec<String>>,
}

impl GenerateReport {
    fn new(mode: RequestMode, analysis: Analysis) -> Self {
        Self {
            mode,
            generated_at: Utc::now(),
            deficits: analysis.deficits,
            vitamins: analysis.vitamins,
            plan: None,
            shopping_list: None,
            restaurants: None,
            detected: None,
        }
    }
}

/// Runs the recommendation pipeline against injected catalogs
#[derive(Clone)]
pub struct NutritionService {
    rules: Arc<dyn RuleCatalog>,
    recipes: Arc<dyn RecipeCatalog>,
    restaurants: Arc<dyn RestaurantCatalog>,
    engine: NutritionEngine,
}

impl fmt::Debug for NutritionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NutritionService")
            .field("engine", &self.engine)
            .finish_non_exhaustive()
    }
}

impl NutritionService {
    /// Service over separate catalogs
    #[must_use]
    pub fn new(
        rules: Arc<dyn RuleCatalog>,
        recipes: Arc<dyn RecipeCatalog>,
        restaurants: Arc<dyn RestaurantCatalog>,
        engine: NutritionEngine,
    ) -> Self {
        Self {
            rules,
            recipes,
            restaurants,
            engine,
        }
    }

    /// Service over one value implementing every catalog
    #[must_use]
    pub fn from_catalog<C>(catalog: Arc<C>, config: EngineConfig) -> Self
    where
        C: RuleCatalog + RecipeCatalog + RestaurantCatalog + 'static,
    {
        let rules: Arc<dyn RuleCatalog> = catalog.clone();
        let recipes: Arc<dyn RecipeCatalog> = catalog.clone();
        let restaurants: Arc<dyn RestaurantCatalog> = catalog;
        Self::new(rules, recipes, restaurants, NutritionEngine::new(config))
    }

    /// Engine in use
    #[must_use]
    pub const fn engine(&self) -> &NutritionEngine {
        &self.engine
    }

    /// Detect deficits and suggest supplements
    ///
    /// # Errors
    ///
    /// Returns an error if the rule catalog cannot be read
    #[instrument(skip_all, fields(service = "nutrition", operation = "analyze", markers = labs.len()))]
    pub async fn analyze(&self, labs: &LabPanel) -> AppResult<Analysis> {
        let rules = self.rules.rules().await?;
        let deficits = self.engine.analyze(labs, &rules);
        let vitamins = self.engine.supplements(&deficits);
        info!(
            rules = rules.len(),
            deficits = deficits.len(),
            supplements = vitamins.len().saturating_sub(1),
            "Analyzed lab panel"
        );
        Ok(Analysis { deficits, vitamins })
    }

    /// Produce the report for one request
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown mode, a missing or out-of-range
    /// location, a non-positive radius, or a pantry request without ingredients.
    /// Returns a storage error if a catalog cannot be read.
    #[instrument(
        skip_all,
        fields(
            service = "nutrition",
            operation = "generate",
            mode = %request.mode,
            user_id = ?request.user_id,
        )
    )]
    pub async fn generate(&self, request: GenerateRequest) -> AppResult<GenerateReport> {
        let mode: RequestMode = request.mode.parse()?;
        let location = match mode {
            RequestMode::Restaurants => Some(Self::validated_location(mode, &request)?),
            RequestMode::Pantry if request.available.is_empty() => {
                return Err(ValidationError::MissingIngredients {
                    mode: mode.to_string(),
                }
                .into());
            }
            RequestMode::Diy | RequestMode::Pantry => None,
        };

        let analysis = self.analyze(&request.labs).await?;
        let mut report = GenerateReport::new(mode, analysis);

        match mode {
            RequestMode::Restaurants => {
                if let Some(location) = location {
                    let dishes = self.rank_dishes(&report.deficits, location, &request).await?;
                    report.restaurants = Some(dishes);
                }
            }
            RequestMode::Pantry => {
                let recipes = self.candidate_recipes(request.user_id.as_deref()).await?;
                let detected = request.available.as_slice();
                let plan = self.engine.plan(
                    &report.deficits,
                    &recipes,
                    &request.preferences,
                    Some(detected),
                    request.plan_size,
                );
                report.shopping_list = Some(self.engine.shopping_list(&plan, Some(detected)));
                report.plan = Some(plan);
                report.detected = Some(request.available.clone());
            }
            RequestMode::Diy => {
                let recipes = self.candidate_recipes(request.user_id.as_deref()).await?;
                let available = request
                    .preferences
                    .effective_available(Some(request.available.as_slice()));
                let plan = self.engine.plan(
                    &report.deficits,
                    &recipes,
                    &request.preferences,
                    Some(available),
                    request.plan_size,
                );
                report.shopping_list = Some(self.engine.shopping_list(&plan, Some(available)));
                report.plan = Some(plan);
            }
        }

        info!(
            mode = %mode,
            deficits = report.deficits.len(),
            plan = report.plan.as_ref().map_or(0, Vec::len),
            dishes = report.restaurants.as_ref().map_or(0, Vec::len),
            "Generated report"
        );
        Ok(report)
    }

    fn validated_location(mode: RequestMode, request: &GenerateRequest) -> AppResult<GeoPoint> {
        let location = request.location.ok_or_else(|| ValidationError::MissingLocation {
            mode: mode.to_string(),
        })?;
        let location = GeoPoint::validated(location.lat, location.lon)?;
        if let Some(radius) = request.max_distance_km {
            if !radius.is_finite() || radius <= 0.0 {
                return Err(ValidationError::NonPositiveRadius(radius).into());
            }
        }
        Ok(location)
    }

    async fn rank_dishes(
        &self,
        deficits: &[Deficit],
        location: GeoPoint,
        request: &GenerateRequest,
    ) -> AppResult<Vec<ScoredDish>> {
        let radius = request
            .max_distance_km
            .unwrap_or(self.engine.config().dish.max_distance_km);
        // The engine applies the radius with its configured earth radius
        let restaurants = self.restaurants.restaurants_with_dishes().await?;
        debug!(candidates = restaurants.len(), radius_km = radius, "Fetched restaurants");
        Ok(self
            .engine
            .dishes(deficits, &restaurants, location, Some(radius), request.limit))
    }

    /// Public recipes followed by the user's own
    async fn candidate_recipes(&self, user_id: Option<&str>) -> AppResult<Vec<Recipe>> {
        let mut recipes = self.recipes.public_recipes().await?;
        if let Some(user_id) = user_id {
            recipes.extend(self.recipes.user_recipes(user_id).await?);
        }
        debug!(candidates = recipes.len(), "Fetched candidate recipes");
        Ok(recipes)
    }
}
