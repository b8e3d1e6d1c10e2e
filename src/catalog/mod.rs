// ABOUTME: Read-only catalog contracts for rules, recipes, and restaurants
// ABOUTME: Async traits, the catalog error type, and the in-memory and JSON file implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalplate

//! # Catalogs
//!
//! The engine never touches storage. The service fetches a snapshot from these
//! catalogs for each request and hands plain slices to the engine.
//!
//! - [`MemoryCatalog`]: seeded in-process data, supports adding user-owned recipes
//! - [`JsonFileCatalog`]: validates rules once when loaded, re-reads recipe and restaurant
//!   files on each call

mod json_file;
mod memory;
/// Built-in rules, recipes, and restaurants
pub mod seed;

pub use json_file::{CatalogPaths, JsonFileCatalog};
pub use memory::MemoryCatalog;

use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;
use vitalplate_core::errors::{AppError, ErrorCode, InvalidRuleError};
use vitalplate_core::models::{BiomarkerRule, BiomarkerRuleRecord, GeoPoint, Recipe, Restaurant};
use vitalplate_engine::geo::haversine_km;

/// Failures while reading or changing a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The backing file could not be read
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The backing file is not valid JSON for its catalog type
    #[error("failed to parse catalog file {path}: {source}")]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A rule failed validation while the catalog was loading
    #[error("invalid rule #{index} in {origin}: {source}")]
    InvalidRule {
        /// File path or "built-in"
        origin: String,
        /// Zero-based position of the rule
        index: usize,
        /// Validation failure
        #[source]
        source: InvalidRuleError,
    },

    /// The recipe id belongs to the public catalog or to another user
    #[error("user '{user_id}' does not own recipe '{recipe_id}'")]
    NotOwner {
        /// Recipe being changed
        recipe_id: String,
        /// User attempting the change
        user_id: String,
    },
}

impl From<CatalogError> for AppError {
    fn from(error: CatalogError) -> Self {
        let code = match &error {
            CatalogError::Io { .. } => ErrorCode::StorageError,
            CatalogError::Parse { .. } => ErrorCode::SerializationError,
            CatalogError::InvalidRule { .. } => ErrorCode::InvalidRule,
            CatalogError::NotOwner { .. } => ErrorCode::PermissionDenied,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

/// Validate raw rule records, failing on the first bad rule
///
/// # Errors
///
/// Returns [`CatalogError::InvalidRule`] naming `origin` and the rule's position
pub fn validate_rules(
    records: Vec<BiomarkerRuleRecord>,
    origin: &str,
) -> Result<Vec<BiomarkerRule>, CatalogError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            BiomarkerRule::try_new(record).map_err(|source| CatalogError::InvalidRule {
                origin: origin.to_owned(),
                index,
                source,
            })
        })
        .collect()
}

/// Source of biomarker rules
#[async_trait]
pub trait RuleCatalog: Send + Sync {
    /// All rules, in evaluation order
    async fn rules(&self) -> Result<Vec<BiomarkerRule>, CatalogError>;
}

/// Source of recipes
#[async_trait]
pub trait RecipeCatalog: Send + Sync {
    /// Public recipes, ordered by name
    async fn public_recipes(&self) -> Result<Vec<Recipe>, CatalogError>;

    /// Recipes owned by `user_id`, ordered by name
    async fn user_recipes(&self, user_id: &str) -> Result<Vec<Recipe>, CatalogError>;

    /// Any recipe by id
    async fn recipe_by_id(&self, id: &str) -> Result<Option<Recipe>, CatalogError>;

    /// Public recipes carrying at least one of `tags`
    async fn search_by_tags(&self, tags: &[String]) -> Result<Vec<Recipe>, CatalogError> {
        let recipes = self.public_recipes().await?;
        Ok(recipes
            .into_iter()
            .filter(|recipe| tags.iter().any(|tag| recipe.tags.contains(tag)))
            .collect())
    }
}

/// Source of restaurants and their dishes
#[async_trait]
pub trait RestaurantCatalog: Send + Sync {
    /// Every restaurant with its menu
    async fn restaurants_with_dishes(&self) -> Result<Vec<Restaurant>, CatalogError>;

    /// Restaurants within `radius_km` of `location`
    async fn nearby(
        &self,
        location: GeoPoint,
        radius_km: f64,
    ) -> Result<Vec<Restaurant>, CatalogError> {
        let restaurants = self.restaurants_with_dishes().await?;
        Ok(restaurants
            .into_iter()
            .filter(|restaurant| haversine_km(location, restaurant.location()) <= radius_km)
            .collect())
    }
}

/// Sort recipes by name, then id for equal names
pub(crate) fn sort_by_name(recipes: &mut [Recipe]) {
    recipes.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
}
