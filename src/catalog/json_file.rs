// ABOUTME: Catalog backed by JSON files on disk; rules are validated once at load
// ABOUTME: Recipe and restaurant files are re-read per call; unset files fall back to seed data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalplate

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{debug, info};
use vitalplate_core::models::{BiomarkerRule, BiomarkerRuleRecord, Recipe, Restaurant};

use super::{
    seed, sort_by_name, validate_rules, CatalogError, RecipeCatalog, RestaurantCatalog,
    RuleCatalog,
};

/// Locations of the JSON catalog files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPaths {
    /// JSON array of biomarker rules
    pub rules: Option<PathBuf>,
    /// JSON array of recipes (public and user-owned)
    pub recipes: Option<PathBuf>,
    /// JSON array of restaurants with dishes
    pub restaurants: Option<PathBuf>,
}

impl CatalogPaths {
    /// True when no file is configured
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rules.is_none() && self.recipes.is_none() && self.restaurants.is_none()
    }
}

/// File-backed catalog
///
/// Rules are read and validated once by [`JsonFileCatalog::load`] and served from
/// memory afterwards, so editing the rules file cannot break analysis mid-run.
/// Recipe and restaurant files are re-read on every call.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    paths: CatalogPaths,
    rules: Vec<BiomarkerRule>,
}

impl JsonFileCatalog {
    /// Load the catalog, validating rules and checking every configured file parses
    ///
    /// # Errors
    ///
    /// Returns the first read, parse, or rule validation failure
    pub async fn load(paths: CatalogPaths) -> Result<Self, CatalogError> {
        let rules = match &paths.rules {
            Some(path) => {
                let records: Vec<BiomarkerRuleRecord> = read_json(path).await?;
                validate_rules(records, &path.display().to_string())?
            }
            None => validate_rules(seed::default_rule_records(), "built-in")?,
        };
        let catalog = Self { paths, rules };

        let recipes = catalog.all_recipes().await?;
        let restaurants = catalog.restaurants_with_dishes().await?;
        info!(
            rules = catalog.rules.len(),
            recipes = recipes.len(),
            restaurants = restaurants.len(),
            "Loaded JSON file catalog"
        );
        Ok(catalog)
    }

    /// Configured file locations
    #[must_use]
    pub const fn paths(&self) -> &CatalogPaths {
        &self.paths
    }

    async fn all_recipes(&self) -> Result<Vec<Recipe>, CatalogError> {
        match &self.paths.recipes {
            Some(path) => read_json(path).await,
            None => Ok(seed::default_recipes()),
        }
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let bytes = fs::read(path).await.map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "Read catalog file");
    serde_json::from_slice(&bytes).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[async_trait]
impl RuleCatalog for JsonFileCatalog {
    async fn rules(&self) -> Result<Vec<BiomarkerRule>, CatalogError> {
        Ok(self.rules.clone())
    }
}

#[async_trait]
impl RecipeCatalog for JsonFileCatalog {
    async fn public_recipes(&self) -> Result<Vec<Recipe>, CatalogError> {
        let mut recipes: Vec<Recipe> = self
            .all_recipes()
            .await?
            .into_iter()
            .filter(Recipe::is_public)
            .collect();
        sort_by_name(&mut recipes);
        Ok(recipes)
    }

    async fn user_recipes(&self, user_id: &str) -> Result<Vec<Recipe>, CatalogError> {
        let mut recipes: Vec<Recipe> = self
            .all_recipes()
            .await?
            .into_iter()
            .filter(|recipe| recipe.owner.as_deref() == Some(user_id))
            .collect();
        sort_by_name(&mut recipes);
        Ok(recipes)
    }

    async fn recipe_by_id(&self, id: &str) -> Result<Option<Recipe>, CatalogError> {
        Ok(self
            .all_recipes()
            .await?
            .into_iter()
            .find(|recipe| recipe.id == id))
    }
}

#[async_trait]
impl RestaurantCatalog for JsonFileCatalog {
    async fn restaurants_with_dishes(&self) -> Result<Vec<Restaurant>, CatalogError> {
        match &self.paths.restaurants {
            Some(path) => read_json(path).await,
            None => Ok(seed::default_restaurants()),
        }
    }
}
