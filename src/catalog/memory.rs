// ABOUTME: In-memory catalog holding rules, recipes, and restaurants
// ABOUTME: Seeded with built-in data; user-owned recipes can be added and removed at runtime
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalplate

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;
use vitalplate_core::models::{BiomarkerRule, Recipe, Restaurant};

use super::{
    seed, sort_by_name, validate_rules, CatalogError, RecipeCatalog, RestaurantCatalog,
    RuleCatalog,
};

/// Catalog backed by process memory
#[derive(Debug)]
pub struct MemoryCatalog {
    rules: Vec<BiomarkerRule>,
    recipes: RwLock<Vec<Recipe>>,
    restaurants: Vec<Restaurant>,
}

impl MemoryCatalog {
    /// Catalog over the given data
    #[must_use]
    pub fn new(rules: Vec<BiomarkerRule>, recipes: Vec<Recipe>, restaurants: Vec<Restaurant>) -> Self {
        Self {
            rules,
            recipes: RwLock::new(recipes),
            restaurants,
        }
    }

    /// Catalog seeded with the built-in rules, recipes, and restaurants
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidRule`] if a built-in rule fails validation
    pub fn seeded() -> Result<Self, CatalogError> {
        let rules = validate_rules(seed::default_rule_records(), "built-in")?;
        let recipes = seed::default_recipes();
        let restaurants = seed::default_restaurants();
        info!(
            rules = rules.len(),
            recipes = recipes.len(),
            restaurants = restaurants.len(),
            "Seeded in-memory catalog"
        );
        Ok(Self::new(rules, recipes, restaurants))
    }

    /// Store a recipe owned by `user_id`, generating an id when it has none.
    ///
    /// Re-adding one of the user's own ids replaces that recipe. Returns the stored recipe.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotOwner`] if the id is already taken by a public
    /// recipe or by another user
    pub async fn add_user_recipe(
        &self,
        user_id: &str,
        mut recipe: Recipe,
    ) -> Result<Recipe, CatalogError> {
        if recipe.id.trim().is_empty() {
            recipe.id = generate_recipe_id();
        }
        recipe.owner = Some(user_id.to_owned());

        let mut recipes = self.recipes.write().await;
        if let Some(position) = recipes.iter().position(|existing| existing.id == recipe.id) {
            ensure_owner(&recipes[position], user_id)?;
            recipes.remove(position);
        }
        recipes.push(recipe.clone());
        drop(recipes);

        debug!(user_id, recipe_id = %recipe.id, "Stored user recipe");
        Ok(recipe)
    }

    /// Remove one of `user_id`'s recipes; returns whether one was removed
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotOwner`] if the recipe is public or owned by someone else
    pub async fn remove_recipe(&self, user_id: &str, id: &str) -> Result<bool, CatalogError> {
        let mut recipes = self.recipes.write().await;
        let Some(position) = recipes.iter().position(|recipe| recipe.id == id) else {
            return Ok(false);
        };
        ensure_owner(&recipes[position], user_id)?;
        recipes.remove(position);
        drop(recipes);

        debug!(user_id, recipe_id = id, "Removed user recipe");
        Ok(true)
    }
}

fn ensure_owner(recipe: &Recipe, user_id: &str) -> Result<(), CatalogError> {
    if recipe.owner.as_deref() == Some(user_id) {
        Ok(())
    } else {
        Err(CatalogError::NotOwner {
            recipe_id: recipe.id.clone(),
            user_id: user_id.to_owned(),
        })
    }
}

/// `recipe_` followed by 8 hex characters
fn generate_recipe_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("recipe_{}", &hex[..8])
}

#[async_trait]
impl RuleCatalog for MemoryCatalog {
    async fn rules(&self) -> Result<Vec<BiomarkerRule>, CatalogError> {
        Ok(self.rules.clone())
    }
}

#[async_trait]
impl RecipeCatalog for MemoryCatalog {
    async fn public_recipes(&self) -> Result<Vec<Recipe>, CatalogError> {
        let mut recipes: Vec<Recipe> = self
            .recipes
            .read()
            .await
            .iter()
            .filter(|recipe| recipe.is_public())
            .cloned()
            .collect();
        sort_by_name(&mut recipes);
        Ok(recipes)
    }

    async fn user_recipes(&self, user_id: &str) -> Result<Vec<Recipe>, CatalogError> {
        let mut recipes: Vec<Recipe> = self
            .recipes
            .read()
            .await
            .iter()
            .filter(|recipe| recipe.owner.as_deref() == Some(user_id))
            .cloned()
            .collect();
        sort_by_name(&mut recipes);
        Ok(recipes)
    }

    async fn recipe_by_id(&self, id: &str) -> Result<Option<Recipe>, CatalogError> {
        Ok(self
            .recipes
            .read()
            .await
            .iter()
            .find(|recipe| recipe.id == id)
            .cloned())
    }
}

#[async_trait]
impl RestaurantCatalog for MemoryCatalog {
    async fn restaurants_with_dishes(&self) -> Result<Vec<Restaurant>, CatalogError> {
        Ok(self.restaurants.clone())
    }
}
