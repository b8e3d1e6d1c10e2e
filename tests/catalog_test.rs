// ABOUTME: Integration tests for the in-memory and JSON file catalogs
// ABOUTME: Covers seeding, recipe ownership, tag search, nearby filtering, and file loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalplate

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use serde_json::json;
use tempfile::TempDir;
use vitalplate::catalog::{
    CatalogError, CatalogPaths, JsonFileCatalog, MemoryCatalog, RecipeCatalog, RestaurantCatalog,
    RuleCatalog,
};
use vitalplate_core::errors::{AppError, ErrorCode, InvalidRuleError};
use vitalplate::service::NutritionService;
use vitalplate_core::models::{GeoPoint, Ingredient, LabPanel, Recipe};
use vitalplate_engine::EngineConfig;

fn user_recipe(id: &str, name: &str) -> Recipe {
    serde_json::from_value(json!({
        "id": id,
        "name": name,
        "ingredients": [{"name": "Buckwheat", "amount": "80 g"}],
        "tags": ["user_special"],
    }))
    .unwrap()
}

fn write_json(dir: &TempDir, name: &str, value: &serde_json::Value) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_vec_pretty(value).unwrap()).unwrap();
    path
}

// ============================================================================
// MemoryCatalog
// ============================================================================

#[tokio::test]
async fn test_seeded_catalog_contents() {
    let catalog = MemoryCatalog::seeded().unwrap();

    assert_eq!(catalog.rules().await.unwrap().len(), 8);

    let recipes = catalog.public_recipes().await.unwrap();
    let names: Vec<&str> = recipes.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Beef liver with onions",
            "Chickpea salad with vegetables",
            "Lentil and spinach stew",
            "Oatmeal with yogurt and berries",
            "Salmon and quinoa bowl",
            "Tuna and egg salad",
        ]
    );

    assert_eq!(catalog.restaurants_with_dishes().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_user_recipes_are_private_and_removable() {
    let catalog = MemoryCatalog::seeded().unwrap();

    let stored = catalog
        .add_user_recipe("user-1", user_recipe("", "Buckwheat porridge"))
        .await
        .unwrap();
    assert!(stored.id.starts_with("recipe_"));
    assert_eq!(stored.owner.as_deref(), Some("user-1"));

    assert_eq!(catalog.public_recipes().await.unwrap().len(), 6);
    assert_eq!(catalog.user_recipes("user-1").await.unwrap(), vec![stored.clone()]);
    assert!(catalog.user_recipes("user-2").await.unwrap().is_empty());
    assert_eq!(
        catalog.recipe_by_id(&stored.id).await.unwrap(),
        Some(stored.clone())
    );

    assert!(catalog.remove_recipe("user-1", &stored.id).await.unwrap());
    assert!(!catalog.remove_recipe("user-1", &stored.id).await.unwrap());
    assert!(catalog.recipe_by_id(&stored.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_adding_recipe_with_existing_id_replaces_it() {
    let catalog = MemoryCatalog::seeded().unwrap();
    catalog
        .add_user_recipe("user-1", user_recipe("mine", "First"))
        .await
        .unwrap();
    let mut second = user_recipe("mine", "Second");
    second.ingredients.push(Ingredient::new("Kefir", "200 ml"));
    catalog.add_user_recipe("user-1", second).await.unwrap();

    let mine = catalog.user_recipes("user-1").await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].name, "Second");
}

#[tokio::test]
async fn test_recipe_ids_of_others_cannot_be_taken_over() {
    let catalog = MemoryCatalog::seeded().unwrap();
    let public = catalog.public_recipes().await.unwrap();

    let error = catalog
        .add_user_recipe("user-2", public[0].clone())
        .await
        .unwrap_err();
    assert!(matches!(error, CatalogError::NotOwner { .. }));
    assert_eq!(AppError::from(error).code, ErrorCode::PermissionDenied);
    assert_eq!(catalog.public_recipes().await.unwrap(), public);

    catalog
        .add_user_recipe("user-1", user_recipe("mine", "Mine"))
        .await
        .unwrap();
    let error = catalog
        .add_user_recipe("user-2", user_recipe("mine", "Hijacked"))
        .await
        .unwrap_err();
    assert!(matches!(error, CatalogError::NotOwner { .. }));
    assert_eq!(catalog.user_recipes("user-1").await.unwrap()[0].name, "Mine");
    assert!(catalog.user_recipes("user-2").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_only_the_owner_can_remove_a_recipe() {
    let catalog = MemoryCatalog::seeded().unwrap();
    catalog
        .add_user_recipe("user-1", user_recipe("mine", "Mine"))
        .await
        .unwrap();

    let error = catalog.remove_recipe("user-2", "mine").await.unwrap_err();
    assert!(matches!(error, CatalogError::NotOwner { .. }));
    let error = catalog
        .remove_recipe("user-2", "chickpea_salad")
        .await
        .unwrap_err();
    assert!(matches!(error, CatalogError::NotOwner { .. }));

    assert_eq!(catalog.public_recipes().await.unwrap().len(), 6);
    assert!(catalog.recipe_by_id("mine").await.unwrap().is_some());
    assert!(!catalog.remove_recipe("user-2", "absent").await.unwrap());
}

#[tokio::test]
async fn test_search_by_tags_matches_any_tag_in_public_recipes() {
    let catalog = MemoryCatalog::seeded().unwrap();
    catalog
        .add_user_recipe("user-1", user_recipe("mine", "Private b12"))
        .await
        .unwrap();

    let found = catalog
        .search_by_tags(&["b12".to_owned(), "user_special".to_owned()])
        .await
        .unwrap();
    let ids: Vec<&str> = found.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["beef_liver_onions", "tuna_egg_salad"]);
}

#[tokio::test]
async fn test_nearby_filters_by_distance() {
    let catalog = MemoryCatalog::seeded().unwrap();
    let here = GeoPoint::new(55.751_244, 37.618_423);

    let close = catalog.nearby(here, 0.5).await.unwrap();
    assert_eq!(close.len(), 1);
    assert_eq!(close[0].id, "r1");

    assert_eq!(catalog.nearby(here, 5.0).await.unwrap().len(), 2);
}

// ============================================================================
// JsonFileCatalog
// ============================================================================

#[tokio::test]
async fn test_unset_paths_fall_back_to_built_in_data() {
    let catalog = JsonFileCatalog::load(CatalogPaths::default()).await.unwrap();
    assert_eq!(catalog.rules().await.unwrap().len(), 8);
    assert_eq!(catalog.public_recipes().await.unwrap().len(), 6);
}

#[tokio::test]
async fn test_json_files_are_loaded() {
    let dir = TempDir::new().unwrap();
    let rules = write_json(
        &dir,
        "rules.json",
        &json!([{
            "marker_key": "ferritin",
            "operator": "<",
            "threshold": 30.0,
            "deficit_tag": "iron",
            "reason_template": "low ferritin",
            "targets": {"iron": ">=18 mg/day"},
        }]),
    );
    let recipes = write_json(
        &dir,
        "recipes.json",
        &json!([
            {"id": "b", "name": "Beta", "tags": ["iron"]},
            {"id": "a", "name": "Alpha"},
            {"id": "own", "name": "Owned", "owner": "user-1"},
        ]),
    );
    let restaurants = write_json(
        &dir,
        "restaurants.json",
        &json!([{
            "id": "x",
            "name": "Corner",
            "lat": 10.0,
            "lon": 10.0,
            "dishes": [{"name": "Soup", "nutrients": {"iron": 2.0}}],
        }]),
    );

    let catalog = JsonFileCatalog::load(CatalogPaths {
        rules: Some(rules),
        recipes: Some(recipes),
        restaurants: Some(restaurants),
    })
    .await
    .unwrap();

    let loaded_rules = catalog.rules().await.unwrap();
    assert_eq!(loaded_rules.len(), 1);
    assert_eq!(loaded_rules[0].reason(), "low ferritin");

    let public: Vec<String> = catalog
        .public_recipes()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(public, vec!["a", "b"]);
    assert_eq!(catalog.user_recipes("user-1").await.unwrap().len(), 1);
    assert!(catalog.recipe_by_id("own").await.unwrap().is_some());

    let restaurants = catalog.restaurants_with_dishes().await.unwrap();
    assert_eq!(restaurants[0].dishes[0].name, "Soup");
}

#[tokio::test]
async fn test_invalid_rule_reports_its_position() {
    let dir = TempDir::new().unwrap();
    let rules = write_json(
        &dir,
        "rules.json",
        &json!([
            {"marker_key": "b12", "operator": "<", "threshold": 300.0, "deficit_tag": "b12", "reason": "low"},
            {"marker_key": "ldl", "operator": "==", "threshold": 100.0, "deficit_tag": "ldl", "reason": "bad"},
        ]),
    );
    let paths = CatalogPaths {
        rules: Some(rules),
        ..CatalogPaths::default()
    };

    match JsonFileCatalog::load(paths.clone()).await {
        Err(CatalogError::InvalidRule { index, source, .. }) => {
            assert_eq!(index, 1);
            assert!(matches!(source, InvalidRuleError::UnknownOperator { .. }));
        }
        other => panic!("expected invalid rule, got {other:?}"),
    }

    let error = AppError::from(JsonFileCatalog::load(paths).await.unwrap_err());
    assert_eq!(error.code, ErrorCode::InvalidRule);
}

#[tokio::test]
async fn test_rules_edited_after_load_do_not_affect_analysis() {
    let dir = TempDir::new().unwrap();
    let rule = |operator: &str| {
        json!([{
            "marker_key": "ferritin",
            "operator": operator,
            "threshold": 30.0,
            "deficit_tag": "iron",
            "reason": "low ferritin",
        }])
    };
    let path = write_json(&dir, "rules.json", &rule("<"));
    let catalog = Arc::new(
        JsonFileCatalog::load(CatalogPaths {
            rules: Some(path.clone()),
            ..CatalogPaths::default()
        })
        .await
        .unwrap(),
    );
    let service = NutritionService::from_catalog(catalog, EngineConfig::default());
    let labs: LabPanel = [("ferritin".to_owned(), 20.0)].into_iter().collect();

    let before = service.analyze(&labs).await.unwrap();
    fs::write(&path, serde_json::to_vec(&rule("==")).unwrap()).unwrap();
    let after = service.analyze(&labs).await.unwrap();

    assert_eq!(before.deficits.len(), 1);
    assert_eq!(after.deficits, before.deficits);
}

#[tokio::test]
async fn test_missing_and_malformed_files() {
    let dir = TempDir::new().unwrap();

    let error = JsonFileCatalog::load(CatalogPaths {
        recipes: Some(dir.path().join("absent.json")),
        ..CatalogPaths::default()
    })
    .await
    .unwrap_err();
    assert!(matches!(error, CatalogError::Io { .. }));
    assert_eq!(AppError::from(error).code, ErrorCode::StorageError);

    let garbage = dir.path().join("garbage.json");
    fs::write(&garbage, b"{ not json").unwrap();
    let error = JsonFileCatalog::load(CatalogPaths {
        restaurants: Some(garbage),
        ..CatalogPaths::default()
    })
    .await
    .unwrap_err();
    assert!(matches!(error, CatalogError::Parse { .. }));
    assert_eq!(AppError::from(error).code, ErrorCode::SerializationError);
}
