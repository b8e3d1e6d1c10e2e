// ABOUTME: Integration tests running the recommendation engine over the built-in catalog data
// ABOUTME: Covers deficit detection, supplement advice, plan diversity, shopping lists, and dish ranking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalplate

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::collections::HashMap;

use vitalplate::catalog::{seed, validate_rules};
use vitalplate_core::models::{
    BiomarkerRule, GeoPoint, LabPanel, Preferences, Priority, Recommendation,
};
use vitalplate_engine::NutritionEngine;

fn rules() -> Vec<BiomarkerRule> {
    validate_rules(seed::default_rule_records(), "built-in").unwrap()
}

fn labs(values: &[(&str, f64)]) -> LabPanel {
    values.iter().map(|(k, v)| ((*k).to_owned(), *v)).collect()
}

fn sample_labs() -> LabPanel {
    labs(&[
        ("ferritin", 20.0),
        ("vitamin_d", 25.0),
        ("hba1c", 6.0),
        ("not_a_marker", 1.0),
    ])
}

// ============================================================================
// Deficit detection
// ============================================================================

#[test]
fn test_deficits_are_detected_and_ordered_by_severity() {
    let engine = NutritionEngine::default();
    let deficits = engine.analyze(&sample_labs(), &rules());

    let markers: Vec<&str> = deficits.iter().map(|d| d.marker.as_str()).collect();
    assert_eq!(markers, vec!["iron", "vitamin_d", "glycemic_control"]);

    assert!((deficits[0].severity - 1.0 / 3.0).abs() < 1e-9);
    assert!((deficits[1].severity - 5.0 / 30.0).abs() < 1e-9);
    assert!((deficits[2].severity - 0.4 / 5.6).abs() < 1e-9);
    assert_eq!(deficits[0].marker_key, "ferritin");
    assert_eq!(deficits[0].foods.first().map(String::as_str), Some("beef"));
}

#[test]
fn test_values_at_threshold_and_non_finite_values_do_not_fire() {
    let engine = NutritionEngine::default();
    let deficits = engine.analyze(
        &labs(&[("ferritin", 30.0), ("hba1c", 5.6), ("ldl", f64::NAN), ("crp", f64::INFINITY)]),
        &rules(),
    );
    assert!(deficits.is_empty());
}

#[test]
fn test_empty_panel_gives_no_deficits() {
    let engine = NutritionEngine::default();
    assert!(engine.analyze(&LabPanel::new(), &rules()).is_empty());
}

// ============================================================================
// Supplements
// ============================================================================

#[test]
fn test_supplements_follow_table_order_and_end_with_disclaimer() {
    let engine = NutritionEngine::default();
    let deficits = engine.analyze(&sample_labs(), &rules());
    let recommendations = engine.supplements(&deficits);

    let names: Vec<&str> = recommendations
        .iter()
        .filter_map(Recommendation::as_supplement)
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(names, vec!["Vitamin D3", "Iron", "Magnesium"]);
    assert!(recommendations.last().unwrap().is_disclaimer());

    // severity 0.33 is below the strong band
    let iron = recommendations
        .iter()
        .filter_map(Recommendation::as_supplement)
        .find(|s| s.name == "Iron")
        .unwrap();
    assert_eq!(iron.priority, Priority::Medium);
    assert!(iron.warning.is_some());
}

#[test]
fn test_no_deficits_still_yields_disclaimer() {
    let engine = NutritionEngine::default();
    let recommendations = engine.supplements(&[]);
    assert_eq!(recommendations.len(), 1);
    assert!(recommendations[0].is_disclaimer());
}

// ============================================================================
// Meal plan and shopping list
// ============================================================================

#[test]
fn test_plan_prefers_iron_recipes_and_respects_tag_cap() {
    let engine = NutritionEngine::default();
    let deficits = engine.analyze(&sample_labs(), &rules());
    let plan = engine.plan(
        &deficits,
        &seed::default_recipes(),
        &Preferences::default(),
        None,
        None,
    );

    assert_eq!(plan.len(), 6);
    assert_eq!(plan[0].recipe.id, "lentil_spinach_stew");
    assert_eq!(plan[0].why, "iron");
    assert_eq!(plan[0].match_reason, "Good for: iron");

    let mut tag_counts: HashMap<&str, usize> = HashMap::new();
    for item in &plan {
        for tag in &item.recipe.tags {
            *tag_counts.entry(tag.as_str()).or_default() += 1;
        }
    }
    assert!(tag_counts.values().all(|count| *count <= 2));
}

#[test]
fn test_plan_without_deficits_is_balanced() {
    let engine = NutritionEngine::default();
    let plan = engine.plan(&[], &seed::default_recipes(), &Preferences::default(), None, Some(3));
    assert_eq!(plan.len(), 3);
    assert!(plan.iter().all(|item| item.why == "balanced"));
    assert!(plan.iter().all(|item| item.match_reason == "Balanced nutrition"));
}

#[test]
fn test_plan_is_idempotent() {
    let engine = NutritionEngine::default();
    let deficits = engine.analyze(&sample_labs(), &rules());
    let recipes = seed::default_recipes();
    let first = engine.plan(&deficits, &recipes, &Preferences::default(), None, None);
    let second = engine.plan(&deficits, &recipes, &Preferences::default(), None, None);
    assert_eq!(first, second);
}

#[test]
fn test_shopping_list_aggregates_and_skips_pantry_staples() {
    let engine = NutritionEngine::default();
    let deficits = engine.analyze(&sample_labs(), &rules());
    let plan = engine.plan(
        &deficits,
        &seed::default_recipes(),
        &Preferences::default(),
        None,
        None,
    );
    let shopping = engine.shopping_list(&plan, None);

    // lemon juice appears in three seeded recipes
    assert_eq!(shopping[0].ingredient, "Lemon juice");
    assert_eq!(shopping[0].count, 3);
    assert_eq!(shopping[0].priority, Priority::High);
    assert_eq!(shopping[0].amount, "1 tbsp");

    let spinach = shopping
        .iter()
        .find(|item| item.ingredient == "Fresh spinach")
        .unwrap();
    assert_eq!(spinach.count, 2);
    assert_eq!(spinach.priority, Priority::Medium);

    for staple in ["Olive oil", "Yellow onion", "Garlic", "Cinnamon"] {
        assert!(shopping.iter().all(|item| item.ingredient != staple));
    }
}

#[test]
fn test_available_ingredients_restrict_plan() {
    let engine = NutritionEngine::default();
    let deficits = engine.analyze(&sample_labs(), &rules());
    let available: Vec<String> = ["red lentils", "FRESH SPINACH", "canned tomatoes"]
        .iter()
        .map(|s| (*s).to_owned())
        .collect();
    let plan = engine.plan(
        &deficits,
        &seed::default_recipes(),
        &Preferences::default(),
        Some(available.as_slice()),
        None,
    );

    let ids: Vec<&str> = plan.iter().map(|item| item.recipe.id.as_str()).collect();
    assert_eq!(ids, vec!["lentil_spinach_stew", "beef_liver_onions"]);
}

// ============================================================================
// Restaurant dishes
// ============================================================================

#[test]
fn test_dishes_are_ranked_and_explained() {
    let engine = NutritionEngine::default();
    let deficits = engine.analyze(&sample_labs(), &rules());
    let here = GeoPoint::new(55.751_244, 37.618_423);
    let dishes = engine.dishes(&deficits, &seed::default_restaurants(), here, None, None);

    assert_eq!(dishes.len(), 4);
    assert!(dishes.windows(2).all(|pair| pair[0].score >= pair[1].score));
    assert!(dishes.iter().all(|dish| dish.distance_km <= 10.0));

    let salad = dishes.iter().find(|d| d.dish == "Lentil salad").unwrap();
    assert_eq!(salad.restaurant_id, "r2");
    assert_eq!(salad.match_reason, "Rich in: iron");

    let salmon = dishes.iter().find(|d| d.dish == "Salmon bowl").unwrap();
    assert!(salmon.distance_km.abs() < f64::EPSILON);
    assert_eq!(salmon.match_reason, "Rich in: vitamin D");
}

#[test]
fn test_restaurants_beyond_radius_never_appear() {
    let engine = NutritionEngine::default();
    let deficits = engine.analyze(&sample_labs(), &rules());
    let here = GeoPoint::new(55.751_244, 37.618_423);
    let dishes = engine.dishes(&deficits, &seed::default_restaurants(), here, Some(0.5), None);

    assert_eq!(dishes.len(), 2);
    assert!(dishes.iter().all(|dish| dish.restaurant_id == "r1"));
}

#[test]
fn test_dish_limit_truncates() {
    let engine = NutritionEngine::default();
    let here = GeoPoint::new(55.751_244, 37.618_423);
    let dishes = engine.dishes(&[], &seed::default_restaurants(), here, None, Some(1));
    assert_eq!(dishes.len(), 1);
}

// ============================================================================
// Repeatability
// ============================================================================

#[test]
fn test_analysis_and_supplements_are_repeatable() {
    let engine = NutritionEngine::default();
    let rules = rules();
    let labs = sample_labs();

    let first = engine.analyze(&labs, &rules);
    let second = engine.analyze(&labs, &rules);
    assert_eq!(first, second);

    assert_eq!(engine.supplements(&first), engine.supplements(&second));
}

#[test]
fn test_shopping_list_is_repeatable() {
    let engine = NutritionEngine::default();
    let deficits = engine.analyze(&sample_labs(), &rules());
    let plan = engine.plan(
        &deficits,
        &seed::default_recipes(),
        &Preferences::default(),
        None,
        None,
    );
    let available = vec!["Fresh spinach".to_owned()];

    assert_eq!(engine.shopping_list(&plan, None), engine.shopping_list(&plan, None));
    assert_eq!(
        engine.shopping_list(&plan, Some(available.as_slice())),
        engine.shopping_list(&plan, Some(available.as_slice()))
    );
}

#[test]
fn test_dish_ranking_is_repeatable() {
    let engine = NutritionEngine::default();
    let deficits = engine.analyze(&sample_labs(), &rules());
    let restaurants = seed::default_restaurants();
    let here = GeoPoint::new(55.751_244, 37.618_423);

    let first = engine.dishes(&deficits, &restaurants, here, None, None);
    let second = engine.dishes(&deficits, &restaurants, here, None, None);
    assert_eq!(first.len(), 4);
    assert_eq!(first, second);
}
