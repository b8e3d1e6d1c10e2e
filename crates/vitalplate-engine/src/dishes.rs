// ABOUTME: Restaurant dish ranking by deficit match and proximity
// ABOUTME: Haversine radius filter, additive dish scoring with distance penalty, deterministic top-N
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalplate

use std::cmp::Ordering;

use rayon::prelude::*;
use vitalplate_core::constants::{display_names, messages};
use vitalplate_core::models::{Deficit, Dish, GeoPoint, Restaurant, ScoredDish};

use crate::config::DishScoringConfig;
use crate::geo::{haversine_km_with_radius, round2};

/// Ranks restaurant dishes near a location against a user's deficits
#[derive(Debug, Clone, Default)]
pub struct DishRecommender {
    config: DishScoringConfig,
}

impl DishRecommender {
    /// Recommender with default weights
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recommender with explicit weights
    #[must_use]
    pub const fn with_config(config: DishScoringConfig) -> Self {
        Self { config }
    }

    /// Scoring configuration in use
    #[must_use]
    pub const fn config(&self) -> &DishScoringConfig {
        &self.config
    }

    /// Score every dish of every restaurant within `max_distance_km` of `location`.
    ///
    /// Output is ordered by rounded score descending, then restaurant id and dish name
    /// ascending, and truncated to `limit`.
    #[must_use]
    pub fn recommend(
        &self,
        deficits: &[Deficit],
        restaurants: &[Restaurant],
        location: GeoPoint,
        max_distance_km: f64,
        limit: usize,
    ) -> Vec<ScoredDish> {
        let mut dishes: Vec<ScoredDish> = restaurants
            .par_iter()
            .filter_map(|restaurant| {
                let distance = self.distance_km(location, restaurant.location());
                (distance <= max_distance_km).then_some((restaurant, distance))
            })
            .flat_map_iter(|(restaurant, distance)| {
                restaurant
                    .dishes
                    .iter()
                    .map(move |dish| self.scored(restaurant, dish, deficits, distance))
            })
            .collect();

        dishes.sort_by(compare_dishes);
        dishes.truncate(limit);
        dishes
    }

    /// Distance between two points on the configured sphere
    #[must_use]
    pub fn distance_km(&self, from: GeoPoint, to: GeoPoint) -> f64 {
        haversine_km_with_radius(from, to, self.config.earth_radius_km)
    }

    /// Raw (unrounded) score of a dish at a given distance
    #[must_use]
    pub fn score(&self, dish: &Dish, deficits: &[Deficit], distance_km: f64) -> f64 {
        let cfg = &self.config;
        let nutrients = &dish.nutrients;
        let mut score = cfg.base_score;

        for deficit in deficits {
            if nutrients.contains_key(&deficit.marker) {
                score += cfg.marker_weight * (1.0 + deficit.severity);
            }
            for target in deficit.targets.keys() {
                if nutrients.contains_key(target) {
                    score += cfg.target_weight * cfg.target_severity_factor.mul_add(deficit.severity, 1.0);
                }
            }
        }

        for nutrient in nutrients.keys() {
            if cfg.valuable_nutrients.contains(nutrient) {
                score += cfg.valuable_nutrient_weight;
            }
        }

        score -= distance_km.min(cfg.distance_penalty_cap_km) * cfg.distance_penalty_per_km;
        score.max(0.0)
    }

    fn scored(
        &self,
        restaurant: &Restaurant,
        dish: &Dish,
        deficits: &[Deficit],
        distance_km: f64,
    ) -> ScoredDish {
        ScoredDish {
            restaurant: restaurant.name.clone(),
            restaurant_id: restaurant.id.clone(),
            restaurant_lat: restaurant.lat,
            restaurant_lon: restaurant.lon,
            dish: dish.name.clone(),
            nutrients: dish.nutrients.clone(),
            distance_km: round2(distance_km),
            score: round2(self.score(dish, deficits, distance_km)),
            match_reason: explain(dish, deficits),
        }
    }
}

fn compare_dishes(a: &ScoredDish, b: &ScoredDish) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.restaurant_id.cmp(&b.restaurant_id))
        .then_with(|| a.dish.cmp(&b.dish))
}

/// "Rich in: ..." from matched deficit markers, else from notable nutrients
fn explain(dish: &Dish, deficits: &[Deficit]) -> String {
    let mut names: Vec<&str> = Vec::new();
    for deficit in deficits {
        if dish.nutrients.contains_key(&deficit.marker) {
            let name = display_names::lookup(display_names::NUTRIENTS, &deficit.marker);
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }

    if names.is_empty() {
        names = display_names::NUTRIENTS
            .iter()
            .filter(|(key, _)| dish.nutrients.contains_key(*key))
            .map(|(_, name)| *name)
            .collect();
    }

    if names.is_empty() {
        return messages::DISH_BALANCED.to_owned();
    }
    names.truncate(messages::MAX_REASON_ITEMS);
    format!("{}{}", messages::DISH_MATCH_PREFIX, names.join(", "))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use vitalplate_core::models::ComparisonOperator;

    use super::*;

    fn deficit(marker: &str, severity: f64, targets: &[&str]) -> Deficit {
        Deficit {
            marker: marker.to_owned(),
            marker_key: marker.to_owned(),
            value: 1.0,
            threshold: 2.0,
            operator: ComparisonOperator::LessThan,
            why: String::new(),
            targets: targets
                .iter()
                .map(|t| ((*t).to_owned(), "more".to_owned()))
                .collect(),
            foods: Vec::new(),
            severity,
        }
    }

    fn dish(name: &str, nutrients: &[(&str, f64)]) -> Dish {
        Dish {
            name: name.to_owned(),
            nutrients: nutrients
                .iter()
                .map(|(k, v)| ((*k).to_owned(), *v))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    fn restaurant(id: &str, lat: f64, lon: f64, dishes: Vec<Dish>) -> Restaurant {
        Restaurant {
            id: id.to_owned(),
            name: format!("Restaurant {id}"),
            lat,
            lon,
            dishes,
        }
    }

    #[test]
    fn test_score_formula_at_zero_distance() {
        let d = dish("Salmon bowl", &[("omega3", 2.0), ("vitamin_d", 6.0), ("protein", 35.0)]);
        let deficits = [deficit("vitamin_d", 0.5, &["vitamin_d"])];
        // 5 + 2*(1.5) + 1*(1.25) + 3*0.3
        let expected = 5.0 + 3.0 + 1.25 + 0.9;
        assert!((DishRecommender::new().score(&d, &deficits, 0.0) - expected).abs() < 0.001);
    }

    #[test]
    fn test_distance_penalty_is_capped_and_score_floored() {
        let recommender = DishRecommender::new();
        let d = dish("Water", &[]);
        assert!((recommender.score(&d, &[], 50.0) - 4.0).abs() < 0.001);

        let mut config = DishScoringConfig::default();
        config.distance_penalty_per_km = 10.0;
        let harsh = DishRecommender::with_config(config);
        assert!(harsh.score(&d, &[], 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_far_restaurants_are_excluded() {
        let here = GeoPoint::new(55.751_244, 37.618_423);
        let restaurants = [
            restaurant("near", 55.760, 37.620, vec![dish("Oat bowl", &[("fiber", 8.0)])]),
            restaurant("far", 59.9343, 30.3351, vec![dish("Far bowl", &[("fiber", 8.0)])]),
        ];
        let ranked = DishRecommender::new().recommend(&[], &restaurants, here, 10.0, 20);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].restaurant_id, "near");
        assert!(ranked[0].distance_km < 10.0);
    }

    #[test]
    fn test_ties_break_by_restaurant_then_dish() {
        let here = GeoPoint::new(0.0, 0.0);
        let restaurants = [
            restaurant("b", 0.0, 0.0, vec![dish("Zed", &[]), dish("Alpha", &[])]),
            restaurant("a", 0.0, 0.0, vec![dish("Mid", &[])]),
        ];
        let ranked = DishRecommender::new().recommend(&[], &restaurants, here, 10.0, 2);
        let keys: Vec<(&str, &str)> = ranked
            .iter()
            .map(|d| (d.restaurant_id.as_str(), d.dish.as_str()))
            .collect();
        assert_eq!(keys, [("a", "Mid"), ("b", "Alpha")]);
    }

    #[test]
    fn test_match_reason_prefers_deficit_markers() {
        let d = dish("Lentil salad", &[("iron", 5.0), ("fiber", 10.0)]);
        assert_eq!(explain(&d, &[deficit("iron", 0.3, &[])]), "Rich in: iron");
        assert_eq!(explain(&d, &[]), "Rich in: iron, fiber");
        assert_eq!(explain(&dish("Tea", &[("caffeine", 1.0)]), &[]), "Balanced dish");
    }
}
