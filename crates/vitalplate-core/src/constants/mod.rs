// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Display names, pantry staples, nutrient sets, and fixed texts shared across crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalplate

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large list.
//! Scoring weights are not here: they live in the engine configuration so they can be
//! overridden per deployment.

/// Human-readable names for deficit markers and nutrients
pub mod display_names {
    /// Deficit marker → display name, used when explaining recipe matches
    pub const MARKERS: &[(&str, &str)] = &[
        ("iron", "iron"),
        ("b12", "B12"),
        ("vitamin_d", "vitamin D"),
        ("omega3", "omega-3"),
        ("folate", "folate"),
        ("glycemic_control", "glucose control"),
        ("ldl", "cholesterol"),
        ("triglycerides", "triglycerides"),
        ("inflammation", "anti-inflammatory"),
    ];

    /// Nutrient → display name, in the order dish explanations fall back through them
    pub const NUTRIENTS: &[(&str, &str)] = &[
        ("iron", "iron"),
        ("b12", "B12"),
        ("vitamin_d", "vitamin D"),
        ("omega3", "omega-3"),
        ("fiber", "fiber"),
        ("protein", "protein"),
    ];

    /// Look up a display name, falling back to the key itself
    #[must_use]
    pub fn lookup<'a>(table: &'a [(&'a str, &'a str)], key: &'a str) -> &'a str {
        table
            .iter()
            .find(|(k, _)| *k == key)
            .map_or(key, |(_, name)| name)
    }
}

/// Ingredients assumed to always be in the kitchen
pub mod pantry {
    /// Default pantry staples (matched case-insensitively)
    pub const DEFAULT_STAPLES: &[&str] = &[
        "olive oil",
        "vegetable oil",
        "salt",
        "pepper",
        "water",
        "garlic",
        "onion",
        "yellow onion",
        "spices",
        "cinnamon",
    ];
}

/// Nutrient sets used by dish scoring
pub mod nutrients {
    /// Generally valuable nutrients that earn a small bonus on any dish
    pub const VALUABLE: &[&str] = &[
        "fiber",
        "protein",
        "omega3",
        "vitamin_d",
        "iron",
        "b12",
        "vitamin_c",
    ];
}

/// Geodesic constants
pub mod geo {
    /// Mean Earth radius in kilometers (haversine)
    pub const EARTH_RADIUS_KM: f64 = 6371.0;
    /// Valid latitude range in decimal degrees
    pub const MAX_LATITUDE: f64 = 90.0;
    /// Valid longitude range in decimal degrees
    pub const MAX_LONGITUDE: f64 = 180.0;
}

/// Fixed explanation texts
pub mod messages {
    /// Prefix for recipe match explanations
    pub const RECIPE_MATCH_PREFIX: &str = "Good for: ";
    /// Recipe explanation when no deficit tag matches
    pub const RECIPE_BALANCED: &str = "Balanced nutrition";
    /// Short `why` value when no deficit tag matches
    pub const WHY_BALANCED: &str = "balanced";
    /// Prefix for dish match explanations
    pub const DISH_MATCH_PREFIX: &str = "Rich in: ";
    /// Dish explanation when nothing notable matches
    pub const DISH_BALANCED: &str = "Balanced dish";
    /// Maximum number of names listed in an explanation
    pub const MAX_REASON_ITEMS: usize = 3;
    /// Terminal disclaimer appended to every supplement recommendation list
    pub const SUPPLEMENT_DISCLAIMER: &str = "These are informational suggestions, not medical advice. \
        Always consult a doctor before starting supplements. \
        Repeat the lab tests in 8-12 weeks to assess effectiveness.";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Default service name
    pub const VITALPLATE: &str = "vitalplate";
}

/// Request mode identifiers accepted by the orchestrating service
pub mod modes {
    /// Meal plan from the recipe catalog
    pub const DIY: &str = "diy";
    /// Ranked restaurant dishes near a location
    pub const RESTAURANTS: &str = "restaurants";
    /// Meal plan restricted to detected pantry contents
    pub const PANTRY: &str = "pantry";
}
