// ABOUTME: Built-in catalog data used when no catalog files are configured
// ABOUTME: Default biomarker rules, six public recipes, and two demo restaurants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalplate

use std::collections::{BTreeMap, BTreeSet};

use vitalplate_core::models::{BiomarkerRuleRecord, Dish, Ingredient, Recipe, Restaurant};

fn rule(
    marker_key: &str,
    operator: &str,
    threshold: f64,
    deficit_tag: &str,
    reason: &str,
    targets: &[(&str, &str)],
    foods: &[&str],
) -> BiomarkerRuleRecord {
    BiomarkerRuleRecord {
        marker_key: marker_key.to_owned(),
        operator: operator.to_owned(),
        threshold,
        deficit_tag: deficit_tag.to_owned(),
        reason: reason.to_owned(),
        targets: targets
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect(),
        foods: foods.iter().map(|f| (*f).to_owned()).collect(),
    }
}

/// Default biomarker rules, in evaluation order
#[must_use]
pub fn default_rule_records() -> Vec<BiomarkerRuleRecord> {
    vec![
        rule(
            "ferritin",
            "<",
            30.0,
            "iron",
            "low ferritin",
            &[("iron", ">=18 mg/day"), ("vitamin_c", ">=75 mg/day")],
            &["beef", "liver", "shellfish", "lentils", "spinach", "citrus"],
        ),
        rule(
            "b12",
            "<",
            300.0,
            "b12",
            "low B12",
            &[("b12", ">2.4 mcg/day")],
            &["fish", "eggs", "dairy", "fortified plant milks"],
        ),
        rule(
            "folate",
            "<",
            5.0,
            "folate",
            "low folate",
            &[("folate", ">=400 mcg/day")],
            &["leafy greens", "legumes", "citrus"],
        ),
        rule(
            "vitamin_d",
            "<",
            30.0,
            "vitamin_d",
            "low vitamin D",
            &[("vitamin_d", "1000-2000 IU/day")],
            &["salmon", "mackerel", "eggs"],
        ),
        rule(
            "hba1c",
            ">",
            5.6,
            "glycemic_control",
            "elevated HbA1c",
            &[("fiber", "25-35 g/day"), ("protein", "1.2-1.6 g/kg")],
            &["legumes", "oats", "non-starchy vegetables", "vinegar before starch"],
        ),
        rule(
            "ldl",
            ">",
            100.0,
            "ldl",
            "elevated LDL",
            &[("soluble_fiber", "10-15 g/day"), ("omega3", "2-3 servings fish/week")],
            &["oats", "legumes", "olive oil", "nuts", "fish"],
        ),
        rule(
            "triglycerides",
            ">",
            150.0,
            "triglycerides",
            "elevated TG",
            &[("refined_carbs", "reduce"), ("omega3", "increase")],
            &["fish", "nuts", "less alcohol", "berries"],
        ),
        rule(
            "crp",
            ">",
            3.0,
            "inflammation",
            "elevated CRP",
            &[("anti_inflammatory", "pattern")],
            &["olive oil", "nuts", "fish", "berries", "vegetables"],
        ),
    ]
}

struct RecipeSeed {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    time_min: u32,
    ingredients: &'static [(&'static str, &'static str)],
    instructions: &'static [&'static str],
    nutrients: &'static [(&'static str, f64)],
    tags: &'static [&'static str],
}

const RECIPES: &[RecipeSeed] = &[
    RecipeSeed {
        id: "oats_berries_yogurt",
        name: "Oatmeal with yogurt and berries",
        description: "A classic healthy breakfast rich in fiber and protein.",
        time_min: 8,
        ingredients: &[
            ("Rolled oats", "50 g"),
            ("Greek yogurt", "150 g"),
            ("Fresh berries", "70 g"),
            ("Chia seeds", "1 tbsp"),
            ("Cinnamon", "a pinch"),
        ],
        instructions: &[
            "Mix the oats with the Greek yogurt and chia seeds.",
            "Let it rest for 5 minutes so the chia seeds swell a little.",
            "Transfer to a bowl, top with fresh berries and dust with cinnamon.",
        ],
        nutrients: &[("fiber", 8.0), ("protein", 20.0), ("b12", 0.8)],
        tags: &["breakfast", "glycemic_control"],
    },
    RecipeSeed {
        id: "lentil_spinach_stew",
        name: "Lentil and spinach stew",
        description: "A hearty, iron-rich vegan dish for lunch or dinner.",
        time_min: 25,
        ingredients: &[
            ("Red lentils", "150 g"),
            ("Fresh spinach", "200 g"),
            ("Canned tomatoes", "400 g"),
            ("Yellow onion", "1 pc"),
            ("Garlic", "2 cloves"),
            ("Olive oil", "2 tbsp"),
        ],
        instructions: &[
            "Finely chop the onion and garlic and sweat them in olive oil until translucent.",
            "Rinse the lentils and add them with the tomatoes and 400 ml of water.",
            "Bring to a boil, then simmer for 15-20 minutes until the lentils are soft.",
            "Stir in the spinach and cook 2-3 more minutes. Season to taste.",
        ],
        nutrients: &[("iron", 6.0), ("fiber", 12.0), ("protein", 22.0)],
        tags: &["iron", "vegan"],
    },
    RecipeSeed {
        id: "salmon_bowl",
        name: "Salmon and quinoa bowl",
        description: "A balanced bowl rich in omega-3 and vitamin D.",
        time_min: 20,
        ingredients: &[
            ("Salmon fillet", "150 g"),
            ("Quinoa", "80 g"),
            ("Fresh spinach", "100 g"),
            ("Avocado", "1/2 pc"),
            ("Olive oil", "1 tbsp"),
            ("Lemon juice", "1 tbsp"),
        ],
        instructions: &[
            "Cook the quinoa according to the package.",
            "Season the salmon and bake at 200°C for 12-15 minutes or steam it.",
            "Slice the avocado. Whisk olive oil with lemon juice for the dressing.",
            "Assemble: spinach, quinoa, salmon and avocado. Drizzle with dressing.",
        ],
        nutrients: &[("omega3", 2.0), ("protein", 35.0), ("vitamin_d", 8.0)],
        tags: &["vitamin_d", "omega3", "ldl"],
    },
    RecipeSeed {
        id: "beef_liver_onions",
        name: "Beef liver with onions",
        description: "A quick source of iron and vitamin B12.",
        time_min: 15,
        ingredients: &[
            ("Beef liver", "200 g"),
            ("Yellow onion", "1 pc"),
            ("Olive oil", "2 tbsp"),
        ],
        instructions: &[
            "Slice the liver thinly and the onion into half rings.",
            "Fry the onion in olive oil until golden.",
            "Add the liver and cook 2-3 minutes per side, leaving it slightly pink inside.",
            "Season with salt and pepper at the very end.",
        ],
        nutrients: &[("iron", 8.0), ("b12", 10.0), ("protein", 28.0)],
        tags: &["iron", "b12"],
    },
    RecipeSeed {
        id: "chickpea_salad",
        name: "Chickpea salad with vegetables",
        description: "A light, fresh salad ready in 10 minutes and a great source of fiber.",
        time_min: 10,
        ingredients: &[
            ("Canned chickpeas", "200 g"),
            ("Cherry tomatoes", "100 g"),
            ("Cucumber", "1 pc"),
            ("Olive oil", "2 tbsp"),
            ("Lemon juice", "1 tbsp"),
            ("Parsley", "1 bunch"),
        ],
        instructions: &[
            "Drain and rinse the chickpeas.",
            "Halve the tomatoes, dice the cucumber and chop the parsley.",
            "Combine everything in a salad bowl.",
            "Dress with olive oil and lemon juice. Season to taste.",
        ],
        nutrients: &[("fiber", 10.0), ("protein", 14.0)],
        tags: &["glycemic_control", "ldl"],
    },
    RecipeSeed {
        id: "tuna_egg_salad",
        name: "Tuna and egg salad",
        description: "A simple high-protein salad for a quick lunch.",
        time_min: 12,
        ingredients: &[
            ("Canned tuna", "1 can (150 g)"),
            ("Eggs", "2 pcs"),
            ("Lettuce leaves", "100 g"),
            ("Olive oil", "1 tbsp"),
            ("Lemon juice", "1 tbsp"),
        ],
        instructions: &[
            "Hard-boil the eggs (10 minutes after boiling), cool and slice.",
            "Drain the tuna.",
            "Lay out the lettuce, then the tuna and sliced eggs.",
            "Drizzle with olive oil and lemon juice.",
        ],
        nutrients: &[("protein", 30.0), ("omega3", 0.5), ("b12", 2.0)],
        tags: &["b12", "protein"],
    },
];

impl RecipeSeed {
    fn to_recipe(&self) -> Recipe {
        Recipe {
            id: self.id.to_owned(),
            name: self.name.to_owned(),
            description: Some(self.description.to_owned()),
            time_min: self.time_min,
            ingredients: self
                .ingredients
                .iter()
                .map(|(name, amount)| Ingredient::new(*name, *amount))
                .collect(),
            instructions: self.instructions.iter().map(|s| (*s).to_owned()).collect(),
            tags: self
                .tags
                .iter()
                .map(|s| (*s).to_owned())
                .collect::<BTreeSet<_>>(),
            nutrients: self
                .nutrients
                .iter()
                .map(|(k, v)| ((*k).to_owned(), *v))
                .collect::<BTreeMap<_, _>>(),
            difficulty: 1,
            owner: None,
        }
    }
}

/// Default public recipes
#[must_use]
pub fn default_recipes() -> Vec<Recipe> {
    RECIPES.iter().map(RecipeSeed::to_recipe).collect()
}

fn dish(name: &str, nutrients: &[(&str, f64)]) -> Dish {
    Dish {
        name: name.to_owned(),
        nutrients: nutrients
            .iter()
            .map(|(k, v)| ((*k).to_owned(), *v))
            .collect(),
    }
}

/// Default demo restaurants
#[must_use]
pub fn default_restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant {
            id: "r1".to_owned(),
            name: "Green Bowl".to_owned(),
            lat: 55.751_244,
            lon: 37.618_423,
            dishes: vec![
                dish(
                    "Salmon bowl",
                    &[("omega3", 2.0), ("vitamin_d", 6.0), ("protein", 35.0)],
                ),
                dish("Chickpea bowl", &[("fiber", 12.0), ("protein", 18.0)]),
            ],
        },
        Restaurant {
            id: "r2".to_owned(),
            name: "Oat & Bean".to_owned(),
            lat: 55.760,
            lon: 37.620,
            dishes: vec![
                dish("Oat bowl", &[("fiber", 8.0), ("protein", 16.0)]),
                dish("Lentil salad", &[("iron", 5.0), ("fiber", 10.0)]),
            ],
        },
    ]
}
