//! Calorie lookup from a static per-100 g nutrition table.

pub mod handlers;

use std::ops::RangeInclusive;

use serde::Serialize;

/// Accepted portion sizes in grams.
pub const GRAMS_RANGE: RangeInclusive<u32> = 1..=1000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FoodEntry {
    pub name: &'static str,
    pub kcal_per_100g: f64,
    pub protein_g_per_100g: f64,
    pub carbs_g_per_100g: f64,
}

const fn food(name: &'static str, kcal: f64, protein: f64, carbs: f64) -> FoodEntry {
    FoodEntry {
        name,
        kcal_per_100g: kcal,
        protein_g_per_100g: protein,
        carbs_g_per_100g: carbs,
    }
}

pub const FOODS: &[FoodEntry] = &[
    food("Roti", 300.0, 8.0, 55.0),
    food("Rice", 130.0, 2.7, 28.0),
    food("Paneer", 265.0, 18.0, 6.0),
    food("Egg", 155.0, 13.0, 1.1),
    food("Milk", 60.0, 3.2, 5.0),
    food("Soya Chunks", 345.0, 52.0, 33.0),
    food("Oats", 380.0, 13.0, 67.0),
    food("Idli", 110.0, 3.2, 20.0),
    food("Dosa", 165.0, 3.9, 31.0),
    food("Apple", 52.0, 0.3, 14.0),
    food("Banana", 89.0, 1.1, 23.0),
    food("Peanuts", 567.0, 25.0, 16.0),
    food("Almonds", 579.0, 21.0, 22.0),
    food("Sprouts", 90.0, 7.0, 15.0),
    food("Vegetable Soup", 60.0, 2.0, 10.0),
];

/// Nutrition for a portion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Nutrition {
    pub kcal: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
}

pub fn find_food(name: &str) -> Option<&'static FoodEntry> {
    FOODS.iter().find(|f| f.name == name)
}

/// Scales the per-100 g values of `food_name` linearly to `grams`.
/// `None` if the food is not in the table.
pub fn compute_nutrition(food_name: &str, grams: f64) -> Option<Nutrition> {
    let entry = find_food(food_name)?;
    let factor = grams / 100.0;
    Some(Nutrition {
        kcal: entry.kcal_per_100g * factor,
        protein_g: entry.protein_g_per_100g * factor,
        carbs_g: entry.carbs_g_per_100g * factor,
    })
}
