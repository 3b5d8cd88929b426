use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::models::NutritionInfo;

/// One of the four daily meal categories.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    /// Slots in the order a day is composed.
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snack,
    ];
}

/// A catalog entry. Never mutated once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealTemplate {
    pub name: String,

    #[serde(rename = "type")]
    pub slot: MealSlot,

    pub ingredients: Vec<String>,

    pub nutrition: NutritionInfo,

    /// Minutes.
    #[serde(default)]
    pub prep_time: u32,

    #[serde(default)]
    pub instructions: Vec<String>,
}

impl MealTemplate {
    pub fn new(
        name: &str,
        slot: MealSlot,
        ingredients: &[&str],
        nutrition: NutritionInfo,
        prep_time: u32,
        instructions: &[&str],
    ) -> Self {
        Self {
            name: name.to_string(),
            slot,
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            nutrition,
            prep_time,
            instructions: instructions.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// True if any ingredient contains `token`, ignoring case.
    pub fn has_ingredient_containing(&self, token: &str) -> bool {
        let token = token.to_lowercase();
        self.ingredients
            .iter()
            .any(|i| i.to_lowercase().contains(&token))
    }

    /// True if any ingredient equals one of `names`, ignoring case.
    pub fn has_any_ingredient(&self, names: &[String]) -> bool {
        self.ingredients.iter().any(|i| {
            let i = i.to_lowercase();
            names.iter().any(|n| n.to_lowercase() == i)
        })
    }
}
