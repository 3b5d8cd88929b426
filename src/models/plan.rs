use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{MealTemplate, NutritionInfo};

/// The meals selected for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub date: NaiveDate,

    /// One meal per slot, breakfast first and snack last.
    pub meals: Vec<MealTemplate>,

    /// Fieldwise sum of the meals' nutrition.
    pub total_nutrition: NutritionInfo,

    /// Advisory notes; empty when every threshold is met.
    pub notes: Vec<String>,
}

/// A multi-day plan. Serializes as a bare list of days.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DietPlan {
    pub days: Vec<DayPlan>,
}

impl DietPlan {
    pub fn new(days: Vec<DayPlan>) -> Self {
        Self { days }
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DayPlan> {
        self.days.iter()
    }
}
