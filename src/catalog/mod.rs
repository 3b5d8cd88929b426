mod builtin;

pub use builtin::builtin_meals;

use crate::error::{PlanError, Result};
use crate::models::{MealSlot, MealTemplate};

/// Read-only source of meal templates.
///
/// Implementations must keep declaration order stable: selection breaks
/// calorie ties in favour of the earlier entry.
pub trait MealCatalog: Send + Sync {
    /// Every template, in declaration order.
    fn templates(&self) -> &[MealTemplate];

    /// Templates for one slot, in declaration order.
    fn templates_for_slot(&self, slot: MealSlot) -> Vec<&MealTemplate> {
        self.templates().iter().filter(|m| m.slot == slot).collect()
    }
}

/// A catalog held in memory.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    meals: Vec<MealTemplate>,
}

impl StaticCatalog {
    /// Build a catalog, rejecting templates with invalid nutrition or no ingredients.
    pub fn new(meals: Vec<MealTemplate>) -> Result<Self> {
        for meal in &meals {
            if !meal.nutrition.is_valid() {
                return Err(PlanError::validation(format!(
                    "meal '{}' has negative or non-numeric nutrition values",
                    meal.name
                )));
            }
            if meal.ingredients.is_empty() {
                return Err(PlanError::validation(format!(
                    "meal '{}' lists no ingredients",
                    meal.name
                )));
            }
        }
        Ok(Self { meals })
    }

    /// The catalog shipped with the planner.
    pub fn builtin() -> Self {
        Self {
            meals: builtin_meals(),
        }
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl MealCatalog for StaticCatalog {
    fn templates(&self) -> &[MealTemplate] {
        &self.meals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NutritionInfo;

    #[test]
    fn test_builtin_has_every_slot() {
        let catalog = StaticCatalog::builtin();
        assert_eq!(catalog.len(), 6);
        for slot in MealSlot::ALL {
            assert!(!catalog.templates_for_slot(slot).is_empty(), "{slot} empty");
        }
    }

    #[test]
    fn test_templates_for_slot_keeps_order() {
        let catalog = StaticCatalog::builtin();
        let breakfasts = catalog.templates_for_slot(MealSlot::Breakfast);
        let names: Vec<&str> = breakfasts.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Oatmeal with Berries", "Whole Wheat Toast with Egg"]);
    }

    #[test]
    fn test_empty_catalog_is_allowed() {
        let catalog = StaticCatalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.templates_for_slot(MealSlot::Lunch).is_empty());
    }

    #[test]
    fn test_invalid_meal_rejected() {
        let bad = MealTemplate::new(
            "Bad",
            MealSlot::Snack,
            &["air"],
            NutritionInfo::new(-5.0, 0.0, 0.0, 0.0, 0.0),
            0,
            &[],
        );
        assert!(matches!(
            StaticCatalog::new(vec![bad]),
            Err(PlanError::Validation(_))
        ));
    }
}
