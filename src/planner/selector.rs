use std::collections::BTreeSet;

use tracing::debug;

use crate::catalog::MealCatalog;
use crate::models::{MealSlot, MealTemplate, NutritionInfo};
use crate::planner::constants::*;
use crate::planner::energy::round_half_up;
use crate::planner::restrictions::RestrictionRules;

/// Picks catalog meals that respect a profile's allergies and restrictions.
#[derive(Clone, Copy)]
pub struct MealSelector<'a> {
    catalog: &'a dyn MealCatalog,
    rules: &'a RestrictionRules,
}

impl<'a> MealSelector<'a> {
    pub fn new(catalog: &'a dyn MealCatalog, rules: &'a RestrictionRules) -> Self {
        Self { catalog, rules }
    }

    /// Catalog meals for `slot` that survive allergy and restriction filtering.
    ///
    /// Allergies match when an ingredient contains the allergy text, ignoring
    /// case, so "egg" also removes "eggplant". Restriction tags resolve through
    /// the rules' vocabulary; unknown tags exclude nothing.
    pub fn filter_candidates(
        &self,
        slot: MealSlot,
        restrictions: &BTreeSet<String>,
        allergies: &BTreeSet<String>,
    ) -> Vec<&'a MealTemplate> {
        let classes = self.rules.resolve(restrictions);

        let candidates: Vec<&'a MealTemplate> = self
            .catalog
            .templates_for_slot(slot)
            .into_iter()
            .filter(|meal| !allergies.iter().any(|a| meal.has_ingredient_containing(a)))
            .filter(|meal| !self.rules.excludes(meal, &classes))
            .collect();

        debug!(%slot, candidates = candidates.len(), "filtered catalog");
        candidates
    }
}

/// The candidate whose calories are closest to `target_calories`.
///
/// Ties go to the earliest candidate. With no candidates a [`fallback_meal`]
/// sized to the target is returned instead.
pub fn select_closest(candidates: &[&MealTemplate], target_calories: f64) -> MealTemplate {
    let mut best: Option<(&MealTemplate, f64)> = None;

    for &meal in candidates {
        let diff = (meal.nutrition.calories - target_calories).abs();
        match best {
            Some((_, best_diff)) if diff >= best_diff => {}
            _ => best = Some((meal, diff)),
        }
    }

    match best {
        Some((meal, diff)) => {
            debug!(meal = %meal.name, target_calories, diff, "selected meal");
            meal.clone()
        }
        None => {
            debug!(target_calories, "no candidates, using fallback meal");
            fallback_meal(target_calories)
        }
    }
}

/// Placeholder meal for when filtering leaves nothing to choose from.
///
/// Calories equal the target exactly; macros follow a 15/55/30
/// protein/carb/fat energy split, rounded to whole grams.
pub fn fallback_meal(target_calories: f64) -> MealTemplate {
    let nutrition = NutritionInfo {
        calories: target_calories,
        protein: round_half_up(FALLBACK_PROTEIN_SHARE * target_calories / KCAL_PER_G_PROTEIN),
        carbs: round_half_up(FALLBACK_CARB_SHARE * target_calories / KCAL_PER_G_CARB),
        fat: round_half_up(FALLBACK_FAT_SHARE * target_calories / KCAL_PER_G_FAT),
        fiber: FALLBACK_FIBER_G,
    };

    MealTemplate::new(
        FALLBACK_MEAL_NAME,
        MealSlot::Breakfast,
        &[FALLBACK_INGREDIENT],
        nutrition,
        0,
        &[FALLBACK_INSTRUCTION],
    )
}
