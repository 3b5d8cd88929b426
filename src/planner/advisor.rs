use crate::models::{NutritionInfo, UserProfile};
use crate::planner::constants::*;

/// Advisory notes for a day's totals.
///
/// Checks run in a fixed order: protein per kg, fiber, total calories.
pub fn advise(total: &NutritionInfo, profile: &UserProfile) -> Vec<String> {
    let mut notes = Vec::new();

    if total.protein / profile.weight < MIN_PROTEIN_PER_KG {
        notes.push(PROTEIN_NOTE.to_string());
    }

    if total.fiber < MIN_FIBER_G {
        notes.push(FIBER_NOTE.to_string());
    }

    if total.calories < MIN_DAILY_CALORIES {
        notes.push(LOW_CALORIE_NOTE.to_string());
    }

    notes
}
