use chrono::NaiveDate;
use tracing::debug;

use crate::models::{DayPlan, MealSlot, MealTemplate, NutritionInfo, UserProfile};
use crate::planner::advisor::advise;
use crate::planner::constants::slot_fraction;
use crate::planner::energy::round_half_up;
use crate::planner::selector::{select_closest, MealSelector};

/// Per-slot calorie budgets, in composition order.
///
/// Each budget is rounded on its own, so the sum may differ from
/// `daily_calories` by a few kcal.
pub fn slot_budgets(daily_calories: f64) -> [(MealSlot, f64); 4] {
    MealSlot::ALL.map(|slot| (slot, round_half_up(daily_calories * slot_fraction(slot))))
}

/// Builds one day of meals from a calorie target.
#[derive(Clone, Copy)]
pub struct DayPlanComposer<'a> {
    selector: MealSelector<'a>,
}

impl<'a> DayPlanComposer<'a> {
    pub fn new(selector: MealSelector<'a>) -> Self {
        Self { selector }
    }

    /// Select one meal per slot and total the day's nutrition.
    pub fn compose_day(
        &self,
        daily_calories: f64,
        profile: &UserProfile,
        date: NaiveDate,
    ) -> DayPlan {
        let meals: Vec<MealTemplate> = slot_budgets(daily_calories)
            .into_iter()
            .map(|(slot, budget)| {
                let candidates = self.selector.filter_candidates(
                    slot,
                    &profile.dietary_restrictions,
                    &profile.allergies,
                );
                debug!(%date, %slot, budget, "composing slot");
                select_closest(&candidates, budget)
            })
            .collect();

        let total_nutrition: NutritionInfo = meals.iter().map(|m| &m.nutrition).sum();
        let notes = advise(&total_nutrition, profile);

        DayPlan {
            date,
            meals,
            total_nutrition,
            notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use crate::models::{ActivityLevel, Gender};
    use crate::planner::restrictions::RestrictionRules;
    use std::collections::BTreeSet;

    fn profile() -> UserProfile {
        UserProfile {
            age: 30,
            gender: Gender::Female,
            weight: 65.0,
            height: 165.0,
            activity_level: ActivityLevel::Moderate,
            dietary_restrictions: BTreeSet::new(),
            health_goals: BTreeSet::new(),
            allergies: BTreeSet::new(),
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_slot_budgets() {
        let budgets = slot_budgets(2000.0);
        assert_eq!(
            budgets,
            [
                (MealSlot::Breakfast, 500.0),
                (MealSlot::Lunch, 700.0),
                (MealSlot::Dinner, 600.0),
                (MealSlot::Snack, 200.0),
            ]
        );
    }

    #[test]
    fn test_slot_budgets_sum_within_rounding_slack() {
        for daily in (800..=5000).step_by(7) {
            let daily = f64::from(daily);
            let sum: f64 = slot_budgets(daily).iter().map(|(_, b)| b).sum();
            assert!((sum - daily).abs() <= 3.0, "{daily} -> {sum}");
        }
    }

    #[test]
    fn test_compose_day_orders_slots_and_totals() {
        let catalog = StaticCatalog::builtin();
        let rules = RestrictionRules::default();
        let composer = DayPlanComposer::new(MealSelector::new(&catalog, &rules));

        let day = composer.compose_day(2000.0, &profile(), date());
        assert_eq!(day.date, date());
        let slots: Vec<MealSlot> = day.meals.iter().map(|m| m.slot).collect();
        assert_eq!(slots, MealSlot::ALL);

        let calories: f64 = day.meals.iter().map(|m| m.nutrition.calories).sum();
        assert_eq!(day.total_nutrition.calories, calories);
    }

    #[test]
    fn test_compose_day_picks_closest_per_slot() {
        let catalog = StaticCatalog::builtin();
        let rules = RestrictionRules::default();
        let composer = DayPlanComposer::new(MealSelector::new(&catalog, &rules));

        // budgets 500/700/600/200
        let day = composer.compose_day(2000.0, &profile(), date());
        let names: Vec<&str> = day.meals.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Whole Wheat Toast with Egg",
                "Salmon with Brown Rice",
                "Vegetable Stir-Fried Noodles",
                "Greek Yogurt with Nuts",
            ]
        );
        assert_eq!(day.total_nutrition.calories, 1520.0);
    }

    #[test]
    fn test_compose_day_is_deterministic() {
        let catalog = StaticCatalog::builtin();
        let rules = RestrictionRules::default();
        let composer = DayPlanComposer::new(MealSelector::new(&catalog, &rules));

        let mut p = profile();
        p.allergies.insert("honey".to_string());
        let first = composer.compose_day(2300.0, &p, date());
        let second = composer.compose_day(2300.0, &p, date());
        assert_eq!(first, second);
    }
}
