use crate::catalog::MealCatalog;
use crate::models::{DayPlan, DietPlan, MealSlot, MealTemplate, NutritionInfo, UserProfile};
use crate::planner::{slot_budgets, EnergyRequirement};

fn nutrition_line(n: &NutritionInfo) -> String {
    format!(
        "{:>4.0} kcal | P {:>5.1} g  C {:>5.1} g  F {:>5.1} g  Fiber {:>4.1} g",
        n.calories, n.protein, n.carbs, n.fat, n.fiber
    )
}

/// Display one meal with its ingredients and steps.
pub fn display_meal(meal: &MealTemplate) {
    println!("{} ({}, {} min)", meal.name, meal.slot, meal.prep_time);
    println!("  {}", nutrition_line(&meal.nutrition));
    println!("  Ingredients: {}", meal.ingredients.join(", "));
    for (i, step) in meal.instructions.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
}

/// Widest meal name in characters, for column alignment.
fn name_width(meals: &[MealTemplate]) -> usize {
    meals.iter().map(|m| m.name.chars().count()).max().unwrap_or(10)
}

/// Display a single day as a table of slots.
pub fn display_day_plan(day: &DayPlan) {
    println!("=== {} ===", day.date);

    let width = name_width(&day.meals);
    for (slot, meal) in MealSlot::ALL.iter().zip(&day.meals) {
        println!(
            "  {:<9} {:<width$}  {}",
            slot.as_ref(),
            meal.name,
            nutrition_line(&meal.nutrition),
            width = width
        );
    }

    println!(
        "  {:<9} {:<width$}  {}",
        "total",
        "",
        nutrition_line(&day.total_nutrition),
        width = width
    );

    for note in &day.notes {
        println!("  * {}", note);
    }
    println!();
}

/// Display every day of a plan.
pub fn display_diet_plan(plan: &DietPlan) {
    if plan.is_empty() {
        println!("Empty plan.");
        return;
    }

    println!();
    for day in plan.iter() {
        display_day_plan(day);
    }
    println!("--- {} day(s) planned ---", plan.len());
}

/// Display BMR, TDEE and how the daily target splits across slots.
pub fn display_energy(energy: &EnergyRequirement) {
    println!("BMR:  {:.0} kcal/day", energy.bmr);
    println!("TDEE: {:.0} kcal/day", energy.total_calories_needed);
    for (slot, budget) in slot_budgets(energy.total_calories_needed) {
        println!("  {:<9} {:>5.0} kcal", slot.as_ref(), budget);
    }
}

fn joined<'a>(items: impl IntoIterator<Item = &'a String>) -> String {
    let list: Vec<&str> = items.into_iter().map(String::as_str).collect();
    if list.is_empty() {
        "(none)".to_string()
    } else {
        list.join(", ")
    }
}

pub fn display_profile(user_id: &str, profile: &UserProfile) {
    println!("Profile for {}", user_id);
    println!("  Age:          {}", profile.age);
    println!("  Gender:       {}", profile.gender);
    println!("  Weight:       {} kg", profile.weight);
    println!("  Height:       {} cm", profile.height);
    println!("  Activity:     {}", profile.activity_level);
    println!("  Restrictions: {}", joined(&profile.dietary_restrictions));
    println!("  Goals:        {}", joined(&profile.health_goals));
    println!("  Allergies:    {}", joined(&profile.allergies));
}

/// Display the catalog grouped by slot, in declaration order.
pub fn display_catalog(catalog: &dyn MealCatalog) {
    for slot in MealSlot::ALL {
        let meals = catalog.templates_for_slot(slot);
        println!("=== {} ({} items) ===", slot, meals.len());
        for meal in meals {
            println!("  {:<30} {}", meal.name, nutrition_line(&meal.nutrition));
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> MealTemplate {
        MealTemplate::new(
            name,
            MealSlot::Lunch,
            &["rice"],
            NutritionInfo::new(400.0, 20.0, 50.0, 10.0, 5.0),
            10,
            &[],
        )
    }

    #[test]
    fn test_name_width_counts_characters() {
        assert_eq!(name_width(&[named("鸡胸肉沙拉"), named("Salad")]), 5);
        assert_eq!(name_width(&[named("糙米鱼肉套餐"), named("Tofu")]), 6);
        assert_eq!(name_width(&[]), 10);
    }
}
