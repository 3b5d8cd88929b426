use crate::models::{MealSlot, MealTemplate, NutritionInfo};

/// Default meal templates, grouped by slot.
pub fn builtin_meals() -> Vec<MealTemplate> {
    vec![
        // Breakfast
        MealTemplate::new(
            "Oatmeal with Berries",
            MealSlot::Breakfast,
            &["rolled oats", "milk", "blueberries", "strawberries", "honey"],
            NutritionInfo::new(350.0, 12.0, 65.0, 8.0, 8.0),
            10,
            &[
                "Cook the oats in milk",
                "Top with fresh berries",
                "Drizzle with honey",
            ],
        ),
        MealTemplate::new(
            "Whole Wheat Toast with Egg",
            MealSlot::Breakfast,
            &["whole wheat bread", "egg", "avocado", "tomato"],
            NutritionInfo::new(400.0, 18.0, 35.0, 22.0, 6.0),
            15,
            &[
                "Fry the egg",
                "Toast the bread",
                "Slice the avocado and tomato",
                "Assemble on a plate",
            ],
        ),
        // Lunch
        MealTemplate::new(
            "Chicken Breast Salad",
            MealSlot::Lunch,
            &["chicken breast", "mixed greens", "tomato", "cucumber", "olive oil"],
            NutritionInfo::new(450.0, 35.0, 15.0, 25.0, 5.0),
            20,
            &[
                "Grill the chicken breast",
                "Prepare the vegetables",
                "Whisk the dressing",
                "Toss everything together",
            ],
        ),
        MealTemplate::new(
            "Salmon with Brown Rice",
            MealSlot::Lunch,
            &["salmon", "brown rice", "broccoli", "carrot"],
            NutritionInfo::new(500.0, 30.0, 45.0, 18.0, 6.0),
            25,
            &[
                "Cook the brown rice",
                "Roast the salmon",
                "Steam the vegetables",
                "Plate together",
            ],
        ),
        // Dinner
        MealTemplate::new(
            "Vegetable Stir-Fried Noodles",
            MealSlot::Dinner,
            &[
                "whole wheat noodles",
                "bell pepper",
                "onion",
                "tofu",
                "light soy sauce",
            ],
            NutritionInfo::new(420.0, 16.0, 65.0, 12.0, 8.0),
            20,
            &[
                "Boil the noodles",
                "Stir-fry the vegetables and tofu",
                "Season and toss with the noodles",
                "Serve",
            ],
        ),
        // Snack
        MealTemplate::new(
            "Greek Yogurt with Nuts",
            MealSlot::Snack,
            &["greek yogurt", "mixed nuts", "honey"],
            NutritionInfo::new(200.0, 10.0, 15.0, 12.0, 3.0),
            5,
            &["Stir the nuts into the yogurt", "Drizzle with a little honey"],
        ),
    ]
}
