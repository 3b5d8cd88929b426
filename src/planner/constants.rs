use crate::models::{ActivityLevel, MealSlot};

// ─────────────────────────────────────────────────────────────────────────────
// Revised Harris-Benedict coefficients (kcal/day)
// ─────────────────────────────────────────────────────────────────────────────

pub const MALE_BMR_BASE: f64 = 88.362;
pub const MALE_BMR_WEIGHT: f64 = 13.397;
pub const MALE_BMR_HEIGHT: f64 = 4.799;
pub const MALE_BMR_AGE: f64 = 5.677;

pub const FEMALE_BMR_BASE: f64 = 447.593;
pub const FEMALE_BMR_WEIGHT: f64 = 9.247;
pub const FEMALE_BMR_HEIGHT: f64 = 3.098;
pub const FEMALE_BMR_AGE: f64 = 4.330;

/// TDEE multiplier for an activity level.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.20,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::VeryActive => 1.725,
        ActivityLevel::ExtraActive => 1.90,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Day composition
// ─────────────────────────────────────────────────────────────────────────────

/// Share of the daily budget given to each slot. Sums to 1.0.
pub fn slot_fraction(slot: MealSlot) -> f64 {
    match slot {
        MealSlot::Breakfast => 0.25,
        MealSlot::Lunch => 0.35,
        MealSlot::Dinner => 0.30,
        MealSlot::Snack => 0.10,
    }
}

/// Days planned when a request does not say.
pub const DEFAULT_PLAN_DAYS: u32 = 7;

// ─────────────────────────────────────────────────────────────────────────────
// Fallback meal (no catalog entry survives filtering)
// ─────────────────────────────────────────────────────────────────────────────

pub const FALLBACK_MEAL_NAME: &str = "Custom meal";
pub const FALLBACK_INGREDIENT: &str = "Prepare a meal that fits your restrictions";
pub const FALLBACK_INSTRUCTION: &str =
    "Prepare this meal yourself according to the nutrition targets";

pub const FALLBACK_PROTEIN_SHARE: f64 = 0.15;
pub const FALLBACK_CARB_SHARE: f64 = 0.55;
pub const FALLBACK_FAT_SHARE: f64 = 0.30;
pub const FALLBACK_FIBER_G: f64 = 25.0;

/// Atwater factors, kcal per gram.
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARB: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Advisory thresholds
// ─────────────────────────────────────────────────────────────────────────────

/// Grams of protein per kg body weight.
pub const MIN_PROTEIN_PER_KG: f64 = 0.8;
pub const MIN_FIBER_G: f64 = 25.0;
pub const MIN_DAILY_CALORIES: f64 = 1200.0;

pub const PROTEIN_NOTE: &str =
    "Consider increasing protein intake: aim for at least 0.8-1.2 g per kg of body weight";
pub const FIBER_NOTE: &str =
    "Consider increasing dietary fiber: adults are advised 25-35 g per day";
pub const LOW_CALORIE_NOTE: &str =
    "Warning: calorie intake is low, make sure your nutrition needs are met";

// ─────────────────────────────────────────────────────────────────────────────
// Default restriction exclusion lists (matched by exact ingredient name)
// ─────────────────────────────────────────────────────────────────────────────

pub const VEGETARIAN_EXCLUSIONS: &[&str] = &[
    "chicken",
    "chicken breast",
    "beef",
    "pork",
    "lamb",
    "bacon",
    "ham",
    "turkey",
    "salmon",
    "tuna",
    "fish",
    "shrimp",
    "egg",
    "eggs",
    "鸡胸肉",
    "三文鱼",
    "鸡蛋",
];

/// Added on top of [`VEGETARIAN_EXCLUSIONS`] for vegans.
pub const VEGAN_EXTRA_EXCLUSIONS: &[&str] = &[
    "milk",
    "yogurt",
    "greek yogurt",
    "cheese",
    "butter",
    "cream",
    "honey",
    "牛奶",
    "酸奶",
    "希腊酸奶",
    "蜂蜜",
];
