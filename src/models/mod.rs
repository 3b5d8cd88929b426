mod meal;
mod nutrition;
mod plan;
mod profile;

pub use meal::{MealSlot, MealTemplate};
pub use nutrition::NutritionInfo;
pub use plan::{DayPlan, DietPlan};
pub use profile::{ActivityLevel, Gender, ProfileDraft, UserProfile};
