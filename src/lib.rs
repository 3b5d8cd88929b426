pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod service;
pub mod state;

pub use error::{PlanError, Result};
pub use models::{DayPlan, DietPlan, MealSlot, MealTemplate, NutritionInfo, UserProfile};
pub use service::{DietPlanningService, PlanRequest};
