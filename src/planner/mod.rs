pub mod advisor;
pub mod composer;
pub mod constants;
pub mod energy;
pub mod multi_day;
pub mod restrictions;
pub mod selector;

pub use advisor::advise;
pub use composer::{slot_budgets, DayPlanComposer};
pub use constants::*;
pub use energy::{calculate_bmr, calculate_energy, round_half_up, EnergyRequirement};
pub use multi_day::MultiDayPlanner;
pub use restrictions::{Restriction, RestrictionRules};
pub use selector::{fallback_meal, select_closest, MealSelector};
