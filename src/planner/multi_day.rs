use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::error::{PlanError, Result};
use crate::models::{DayPlan, DietPlan, UserProfile};
use crate::planner::composer::DayPlanComposer;
use crate::planner::energy::calculate_energy;

/// Repeats day composition over consecutive dates.
#[derive(Clone, Copy)]
pub struct MultiDayPlanner<'a> {
    composer: DayPlanComposer<'a>,
}

impl<'a> MultiDayPlanner<'a> {
    pub fn new(composer: DayPlanComposer<'a>) -> Self {
        Self { composer }
    }

    /// Plan `days` consecutive days starting at `start_date`.
    ///
    /// The calorie target is computed once from the profile. Each day depends
    /// only on that target, the profile and its date.
    pub fn plan(
        &self,
        user_id: &str,
        days: u32,
        start_date: NaiveDate,
        profile: Option<&UserProfile>,
    ) -> Result<DietPlan> {
        let profile = profile.ok_or_else(|| PlanError::MissingProfile(user_id.to_string()))?;
        if days == 0 {
            return Err(PlanError::validation("days must be at least 1"));
        }

        let daily_calories = calculate_energy(profile)?.total_calories_needed;
        debug!(user_id, days, %start_date, daily_calories, "planning");

        let days = (0..days)
            .map(|offset| -> Result<DayPlan> {
                let date = start_date
                    .checked_add_days(Days::new(u64::from(offset)))
                    .ok_or_else(|| {
                        PlanError::validation(format!(
                            "{start_date} + {offset} days is out of the supported date range"
                        ))
                    })?;
                Ok(self.composer.compose_day(daily_calories, profile, date))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(DietPlan::new(days))
    }
}
