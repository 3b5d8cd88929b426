use std::collections::BTreeSet;

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::catalog::MealCatalog;
use crate::error::{PlanError, Result};
use crate::models::{DietPlan, MealSlot, MealTemplate, ProfileDraft, UserProfile};
use crate::planner::{
    calculate_energy, select_closest, DayPlanComposer, EnergyRequirement, MealSelector,
    MultiDayPlanner, RestrictionRules, DEFAULT_PLAN_DAYS,
};
use crate::state::{PlanStore, ProfileStore};

/// A request for a multi-day plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    pub user_id: String,
    pub days: u32,
    /// Defaults to today when absent.
    pub start_date: Option<NaiveDate>,
}

impl PlanRequest {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            days: DEFAULT_PLAN_DAYS,
            start_date: None,
        }
    }

    pub fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    pub fn starting(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn resolved_start(&self) -> NaiveDate {
        self.start_date
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

/// Ties the planner to a catalog, restriction rules and a store.
pub struct DietPlanningService<S> {
    catalog: Box<dyn MealCatalog>,
    rules: RestrictionRules,
    store: S,
}

impl<S: ProfileStore + PlanStore> DietPlanningService<S> {
    pub fn new(catalog: impl MealCatalog + 'static, rules: RestrictionRules, store: S) -> Self {
        Self {
            catalog: Box::new(catalog),
            rules,
            store,
        }
    }

    pub fn catalog(&self) -> &dyn MealCatalog {
        self.catalog.as_ref()
    }

    pub fn rules(&self) -> &RestrictionRules {
        &self.rules
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn selector(&self) -> MealSelector<'_> {
        MealSelector::new(self.catalog.as_ref(), &self.rules)
    }

    /// Validate and store a profile.
    pub fn save_profile(&mut self, user_id: &str, draft: ProfileDraft) -> Result<UserProfile> {
        check_user_id(user_id)?;
        let profile = UserProfile::try_from(draft)?;
        self.store.put_profile(user_id, &profile)?;
        info!(user_id, "profile saved");
        Ok(profile)
    }

    /// The stored profile, or `MissingProfile`.
    pub fn profile(&self, user_id: &str) -> Result<UserProfile> {
        self.store
            .get_profile(user_id)?
            .ok_or_else(|| PlanError::MissingProfile(user_id.to_string()))
    }

    pub fn energy_for(&self, user_id: &str) -> Result<EnergyRequirement> {
        calculate_energy(&self.profile(user_id)?)
    }

    /// Best single meal for a slot and calorie target.
    pub fn suggest_meal(
        &self,
        slot: MealSlot,
        target_calories: f64,
        restrictions: &BTreeSet<String>,
        allergies: &BTreeSet<String>,
    ) -> Result<MealTemplate> {
        if !target_calories.is_finite() || target_calories < 0.0 {
            return Err(PlanError::validation(format!(
                "target calories must be a non-negative number (got {target_calories})"
            )));
        }
        let candidates = self
            .selector()
            .filter_candidates(slot, restrictions, allergies);
        Ok(select_closest(&candidates, target_calories))
    }

    /// Generate a plan for the request's user and store it.
    pub fn generate_plan(&mut self, request: &PlanRequest) -> Result<DietPlan> {
        check_user_id(&request.user_id)?;
        let profile = self.store.get_profile(&request.user_id)?;
        let start = request.resolved_start();

        let plan = MultiDayPlanner::new(DayPlanComposer::new(self.selector())).plan(
            &request.user_id,
            request.days,
            start,
            profile.as_ref(),
        )?;

        self.store.put_plan(&request.user_id, &plan)?;
        info!(
            user_id = %request.user_id,
            days = plan.len(),
            %start,
            "diet plan generated"
        );
        Ok(plan)
    }

    /// The last plan stored for a user.
    pub fn last_plan(&self, user_id: &str) -> Result<Option<DietPlan>> {
        self.store.get_plan(user_id)
    }
}

fn check_user_id(user_id: &str) -> Result<()> {
    if user_id.trim().is_empty() {
        return Err(PlanError::validation("user id must not be empty"));
    }
    Ok(())
}
