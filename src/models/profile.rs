use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::{PlanError, Result};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Gender {
    Male,
    Female,
}

/// Self-reported activity level, mapped to a TDEE multiplier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    VeryActive,
    ExtraActive,
}

/// Biometric profile and dietary preferences of one user.
///
/// Deserialization goes through [`ProfileDraft`] so a stored or submitted
/// profile is always validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ProfileDraft")]
pub struct UserProfile {
    /// Years.
    pub age: u32,
    pub gender: Gender,
    /// Kilograms.
    pub weight: f64,
    /// Centimetres.
    pub height: f64,
    pub activity_level: ActivityLevel,
    pub dietary_restrictions: BTreeSet<String>,
    /// Advisory only; the planner never reads these.
    pub health_goals: BTreeSet<String>,
    /// Ingredient substrings that must not appear in a selected meal.
    pub allergies: BTreeSet<String>,
}

impl UserProfile {
    /// Check the physical ranges the energy calculation relies on.
    pub fn validate(&self) -> Result<()> {
        if self.age == 0 {
            return Err(PlanError::validation("age must be greater than 0"));
        }
        check_positive("weight", self.weight)?;
        check_positive("height", self.height)?;
        Ok(())
    }
}

fn check_positive(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(PlanError::validation(format!("{field} must be a number")));
    }
    if value <= 0.0 {
        return Err(PlanError::validation(format!(
            "{field} must be greater than 0 (got {value})"
        )));
    }
    Ok(())
}

/// A profile as submitted by a form, prompt or JSON document.
///
/// Every field is optional; [`UserProfile::try_from`] reports the first
/// missing or invalid one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    pub age: Option<f64>,
    pub gender: Option<String>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub activity_level: Option<String>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    #[serde(default)]
    pub health_goals: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
}

impl TryFrom<ProfileDraft> for UserProfile {
    type Error = PlanError;

    fn try_from(draft: ProfileDraft) -> Result<Self> {
        let age = required("age", draft.age)?;
        check_positive("age", age)?;
        if age.fract() != 0.0 || age > f64::from(u32::MAX) {
            return Err(PlanError::validation(format!(
                "age must be a whole number of years (got {age})"
            )));
        }

        let gender = required("gender", draft.gender)?;
        let gender = Gender::from_str(gender.trim())
            .map_err(|_| PlanError::validation(format!("unrecognized gender '{gender}'")))?;

        let activity = required("activityLevel", draft.activity_level)?;
        let activity_level = ActivityLevel::from_str(activity.trim()).map_err(|_| {
            PlanError::validation(format!("unrecognized activity level '{activity}'"))
        })?;

        let profile = UserProfile {
            age: age as u32,
            gender,
            weight: required("weight", draft.weight)?,
            height: required("height", draft.height)?,
            activity_level,
            dietary_restrictions: clean_tags(draft.dietary_restrictions),
            health_goals: clean_tags(draft.health_goals),
            allergies: clean_tags(draft.allergies),
        };
        profile.validate()?;
        Ok(profile)
    }
}

fn required<T>(field: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| PlanError::validation(format!("{field} is required")))
}

/// Trim tags and drop empty ones.
fn clean_tags(tags: Vec<String>) -> BTreeSet<String> {
    tags.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}
