use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::models::{Gender, UserProfile};
use crate::planner::constants::*;

/// Basal and total daily energy needs, in whole kcal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyRequirement {
    pub bmr: f64,
    pub total_calories_needed: f64,
}

/// Round to the nearest integer, halves going up (towards +inf).
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Unrounded basal metabolic rate (revised Harris-Benedict).
pub fn calculate_bmr(gender: Gender, weight_kg: f64, height_cm: f64, age: u32) -> f64 {
    let age = f64::from(age);
    match gender {
        Gender::Male => {
            MALE_BMR_BASE + MALE_BMR_WEIGHT * weight_kg + MALE_BMR_HEIGHT * height_cm
                - MALE_BMR_AGE * age
        }
        Gender::Female => {
            FEMALE_BMR_BASE + FEMALE_BMR_WEIGHT * weight_kg + FEMALE_BMR_HEIGHT * height_cm
                - FEMALE_BMR_AGE * age
        }
    }
}

/// Compute BMR and TDEE for a profile.
///
/// TDEE is derived from the unrounded BMR; both are rounded only on output.
pub fn calculate_energy(profile: &UserProfile) -> Result<EnergyRequirement> {
    profile.validate()?;

    let bmr = calculate_bmr(profile.gender, profile.weight, profile.height, profile.age);
    let tdee = bmr * activity_multiplier(profile.activity_level);

    debug!(bmr, tdee, activity = %profile.activity_level, "energy requirement computed");

    Ok(EnergyRequirement {
        bmr: round_half_up(bmr),
        total_calories_needed: round_half_up(tdee),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlanError;
    use crate::models::ActivityLevel;
    use std::collections::BTreeSet;

    fn profile(gender: Gender, activity: ActivityLevel) -> UserProfile {
        UserProfile {
            age: 30,
            gender,
            weight: 70.0,
            height: 175.0,
            activity_level: activity,
            dietary_restrictions: BTreeSet::new(),
            health_goals: BTreeSet::new(),
            allergies: BTreeSet::new(),
        }
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.49), 2.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(1695.667), 1696.0);
    }

    #[test]
    fn test_male_bmr_formula() {
        let bmr = calculate_bmr(Gender::Male, 70.0, 175.0, 30);
        assert!((bmr - 1695.667).abs() < 1e-9);
    }

    #[test]
    fn test_female_bmr_formula() {
        // 447.593 + 9.247*65 + 3.098*165 - 4.330*30
        let bmr = calculate_bmr(Gender::Female, 65.0, 165.0, 30);
        assert!((bmr - 1429.918).abs() < 1e-9);
    }

    #[test]
    fn test_energy_uses_unrounded_bmr_for_tdee() {
        let energy = calculate_energy(&profile(Gender::Male, ActivityLevel::Moderate)).unwrap();
        assert_eq!(energy.bmr, 1696.0);
        // 1695.667 * 1.55 = 2628.28
        assert_eq!(energy.total_calories_needed, 2628.0);
    }

    #[test]
    fn test_activity_multipliers_are_monotonic() {
        let levels = [
            ActivityLevel::Sedentary,
            ActivityLevel::Light,
            ActivityLevel::Moderate,
            ActivityLevel::VeryActive,
            ActivityLevel::ExtraActive,
        ];
        let totals: Vec<f64> = levels
            .iter()
            .map(|&l| {
                calculate_energy(&profile(Gender::Female, l))
                    .unwrap()
                    .total_calories_needed
            })
            .collect();
        assert!(totals.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_invalid_profile_rejected() {
        let mut p = profile(Gender::Male, ActivityLevel::Sedentary);
        p.weight = 0.0;
        assert!(matches!(calculate_energy(&p), Err(PlanError::Validation(_))));

        let mut p = profile(Gender::Male, ActivityLevel::Sedentary);
        p.age = 0;
        assert!(matches!(calculate_energy(&p), Err(PlanError::Validation(_))));

        let mut p = profile(Gender::Male, ActivityLevel::Sedentary);
        p.height = f64::NAN;
        assert!(matches!(calculate_energy(&p), Err(PlanError::Validation(_))));
    }
}
