use dialoguer::{Confirm, Input, MultiSelect, Select};
use strum::IntoEnumIterator;

use crate::error::{PlanError, Result};
use crate::models::{ActivityLevel, Gender, ProfileDraft};
use crate::planner::{Restriction, RestrictionRules};

/// Split a comma-separated answer into trimmed, non-empty items.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split([',', '，'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn prompt_number(prompt: &str) -> Result<f64> {
    let answer: String = Input::new().with_prompt(prompt).interact_text()?;

    answer
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput(format!("'{}' is not a number", answer.trim())))
}

fn prompt_text(prompt: &str) -> Result<String> {
    Ok(Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Pick restriction classes from a list, then accept free-form tags.
///
/// Free-form tags the rules don't know are offered a fuzzy suggestion.
pub fn prompt_restrictions(rules: &RestrictionRules) -> Result<Vec<String>> {
    let classes: Vec<Restriction> = Restriction::iter().collect();
    let labels: Vec<&str> = classes.iter().map(|r| r.as_ref()).collect();

    let picked = MultiSelect::new()
        .with_prompt("Dietary restrictions (space to toggle, enter to confirm)")
        .items(&labels)
        .interact()?;

    let mut tags: Vec<String> = picked.into_iter().map(|i| labels[i].to_string()).collect();

    for tag in split_list(&prompt_text("Other restriction tags, comma-separated")?) {
        if rules.classify(&tag).is_some() {
            tags.push(tag);
            continue;
        }

        if let Some(known) = rules.suggest(&tag) {
            if prompt_yes_no(&format!("Did you mean '{known}'?"), true)? {
                tags.push(known.to_string());
                continue;
            }
        }

        println!("'{tag}' is not a known restriction; it will be kept but excludes nothing.");
        tags.push(tag);
    }

    Ok(tags)
}

/// Collect a full profile interactively.
pub fn collect_profile(rules: &RestrictionRules) -> Result<ProfileDraft> {
    let age = prompt_number("Age (years)")?;

    let genders: Vec<Gender> = Gender::iter().collect();
    let gender = Select::new()
        .with_prompt("Gender")
        .items(&genders.iter().map(|g| g.as_ref()).collect::<Vec<_>>())
        .default(0)
        .interact()?;

    let weight = prompt_number("Weight (kg)")?;
    let height = prompt_number("Height (cm)")?;

    let levels: Vec<ActivityLevel> = ActivityLevel::iter().collect();
    let activity = Select::new()
        .with_prompt("Activity level")
        .items(&levels.iter().map(|l| l.as_ref()).collect::<Vec<_>>())
        .default(2)
        .interact()?;

    let dietary_restrictions = prompt_restrictions(rules)?;
    let health_goals = split_list(&prompt_text("Health goals, comma-separated")?);
    let allergies = split_list(&prompt_text("Allergies, comma-separated")?);

    Ok(ProfileDraft {
        age: Some(age),
        gender: Some(genders[gender].to_string()),
        weight: Some(weight),
        height: Some(height),
        activity_level: Some(levels[activity].to_string()),
        dietary_restrictions,
        health_goals,
        allergies,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list() {
        assert_eq!(split_list(" peanut, milk ,,shrimp"), ["peanut", "milk", "shrimp"]);
        assert_eq!(split_list("花生，牛奶"), ["花生", "牛奶"]);
        assert!(split_list("  ").is_empty());
    }
}
