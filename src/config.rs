use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{PlanError, Result};
use crate::planner::restrictions::{Restriction, RestrictionRules};

/// Optional settings file.
///
/// ```toml
/// catalog = "meals.json"
///
/// [restriction_tags]
/// "végétarien" = "vegetarian"
///
/// [exclusions]
/// gluten_free = ["whole wheat bread", "whole wheat noodles"]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerSettings {
    /// Catalog file replacing the built-in meals.
    pub catalog: Option<PathBuf>,

    /// Extra literal tags, mapped to a restriction class name.
    pub restriction_tags: BTreeMap<String, String>,

    /// Replacement exclusion lists, keyed by restriction class name.
    pub exclusions: BTreeMap<String, Vec<String>>,
}

fn parse_restriction(name: &str) -> Result<Restriction> {
    Restriction::from_str(name)
        .map_err(|_| PlanError::validation(format!("unknown restriction class '{name}'")))
}

impl PlannerSettings {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read settings from `path`, or defaults when no path is given.
    ///
    /// A relative `catalog` path is taken relative to the settings file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let mut settings = Self::from_toml_str(&fs::read_to_string(path)?)?;
        if let (Some(catalog), Some(dir)) = (settings.catalog.as_mut(), path.parent()) {
            if catalog.is_relative() {
                *catalog = dir.join(&*catalog);
            }
        }
        Ok(settings)
    }

    /// Default rules with this file's tags and exclusion lists applied.
    pub fn restriction_rules(&self) -> Result<RestrictionRules> {
        let mut rules = RestrictionRules::default();

        let tags = self
            .restriction_tags
            .iter()
            .map(|(tag, class)| -> Result<(String, Restriction)> {
                Ok((tag.clone(), parse_restriction(class)?))
            })
            .collect::<Result<Vec<_>>>()?;
        rules.extend_vocabulary(tags);

        for (class, ingredients) in &self.exclusions {
            rules.set_exclusions(parse_restriction(class)?, ingredients.clone());
        }

        Ok(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MealSlot, MealTemplate, NutritionInfo};
    use std::collections::BTreeSet;

    #[test]
    fn test_empty_settings_are_defaults() {
        let settings = PlannerSettings::from_toml_str("").unwrap();
        assert!(settings.catalog.is_none());
        let rules = settings.restriction_rules().unwrap();
        assert_eq!(rules.classify("vegan"), Some(Restriction::Vegan));
    }

    #[test]
    fn test_custom_tags_and_exclusions() {
        let settings = PlannerSettings::from_toml_str(
            r#"
            catalog = "meals.json"

            [restriction_tags]
            "végétarien" = "vegetarian"

            [exclusions]
            gluten_free = ["whole wheat bread"]
            "#,
        )
        .unwrap();
        assert_eq!(settings.catalog, Some(PathBuf::from("meals.json")));

        let rules = settings.restriction_rules().unwrap();
        assert_eq!(rules.classify("végétarien"), Some(Restriction::Vegetarian));

        let toast = MealTemplate::new(
            "Toast",
            MealSlot::Breakfast,
            &["whole wheat bread"],
            NutritionInfo::new(200.0, 6.0, 30.0, 3.0, 4.0),
            3,
            &[],
        );
        let classes = rules.resolve(&BTreeSet::from(["gluten_free".to_string()]));
        assert!(rules.excludes(&toast, &classes));
    }

    #[test]
    fn test_catalog_path_relative_to_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let conf = dir.path().join("conf");
        fs::create_dir(&conf).unwrap();

        let relative = conf.join("relative.toml");
        fs::write(&relative, "catalog = \"meals.json\"").unwrap();
        let settings = PlannerSettings::load(Some(&relative)).unwrap();
        assert_eq!(settings.catalog, Some(conf.join("meals.json")));

        let absolute_catalog = dir.path().join("elsewhere.json");
        let absolute = conf.join("absolute.toml");
        fs::write(
            &absolute,
            format!("catalog = {:?}", absolute_catalog.display().to_string()),
        )
        .unwrap();
        let settings = PlannerSettings::load(Some(&absolute)).unwrap();
        assert_eq!(settings.catalog, Some(absolute_catalog));
    }

    #[test]
    fn test_missing_settings_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            PlannerSettings::load(Some(&missing)),
            Err(PlanError::Io(_))
        ));
    }

    #[test]
    fn test_unknown_class_rejected() {
        let settings = PlannerSettings::from_toml_str(
            r#"
            [exclusions]
            keto = ["bread"]
            "#,
        )
        .unwrap();
        assert!(matches!(
            settings.restriction_rules(),
            Err(PlanError::Validation(_))
        ));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(matches!(
            PlannerSettings::from_toml_str("colour = \"blue\""),
            Err(PlanError::Settings(_))
        ));
    }
}
