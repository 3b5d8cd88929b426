use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

use crate::models::MealTemplate;
use crate::planner::constants::{VEGAN_EXTRA_EXCLUSIONS, VEGETARIAN_EXCLUSIONS};

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Dietary restriction classes the planner understands.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Restriction {
    Vegetarian,
    Vegan,
    GlutenFree,
    LowSodium,
    LowSugar,
}

impl Restriction {
    /// Classes whose exclusions also apply when this one is declared.
    pub fn implied(self) -> &'static [Restriction] {
        match self {
            Restriction::Vegan => &[Restriction::Vegetarian],
            _ => &[],
        }
    }
}

/// Maps literal restriction tags to classes and classes to excluded ingredients.
///
/// Tags are matched by exact identity. Excluded ingredients are matched
/// against a meal's ingredient names case-insensitively, by equality.
#[derive(Debug, Clone)]
pub struct RestrictionRules {
    vocabulary: HashMap<String, Restriction>,
    exclusions: BTreeMap<Restriction, Vec<String>>,
}

impl Default for RestrictionRules {
    fn default() -> Self {
        let mut vocabulary = HashMap::new();
        for r in Restriction::iter() {
            vocabulary.insert(r.as_ref().to_string(), r);
            vocabulary.insert(r.as_ref().replace('_', "-"), r);
        }
        for (tag, r) in [
            ("素食主义", Restriction::Vegetarian),
            ("严格素食主义", Restriction::Vegan),
            ("无麸质", Restriction::GlutenFree),
            ("低钠", Restriction::LowSodium),
            ("低糖", Restriction::LowSugar),
        ] {
            vocabulary.insert(tag.to_string(), r);
        }

        let vegetarian: Vec<String> = VEGETARIAN_EXCLUSIONS.iter().map(|s| s.to_string()).collect();
        let vegan: Vec<String> = vegetarian
            .iter()
            .cloned()
            .chain(VEGAN_EXTRA_EXCLUSIONS.iter().map(|s| s.to_string()))
            .collect();

        let mut exclusions = BTreeMap::new();
        exclusions.insert(Restriction::Vegetarian, vegetarian);
        exclusions.insert(Restriction::Vegan, vegan);

        Self {
            vocabulary,
            exclusions,
        }
    }
}

impl RestrictionRules {
    /// Register additional tags; existing tags are overwritten.
    pub fn extend_vocabulary(&mut self, tags: impl IntoIterator<Item = (String, Restriction)>) {
        self.vocabulary.extend(tags);
    }

    /// Replace the exclusion list of one class.
    pub fn set_exclusions(&mut self, restriction: Restriction, ingredients: Vec<String>) {
        self.exclusions.insert(restriction, ingredients);
    }

    /// Class of a literal tag, if known.
    pub fn classify(&self, tag: &str) -> Option<Restriction> {
        self.vocabulary.get(tag).copied()
    }

    /// Classes declared by `tags`, including implied ones. Unknown tags are skipped.
    pub fn resolve<'t>(&self, tags: impl IntoIterator<Item = &'t String>) -> BTreeSet<Restriction> {
        let mut classes = BTreeSet::new();
        for tag in tags {
            match self.classify(tag) {
                Some(r) => {
                    classes.insert(r);
                    classes.extend(r.implied().iter().copied());
                }
                None => tracing::debug!(tag = %tag, "unknown restriction tag ignored"),
            }
        }
        classes
    }

    pub fn exclusions_for(&self, restriction: Restriction) -> &[String] {
        self.exclusions
            .get(&restriction)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// True if `meal` uses an ingredient excluded by any of `classes`.
    pub fn excludes(&self, meal: &MealTemplate, classes: &BTreeSet<Restriction>) -> bool {
        classes
            .iter()
            .any(|&r| meal.has_any_ingredient(self.exclusions_for(r)))
    }

    /// All known tags, sorted.
    pub fn known_tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.vocabulary.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Closest known tag to an unrecognized one.
    pub fn suggest(&self, tag: &str) -> Option<&str> {
        let needle = tag.to_lowercase();
        self.vocabulary
            .keys()
            .map(|known| (known.as_str(), jaro_winkler(&known.to_lowercase(), &needle)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .max_by(|a, b| {
                a.1.partial_cmp(&b.1)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| b.0.cmp(a.0))
            })
            .map(|(known, _)| known)
    }
}
