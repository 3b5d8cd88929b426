use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::catalog::StaticCatalog;
use crate::error::Result;
use crate::models::MealTemplate;

/// Load a meal catalog from a JSON list of templates.
///
/// File order is kept; it decides calorie ties during selection.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<StaticCatalog> {
    let content = fs::read_to_string(path)?;
    let meals: Vec<MealTemplate> = serde_json::from_str(&content)?;
    StaticCatalog::new(meals)
}

/// Save meal templates as a JSON list.
pub fn save_catalog<P: AsRef<Path>>(path: P, meals: &[MealTemplate]) -> Result<()> {
    let json = serde_json::to_string_pretty(meals)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load a keyed JSON document. A missing file is an empty document.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<BTreeMap<String, Value>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(BTreeMap::new());
    }
    Ok(serde_json::from_str(&content)?)
}

/// Save a keyed JSON document, replacing the file.
pub fn save_document<P: AsRef<Path>>(path: P, document: &BTreeMap<String, Value>) -> Result<()> {
    let json = serde_json::to_string_pretty(document)?;
    fs::write(path, json)?;
    Ok(())
}
