use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::Result;
use crate::models::{DietPlan, UserProfile};
use crate::state::persistence::{load_document, save_document};

/// Where user profiles live between planning calls.
pub trait ProfileStore {
    fn get_profile(&self, user_id: &str) -> Result<Option<UserProfile>>;
    fn put_profile(&mut self, user_id: &str, profile: &UserProfile) -> Result<()>;
}

/// Where generated plans are kept.
pub trait PlanStore {
    fn get_plan(&self, user_id: &str) -> Result<Option<DietPlan>>;
    fn put_plan(&mut self, user_id: &str, plan: &DietPlan) -> Result<()>;
}

fn profile_key(user_id: &str) -> String {
    format!("user_preferences_{user_id}")
}

fn plan_key(user_id: &str) -> String {
    format!("diet_plan_{user_id}")
}

/// In-process store, mainly for tests and one-shot runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    profiles: HashMap<String, UserProfile>,
    plans: HashMap<String, DietPlan>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for MemoryStore {
    fn get_profile(&self, user_id: &str) -> Result<Option<UserProfile>> {
        Ok(self.profiles.get(user_id).cloned())
    }

    fn put_profile(&mut self, user_id: &str, profile: &UserProfile) -> Result<()> {
        self.profiles.insert(user_id.to_string(), profile.clone());
        Ok(())
    }
}

impl PlanStore for MemoryStore {
    fn get_plan(&self, user_id: &str) -> Result<Option<DietPlan>> {
        Ok(self.plans.get(user_id).cloned())
    }

    fn put_plan(&mut self, user_id: &str, plan: &DietPlan) -> Result<()> {
        self.plans.insert(user_id.to_string(), plan.clone());
        Ok(())
    }
}

/// Store backed by a single JSON document.
///
/// Profiles are kept under `user_preferences_<id>` and plans under
/// `diet_plan_<id>`. Every write rewrites the file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, Value>,
}

impl JsonFileStore {
    /// Open the store at `path`; the file is created on first write.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = load_document(&path)?;
        tracing::debug!(path = %path.display(), entries = entries.len(), "opened store");
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read<T: serde::de::DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.entries.get(key) {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }

    fn write<T: serde::Serialize>(&mut self, key: String, value: &T) -> Result<()> {
        let mut entries = self.entries.clone();
        entries.insert(key, serde_json::to_value(value)?);
        save_document(&self.path, &entries)?;
        self.entries = entries;
        Ok(())
    }
}

impl ProfileStore for JsonFileStore {
    fn get_profile(&self, user_id: &str) -> Result<Option<UserProfile>> {
        self.read(&profile_key(user_id))
    }

    fn put_profile(&mut self, user_id: &str, profile: &UserProfile) -> Result<()> {
        self.write(profile_key(user_id), profile)
    }
}

impl PlanStore for JsonFileStore {
    fn get_plan(&self, user_id: &str) -> Result<Option<DietPlan>> {
        self.read(&plan_key(user_id))
    }

    fn put_plan(&mut self, user_id: &str, plan: &DietPlan) -> Result<()> {
        self.write(plan_key(user_id), plan)
    }
}
