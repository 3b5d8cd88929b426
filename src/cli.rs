use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand};

use crate::models::MealSlot;
use crate::planner::DEFAULT_PLAN_DAYS;

/// diet_planner: turns a biometric profile into multi-day meal plans.
#[derive(Parser, Debug)]
#[command(name = "diet_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// User the command applies to.
    #[arg(short, long, global = true, env = "DIET_PLANNER_USER", default_value = "default")]
    pub user: String,

    /// JSON file holding profiles and plans.
    #[arg(
        long,
        global = true,
        env = "DIET_PLANNER_STORE",
        default_value = "diet_planner_store.json"
    )]
    pub store: PathBuf,

    /// TOML settings file (restriction vocabulary, exclusion lists, catalog).
    #[arg(long, global = true, env = "DIET_PLANNER_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// JSON meal catalog replacing the built-in one.
    #[arg(long, global = true, env = "DIET_PLANNER_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Set or show the stored profile.
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Show BMR and daily energy needs for the stored profile.
    Energy,

    /// Suggest one meal for a slot and calorie target.
    Meal {
        #[arg(long)]
        slot: MealSlot,

        /// Target calories (kcal).
        #[arg(long)]
        calories: f64,

        /// Restriction tag; repeat for several.
        #[arg(long = "restriction")]
        restrictions: Vec<String>,

        /// Allergy (ingredient substring); repeat for several.
        #[arg(long = "allergy")]
        allergies: Vec<String>,
    },

    /// Generate and store a multi-day plan.
    Plan(PlanArgs),

    /// List the meal catalog.
    Catalog,
}

#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    /// Number of days to plan.
    #[arg(long, default_value_t = DEFAULT_PLAN_DAYS)]
    pub days: u32,

    /// First day (YYYY-MM-DD); defaults to today.
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Also write the plan as CSV.
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

impl Default for PlanArgs {
    fn default() -> Self {
        Self {
            days: DEFAULT_PLAN_DAYS,
            start: None,
            csv: None,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// Store a profile. Prompts interactively when no fields are given.
    Set(ProfileArgs),

    /// Show the stored profile.
    Show,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ProfileArgs {
    #[arg(long)]
    pub age: Option<f64>,

    /// male or female.
    #[arg(long)]
    pub gender: Option<String>,

    /// Kilograms.
    #[arg(long)]
    pub weight: Option<f64>,

    /// Centimetres.
    #[arg(long)]
    pub height: Option<f64>,

    /// sedentary, light, moderate, very_active or extra_active.
    #[arg(long)]
    pub activity: Option<String>,

    #[arg(long = "restriction")]
    pub restrictions: Vec<String>,

    #[arg(long = "goal")]
    pub goals: Vec<String>,

    #[arg(long = "allergy")]
    pub allergies: Vec<String>,
}

impl ProfileArgs {
    /// True when none of the biometric fields were passed.
    pub fn is_empty(&self) -> bool {
        self.age.is_none()
            && self.gender.is_none()
            && self.weight.is_none()
            && self.height.is_none()
            && self.activity.is_none()
    }
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(PlanArgs::default())
    }
}
