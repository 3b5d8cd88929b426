use std::collections::BTreeSet;

use clap::Parser;
use tracing::{debug, warn};

use diet_plan_synth_rs::catalog::StaticCatalog;
use diet_plan_synth_rs::cli::{Cli, Command, PlanArgs, ProfileArgs, ProfileCommand};
use diet_plan_synth_rs::config::PlannerSettings;
use diet_plan_synth_rs::error::{PlanError, Result};
use diet_plan_synth_rs::interface::{
    collect_profile, display_catalog, display_diet_plan, display_energy, display_meal,
    display_profile, write_plan_csv,
};
use diet_plan_synth_rs::logging::init_logging;
use diet_plan_synth_rs::models::{MealSlot, ProfileDraft};
use diet_plan_synth_rs::service::{DietPlanningService, PlanRequest};
use diet_plan_synth_rs::state::{load_catalog, JsonFileStore};

type Service = DietPlanningService<JsonFileStore>;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let settings = PlannerSettings::load(cli.settings.as_deref())?;
    let rules = settings.restriction_rules()?;

    let catalog = match cli.catalog.as_ref().or(settings.catalog.as_ref()) {
        Some(path) => {
            debug!(path = %path.display(), "loading catalog");
            load_catalog(path)?
        }
        None => StaticCatalog::builtin(),
    };
    if catalog.is_empty() {
        warn!("catalog has no meals; every slot will use the fallback meal");
    }
    debug!(meals = catalog.len(), "catalog ready");

    let store = JsonFileStore::open(&cli.store)?;
    let mut service = DietPlanningService::new(catalog, rules, store);

    match cli.command.unwrap_or_default() {
        Command::Profile { action } => match action {
            ProfileCommand::Set(args) => cmd_profile_set(&mut service, &cli.user, args),
            ProfileCommand::Show => cmd_profile_show(&service, &cli.user),
        },
        Command::Energy => cmd_energy(&service, &cli.user),
        Command::Meal {
            slot,
            calories,
            restrictions,
            allergies,
        } => cmd_meal(&service, slot, calories, restrictions, allergies),
        Command::Plan(args) => cmd_plan(&mut service, &cli.user, args),
        Command::Catalog => {
            display_catalog(service.catalog());
            Ok(())
        }
    }
}

/// Store a profile from flags, or interactively when none are given.
fn cmd_profile_set(service: &mut Service, user: &str, args: ProfileArgs) -> Result<()> {
    let draft = if args.is_empty() {
        collect_profile(service.rules())?
    } else {
        for tag in &args.restrictions {
            if service.rules().classify(tag).is_none() {
                match service.rules().suggest(tag) {
                    Some(known) => println!("Unknown restriction '{tag}', did you mean '{known}'?"),
                    None => println!(
                        "Unknown restriction '{tag}'; it excludes nothing. Known tags: {}",
                        service.rules().known_tags().join(", ")
                    ),
                }
            }
        }
        ProfileDraft {
            age: args.age,
            gender: args.gender,
            weight: args.weight,
            height: args.height,
            activity_level: args.activity,
            dietary_restrictions: args.restrictions,
            health_goals: args.goals,
            allergies: args.allergies,
        }
    };

    let profile = service.save_profile(user, draft)?;
    display_profile(user, &profile);
    println!("Profile saved to {}", service.store().path().display());
    Ok(())
}

fn cmd_profile_show(service: &Service, user: &str) -> Result<()> {
    let profile = service.profile(user)?;
    display_profile(user, &profile);
    Ok(())
}

fn cmd_energy(service: &Service, user: &str) -> Result<()> {
    let energy = service.energy_for(user)?;
    display_energy(&energy);
    Ok(())
}

fn cmd_meal(
    service: &Service,
    slot: MealSlot,
    calories: f64,
    restrictions: Vec<String>,
    allergies: Vec<String>,
) -> Result<()> {
    let restrictions: BTreeSet<String> = restrictions.into_iter().collect();
    let allergies: BTreeSet<String> = allergies.into_iter().collect();

    let meal = service.suggest_meal(slot, calories, &restrictions, &allergies)?;
    display_meal(&meal);
    Ok(())
}

/// Generate a plan, show it, and optionally export it as CSV.
fn cmd_plan(service: &mut Service, user: &str, args: PlanArgs) -> Result<()> {
    let mut request = PlanRequest::new(user).with_days(args.days);
    if let Some(start) = args.start {
        request = request.starting(start);
    }

    let plan = match service.generate_plan(&request) {
        Err(PlanError::MissingProfile(_)) => {
            println!("No profile stored for '{user}'. Run 'diet_planner profile set' first.");
            return Ok(());
        }
        other => other?,
    };

    display_diet_plan(&plan);

    if let Some(path) = args.csv {
        write_plan_csv(&plan, &path)?;
        println!("Plan written to {}", path.display());
    }

    Ok(())
}
