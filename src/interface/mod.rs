pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_plan_csv;
pub use prompts::{collect_profile, prompt_restrictions, prompt_yes_no, split_list};
pub use render::{
    display_catalog, display_day_plan, display_diet_plan, display_energy, display_meal,
    display_profile,
};
