use std::path::Path;

use crate::error::Result;
use crate::models::{DietPlan, MealSlot};

/// Write one CSV row per planned meal, followed by a total row per day.
pub fn write_plan_csv(plan: &DietPlan, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "date", "slot", "meal", "calories", "protein", "carbs", "fat", "fiber", "prep_time",
    ])?;

    for day in plan.iter() {
        let date = day.date.to_string();

        for (slot, meal) in MealSlot::ALL.iter().zip(&day.meals) {
            let n = &meal.nutrition;
            wtr.write_record([
                date.clone(),
                slot.to_string(),
                meal.name.clone(),
                format!("{:.0}", n.calories),
                format!("{:.1}", n.protein),
                format!("{:.1}", n.carbs),
                format!("{:.1}", n.fat),
                format!("{:.1}", n.fiber),
                meal.prep_time.to_string(),
            ])?;
        }

        let t = &day.total_nutrition;
        wtr.write_record([
            date,
            "total".to_string(),
            String::new(),
            format!("{:.0}", t.calories),
            format!("{:.1}", t.protein),
            format!("{:.1}", t.carbs),
            format!("{:.1}", t.fat),
            format!("{:.1}", t.fiber),
            String::new(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
