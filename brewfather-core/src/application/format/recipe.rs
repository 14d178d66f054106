use super::{TextBlock, join_records, or_na, yes_no};
use crate::domain::common::format_millis;
use crate::domain::recipe::WaterProfile;
use crate::domain::{RecipeDetail, RecipeSummary};

pub fn recipe_list(items: &[RecipeSummary]) -> String {
    let records = items
        .iter()
        .map(|item| {
            TextBlock::new()
                .field("ID", &item.id)
                .field("Name", &item.name)
                .opt_field("Author", item.author.as_ref())
                .opt_field("Style", item.style.as_ref().map(|s| &s.name))
                .opt_field("Type", item.kind)
                .finish()
        })
        .collect();
    join_records(records, "No recipes found.")
}

fn ions(profile: &WaterProfile) -> String {
    format!(
        "Ca: {} Mg: {} Na: {} Cl: {} SO4: {} HCO3: {}",
        or_na(profile.calcium),
        or_na(profile.magnesium),
        or_na(profile.sodium),
        or_na(profile.chloride),
        or_na(profile.sulfate),
        or_na(profile.bicarbonate),
    )
}

/// Full recipe sheet: specifications, ingredients, mash, water and fermentation.
pub fn recipe_detail(recipe: &RecipeDetail) -> String {
    let summary = &recipe.summary;
    let style = summary.style.as_ref();
    let mut block = TextBlock::new();

    block
        .field("Recipe", &summary.name)
        .opt_field("Author", summary.author.as_ref())
        .opt_field("Type", summary.kind)
        .opt_field("Created", recipe.meta.created)
        .opt_field("Last Modified", recipe.meta.timestamp)
        .opt_field("Public", recipe.public.map(yes_no))
        .field(
            "Tags",
            recipe
                .tags
                .as_ref()
                .filter(|tags| !tags.is_empty())
                .map_or_else(|| "None".to_string(), |tags| tags.join(", ")),
        );

    block
        .section("Style Information")
        .opt_field("Name", style.map(|s| &s.name))
        .opt_field("Category", style.and_then(|s| s.category.as_ref()))
        .opt_field("Type", style.and_then(|s| s.kind.as_ref()))
        .opt_field("Style Guide", style.and_then(|s| s.style_guide.as_ref()))
        .field(
            "Conformity",
            yes_no(recipe.style_conformity.unwrap_or(false)),
        );

    block
        .section("Specifications")
        .field("Batch Size", format!("{} L", or_na(recipe.batch_size)))
        .field("Boil Size", format!("{} L", or_na(recipe.boil_size)))
        .field("Boil Time", format!("{} minutes", or_na(recipe.boil_time)))
        .field("Brewhouse Efficiency", format!("{}%", or_na(recipe.efficiency)))
        .field("Mash Efficiency", format!("{}%", or_na(recipe.mash_efficiency)))
        .field(
            "Original Gravity",
            format!("{} ({}°P)", or_na(recipe.og), or_na(recipe.og_plato)),
        )
        .opt_field("Final Gravity", recipe.fg)
        .field(
            "IBU",
            format!(
                "{} (Formula: {})",
                or_na(recipe.ibu),
                or_na(recipe.ibu_formula.as_ref())
            ),
        )
        .field("Color", format!("{} SRM", or_na(recipe.color)))
        .field("ABV", format!("{}%", or_na(recipe.abv)))
        .field("Attenuation", format!("{}%", or_na(recipe.attenuation)))
        .opt_field("BU:GU Ratio", recipe.bu_gu_ratio)
        .field("Carbonation", format!("{} volumes", or_na(recipe.carbonation)))
        .opt_field("Pre-Boil Gravity", recipe.pre_boil_gravity)
        .opt_field("Post-Boil Gravity", recipe.post_boil_gravity);

    block
        .section("Process Details")
        .opt_field("FG Formula", recipe.fg_formula.as_ref())
        .field("Primary Temp", format!("{}°C", or_na(recipe.primary_temp)))
        .opt_field("First Wort Gravity", recipe.first_wort_gravity)
        .opt_field("Diastatic Power", recipe.diastatic_power)
        .field(
            "Hopstand Temp",
            format!("{}°C", or_na(recipe.avg_weighted_hopstand_temp)),
        )
        .field(
            "Dry Hop Rate",
            format!("{}g/L", or_na(recipe.sum_dry_hop_per_liter)),
        );

    block
        .section("Ingredient Totals")
        .field(
            "Total Fermentables",
            format!("{}kg", or_na(recipe.fermentables_total_amount)),
        )
        .field("Total Hops", format!("{}g", or_na(recipe.hops_total_amount)));

    block
        .section("Equipment Profile")
        .opt_field("Name", summary.equipment.as_ref().map(|e| &e.name));

    block.section("Fermentables");
    for ferm in &recipe.fermentables {
        block.line(format!(
            "{}: {}kg ({}%) - {}",
            ferm.name,
            ferm.amount,
            or_na(ferm.percentage),
            ferm.kind
        ));
    }

    block.section("Hops Schedule");
    for hop in &recipe.hops {
        block.line(format!(
            "{}: {}g ({}% AA) - {} for {} min @ {}°C",
            hop.name,
            hop.amount,
            hop.alpha,
            hop.usage_stage,
            or_na(hop.time),
            hop.temp.unwrap_or(100.0)
        ));
    }

    block.section("Yeast");
    for yeast in &recipe.yeasts {
        block.line(format!(
            "{} ({}) - {} {}",
            yeast.name,
            or_na(yeast.laboratory.as_ref()),
            yeast.amount,
            yeast.unit.as_deref().unwrap_or("pkg")
        ));
        block.line(format!(
            "Form: {}, Attenuation: {}%",
            or_na(yeast.form),
            or_na(yeast.attenuation)
        ));
    }

    if !recipe.miscs.is_empty() {
        block.section("Miscellaneous");
        for misc in &recipe.miscs {
            let mut line = format!(
                "{}: {} {} - {}",
                misc.name,
                misc.amount,
                misc.unit.as_deref().unwrap_or("g"),
                misc.usage_stage
            );
            if let Some(time) = misc.time {
                let unit = if misc.time_is_days { "days" } else { "min" };
                line.push_str(&format!(" @ {time} {unit}"));
            }
            block.line(line);
        }
    }

    if !recipe.boil_steps.is_empty() {
        block.section("Boil Schedule");
        for step in &recipe.boil_steps {
            block.line(format!("@ {} min: {}", step.time, step.name));
        }
    }

    if let Some(mash) = &recipe.mash {
        block.section("Mash Profile").opt_field("Name", mash.name.as_ref());
        for (i, step) in mash.steps.iter().enumerate() {
            let mut line = format!(
                "Step {}: {} - {}°C for {} min",
                i + 1,
                step.kind,
                step.step_temp,
                step.step_time
            );
            if let Some(ramp) = step.ramp_time.filter(|r| *r > 0.0) {
                line.push_str(&format!(" (ramp: {ramp} min)"));
            }
            block.line(line);
        }
    }

    if let Some(water) = &recipe.water {
        block
            .section("Water Profile")
            .opt_field(
                "Source Water",
                water.source.as_ref().and_then(|s| s.name.as_ref()),
            )
            .opt_field("Mash pH", water.mash_ph);
        if let Some(acid) = water.acid_ph_adjustment.filter(|a| *a != 0.0) {
            block.field("Acid pH Adjustment", acid);
        }
        if let Some(source) = &water.source {
            block.blank().line("Source Profile (mg/L):").line(ions(source));
        }
        if let Some(total) = &water.total {
            block.blank().line("Target Profile (mg/L):").line(ions(total));
        }
        let salts = water
            .mash_adjustments
            .as_ref()
            .map(|a| a.salts())
            .unwrap_or_default();
        if !salts.is_empty() {
            block.blank().line("Mash Adjustments (g):");
            for (label, grams) in salts {
                block.line(format!("{label}: {grams}g"));
            }
        }
    }

    if let Some(fermentation) = &recipe.fermentation {
        block
            .section("Fermentation Schedule")
            .opt_field("Profile", fermentation.name.as_ref());
        for (i, step) in fermentation.steps.iter().enumerate() {
            let mut line = format!(
                "Step {}: {} - {}°C for {} days",
                i + 1,
                step.kind,
                step.step_temp,
                step.step_time
            );
            if let Some(started) = step.actual_time {
                let date = format_millis(started);
                let day = date.split(' ').next().unwrap_or(&date);
                line.push_str(&format!(" (started: {day})"));
            }
            block.line(line);
        }
    }

    if let Some(notes) = recipe.notes.as_deref().filter(|n| !n.is_empty()) {
        block.section("Notes").line(notes);
    }

    if let Some(rb_ratio) = recipe.rb_ratio {
        block.section("Advanced Calculations").field("RB Ratio", rb_ratio);
        if let Some(total) = recipe.total_gravity {
            block.field("Total Gravity", total);
        }
        if let Some(extra) = recipe.extra_gravity {
            block.field("Extra Gravity", extra);
        }
    }

    block
        .section("Metadata")
        .field("Recipe ID", &summary.id)
        .opt_field("Version", recipe.meta.version.as_ref())
        .opt_field("Revision", recipe.meta.rev.as_ref());
    if !recipe.search_tags.is_empty() {
        block.field("Search Tags", recipe.search_tags.join(", "));
    }

    block.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn recipe() -> RecipeDetail {
        serde_json::from_value(json!({
            "_id": "r1",
            "name": "Dry Stout",
            "author": "Alex",
            "type": "All Grain",
            "style": {"name": "Irish Stout", "category": "15B"},
            "batchSize": 20.0,
            "og": 1.042,
            "fermentables": [{"name": "Roasted Barley", "type": "Grain", "amount": 0.4, "percentage": 10.0}],
            "hops": [{"name": "EKG", "alpha": 5.0, "amount": 40.0, "use": "Boil", "time": 60.0}],
            "yeasts": [{"name": "Irish Ale", "amount": 1.0, "laboratory": "Wyeast", "form": "Liquid", "attenuation": 73.0}],
            "miscs": [{"name": "Irish Moss", "amount": 5.0, "use": "Boil", "time": 15.0}],
            "mash": {"name": "Single", "steps": [{"type": "Temperature", "stepTemp": 67.0, "stepTime": 60, "rampTime": 0}]},
            "water": {
                "source": {"name": "Dublin", "calcium": 118.0},
                "mashAdjustments": {"calciumChloride": 2.0}
            },
            "fermentation": {"name": "Ale", "steps": [{"type": "Primary", "stepTemp": 19.0, "stepTime": 10, "actualTime": 1704067200000i64}]}
        }))
        .unwrap()
    }

    #[test]
    fn recipe_sheet_lists_ingredients_and_process() {
        let text = recipe_detail(&recipe());

        assert!(text.starts_with("Recipe: Dry Stout\nAuthor: Alex\nType: All Grain\n"));
        assert!(text.contains("Batch Size: 20 L"));
        assert!(text.contains("Roasted Barley: 0.4kg (10%) - Grain"));
        assert!(text.contains("EKG: 40g (5% AA) - Boil for 60 min @ 100°C"));
        assert!(text.contains("Irish Ale (Wyeast) - 1 pkg"));
        assert!(text.contains("Irish Moss: 5 g - Boil @ 15 min"));
        assert!(text.contains("Step 1: Temperature - 67°C for 60 min\n"));
        assert!(text.contains("CaCl2: 2g"));
        assert!(text.contains("Step 1: Primary - 19°C for 10 days (started: 2024-01-01)"));
        assert!(text.contains("Recipe ID: r1"));
    }

    #[test]
    fn missing_values_render_as_not_available() {
        let recipe: RecipeDetail =
            serde_json::from_value(json!({"_id": "r2", "name": "Bare"})).unwrap();

        let text = recipe_detail(&recipe);

        assert!(text.contains("Author: N/A"));
        assert!(text.contains("Batch Size: N/A L"));
        assert!(text.contains("Tags: None"));
        assert!(!text.contains("Mash Profile"));
    }

    #[test]
    fn recipe_list_shows_style() {
        let items: Vec<RecipeSummary> = serde_json::from_value(json!([
            {"_id": "r1", "name": "Dry Stout", "style": {"name": "Irish Stout"}}
        ]))
        .unwrap();

        assert!(recipe_list(&items).contains("Style: Irish Stout"));
        assert_eq!(recipe_list(&[]), "No recipes found.");
    }
}
