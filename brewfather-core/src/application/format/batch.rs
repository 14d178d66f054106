use super::recipe::recipe_detail;
use super::{TextBlock, join_records, or_na, yes_no};
use crate::domain::common::format_millis;
use crate::domain::{BatchDetail, BatchSummary};
use crate::infrastructure::api::BatchWithRecipe;

pub fn batch_list(items: &[BatchSummary]) -> String {
    let records = items
        .iter()
        .map(|item| {
            TextBlock::new()
                .field("ID", &item.id)
                .field("Name", &item.name)
                .field("Batch Number", item.batch_no)
                .field("Status", item.status)
                .opt_field("Brewer", item.brewer.as_ref())
                .opt_field("Brew Date", item.brew_date.map(format_millis))
                .opt_field("Recipe Name", item.recipe.as_ref().map(|r| &r.name))
                .finish()
        })
        .collect();
    join_records(records, "No batches found.")
}

/// Measured value when recorded, otherwise the estimate
fn gravity_line(label: &str, measured: Option<f64>, estimated: Option<f64>) -> String {
    match (measured, estimated) {
        (Some(value), _) => format!("{label}: {value}"),
        (None, Some(value)) => format!("{label}: {value} (estimated)"),
        (None, None) => format!("{label}: N/A"),
    }
}

fn batch_section(block: &mut TextBlock, batch: &BatchDetail) {
    block
        .banner("Batch Details:", 14)
        .field("ID", &batch.id)
        .field("Name", &batch.name)
        .field("Batch Number", batch.batch_no)
        .field("Status", batch.status)
        .opt_field("Brewer", batch.brewer.as_ref())
        .field("Brewed", yes_no(batch.brewed));

    let recipe_name = batch.recipe.as_ref().map(|r| r.name());
    let recipe_id = batch
        .recipe
        .as_ref()
        .map(|r| r.id())
        .or(batch.recipe_id.as_deref());
    block
        .section("Recipe Information")
        .opt_field("Recipe Name", recipe_name)
        .opt_field("Recipe ID", recipe_id);

    block
        .section("Schedule")
        .opt_field("Brew Date", batch.brew_date.map(format_millis))
        .opt_field("Fermentation Start", batch.fermentation_start_date.as_ref())
        .opt_field("Fermentation End", batch.fermentation_end_date.as_ref())
        .opt_field("Bottling Date", batch.bottling_date.as_ref());

    block
        .section("Gravity & Alcohol")
        .line(gravity_line(
            "Original Gravity",
            batch.measured_og,
            batch.estimated_og.or(batch.og),
        ))
        .line(gravity_line(
            "Final Gravity",
            batch.measured_fg,
            batch.estimated_fg.or(batch.fg),
        ))
        .line(gravity_line(
            "ABV",
            batch.measured_abv,
            batch.estimated_abv.or(batch.abv),
        ))
        .opt_field("Attenuation", batch.measured_attenuation)
        .opt_field("Mash pH", batch.measured_mash_ph)
        .opt_field("Efficiency", batch.measured_efficiency);

    block
        .section("Carbonation")
        .opt_field("Type", batch.carbonation_type.as_ref())
        .field(
            "Level",
            format!("{} volumes", or_na(batch.carbonation_level)),
        );

    if !batch.tags.is_empty() {
        block.section("Tags").line(batch.tags.join(", "));
    }

    if !batch.notes.is_empty() {
        block.section("Notes");
        for note in &batch.notes {
            block.line(format!(
                "- [{}] {} ({})",
                note.kind.as_deref().unwrap_or("note"),
                note.note,
                format_millis(note.timestamp)
            ));
        }
    }

    if !batch.measurements.is_empty() {
        block.section("Measurements");
        for measurement in &batch.measurements {
            let mut line = format!("- {}: {}", measurement.kind, measurement.value);
            if let Some(unit) = &measurement.unit {
                line.push(' ');
                line.push_str(unit);
            }
            if let Some(time) = &measurement.time {
                line.push_str(&format!(" [{time}]"));
            }
            if let Some(comment) = measurement.comment.as_deref().filter(|c| !c.is_empty()) {
                line.push_str(&format!(" ({comment})"));
            }
            block.line(line);
        }
    }
}

/// Batch sheet followed by the full recipe it was brewed from.
pub fn batch_detail(resolved: &BatchWithRecipe) -> String {
    let batch = &resolved.batch;
    let mut block = TextBlock::new();
    batch_section(&mut block, batch);

    let mut text = block.finish();
    if let Some(recipe) = &resolved.recipe {
        text.push('\n');
        text.push_str(&"=".repeat(50));
        text.push_str("\nRECIPE DETAILS\n");
        text.push_str(&"=".repeat(50));
        text.push('\n');
        text.push_str(&recipe_detail(recipe));
    }

    let mut footer = TextBlock::new();
    footer.section("Batch Metadata").field("Batch ID", &batch.id);
    if let Some(rev) = &batch.meta.rev {
        footer.field("Revision", rev);
    }
    text.push_str(&footer.finish());
    text
}

pub fn batch_updated(batch_id: &str) -> String {
    format!("Batch {batch_id} updated successfully.")
}
