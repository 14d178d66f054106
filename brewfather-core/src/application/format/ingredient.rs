use super::{TextBlock, join_records, yes_no};
use crate::domain::{
    FermentableDetail, FermentableSummary, HopDetail, HopSummary, InventoryCategory, MiscDetail,
    MiscSummary, YeastDetail, YeastSummary,
};

fn quantity(amount: Option<f64>, category: InventoryCategory) -> String {
    match amount {
        Some(amount) => format!("{amount} {}", category.unit()),
        None => "not tracked".to_string(),
    }
}

fn empty_message(category: InventoryCategory) -> String {
    format!("No {} found in inventory.", category.title().to_lowercase())
}

pub fn fermentable_list(items: &[FermentableSummary]) -> String {
    let records = items
        .iter()
        .map(|item| {
            TextBlock::new()
                .field("Name", &item.name)
                .field("Type", &item.kind)
                .opt_field("Supplier", item.supplier.as_ref())
                .field(
                    "Quantity",
                    quantity(item.inventory, InventoryCategory::Fermentables),
                )
                .field("Identifier", &item.id)
                .finish()
        })
        .collect();
    join_records(records, &empty_message(InventoryCategory::Fermentables))
}

pub fn fermentable_detail(item: &FermentableDetail) -> String {
    let s = &item.summary;
    TextBlock::new()
        .field("Name", &s.name)
        .field("Type", &s.kind)
        .opt_field("Supplier", s.supplier.as_ref())
        .field(
            "Inventory",
            quantity(s.inventory, InventoryCategory::Fermentables),
        )
        .opt_field("Origin", item.origin.as_ref())
        .opt_field("Grain Category", item.grain_category.as_ref())
        .opt_field("Attenuation", s.attenuation)
        .opt_field("Potential", item.potential)
        .opt_field("Potential Percentage", item.potential_percentage)
        .opt_field("Color", item.color)
        .opt_field("Moisture", item.moisture)
        .opt_field("Protein", item.protein)
        .opt_field("Diastatic Power", item.diastatic_power)
        .opt_field("Friability", item.friability)
        .opt_field("Not Fermentable", item.not_fermentable.map(yes_no))
        .opt_field("Max In Batch", item.max_in_batch)
        .opt_field("Coarse Fine Diff", item.coarse_fine_diff)
        .opt_field("Fine-Ground Dry Basis (FGDB)", item.fgdb)
        .opt_field("Coarse-Ground Dry Basis (CGDB)", item.cgdb)
        .opt_field("Free Amino Nitrogen (FAN)", item.fan)
        .opt_field("Acid", item.acid)
        .field("Hidden", yes_no(item.hidden))
        .opt_field("Notes", item.notes.as_ref())
        .opt_field("User Notes", item.user_notes.as_ref())
        .opt_field("Used In", item.used_in.as_ref())
        .opt_field("Substitutes", item.substitutes.as_ref())
        .opt_field("Lot Number", item.lot_number.as_ref())
        .opt_field("Cost Per Amount", item.cost_per_amount)
        .opt_field("Best Before Date", item.best_before_date.as_ref())
        .opt_field("Manufacturing Date", item.manufacturing_date.as_ref())
        .field("ID", &s.id)
        .finish()
}

pub fn hop_list(items: &[HopSummary]) -> String {
    let records = items
        .iter()
        .map(|item| {
            TextBlock::new()
                .field("Identifier", &item.id)
                .field("Name", &item.name)
                .field("Alpha Acids (A.A)", item.alpha)
                .field("Quantity", quantity(item.inventory, InventoryCategory::Hops))
                .opt_field("Type", item.form.as_ref())
                .opt_field("Use", item.usage_stage)
                .finish()
        })
        .collect();
    join_records(records, &empty_message(InventoryCategory::Hops))
}

pub fn hop_detail(item: &HopDetail) -> String {
    let s = &item.summary;
    let mut block = TextBlock::new();
    block
        .field("Name", &s.name)
        .opt_field("Type", s.form.as_ref())
        .opt_field("Origin", item.origin.as_ref())
        .opt_field("Use", s.usage_stage)
        .opt_field("Usage", item.usage.as_ref())
        .field("Alpha Acid (% A.A)", s.alpha)
        .opt_field("Beta", item.beta)
        .field("Inventory", quantity(s.inventory, InventoryCategory::Hops))
        .opt_field("Year", item.year)
        .opt_field("Amount", item.amount)
        .opt_field("Time", item.time)
        .opt_field("Temp", item.temp)
        .opt_field("IBU", item.ibu);
    block
        .section("Oil Composition")
        .opt_field("Total Oil", item.oil)
        .opt_field("Myrcene", item.myrcene)
        .opt_field("Caryophyllene", item.caryophyllene)
        .opt_field("Humulene", item.humulene)
        .opt_field("Cohumulone", item.cohumulone)
        .opt_field("Farnesene", item.farnesene)
        .opt_field("HSI", item.hsi);
    block
        .section("Storage")
        .opt_field("Lot Number", item.lot_number.as_ref())
        .opt_field("Best Before Date", item.best_before_date.as_ref())
        .opt_field("Manufacturing Date", item.manufacturing_date.as_ref())
        .opt_field("Cost Per Amount", item.cost_per_amount)
        .field("Hidden", yes_no(item.hidden));
    block
        .blank()
        .opt_field("Substitutes", item.substitutes.as_ref())
        .opt_field("Used In", item.used_in.as_ref())
        .opt_field("Notes", item.notes.as_ref())
        .opt_field("User Notes", item.user_notes.as_ref())
        .opt_field("Version", item.meta.version.as_ref())
        .field("ID", &s.id);
    block.finish()
}

pub fn yeast_list(items: &[YeastSummary]) -> String {
    let records = items
        .iter()
        .map(|item| {
            TextBlock::new()
                .field("Identifier", &item.id)
                .field("Name", &item.name)
                .opt_field("Attenuation (%)", item.attenuation)
                .field("Quantity", quantity(item.inventory, InventoryCategory::Yeasts))
                .opt_field("Type", item.kind.as_ref())
                .opt_field("Form", item.form)
                .finish()
        })
        .collect();
    join_records(records, &empty_message(InventoryCategory::Yeasts))
}

pub fn yeast_detail(item: &YeastDetail) -> String {
    let s = &item.summary;
    let temp_range = match (item.min_temp, item.max_temp) {
        (Some(min), Some(max)) => Some(format!("{min}-{max} °C")),
        _ => None,
    };
    TextBlock::new()
        .field("Name", &s.name)
        .opt_field("Type", s.kind.as_ref())
        .opt_field("Form", s.form)
        .opt_field("Laboratory", item.laboratory.as_ref())
        .opt_field("Product ID", item.product_id.as_ref())
        .field("Inventory", quantity(s.inventory, InventoryCategory::Yeasts))
        .opt_field("Amount", item.amount)
        .opt_field("Unit", item.unit.as_ref())
        .opt_field("Attenuation", s.attenuation)
        .opt_field("Min Attenuation", item.min_attenuation)
        .opt_field("Max Attenuation", item.max_attenuation)
        .opt_field("Flocculation", item.flocculation.as_ref())
        .opt_field("Temperature Range", temp_range)
        .opt_field("Max ABV", item.max_abv)
        .opt_field("Cells Per Package", item.cells_per_pkg)
        .opt_field("Age Rate", item.age_rate)
        .field("Ferments All", yes_no(item.ferments_all))
        .opt_field("Description", item.description.as_ref())
        .opt_field("User Notes", item.user_notes.as_ref())
        .field("Hidden", yes_no(item.hidden))
        .opt_field("Lot Number", item.lot_number.as_ref())
        .opt_field("Best Before Date", item.best_before_date.as_ref())
        .opt_field("Manufacturing Date", item.manufacturing_date.as_ref())
        .opt_field("Created", item.meta.created)
        .opt_field("Last Modified", item.meta.timestamp)
        .opt_field("Version", item.meta.version.as_ref())
        .field("ID", &s.id)
        .opt_field("Rev", item.meta.rev.as_ref())
        .finish()
}

pub fn misc_list(items: &[MiscSummary]) -> String {
    let records = items
        .iter()
        .map(|item| {
            TextBlock::new()
                .field("ID", &item.id)
                .field("Name", &item.name)
                .opt_field("Type", item.kind.as_ref())
                .opt_field("Use", item.usage_stage)
                .field(
                    "Inventory",
                    format!(
                        "{} (actual unit depends on item)",
                        quantity(item.inventory, InventoryCategory::Miscs)
                    ),
                )
                .opt_field("Notes", item.notes.as_ref())
                .finish()
        })
        .collect();
    join_records(records, &empty_message(InventoryCategory::Miscs))
}

pub fn misc_detail(item: &MiscDetail) -> String {
    let s = &item.summary;
    let timing = item.time.map(|time| {
        let unit = if item.time_is_days { "days" } else { "min" };
        format!("{time} {unit}")
    });
    TextBlock::new()
        .field("ID", &s.id)
        .field("Name", &s.name)
        .opt_field("Type", s.kind.as_ref())
        .opt_field("Use", s.usage_stage)
        .field("Inventory", quantity(s.inventory, InventoryCategory::Miscs))
        .opt_field("Unit", item.unit.as_ref())
        .opt_field("Time", timing)
        .opt_field("Amount Per Liter", item.amount_per_l)
        .opt_field("Concentration", item.concentration)
        .field("Water Adjustment", yes_no(item.water_adjustment))
        .opt_field("Use For", item.use_for.as_ref())
        .opt_field("Substitutes", item.substitutes.as_ref())
        .opt_field("Notes", s.notes.as_ref())
        .opt_field("User Notes", item.user_notes.as_ref())
        .opt_field("Lot Number", item.lot_number.as_ref())
        .opt_field("Best Before Date", item.best_before_date.as_ref())
        .opt_field("Manufacturing Date", item.manufacturing_date.as_ref())
        .opt_field("Cost Per Amount", item.cost_per_amount)
        .field("Hidden", yes_no(item.hidden))
        .finish()
}

/// Confirmation after an inventory PATCH
pub fn inventory_updated(category: InventoryCategory, id: &str, amount: f64) -> String {
    let noun = match category {
        InventoryCategory::Miscs => "Miscellaneous".to_string(),
        other => capitalize(other.noun()),
    };
    format!(
        "{noun} inventory for item {id} updated to {amount} {}.",
        category.unit()
    )
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
