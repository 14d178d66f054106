use super::{TextBlock, or_na};
use crate::application::inventory::{CategorySummary, InventoryEntry, InventorySummary};
use crate::domain::InventoryCategory;

fn category_hint(category: InventoryCategory) -> &'static str {
    match category {
        InventoryCategory::Fermentables => " (grains, adjuncts, sugars, extracts)",
        InventoryCategory::Hops => "",
        InventoryCategory::Yeasts => "",
        InventoryCategory::Miscs => " (water agents, finings, spices, other additions)",
    }
}

pub fn inventory_categories() -> String {
    let mut block = TextBlock::new();
    for category in InventoryCategory::ALL {
        block.line(format!("{}{}", category.title(), category_hint(category)));
    }
    block.finish()
}

fn entry_lines(block: &mut TextBlock, entry: &InventoryEntry, unit: &str) {
    block.field("Name", &entry.name);
    for (label, value) in &entry.highlights {
        block.field(label, value);
    }
    block
        .opt_field("Lot #", entry.lot_number.as_ref())
        .opt_field("Best Before Date", entry.best_before.as_ref());
    match entry.amount {
        Some(amount) if entry.low_stock => {
            block.line(format!("Inventory Amount: {amount} {unit} [LOW STOCK]"))
        }
        Some(amount) => block.line(format!("Inventory Amount: {amount} {unit}")),
        None => block.field("Inventory Amount", "not tracked"),
    };
    block.blank();
}

fn category_lines(block: &mut TextBlock, summary: &CategorySummary) {
    let unit = summary.category.unit();
    block.section(summary.category.title()).line(format!(
        "Items: {} (tracked: {}) | Total: {} {unit} | Low stock below: {} {unit}",
        summary.item_count, summary.tracked_count, summary.total_amount, summary.threshold
    ));
    if summary.valued_count > 0 {
        block.line(format!(
            "Estimated value: {:.2} ({} priced items)",
            summary.total_value, summary.valued_count
        ));
    }
    block.blank();

    if summary.entries.is_empty() {
        block.line("No items.");
        return;
    }
    for entry in &summary.entries {
        entry_lines(block, entry, unit);
    }
}

/// Overview of all four categories with low-stock flags.
pub fn inventory_summary(summary: &InventorySummary) -> String {
    let mut block = TextBlock::new();
    block.banner("INVENTORY SUMMARY", 50).line(format!(
        "Items: {} | Low stock: {} | Estimated value: {:.2}",
        summary.item_count(),
        summary.low_stock_count(),
        summary.total_value()
    ));

    for category in summary.categories() {
        category_lines(&mut block, category);
    }

    let low: Vec<(&InventoryEntry, InventoryCategory)> = summary
        .categories()
        .into_iter()
        .flat_map(|c| c.low_stock().map(move |entry| (entry, c.category)))
        .collect();
    if !low.is_empty() {
        block.section("Low Stock");
        for (entry, category) in low {
            block.line(format!(
                "- {} ({}): {} {}",
                entry.name,
                category.noun(),
                or_na(entry.amount),
                category.unit()
            ));
        }
    }
    block.finish()
}
