//! Inventory aggregation over the four ingredient categories

use crate::domain::{DateValue, InventoryCategory, InventoryItem};

/// Amounts strictly below which a tracked item counts as low stock
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InventoryThresholds {
    /// kg
    pub fermentables: f64,
    /// grams
    pub hops: f64,
    /// packages
    pub yeasts: f64,
    /// units
    pub miscs: f64,
}

impl Default for InventoryThresholds {
    fn default() -> Self {
        Self {
            fermentables: 1.0,
            hops: 50.0,
            yeasts: 1.0,
            miscs: 1.0,
        }
    }
}

impl InventoryThresholds {
    pub fn for_category(&self, category: InventoryCategory) -> f64 {
        match category {
            InventoryCategory::Fermentables => self.fermentables,
            InventoryCategory::Hops => self.hops,
            InventoryCategory::Yeasts => self.yeasts,
            InventoryCategory::Miscs => self.miscs,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryEntry {
    pub id: String,
    pub name: String,
    pub amount: Option<f64>,
    /// `amount * cost_per_amount` when both are known
    pub value: Option<f64>,
    pub low_stock: bool,
    pub lot_number: Option<String>,
    pub best_before: Option<DateValue>,
    pub highlights: Vec<(&'static str, String)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub category: InventoryCategory,
    pub threshold: f64,
    pub item_count: usize,
    pub tracked_count: usize,
    pub total_amount: f64,
    pub total_value: f64,
    /// Items that contributed to `total_value`
    pub valued_count: usize,
    pub entries: Vec<InventoryEntry>,
}

impl CategorySummary {
    pub fn low_stock(&self) -> impl Iterator<Item = &InventoryEntry> {
        self.entries.iter().filter(|entry| entry.low_stock)
    }

    pub fn low_stock_count(&self) -> usize {
        self.low_stock().count()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventorySummary {
    pub fermentables: CategorySummary,
    pub hops: CategorySummary,
    pub yeasts: CategorySummary,
    pub miscs: CategorySummary,
}

impl InventorySummary {
    pub fn categories(&self) -> [&CategorySummary; 4] {
        [&self.fermentables, &self.hops, &self.yeasts, &self.miscs]
    }

    pub fn item_count(&self) -> usize {
        self.categories().iter().map(|c| c.item_count).sum()
    }

    pub fn low_stock_count(&self) -> usize {
        self.categories().iter().map(|c| c.low_stock_count()).sum()
    }

    pub fn total_value(&self) -> f64 {
        self.categories().iter().map(|c| c.total_value).sum()
    }
}

/// Summarizes one category in a single pass, preserving input order.
pub fn summarize_category<T: InventoryItem>(items: &[T], threshold: f64) -> CategorySummary {
    let mut summary = CategorySummary {
        category: T::CATEGORY,
        threshold,
        item_count: items.len(),
        tracked_count: 0,
        total_amount: 0.0,
        total_value: 0.0,
        valued_count: 0,
        entries: Vec::with_capacity(items.len()),
    };

    for item in items {
        let amount = item.amount();
        let value = amount.zip(item.cost_per_amount()).map(|(a, c)| a * c);

        if let Some(amount) = amount {
            summary.tracked_count += 1;
            summary.total_amount += amount;
        }
        if let Some(value) = value {
            summary.valued_count += 1;
            summary.total_value += value;
        }

        summary.entries.push(InventoryEntry {
            id: item.id().to_string(),
            name: item.name().to_string(),
            amount,
            value,
            low_stock: amount.is_some_and(|a| a < threshold),
            lot_number: item.lot_number().map(str::to_string),
            best_before: item.best_before().cloned(),
            highlights: item.highlights(),
        });
    }

    summary
}

pub fn summarize_inventory<F, H, Y, M>(
    fermentables: &[F],
    hops: &[H],
    yeasts: &[Y],
    miscs: &[M],
    thresholds: &InventoryThresholds,
) -> InventorySummary
where
    F: InventoryItem,
    H: InventoryItem,
    Y: InventoryItem,
    M: InventoryItem,
{
    InventorySummary {
        fermentables: summarize_category(fermentables, thresholds.for_category(F::CATEGORY)),
        hops: summarize_category(hops, thresholds.for_category(H::CATEGORY)),
        yeasts: summarize_category(yeasts, thresholds.for_category(Y::CATEGORY)),
        miscs: summarize_category(miscs, thresholds.for_category(M::CATEGORY)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FermentableDetail, HopSummary, MiscSummary, YeastSummary};
    use serde_json::json;

    fn hop(id: &str, inventory: Option<f64>) -> HopSummary {
        serde_json::from_value(json!({
            "_id": id,
            "name": format!("Hop {id}"),
            "alpha": 5.0,
            "inventory": inventory,
        }))
        .unwrap()
    }

    fn fermentable(id: &str, inventory: f64, cost: Option<f64>) -> FermentableDetail {
        serde_json::from_value(json!({
            "_id": id,
            "name": format!("Malt {id}"),
            "type": "Grain",
            "inventory": inventory,
            "costPerAmount": cost,
            "lotNumber": "LOT-1",
        }))
        .unwrap()
    }

    #[test]
    fn empty_inventory_has_zero_counts() {
        let summary = summarize_inventory::<FermentableDetail, HopSummary, YeastSummary, MiscSummary>(
            &[],
            &[],
            &[],
            &[],
            &InventoryThresholds::default(),
        );

        for category in summary.categories() {
            assert_eq!(category.item_count, 0);
            assert_eq!(category.tracked_count, 0);
            assert_eq!(category.low_stock_count(), 0);
            assert_eq!(category.total_value, 0.0);
        }
        assert_eq!(summary.item_count(), 0);
    }

    #[test]
    fn flags_exactly_the_item_below_threshold() {
        let hops = vec![hop("a", Some(120.0)), hop("b", Some(20.0)), hop("c", Some(50.0))];

        let summary = summarize_category(&hops, InventoryThresholds::default().hops);

        let low: Vec<&str> = summary.low_stock().map(|e| e.id.as_str()).collect();
        assert_eq!(low, vec!["b"]);
        assert_eq!(summary.total_amount, 190.0);
    }

    #[test]
    fn untracked_items_are_never_low_stock() {
        let hops = vec![hop("a", None), hop("b", Some(0.0))];

        let summary = summarize_category(&hops, 50.0);

        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.tracked_count, 1);
        assert!(!summary.entries[0].low_stock);
        assert!(summary.entries[1].low_stock);
    }

    #[test]
    fn value_only_counts_items_with_cost() {
        let items = vec![
            fermentable("m1", 4.0, Some(2.5)),
            fermentable("m2", 3.0, None),
        ];

        let summary = summarize_category(&items, 1.0);

        assert_eq!(summary.category, InventoryCategory::Fermentables);
        assert_eq!(summary.total_value, 10.0);
        assert_eq!(summary.valued_count, 1);
        assert_eq!(summary.entries[0].value, Some(10.0));
        assert_eq!(summary.entries[1].value, None);
        assert_eq!(summary.entries[0].lot_number.as_deref(), Some("LOT-1"));
    }

    #[test]
    fn entries_keep_input_order() {
        let hops = vec![hop("z", Some(1.0)), hop("a", Some(2.0)), hop("m", Some(3.0))];

        let summary = summarize_category(&hops, 0.0);

        let ids: Vec<&str> = summary.entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
    }
}
