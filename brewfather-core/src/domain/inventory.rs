use super::common::DateValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four ingredient categories tracked in inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InventoryCategory {
    Fermentables,
    Hops,
    Yeasts,
    Miscs,
}

impl InventoryCategory {
    pub const ALL: [InventoryCategory; 4] = [
        InventoryCategory::Fermentables,
        InventoryCategory::Hops,
        InventoryCategory::Yeasts,
        InventoryCategory::Miscs,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            InventoryCategory::Fermentables => "fermentables",
            InventoryCategory::Hops => "hops",
            InventoryCategory::Yeasts => "yeasts",
            InventoryCategory::Miscs => "miscs",
        }
    }

    /// Resource path below the API base endpoint
    pub const fn path(self) -> &'static str {
        match self {
            InventoryCategory::Fermentables => "inventory/fermentables",
            InventoryCategory::Hops => "inventory/hops",
            InventoryCategory::Yeasts => "inventory/yeasts",
            InventoryCategory::Miscs => "inventory/miscs",
        }
    }

    /// Unit the inventory amount is expressed in
    pub const fn unit(self) -> &'static str {
        match self {
            InventoryCategory::Fermentables => "kg",
            InventoryCategory::Hops => "grams",
            InventoryCategory::Yeasts => "packets",
            InventoryCategory::Miscs => "units",
        }
    }

    /// Singular noun used in messages
    pub const fn noun(self) -> &'static str {
        match self {
            InventoryCategory::Fermentables => "fermentable",
            InventoryCategory::Hops => "hop",
            InventoryCategory::Yeasts => "yeast",
            InventoryCategory::Miscs => "misc item",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            InventoryCategory::Fermentables => "Fermentables",
            InventoryCategory::Hops => "Hops",
            InventoryCategory::Yeasts => "Yeasts",
            InventoryCategory::Miscs => "Miscellaneous Items",
        }
    }
}

impl fmt::Display for InventoryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common view over list and detail documents of an ingredient category.
///
/// `amount` is `None` when the item is not tracked in inventory, which is distinct
/// from a tracked amount of zero.
pub trait InventoryItem {
    const CATEGORY: InventoryCategory;

    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn amount(&self) -> Option<f64>;

    fn cost_per_amount(&self) -> Option<f64> {
        None
    }

    fn lot_number(&self) -> Option<&str> {
        None
    }

    fn best_before(&self) -> Option<&DateValue> {
        None
    }

    /// Category specific attributes worth surfacing in a summary
    fn highlights(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}
