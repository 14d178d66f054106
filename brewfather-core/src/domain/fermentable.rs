use super::common::{DateValue, OpenEnum, RecordMeta, wire_display};
use super::inventory::{InventoryCategory, InventoryItem};
use super::resource::resource;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FermentableType {
    Grain,
    Sugar,
    Extract,
    #[serde(rename = "Dry Extract")]
    DryExtract,
    #[serde(rename = "Liquid Extract")]
    LiquidExtract,
    Adjunct,
    Fruit,
    Juice,
    Honey,
}

wire_display!(FermentableType {
    Grain => "Grain",
    Sugar => "Sugar",
    Extract => "Extract",
    DryExtract => "Dry Extract",
    LiquidExtract => "Liquid Extract",
    Adjunct => "Adjunct",
    Fruit => "Fruit",
    Juice => "Juice",
    Honey => "Honey",
});

/// Fermentable as returned by the inventory list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FermentableSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: OpenEnum<FermentableType>,
    pub supplier: Option<String>,
    pub attenuation: Option<f64>,
    pub inventory: Option<f64>,
}

/// Full fermentable document; embeds every list-view field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FermentableDetail {
    #[serde(flatten)]
    pub summary: FermentableSummary,
    #[serde(flatten)]
    pub meta: RecordMeta,

    pub color: Option<f64>,
    pub lovibond: Option<f64>,
    pub potential: Option<f64>,
    pub potential_percentage: Option<f64>,
    pub grain_category: Option<String>,
    pub origin: Option<String>,
    pub notes: Option<String>,
    pub ibu_per_amount: Option<f64>,
    pub max_in_batch: Option<f64>,
    pub not_fermentable: Option<bool>,

    pub acid: Option<f64>,
    pub cgdb: Option<f64>,
    pub coarse_fine_diff: Option<f64>,
    pub fan: Option<f64>,
    pub fgdb: Option<f64>,
    pub friability: Option<f64>,
    pub moisture: Option<f64>,
    pub protein: Option<f64>,
    pub diastatic_power: Option<f64>,

    pub substitutes: Option<String>,
    pub used_in: Option<String>,
    pub user_notes: Option<String>,
    pub lot_number: Option<String>,
    pub best_before_date: Option<DateValue>,
    pub manufacturing_date: Option<DateValue>,
    pub cost_per_amount: Option<f64>,
    #[serde(default)]
    pub hidden: bool,
}

/// Fermentable addition inside a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeFermentable {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: OpenEnum<FermentableType>,
    pub amount: f64,
    pub percentage: Option<f64>,
    pub color: Option<f64>,
    pub potential: Option<f64>,
    pub supplier: Option<String>,
    pub origin: Option<String>,
    pub grain_category: Option<String>,
    pub attenuation: Option<f64>,
    #[serde(default)]
    pub add_after_boil: bool,
    pub inventory: Option<f64>,
}

resource!(FermentableSummary, category = InventoryCategory::Fermentables);
resource!(FermentableDetail, category = InventoryCategory::Fermentables);

impl InventoryItem for FermentableSummary {
    const CATEGORY: InventoryCategory = InventoryCategory::Fermentables;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn amount(&self) -> Option<f64> {
        self.inventory
    }

    fn highlights(&self) -> Vec<(&'static str, String)> {
        vec![("Type", self.kind.to_string())]
    }
}

impl InventoryItem for FermentableDetail {
    const CATEGORY: InventoryCategory = InventoryCategory::Fermentables;

    fn id(&self) -> &str {
        &self.summary.id
    }

    fn name(&self) -> &str {
        &self.summary.name
    }

    fn amount(&self) -> Option<f64> {
        self.summary.inventory
    }

    fn cost_per_amount(&self) -> Option<f64> {
        self.cost_per_amount
    }

    fn lot_number(&self) -> Option<&str> {
        self.lot_number.as_deref()
    }

    fn best_before(&self) -> Option<&DateValue> {
        self.best_before_date.as_ref()
    }

    fn highlights(&self) -> Vec<(&'static str, String)> {
        let mut highlights = self.summary.highlights();
        if let Some(color) = self.color {
            highlights.push(("Color", color.to_string()));
        }
        if let Some(supplier) = &self.summary.supplier {
            highlights.push(("Supplier", supplier.clone()));
        }
        highlights
    }
}
