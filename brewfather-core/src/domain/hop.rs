use super::common::{DateValue, RecordMeta, wire_display};
use super::inventory::{InventoryCategory, InventoryItem};
use super::resource::resource;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HopUse {
    Boil,
    #[serde(rename = "Dry Hop")]
    DryHop,
    Aroma,
    #[serde(rename = "First Wort")]
    FirstWort,
    Hopstand,
    Mash,
}

wire_display!(HopUse {
    Boil => "Boil",
    DryHop => "Dry Hop",
    Aroma => "Aroma",
    FirstWort => "First Wort",
    Hopstand => "Hopstand",
    Mash => "Mash",
});

/// Hop as returned by the inventory list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HopSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Form, e.g. `Pellet` or `Leaf`
    #[serde(rename = "type")]
    pub form: Option<String>,
    /// Alpha acid percentage
    pub alpha: f64,
    #[serde(rename = "use")]
    pub usage_stage: Option<HopUse>,
    pub inventory: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HopDetail {
    #[serde(flatten)]
    pub summary: HopSummary,
    #[serde(flatten)]
    pub meta: RecordMeta,

    pub beta: Option<f64>,
    pub oil: Option<f64>,
    pub myrcene: Option<f64>,
    pub caryophyllene: Option<f64>,
    pub humulene: Option<f64>,
    pub farnesene: Option<f64>,
    pub cohumulone: Option<f64>,
    /// Hop storage index
    pub hsi: Option<f64>,

    pub origin: Option<String>,
    pub year: Option<i32>,
    /// `Aroma`, `Bittering` or `Both`
    pub usage: Option<String>,

    pub notes: Option<String>,
    pub substitutes: Option<String>,
    pub used_in: Option<String>,
    pub user_notes: Option<String>,

    pub lot_number: Option<String>,
    pub best_before_date: Option<DateValue>,
    pub manufacturing_date: Option<DateValue>,
    pub cost_per_amount: Option<f64>,
    #[serde(default)]
    pub hidden: bool,

    pub amount: Option<f64>,
    pub time: Option<f64>,
    pub temp: Option<f64>,
    pub ibu: Option<f64>,
}

/// Hop addition inside a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeHop {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub form: Option<String>,
    pub alpha: f64,
    pub amount: f64,
    #[serde(rename = "use")]
    pub usage_stage: HopUse,
    pub time: Option<f64>,
    pub time_unit: Option<String>,
    pub day: Option<i64>,
    pub temp: Option<f64>,
    pub ibu: Option<f64>,
    pub beta: Option<f64>,
    pub origin: Option<String>,
    pub usage: Option<String>,
    pub year: Option<i32>,
    pub actual_time: Option<i64>,
    pub inventory: Option<f64>,
}

resource!(HopSummary, category = InventoryCategory::Hops);
resource!(HopDetail, category = InventoryCategory::Hops);

impl InventoryItem for HopSummary {
    const CATEGORY: InventoryCategory = InventoryCategory::Hops;

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
        vec![("Alpha Acid", format!("{}%", self.alpha))]
    }
}

impl InventoryItem for HopDetail {
    const CATEGORY: InventoryCategory = InventoryCategory::Hops;

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
        if let Some(year) = self.year {
            highlights.push(("Year", year.to_string()));
        }
        if let Some(origin) = &self.origin {
            highlights.push(("Origin", origin.clone()));
        }
        highlights
    }
}
