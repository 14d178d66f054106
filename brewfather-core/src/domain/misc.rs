use super::common::{DateValue, OpenEnum, RecordMeta, wire_display};
use super::inventory::{InventoryCategory, InventoryItem};
use super::resource::resource;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MiscUse {
    Mash,
    Sparge,
    Boil,
    Flameout,
    Primary,
    Secondary,
    Bottling,
}

wire_display!(MiscUse {
    Mash => "Mash",
    Sparge => "Sparge",
    Boil => "Boil",
    Flameout => "Flameout",
    Primary => "Primary",
    Secondary => "Secondary",
    Bottling => "Bottling",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MiscType {
    #[serde(rename = "Water Agent")]
    WaterAgent,
    Fining,
    Spice,
    Herb,
    Flavor,
    Other,
}

wire_display!(MiscType {
    WaterAgent => "Water Agent",
    Fining => "Fining",
    Spice => "Spice",
    Herb => "Herb",
    Flavor => "Flavor",
    Other => "Other",
});

/// Miscellaneous item as returned by the inventory list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiscSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<OpenEnum<MiscType>>,
    #[serde(rename = "use")]
    pub usage_stage: Option<MiscUse>,
    pub notes: Option<String>,
    pub inventory: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiscDetail {
    #[serde(flatten)]
    pub summary: MiscSummary,
    #[serde(flatten)]
    pub meta: RecordMeta,

    pub time: Option<f64>,
    #[serde(default)]
    pub time_is_days: bool,
    pub amount_per_l: Option<f64>,
    pub concentration: Option<f64>,
    #[serde(default)]
    pub water_adjustment: bool,
    pub unit: Option<String>,

    pub use_for: Option<String>,
    pub substitutes: Option<String>,
    pub user_notes: Option<String>,
    pub lot_number: Option<String>,
    pub best_before_date: Option<DateValue>,
    pub manufacturing_date: Option<DateValue>,
    pub cost_per_amount: Option<f64>,
    #[serde(default)]
    pub hidden: bool,
}

/// Miscellaneous addition inside a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeMisc {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<OpenEnum<MiscType>>,
    pub amount: f64,
    #[serde(rename = "use")]
    pub usage_stage: MiscUse,
    pub unit: Option<String>,
    pub time: Option<f64>,
    #[serde(default)]
    pub time_is_days: bool,
    pub amount_per_l: Option<f64>,
    #[serde(default)]
    pub water_adjustment: bool,
    pub inventory: Option<f64>,
}

resource!(MiscSummary, category = InventoryCategory::Miscs);
resource!(MiscDetail, category = InventoryCategory::Miscs);

impl InventoryItem for MiscSummary {
    const CATEGORY: InventoryCategory = InventoryCategory::Miscs;

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
        let mut highlights = vec![(
            "Type",
            self.kind
                .as_ref()
                .map_or_else(|| "N/A".to_string(), ToString::to_string),
        )];
        if let Some(notes) = self.notes.as_deref().filter(|n| !n.is_empty()) {
            highlights.push(("Notes", notes.to_string()));
        }
        highlights
    }
}

impl InventoryItem for MiscDetail {
    const CATEGORY: InventoryCategory = InventoryCategory::Miscs;

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
        self.summary.highlights()
    }
}
