use super::common::{DateValue, RecordMeta, wire_display};
use super::inventory::{InventoryCategory, InventoryItem};
use super::resource::resource;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YeastForm {
    Dry,
    Liquid,
    Slant,
    Culture,
}

wire_display!(YeastForm {
    Dry => "Dry",
    Liquid => "Liquid",
    Slant => "Slant",
    Culture => "Culture",
});

/// Yeast as returned by the inventory list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YeastSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// `Ale`, `Lager`, `Wheat`, ...
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub attenuation: Option<f64>,
    pub form: Option<YeastForm>,
    pub inventory: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YeastDetail {
    #[serde(flatten)]
    pub summary: YeastSummary,
    #[serde(flatten)]
    pub meta: RecordMeta,

    pub laboratory: Option<String>,
    pub product_id: Option<String>,
    pub lot_number: Option<String>,

    pub min_attenuation: Option<f64>,
    pub max_attenuation: Option<f64>,
    pub min_temp: Option<f64>,
    pub max_temp: Option<f64>,
    pub max_abv: Option<f64>,
    pub age_rate: Option<f64>,

    pub flocculation: Option<String>,
    pub cells_per_pkg: Option<f64>,
    #[serde(default)]
    pub ferments_all: bool,

    pub description: Option<String>,
    pub unit: Option<String>,
    pub amount: Option<f64>,
    pub cost_per_amount: Option<f64>,
    pub best_before_date: Option<DateValue>,
    pub manufacturing_date: Option<DateValue>,
    pub user_notes: Option<String>,
    #[serde(default)]
    pub hidden: bool,
}

/// Yeast pitch inside a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeYeast {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub amount: f64,
    pub unit: Option<String>,
    pub laboratory: Option<String>,
    pub product_id: Option<String>,
    pub form: Option<YeastForm>,
    pub attenuation: Option<f64>,
    pub min_temp: Option<f64>,
    pub max_temp: Option<f64>,
    pub flocculation: Option<String>,
    pub starter: Option<bool>,
    pub starter_size: Option<f64>,
    pub inventory: Option<f64>,
}

resource!(YeastSummary, category = InventoryCategory::Yeasts);
resource!(YeastDetail, category = InventoryCategory::Yeasts);

impl InventoryItem for YeastSummary {
    const CATEGORY: InventoryCategory = InventoryCategory::Yeasts;

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
        let mut highlights = Vec::new();
        if let Some(form) = self.form {
            highlights.push(("Form", form.to_string()));
        }
        if let Some(attenuation) = self.attenuation {
            highlights.push(("Attenuation", format!("{attenuation}%")));
        }
        highlights
    }
}

impl InventoryItem for YeastDetail {
    const CATEGORY: InventoryCategory = InventoryCategory::Yeasts;

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
        if let Some(lab) = &self.laboratory {
            highlights.push(("Laboratory", lab.clone()));
        }
        highlights
    }
}
