use super::common::{DateValue, OpenEnum, RecordMeta, wire_display};
use super::fermentable::RecipeFermentable;
use super::hop::RecipeHop;
use super::misc::RecipeMisc;
use super::recipe::{BoilStep, RecipeDetail};
use super::resource::resource;
use super::yeast::RecipeYeast;
use serde::{Deserialize, Serialize};

pub const BATCHES_PATH: &str = "batches";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BatchStatus {
    #[default]
    Planning,
    Brewing,
    Fermenting,
    Conditioning,
    Completed,
    Archived,
}

wire_display!(BatchStatus {
    Planning => "Planning",
    Brewing => "Brewing",
    Fermenting => "Fermenting",
    Conditioning => "Conditioning",
    Completed => "Completed",
    Archived => "Archived",
});

impl BatchStatus {
    pub const ALL: [BatchStatus; 6] = [
        BatchStatus::Planning,
        BatchStatus::Brewing,
        BatchStatus::Fermenting,
        BatchStatus::Conditioning,
        BatchStatus::Completed,
        BatchStatus::Archived,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarbonationType {
    Sugar,
    #[serde(rename = "Keg (Force)")]
    KegForce,
    #[serde(rename = "CO2 Tabs")]
    Co2Tabs,
}

wire_display!(CarbonationType {
    Sugar => "Sugar",
    KegForce => "Keg (Force)",
    Co2Tabs => "CO2 Tabs",
});

/// The recipe a batch list entry points at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRef {
    pub name: String,
    #[serde(rename = "_id")]
    pub id: Option<String>,
}

/// Batch as returned by the list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub batch_no: i64,
    /// Epoch milliseconds
    pub brew_date: Option<i64>,
    #[serde(default)]
    pub status: BatchStatus,
    pub brewer: Option<String>,
    pub recipe: Option<RecipeRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchMeasurement {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: f64,
    pub unit: Option<String>,
    pub time: Option<DateValue>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchNote {
    pub note: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Epoch milliseconds
    pub timestamp: i64,
}

/// A recipe ingredient as used in a batch, with inventory bookkeeping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchIngredient<T> {
    #[serde(flatten)]
    pub item: T,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub not_in_recipe: bool,
    #[serde(default)]
    pub removed_from_inventory: bool,
    pub removed_amount: Option<f64>,
    pub display_amount: Option<f64>,
    pub total_cost: Option<f64>,
    pub cost_per_amount: Option<f64>,
    pub inventory_unit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchDetail {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub batch_no: i64,
    pub brew_date: Option<i64>,
    #[serde(default)]
    pub status: BatchStatus,
    pub brewer: Option<String>,
    /// Either the full recipe or a reference carrying only `_id` and `name`
    pub recipe: Option<RecipeDetail>,
    pub recipe_id: Option<String>,

    #[serde(flatten)]
    pub meta: RecordMeta,

    #[serde(default)]
    pub measurements: Vec<BatchMeasurement>,
    #[serde(default)]
    pub notes: Vec<BatchNote>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub brewed: bool,
    #[serde(default)]
    pub hidden: bool,

    pub og: Option<f64>,
    pub fg: Option<f64>,
    pub abv: Option<f64>,
    pub bottling_date: Option<DateValue>,
    pub fermentation_start_date: Option<DateValue>,
    pub fermentation_end_date: Option<DateValue>,
    pub carbonation_type: Option<OpenEnum<CarbonationType>>,
    pub carbonation_level: Option<f64>,
    pub carbonation_temp: Option<f64>,

    pub measured_og: Option<f64>,
    pub measured_fg: Option<f64>,
    pub measured_abv: Option<f64>,
    pub measured_attenuation: Option<f64>,
    pub measured_efficiency: Option<f64>,
    pub measured_mash_efficiency: Option<f64>,
    pub measured_kettle_efficiency: Option<f64>,
    pub measured_mash_ph: Option<f64>,
    pub measured_first_wort_gravity: Option<f64>,
    pub measured_pre_boil_gravity: Option<f64>,
    pub measured_post_boil_gravity: Option<f64>,
    pub measured_boil_size: Option<f64>,
    pub measured_kettle_size: Option<f64>,
    pub measured_batch_size: Option<f64>,
    pub measured_fermenter_top_up: Option<f64>,
    pub measured_bottling_size: Option<f64>,

    pub estimated_og: Option<f64>,
    pub estimated_fg: Option<f64>,
    pub estimated_ibu: Option<f64>,
    pub estimated_color: Option<f64>,
    pub estimated_abv: Option<f64>,
    pub estimated_bu_gu_ratio: Option<f64>,

    #[serde(default)]
    pub batch_fermentables: Vec<BatchIngredient<RecipeFermentable>>,
    #[serde(default)]
    pub batch_hops: Vec<BatchIngredient<RecipeHop>>,
    #[serde(default)]
    pub batch_yeasts: Vec<BatchIngredient<RecipeYeast>>,
    #[serde(default)]
    pub batch_miscs: Vec<BatchIngredient<RecipeMisc>>,
    #[serde(default)]
    pub boil_steps: Vec<BoilStep>,
}

impl BatchDetail {
    /// The list-view projection of this batch
    pub fn summary(&self) -> BatchSummary {
        BatchSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            batch_no: self.batch_no,
            brew_date: self.brew_date,
            status: self.status,
            brewer: self.brewer.clone(),
            recipe: self.recipe.as_ref().map(|recipe| RecipeRef {
                name: recipe.name().to_string(),
                id: Some(recipe.id().to_string()),
            }),
        }
    }

    /// The embedded recipe when it carries more than a reference
    pub fn full_recipe(&self) -> Option<&RecipeDetail> {
        self.recipe.as_ref().filter(|r| !r.is_reference_only())
    }

    /// Identifier to fetch the recipe by when only a reference is embedded
    pub fn recipe_reference(&self) -> Option<&str> {
        if self.full_recipe().is_some() {
            return None;
        }
        self.recipe
            .as_ref()
            .map(RecipeDetail::id)
            .or(self.recipe_id.as_deref())
    }
}

/// Fields accepted by a batch PATCH. Unset fields are left untouched upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BatchStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measured_mash_ph: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measured_boil_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measured_first_wort_gravity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measured_pre_boil_gravity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measured_post_boil_gravity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measured_kettle_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measured_og: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measured_fermenter_top_up: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measured_batch_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measured_fg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measured_bottling_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbonation_temp: Option<f64>,
}

impl BatchUpdate {
    pub fn is_empty(&self) -> bool {
        *self == BatchUpdate::default()
    }
}

resource!(BatchSummary, BATCHES_PATH, "batch");
resource!(BatchDetail, BATCHES_PATH, "batch");
