use super::common::{RecordMeta, wire_display};
use super::fermentable::RecipeFermentable;
use super::hop::RecipeHop;
use super::misc::RecipeMisc;
use super::resource::resource;
use super::yeast::RecipeYeast;
use serde::{Deserialize, Serialize};

pub const RECIPES_PATH: &str = "recipes";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecipeType {
    #[serde(rename = "All Grain")]
    AllGrain,
    Extract,
    #[serde(rename = "Partial Mash")]
    PartialMash,
}

wire_display!(RecipeType {
    AllGrain => "All Grain",
    Extract => "Extract",
    PartialMash => "Partial Mash",
});

/// Beer style. List documents only carry the name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeStyle {
    pub name: String,
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub style_guide: Option<String>,
    pub ibu_min: Option<f64>,
    pub ibu_max: Option<f64>,
    pub abv_min: Option<f64>,
    pub abv_max: Option<f64>,
    pub og_min: Option<f64>,
    pub og_max: Option<f64>,
    pub fg_min: Option<f64>,
    pub fg_max: Option<f64>,
    pub color_min: Option<f64>,
    pub color_max: Option<f64>,
    pub notes: Option<String>,
    pub profile: Option<String>,
    pub ingredients: Option<String>,
    pub examples: Option<String>,
}

/// Equipment profile. List documents only carry the name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentProfile {
    pub name: String,
    pub batch_size: Option<f64>,
    pub boil_size: Option<f64>,
    pub boil_time: Option<f64>,
    pub efficiency: Option<f64>,
    pub mash_efficiency: Option<f64>,
    pub bottling_volume: Option<f64>,
    pub fermenter_volume: Option<f64>,
    pub trub_chiller_loss: Option<f64>,
    pub boil_off_per_hr: Option<f64>,
    pub mash_tun_dead_space: Option<f64>,
    pub hop_utilization: Option<f64>,
    pub efficiency_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MashStep {
    pub name: Option<String>,
    /// `Infusion`, `Temperature`, `Decoction`, ...
    #[serde(rename = "type")]
    pub kind: String,
    pub step_temp: f64,
    pub step_time: f64,
    pub ramp_time: Option<f64>,
    pub infuse_temp: Option<f64>,
    pub infuse_amount: Option<f64>,
    pub display_step_temp: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MashProfile {
    pub name: Option<String>,
    #[serde(default)]
    pub steps: Vec<MashStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FermentationStep {
    /// `Primary`, `Secondary`, `Conditioning`, ...
    #[serde(rename = "type")]
    pub kind: String,
    pub step_temp: f64,
    pub step_time: f64,
    /// Epoch milliseconds at which the step started
    pub actual_time: Option<i64>,
    pub display_step_temp: Option<f64>,
    pub pressure: Option<f64>,
    pub ramp: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FermentationProfile {
    pub name: Option<String>,
    #[serde(default)]
    pub steps: Vec<FermentationStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoilStep {
    pub name: String,
    pub time: f64,
}

/// Ion concentrations in mg/L
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterProfile {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub calcium: Option<f64>,
    pub magnesium: Option<f64>,
    pub sodium: Option<f64>,
    pub chloride: Option<f64>,
    pub sulfate: Option<f64>,
    pub bicarbonate: Option<f64>,
    pub ph: Option<f64>,
    pub hardness: Option<f64>,
    pub alkalinity: Option<f64>,
    pub residual_alkalinity: Option<f64>,
}

/// Salt additions in grams
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterAdjustment {
    pub volume: Option<f64>,
    pub calcium_chloride: Option<f64>,
    pub calcium_sulfate: Option<f64>,
    pub magnesium_sulfate: Option<f64>,
    pub sodium_chloride: Option<f64>,
    pub sodium_bicarbonate: Option<f64>,
}

impl WaterAdjustment {
    /// Non-zero salt additions with their chemical labels
    pub fn salts(&self) -> Vec<(&'static str, f64)> {
        [
            ("CaCl2", self.calcium_chloride),
            ("CaSO4", self.calcium_sulfate),
            ("MgSO4", self.magnesium_sulfate),
            ("NaCl", self.sodium_chloride),
            ("NaHCO3", self.sodium_bicarbonate),
        ]
        .into_iter()
        .filter_map(|(label, grams)| grams.filter(|g| *g != 0.0).map(|g| (label, g)))
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterSettings {
    pub source: Option<WaterProfile>,
    pub mash: Option<WaterProfile>,
    pub sparge: Option<WaterProfile>,
    pub total: Option<WaterProfile>,
    pub mash_adjustments: Option<WaterAdjustment>,
    pub sparge_adjustments: Option<WaterAdjustment>,
    #[serde(default)]
    pub enable_sparge_adjustments: bool,
    pub mash_ph: Option<f64>,
    pub acid_ph_adjustment: Option<f64>,
}

/// Recipe as returned by the list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub author: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<RecipeType>,
    pub style: Option<RecipeStyle>,
    pub equipment: Option<EquipmentProfile>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    #[serde(flatten)]
    pub summary: RecipeSummary,
    #[serde(flatten)]
    pub meta: RecordMeta,

    pub batch_size: Option<f64>,
    pub boil_size: Option<f64>,
    pub boil_time: Option<f64>,
    pub efficiency: Option<f64>,
    pub mash_efficiency: Option<f64>,

    pub og: Option<f64>,
    pub og_plato: Option<f64>,
    pub fg: Option<f64>,
    pub ibu: Option<f64>,
    pub ibu_formula: Option<String>,
    pub fg_formula: Option<String>,
    pub color: Option<f64>,
    pub abv: Option<f64>,
    pub attenuation: Option<f64>,
    pub bu_gu_ratio: Option<f64>,
    pub rb_ratio: Option<f64>,
    pub carbonation: Option<f64>,
    pub pre_boil_gravity: Option<f64>,
    pub post_boil_gravity: Option<f64>,
    pub first_wort_gravity: Option<f64>,
    pub total_gravity: Option<f64>,
    pub extra_gravity: Option<f64>,
    pub primary_temp: Option<f64>,
    pub diastatic_power: Option<f64>,
    pub avg_weighted_hopstand_temp: Option<f64>,
    pub sum_dry_hop_per_liter: Option<f64>,
    pub fermentables_total_amount: Option<f64>,
    pub hops_total_amount: Option<f64>,
    pub style_conformity: Option<bool>,

    #[serde(default)]
    pub fermentables: Vec<RecipeFermentable>,
    #[serde(default)]
    pub hops: Vec<RecipeHop>,
    #[serde(default)]
    pub yeasts: Vec<RecipeYeast>,
    #[serde(default)]
    pub miscs: Vec<RecipeMisc>,
    pub mash: Option<MashProfile>,
    pub fermentation: Option<FermentationProfile>,
    #[serde(default)]
    pub boil_steps: Vec<BoilStep>,
    pub water: Option<WaterSettings>,

    pub notes: Option<String>,
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub search_tags: Vec<String>,
    pub public: Option<bool>,
    #[serde(default)]
    pub hidden: bool,
}

impl RecipeDetail {
    pub fn id(&self) -> &str {
        &self.summary.id
    }

    pub fn name(&self) -> &str {
        &self.summary.name
    }

    /// True when the document only names the recipe: no ingredient usage and no
    /// computed specifications.
    pub fn is_reference_only(&self) -> bool {
        self.fermentables.is_empty()
            && self.hops.is_empty()
            && self.yeasts.is_empty()
            && self.miscs.is_empty()
            && self.batch_size.is_none()
            && self.og.is_none()
    }
}

resource!(RecipeSummary, RECIPES_PATH, "recipe");
resource!(RecipeDetail, RECIPES_PATH, "recipe");
