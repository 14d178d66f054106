//! Names, descriptions and input schemas of the exposed tools

use crate::domain::BatchStatus;
use serde::Serialize;
use serde_json::{Map, Value, json};

/// Default number of readings shown by `get_batch_readings_summary`
pub const DEFAULT_READINGS_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    ListInventoryCategories,
    ListFermentables,
    GetFermentableDetail,
    ListHops,
    GetHopDetail,
    ListYeasts,
    GetYeastDetail,
    ListMiscItems,
    GetMiscDetail,
    InventorySummary,
    ListBatches,
    GetBatchDetail,
    UpdateBatch,
    ListRecipes,
    GetRecipeDetail,
    UpdateFermentableInventory,
    UpdateHopInventory,
    UpdateYeastInventory,
    UpdateMiscInventory,
    GetBatchBrewtracker,
    GetBatchLastReading,
    GetBatchReadingsSummary,
}

/// Tool entry as advertised by `tools/list`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

impl Tool {
    pub const ALL: [Tool; 22] = [
        Tool::ListInventoryCategories,
        Tool::ListFermentables,
        Tool::GetFermentableDetail,
        Tool::ListHops,
        Tool::GetHopDetail,
        Tool::ListYeasts,
        Tool::GetYeastDetail,
        Tool::ListMiscItems,
        Tool::GetMiscDetail,
        Tool::InventorySummary,
        Tool::ListBatches,
        Tool::GetBatchDetail,
        Tool::UpdateBatch,
        Tool::ListRecipes,
        Tool::GetRecipeDetail,
        Tool::UpdateFermentableInventory,
        Tool::UpdateHopInventory,
        Tool::UpdateYeastInventory,
        Tool::UpdateMiscInventory,
        Tool::GetBatchBrewtracker,
        Tool::GetBatchLastReading,
        Tool::GetBatchReadingsSummary,
    ];

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Tool::ListInventoryCategories => "list_inventory_categories",
            Tool::ListFermentables => "list_fermentables",
            Tool::GetFermentableDetail => "get_fermentable_detail",
            Tool::ListHops => "list_hops",
            Tool::GetHopDetail => "get_hop_detail",
            Tool::ListYeasts => "list_yeasts",
            Tool::GetYeastDetail => "get_yeast_detail",
            Tool::ListMiscItems => "list_misc_items",
            Tool::GetMiscDetail => "get_misc_detail",
            Tool::InventorySummary => "inventory_summary",
            Tool::ListBatches => "list_batches",
            Tool::GetBatchDetail => "get_batch_detail",
            Tool::UpdateBatch => "update_batch",
            Tool::ListRecipes => "list_recipes",
            Tool::GetRecipeDetail => "get_recipe_detail",
            Tool::UpdateFermentableInventory => "update_fermentable_inventory",
            Tool::UpdateHopInventory => "update_hop_inventory",
            Tool::UpdateYeastInventory => "update_yeast_inventory",
            Tool::UpdateMiscInventory => "update_misc_inventory",
            Tool::GetBatchBrewtracker => "get_batch_brewtracker",
            Tool::GetBatchLastReading => "get_batch_last_reading",
            Tool::GetBatchReadingsSummary => "get_batch_readings_summary",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Tool::ListInventoryCategories => "Lists the available inventory categories.",
            Tool::ListFermentables => {
                "List all the fermentables (malts, adjuncts, grains, etc) inventory."
            }
            Tool::GetFermentableDetail => "Detailed information of the fermentable item.",
            Tool::ListHops => {
                "Lists all hops in inventory with their basic properties like alpha acids, quantity, and usage type."
            }
            Tool::GetHopDetail => {
                "Detailed information about a specific hop including origin, characteristics, oil composition, and storage details."
            }
            Tool::ListYeasts => {
                "Lists all yeasts in inventory with their basic properties like attenuation, quantity, and type."
            }
            Tool::GetYeastDetail => {
                "Detailed information about a specific yeast including manufacturer, specifications, temperature range, and storage details."
            }
            Tool::ListMiscItems => "Lists all miscellaneous inventory items.",
            Tool::GetMiscDetail => {
                "Get detailed information for a specific miscellaneous inventory item."
            }
            Tool::InventorySummary => {
                "Creates a comprehensive overview of all inventory items including fermentables, hops, yeasts and miscellaneous items."
            }
            Tool::ListBatches => "Lists all brew batches, optionally filtered by status.",
            Tool::GetBatchDetail => "Get detailed information for a specific batch.",
            Tool::UpdateBatch => "Updates a batch's status or measured values.",
            Tool::ListRecipes => "Lists all recipes.",
            Tool::GetRecipeDetail => {
                "Get detailed information for a specific recipe including ingredients, process details and specifications."
            }
            Tool::UpdateFermentableInventory => {
                "Sets the inventory amount for a specific fermentable."
            }
            Tool::UpdateHopInventory => "Sets the inventory amount for a specific hop.",
            Tool::UpdateYeastInventory => "Sets the inventory amount for a specific yeast.",
            Tool::UpdateMiscInventory => {
                "Sets the inventory amount for a specific miscellaneous item."
            }
            Tool::GetBatchBrewtracker => {
                "Get detailed brewing process guidance and timeline for a batch"
            }
            Tool::GetBatchLastReading => {
                "Get the most recent sensor reading from brewing devices for a batch"
            }
            Tool::GetBatchReadingsSummary => {
                "Get a summary of recent sensor readings for a batch (limited to avoid large responses)"
            }
        }
    }

    /// JSON Schema of the tool arguments
    pub fn input_schema(self) -> Value {
        match self {
            Tool::ListInventoryCategories
            | Tool::ListFermentables
            | Tool::ListHops
            | Tool::ListYeasts
            | Tool::ListMiscItems
            | Tool::InventorySummary
            | Tool::ListRecipes => object_schema(Vec::new(), &[]),
            Tool::GetFermentableDetail | Tool::GetHopDetail | Tool::GetYeastDetail => {
                object_schema(
                    vec![("identifier", string_property("Inventory item identifier"))],
                    &["identifier"],
                )
            }
            Tool::GetMiscDetail => object_schema(
                vec![("item_id", string_property("Miscellaneous item identifier"))],
                &["item_id"],
            ),
            Tool::ListBatches => object_schema(vec![("status", status_property())], &[]),
            Tool::GetBatchDetail | Tool::GetBatchBrewtracker | Tool::GetBatchLastReading => {
                object_schema(vec![("batch_id", batch_id_property())], &["batch_id"])
            }
            Tool::UpdateBatch => {
                let mut properties = vec![
                    ("batch_id", batch_id_property()),
                    ("status", status_property()),
                ];
                properties.extend(
                    BATCH_MEASUREMENTS
                        .iter()
                        .map(|(name, description)| (*name, number_property(description))),
                );
                object_schema(properties, &["batch_id"])
            }
            Tool::GetRecipeDetail => object_schema(
                vec![("recipe_id", string_property("Recipe identifier"))],
                &["recipe_id"],
            ),
            Tool::UpdateFermentableInventory
            | Tool::UpdateHopInventory
            | Tool::UpdateYeastInventory
            | Tool::UpdateMiscInventory => object_schema(
                vec![
                    ("item_id", string_property("Inventory item identifier")),
                    (
                        "inventory_amount",
                        number_property("New inventory amount in the category unit"),
                    ),
                ],
                &["item_id", "inventory_amount"],
            ),
            Tool::GetBatchReadingsSummary => object_schema(
                vec![
                    ("batch_id", batch_id_property()),
                    (
                        "limit",
                        json!({
                            "type": "integer",
                            "minimum": 0,
                            "default": DEFAULT_READINGS_LIMIT,
                            "description": "Number of most recent readings to show",
                        }),
                    ),
                ],
                &["batch_id"],
            ),
        }
    }

    pub fn descriptor(self) -> ToolDescriptor {
        ToolDescriptor {
            name: self.name(),
            description: self.description(),
            input_schema: self.input_schema(),
        }
    }
}

pub fn tool_descriptors() -> Vec<ToolDescriptor> {
    Tool::ALL.into_iter().map(Tool::descriptor).collect()
}

/// Measured values accepted by `update_batch`, by argument name
const BATCH_MEASUREMENTS: [(&str, &str); 12] = [
    ("measuredMashPh", "Measured mash pH"),
    ("measuredBoilSize", "Measured pre-boil volume in liters"),
    ("measuredFirstWortGravity", "Measured first wort gravity"),
    ("measuredPreBoilGravity", "Measured pre-boil gravity"),
    ("measuredPostBoilGravity", "Measured post-boil gravity"),
    ("measuredKettleSize", "Measured post-boil kettle volume in liters"),
    ("measuredOg", "Measured original gravity"),
    ("measuredFermenterTopUp", "Water added to the fermenter in liters"),
    ("measuredBatchSize", "Measured volume in the fermenter in liters"),
    ("measuredFg", "Measured final gravity"),
    ("measuredBottlingSize", "Measured bottling or kegging volume in liters"),
    ("carbonationTemp", "Beer temperature at carbonation in °C"),
];

fn object_schema(properties: Vec<(&str, Value)>, required: &[&str]) -> Value {
    let properties: Map<String, Value> = properties
        .into_iter()
        .map(|(name, schema)| (name.to_string(), schema))
        .collect();
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

fn string_property(description: &str) -> Value {
    json!({ "type": "string", "description": description })
}

fn number_property(description: &str) -> Value {
    json!({ "type": "number", "description": description })
}

fn batch_id_property() -> Value {
    string_property("Batch identifier")
}

fn status_property() -> Value {
    let statuses: Vec<&str> = BatchStatus::ALL.iter().map(|s| s.as_str()).collect();
    json!({
        "type": "string",
        "enum": statuses,
        "description": "Batch status",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique_and_parse_back() {
        let names: HashSet<&str> = Tool::ALL.iter().map(|t| t.name()).collect();
        assert_eq!(names.len(), Tool::ALL.len());
        for tool in Tool::ALL {
            assert_eq!(Tool::parse(tool.name()), Some(tool));
        }
        assert_eq!(Tool::parse("brew_beer"), None);
    }

    #[test]
    fn schemas_require_identifiers() {
        let schema = Tool::UpdateHopInventory.input_schema();
        assert_eq!(schema["required"], json!(["item_id", "inventory_amount"]));
        assert_eq!(schema["properties"]["inventory_amount"]["type"], "number");

        let schema = Tool::UpdateBatch.input_schema();
        assert_eq!(schema["required"], json!(["batch_id"]));
        assert_eq!(schema["properties"].as_object().map(Map::len), Some(14));
        assert_eq!(schema["properties"]["status"]["enum"][0], "Planning");
    }

    #[test]
    fn descriptor_serializes_input_schema_in_camel_case() {
        let value = serde_json::to_value(Tool::ListHops.descriptor()).unwrap();
        assert_eq!(value["name"], "list_hops");
        assert_eq!(value["inputSchema"]["type"], "object");
    }
}
