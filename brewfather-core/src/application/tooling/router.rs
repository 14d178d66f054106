use super::args::{
    BatchArgs, IdentifierArgs, ItemArgs, ListBatchesArgs, ReadingsArgs, RecipeArgs,
    UpdateBatchArgs, UpdateInventoryArgs, decode,
};
use super::catalog::Tool;
use super::error::ToolError;
use crate::application::format::{batch, ingredient, inventory, recipe, tracker};
use crate::application::inventory::{InventoryThresholds, summarize_inventory};
use crate::domain::{
    BatchSummary, FermentableDetail, FermentableSummary, HopDetail, HopSummary,
    InventoryCategory, MiscDetail, MiscSummary, RecipeDetail, RecipeSummary, YeastDetail,
    YeastSummary,
};
use crate::infrastructure::api::{ApiTransport, BrewfatherClient, HttpTransport, ListQuery};
use serde_json::Value;
use tracing::{error, info};

/// Dispatches tool calls to the API client and renders the results as text.
pub struct ToolRouter<T = HttpTransport> {
    client: BrewfatherClient<T>,
    thresholds: InventoryThresholds,
}

impl<T: ApiTransport> ToolRouter<T> {
    pub fn new(client: BrewfatherClient<T>) -> Self {
        Self {
            client,
            thresholds: InventoryThresholds::default(),
        }
    }

    pub fn with_thresholds(mut self, thresholds: InventoryThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn client(&self) -> &BrewfatherClient<T> {
        &self.client
    }

    /// Runs one tool. Failures are logged here and nowhere else.
    pub async fn call(&self, name: &str, arguments: Option<Value>) -> Result<String, ToolError> {
        let Some(tool) = Tool::parse(name) else {
            error!(tool = name, "Unknown tool requested");
            return Err(ToolError::UnknownTool(name.to_string()));
        };

        info!(tool = tool.name(), "Invoking tool");
        let result = self.dispatch(tool, arguments).await;
        if let Err(err) = &result {
            error!(tool = tool.name(), error = %err, "Tool invocation failed");
        }
        result
    }

    async fn dispatch(&self, tool: Tool, arguments: Option<Value>) -> Result<String, ToolError> {
        let client = &self.client;
        let text = match tool {
            Tool::ListInventoryCategories => inventory::inventory_categories(),
            Tool::ListFermentables => {
                let items: Vec<FermentableSummary> = client.list(ListQuery::new().in_stock()).await?;
                ingredient::fermentable_list(&items)
            }
            Tool::GetFermentableDetail => {
                let args: IdentifierArgs = decode(tool, arguments)?;
                ingredient::fermentable_detail(&client.detail(&args.identifier).await?)
            }
            Tool::ListHops => {
                let items: Vec<HopSummary> = client.list(ListQuery::new().in_stock()).await?;
                ingredient::hop_list(&items)
            }
            Tool::GetHopDetail => {
                let args: IdentifierArgs = decode(tool, arguments)?;
                ingredient::hop_detail(&client.detail(&args.identifier).await?)
            }
            Tool::ListYeasts => {
                let items: Vec<YeastSummary> = client.list(ListQuery::new().in_stock()).await?;
                ingredient::yeast_list(&items)
            }
            Tool::GetYeastDetail => {
                let args: IdentifierArgs = decode(tool, arguments)?;
                ingredient::yeast_detail(&client.detail(&args.identifier).await?)
            }
            Tool::ListMiscItems => {
                let items: Vec<MiscSummary> = client.list(ListQuery::new().in_stock()).await?;
                ingredient::misc_list(&items)
            }
            Tool::GetMiscDetail => {
                let args: ItemArgs = decode(tool, arguments)?;
                ingredient::misc_detail(&client.detail(&args.item_id).await?)
            }
            Tool::InventorySummary => self.inventory_summary().await?,
            Tool::ListBatches => {
                let args: ListBatchesArgs = decode(tool, arguments)?;
                let query = match args.status {
                    Some(status) => ListQuery::new().with_status(status),
                    None => ListQuery::new(),
                };
                let items: Vec<BatchSummary> = client.list(query).await?;
                batch::batch_list(&items)
            }
            Tool::GetBatchDetail => {
                let args: BatchArgs = decode(tool, arguments)?;
                batch::batch_detail(&client.batch_with_recipe(&args.batch_id).await?)
            }
            Tool::UpdateBatch => {
                let args: UpdateBatchArgs = decode(tool, arguments)?;
                if args.update.is_empty() {
                    return Ok("No update parameters provided.".to_string());
                }
                client.update_batch(&args.batch_id, &args.update).await?;
                batch::batch_updated(&args.batch_id)
            }
            Tool::ListRecipes => {
                let items: Vec<RecipeSummary> = client.list(ListQuery::new()).await?;
                recipe::recipe_list(&items)
            }
            Tool::GetRecipeDetail => {
                let args: RecipeArgs = decode(tool, arguments)?;
                let detail: RecipeDetail = client.detail(&args.recipe_id).await?;
                recipe::recipe_detail(&detail)
            }
            Tool::UpdateFermentableInventory => {
                self.update_inventory(tool, InventoryCategory::Fermentables, arguments)
                    .await?
            }
            Tool::UpdateHopInventory => {
                self.update_inventory(tool, InventoryCategory::Hops, arguments)
                    .await?
            }
            Tool::UpdateYeastInventory => {
                self.update_inventory(tool, InventoryCategory::Yeasts, arguments)
                    .await?
            }
            Tool::UpdateMiscInventory => {
                self.update_inventory(tool, InventoryCategory::Miscs, arguments)
                    .await?
            }
            Tool::GetBatchBrewtracker => {
                let args: BatchArgs = decode(tool, arguments)?;
                let state = client.batch_brewtracker(&args.batch_id).await?;
                tracker::brewtracker(&args.batch_id, &state)
            }
            Tool::GetBatchLastReading => {
                let args: BatchArgs = decode(tool, arguments)?;
                let reading = client.batch_last_reading(&args.batch_id).await?;
                tracker::last_reading(&args.batch_id, reading.as_ref())
            }
            Tool::GetBatchReadingsSummary => {
                let args: ReadingsArgs = decode(tool, arguments)?;
                let readings = client.batch_readings(&args.batch_id).await?;
                tracker::readings_summary(&readings, args.limit)
            }
        };
        Ok(text)
    }

    async fn update_inventory(
        &self,
        tool: Tool,
        category: InventoryCategory,
        arguments: Option<Value>,
    ) -> Result<String, ToolError> {
        let args: UpdateInventoryArgs = decode(tool, arguments)?;
        self.client
            .update_inventory(category, &args.item_id, args.inventory_amount)
            .await?;
        Ok(ingredient::inventory_updated(
            category,
            &args.item_id,
            args.inventory_amount,
        ))
    }

    /// Fetches the four categories one after another; any failure fails the summary.
    async fn inventory_summary(&self) -> Result<String, ToolError> {
        let fermentables: Vec<FermentableDetail> = self.client.list_complete().await?;
        let hops: Vec<HopDetail> = self.client.list_complete().await?;
        let yeasts: Vec<YeastDetail> = self.client.list_complete().await?;
        let miscs: Vec<MiscDetail> = self.client.list_complete().await?;
        info!(
            fermentables = fermentables.len(),
            hops = hops.len(),
            yeasts = yeasts.len(),
            miscs = miscs.len(),
            "Inventory gathered"
        );

        let summary = summarize_inventory(&fermentables, &hops, &yeasts, &miscs, &self.thresholds);
        Ok(inventory::inventory_summary(&summary))
    }
}
