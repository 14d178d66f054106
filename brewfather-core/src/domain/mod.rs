//! Typed documents of the Brewfather v2 API
//!
//! # Structure
//! - `common` - timestamps, dates, open enumerations
//! - `inventory` - the ingredient categories and the `InventoryItem` view
//! - `fermentable`, `hop`, `yeast`, `misc` - ingredient documents
//! - `recipe`, `batch` - recipe and batch documents
//! - `tracker` - brew tracker and sensor readings
//!
//! Each ingredient exists in a list shape (`*Summary`) and a detail shape (`*Detail`)
//! that embeds the list shape.

pub mod batch;
pub mod common;
pub mod fermentable;
pub mod hop;
pub mod inventory;
pub mod misc;
pub mod recipe;
pub mod resource;
pub mod tracker;
pub mod yeast;

pub use batch::{BatchDetail, BatchStatus, BatchSummary, BatchUpdate};
pub use common::{DateValue, OpenEnum, RecordMeta, Timestamp};
pub use fermentable::{FermentableDetail, FermentableSummary};
pub use hop::{HopDetail, HopSummary};
pub use inventory::{InventoryCategory, InventoryItem};
pub use misc::{MiscDetail, MiscSummary};
pub use recipe::{RecipeDetail, RecipeSummary};
pub use resource::Resource;
pub use tracker::{BatchReading, BrewTracker};
pub use yeast::{YeastDetail, YeastSummary};
