//! Brew-day tracker and fermentation sensor readings attached to a batch

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerStep {
    pub name: Option<String>,
    /// `mash`, `ramp`, `event`, `boil`, ...
    #[serde(rename = "type")]
    pub kind: String,
    /// Offset into the stage in seconds
    pub time: i64,
    pub duration: Option<i64>,
    pub priority: Option<i64>,
    /// Target temperature or other set point
    pub value: Option<f64>,
    pub description: Option<String>,
    pub tooltip: Option<String>,
    #[serde(default)]
    pub pause_before: bool,
    pub r#final: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerStage {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Seconds
    pub duration: i64,
    /// Index of the current step
    #[serde(default)]
    pub step: usize,
    /// Seconds elapsed in the stage
    #[serde(default)]
    pub position: i64,
    #[serde(default)]
    pub paused: bool,
    #[serde(default)]
    pub steps: Vec<TrackerStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrewTracker {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub name: Option<String>,
    /// Index of the current stage
    #[serde(default)]
    pub stage: usize,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub alarm: bool,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub completed: bool,
    pub enabled: Option<bool>,
    pub notify: Option<bool>,
    #[serde(default)]
    pub stages: Vec<TrackerStage>,
    #[serde(rename = "_rev")]
    pub rev: Option<String>,
}

impl BrewTracker {
    pub fn current_stage(&self) -> Option<&TrackerStage> {
        self.stages.get(self.stage)
    }
}

/// One sensor reading. Which values are present depends on the device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReading {
    /// Epoch milliseconds
    pub time: i64,
    /// Source integration, e.g. `raptCloud` or `stream`
    #[serde(rename = "type")]
    pub kind: String,
    pub id: Option<String>,
    pub name: Option<String>,
    pub device_type: Option<String>,
    pub device_id: Option<String>,

    pub temp: Option<f64>,
    pub sg: Option<f64>,
    pub battery: Option<f64>,
    pub rssi: Option<f64>,
    #[serde(rename = "target_temp")]
    pub target_temp: Option<f64>,
    pub ph: Option<f64>,
    pub pressure: Option<f64>,
    pub angle: Option<f64>,
    pub interval: Option<i64>,

    pub room_temp: Option<f64>,
    pub fridge_temp: Option<f64>,
    pub beer: Option<f64>,
    pub bpm: Option<f64>,
    pub comment: Option<String>,
    pub status: Option<String>,
}

pub fn brewtracker_path(batch_id: &str) -> String {
    format!("batches/{batch_id}/brewtracker")
}

pub fn readings_path(batch_id: &str) -> String {
    format!("batches/{batch_id}/readings")
}

pub fn last_reading_path(batch_id: &str) -> String {
    format!("batches/{batch_id}/readings/last")
}
