//! Cumulative-reward chart dataset.
//!
//! Serializes to the `{ labels, datasets: [{ label, data, ... }] }` shape
//! line-chart libraries consume, with camelCase style keys.

use serde::{Deserialize, Serialize};
use stakesim_core::Schedule;

pub const DATASET_LABEL: &str = "Cumulative reward";
pub const BACKGROUND_COLOR: &str = "rgba(56, 132, 255, 0.2)";
pub const BORDER_COLOR: &str = "rgba(56, 132, 255, 1)";
pub const BORDER_WIDTH: u32 = 2;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    /// Non-finite points serialize as `null`, which charts render as gaps.
    pub data: Vec<f64>,
    pub background_color: String,
    pub border_color: String,
    pub border_width: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChartData {
    /// One `Day N` label per schedule day.
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

impl ChartData {
    /// Cumulative totals keyed by day label.
    pub fn cumulative(schedule: &Schedule) -> Self {
        Self {
            labels: schedule.iter().map(|d| format!("Day {}", d.day)).collect(),
            datasets: vec![ChartDataset {
                label: DATASET_LABEL.to_string(),
                data: schedule.iter().map(|d| d.cumulative_total).collect(),
                background_color: BACKGROUND_COLOR.to_string(),
                border_color: BORDER_COLOR.to_string(),
                border_width: BORDER_WIDTH,
            }],
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
