//! Headline figures shown above the schedule.

use serde::{Deserialize, Serialize};
use stakesim_core::constants::SCHEDULE_DAYS;
use stakesim_core::SimulationResult;

use crate::format::{format_fixed, NumberFormat};

/// Digits shown for the per-point value, which is typically tiny.
pub const VALUE_PER_POINT_DIGITS: usize = 10;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SummaryCard {
    pub title: String,
    pub value: String,
}

impl SummaryCard {
    fn new(title: impl Into<String>, value: String) -> Self {
        Self {
            title: title.into(),
            value,
        }
    }
}

/// The five summary cards, in display order.
pub fn summary_cards(result: &SimulationResult, format: &NumberFormat) -> Vec<SummaryCard> {
    vec![
        SummaryCard::new(
            format!("Total reward accumulated after {SCHEDULE_DAYS} days"),
            format.format(result.community_total_reward()),
        ),
        SummaryCard::new(
            "Total points accumulated by the community",
            format.format(result.community_total_point_seconds()),
        ),
        SummaryCard::new(
            "Value per point",
            format_fixed(result.reward_value_per_point_second(), VALUE_PER_POINT_DIGITS),
        ),
        SummaryCard::new("Your accumulated points", format.format(result.your_point_seconds())),
        SummaryCard::new("Your estimated reward", format.format(result.your_reward())),
    ]
}
