//! A complete rendered report for one simulation result.

use serde::Serialize;
use stakesim_core::SimulationResult;

use crate::chart::ChartData;
use crate::format::NumberFormat;
use crate::summary::{summary_cards, SummaryCard};
use crate::table::ScheduleTable;

pub const TITLE: &str = "Simulation results";

/// Summary cards, chart dataset and schedule table built from one result.
#[derive(Serialize, Clone, Debug)]
pub struct Report {
    pub cards: Vec<SummaryCard>,
    pub chart: ChartData,
    #[serde(skip)]
    pub table: ScheduleTable,
}

impl Report {
    pub fn new(result: &SimulationResult, format: &NumberFormat) -> Self {
        Self {
            cards: summary_cards(result, format),
            chart: ChartData::cumulative(&result.schedule),
            table: ScheduleTable::new(&result.schedule, format),
        }
    }

    /// Plain-text rendering: title, one line per card, then optionally the table.
    pub fn render_text(&self, include_table: bool) -> String {
        let mut out = format!("{TITLE}\n{}\n", "=".repeat(TITLE.len()));
        for card in &self.cards {
            out.push_str(&format!("{}: {}\n", card.title, card.value));
        }
        if include_table {
            out.push('\n');
            out.push_str(&self.table.render());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stakesim_core::{simulate, SimulationInput};

    #[test]
    fn text_starts_with_underlined_title() {
        let result = simulate(&SimulationInput::default());
        let text = Report::new(&result, &NumberFormat::en_us()).render_text(false);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(TITLE));
        assert_eq!(lines.next(), Some("=================="));
        assert!(lines.all(|l| l.contains(": ")));
        assert!(text.ends_with('\n'));
    }
}
