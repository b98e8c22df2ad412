//! The daily schedule as a text table.

use stakesim_core::Schedule;

use crate::format::NumberFormat;

/// Column headers, left to right.
pub const HEADERS: [&str; 5] = [
    "Day",
    "Daily reward",
    "Pool reward",
    "Stake reward",
    "Cumulative total",
];

/// One formatted row per schedule day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduleTable {
    rows: Vec<[String; 5]>,
}

impl ScheduleTable {
    pub fn new(schedule: &Schedule, format: &NumberFormat) -> Self {
        let rows = schedule
            .iter()
            .map(|d| {
                [
                    d.day.to_string(),
                    format.format(d.daily_total),
                    format.format(d.pool_reward),
                    format.format(d.compounded_stake_reward),
                    format.format(d.cumulative_total),
                ]
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[[String; 5]] {
        &self.rows
    }

    /// Render with right-aligned columns sized to their widest cell.
    pub fn render(&self) -> String {
        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in &self.rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        push_line(&mut out, HEADERS.iter().copied(), &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_line(&mut out, rule.iter().map(String::as_str), &widths);
        for row in &self.rows {
            push_line(&mut out, row.iter().map(String::as_str), &widths);
        }
        out
    }
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize; 5]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, w)| {
            let pad = w.saturating_sub(cell.chars().count());
            format!("{}{}", " ".repeat(pad), cell)
        })
        .collect();
    out.push_str(&line.join("  "));
    out.push('\n');
}
