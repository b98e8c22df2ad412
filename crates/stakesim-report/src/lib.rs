//! # stakesim-report
//! Presentation of a [`SimulationResult`]: localized number formatting, the
//! daily schedule table, the cumulative-reward chart dataset and the summary
//! cards. Nothing here reaches into the projection; it only reads results.
//!
//! [`SimulationResult`]: stakesim_core::SimulationResult

pub mod chart;
pub mod format;
pub mod report;
pub mod summary;
pub mod table;

pub use chart::{ChartData, ChartDataset};
pub use format::{format_fixed, Locale, NumberFormat, UnknownLocale};
pub use report::Report;
pub use summary::{summary_cards, SummaryCard};
pub use table::ScheduleTable;
