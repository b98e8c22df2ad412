//! Error types for stakesim.
//!
//! Numeric problems are never errors: NaN and infinity flow through the
//! results. Only unknown action tags and field names are reported, and
//! [`dispatch`] swallows those too.
//!
//! [`dispatch`]: crate::simulator::dispatch
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error("unknown action: {0}")] UnknownAction(String),
    #[error("unknown field: {0}")] UnknownField(String),
}
