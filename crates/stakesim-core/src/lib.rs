//! # stakesim-core
//! Reward projection and allocation for the staking-yield simulator.
//!
//! - **Schedule**: a fixed 45-day projection where the pool leg pays on the
//!   static principal and the stake leg pays on the pool rewards restaked so far.
//! - **Allocation**: the community total is split pro-rata by point-seconds
//!   (one point per unit per second staked).
//! - **Simulator**: an explicit `(state, command) -> state` transition function
//!   with host-style text parsing of field updates.
//!
//! All arithmetic is plain `f64`. NaN and infinity propagate; nothing is
//! validated or clamped.

pub mod allocation;
pub mod constants;
pub mod error;
pub mod parse;
pub mod projector;
pub mod schedule;
pub mod simulator;
pub mod types;

pub use allocation::compute_allocation;
pub use error::SimError;
pub use projector::{simulate, FixedHorizonProjector, RewardProjector};
pub use schedule::compute_schedule;
pub use simulator::{dispatch, replay, transition, Action, Command, Field, Simulator, SimulatorState};
pub use types::{Allocation, DailyAccrual, Schedule, SimulationInput, SimulationResult};
