//! Reward projector trait and the fixed-horizon implementation.

use tracing::debug;

use crate::allocation::compute_allocation;
use crate::schedule::compute_schedule;
use crate::types::{Allocation, Schedule, SimulationInput, SimulationResult};

/// Turns an input snapshot into a schedule and an allocation.
///
/// Implementations must be pure: identical inputs give identical results.
pub trait RewardProjector: Send + Sync {
    /// Daily accruals for the projection horizon.
    fn schedule(&self, input: &SimulationInput) -> Schedule;

    /// Community totals and the individual's share of `schedule`.
    fn allocate(&self, schedule: &Schedule, input: &SimulationInput) -> Allocation;

    /// Full result for one snapshot.
    ///
    /// Default implementation: [`schedule`](Self::schedule) then
    /// [`allocate`](Self::allocate).
    fn project(&self, input: &SimulationInput) -> SimulationResult {
        let schedule = self.schedule(input);
        let allocation = self.allocate(&schedule, input);
        SimulationResult {
            schedule,
            allocation,
        }
    }
}

/// The production projector: 45 days, pool rewards restaked, stake leg not.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedHorizonProjector;

impl FixedHorizonProjector {
    pub fn new() -> Self {
        Self
    }
}

impl RewardProjector for FixedHorizonProjector {
    fn schedule(&self, input: &SimulationInput) -> Schedule {
        compute_schedule(
            input.pool_apr_percent,
            input.stake_apr_percent,
            input.initial_principal,
        )
    }

    fn allocate(&self, schedule: &Schedule, input: &SimulationInput) -> Allocation {
        compute_allocation(
            schedule,
            input.total_participant_units,
            input.community_stake_days,
            input.your_units,
            input.your_stake_days,
        )
    }
}

/// Run the fixed-horizon projection on `input`.
pub fn simulate(input: &SimulationInput) -> SimulationResult {
    let result = FixedHorizonProjector.project(input);
    debug!(
        community_total = result.community_total_reward(),
        point_seconds = result.community_total_point_seconds(),
        your_reward = result.your_reward(),
        "simulation complete"
    );
    result
}
