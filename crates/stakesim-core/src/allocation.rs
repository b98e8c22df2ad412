//! Pro-rata allocation of the community reward by point-seconds.
//!
//! One unit staked for one second earns one point. The community total is
//! priced per point-second and the individual's points are valued at that
//! price. Division is unguarded: a zero community denominator yields
//! infinity or NaN and it propagates into the individual reward.

use crate::constants::POINT_SECONDS_PER_UNIT_DAY;
use crate::types::{Allocation, Schedule};

/// Point-seconds earned by `units` staked for `stake_days`.
pub fn point_seconds(units: f64, stake_days: f64) -> f64 {
    units * stake_days * POINT_SECONDS_PER_UNIT_DAY
}

/// Split the schedule's final cumulative total across the community.
pub fn compute_allocation(
    schedule: &Schedule,
    total_participant_units: f64,
    community_stake_days: f64,
    your_units: f64,
    your_stake_days: f64,
) -> Allocation {
    let community_total_reward = schedule.total();
    let community_total_point_seconds = point_seconds(total_participant_units, community_stake_days);
    let reward_value_per_point_second = community_total_reward / community_total_point_seconds;
    let your_point_seconds = point_seconds(your_units, your_stake_days);
    let your_reward = your_point_seconds * reward_value_per_point_second;

    Allocation {
        community_total_reward,
        community_total_point_seconds,
        reward_value_per_point_second,
        your_point_seconds,
        your_reward,
    }
}
