//! Simulation types: the input snapshot, daily accruals and results.
//!
//! All quantities are `f64` so that NaN and infinity coming from host text
//! parsing reach the output unchanged. `serde_json` writes non-finite values
//! as `null`.

use std::fmt;
use std::ops::Index;

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_COMMUNITY_STAKE_DAYS, DEFAULT_INITIAL_PRINCIPAL, DEFAULT_POOL_APR_PERCENT,
    DEFAULT_STAKE_APR_PERCENT, DEFAULT_TOTAL_PARTICIPANT_UNITS, DEFAULT_YOUR_STAKE_DAYS,
    DEFAULT_YOUR_UNITS, SCHEDULE_DAYS,
};

/// The seven numeric inputs of a simulation.
///
/// No invariant ties the individual fields to the community ones: `your_units`
/// may exceed `total_participant_units` and the numbers still compute.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct SimulationInput {
    /// Annual pool rate, in percent.
    pub pool_apr_percent: f64,
    /// Annual rate paid on restaked pool rewards, in percent.
    pub stake_apr_percent: f64,
    /// Starting principal in the base asset. Never grows.
    pub initial_principal: f64,
    /// Units (e.g. NFTs) participating across the community.
    pub total_participant_units: f64,
    /// Average number of days the community's units stay staked.
    pub community_stake_days: f64,
    /// The individual's unit count.
    pub your_units: f64,
    /// The individual's stake duration, in days.
    pub your_stake_days: f64,
}

impl Default for SimulationInput {
    fn default() -> Self {
        Self {
            pool_apr_percent: DEFAULT_POOL_APR_PERCENT,
            stake_apr_percent: DEFAULT_STAKE_APR_PERCENT,
            initial_principal: DEFAULT_INITIAL_PRINCIPAL,
            total_participant_units: DEFAULT_TOTAL_PARTICIPANT_UNITS,
            community_stake_days: DEFAULT_COMMUNITY_STAKE_DAYS,
            your_units: DEFAULT_YOUR_UNITS,
            your_stake_days: DEFAULT_YOUR_STAKE_DAYS,
        }
    }
}

/// Rewards accrued on one simulated day.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct DailyAccrual {
    /// 1-based day index.
    pub day: u32,
    /// Reward from the pool rate applied to the initial principal.
    pub pool_reward: f64,
    /// Reward from the stake rate applied to the restaked balance before today.
    pub compounded_stake_reward: f64,
    /// `pool_reward + compounded_stake_reward`.
    pub daily_total: f64,
    /// Running sum of `daily_total` through this day.
    pub cumulative_total: f64,
    /// Restaked balance after today's pool reward was added.
    pub restaked_balance: f64,
}

/// The fixed-length daily schedule, in day order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Schedule(pub(crate) [DailyAccrual; SCHEDULE_DAYS]);

impl Schedule {
    /// Wrap a full set of daily accruals.
    pub fn from_days(days: [DailyAccrual; SCHEDULE_DAYS]) -> Self {
        Self(days)
    }

    /// All days, day 1 first.
    pub fn days(&self) -> &[DailyAccrual; SCHEDULE_DAYS] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DailyAccrual> {
        self.0.iter()
    }

    /// Always [`SCHEDULE_DAYS`].
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// The final day of the schedule.
    pub fn last(&self) -> &DailyAccrual {
        &self.0[SCHEDULE_DAYS - 1]
    }

    /// Cumulative reward at the end of the horizon.
    pub fn total(&self) -> f64 {
        self.last().cumulative_total
    }
}

impl Index<usize> for Schedule {
    type Output = DailyAccrual;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a DailyAccrual;
    type IntoIter = std::slice::Iter<'a, DailyAccrual>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// serde only derives for arrays up to 32 elements, so the schedule goes
// through a plain sequence.
impl Serialize for Schedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

impl<'de> Deserialize<'de> for Schedule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScheduleVisitor;

        impl<'de> Visitor<'de> for ScheduleVisitor {
            type Value = Schedule;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a sequence of {SCHEDULE_DAYS} daily accruals")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Schedule, A::Error> {
                let mut days = Vec::with_capacity(SCHEDULE_DAYS);
                while let Some(day) = seq.next_element::<DailyAccrual>()? {
                    days.push(day);
                }
                let len = days.len();
                let days: [DailyAccrual; SCHEDULE_DAYS] = days
                    .try_into()
                    .map_err(|_| <A::Error as de::Error>::invalid_length(len, &self))?;
                Ok(Schedule(days))
            }
        }

        deserializer.deserialize_seq(ScheduleVisitor)
    }
}

/// Community totals and the individual's share.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Allocation {
    /// Cumulative total of the last schedule day.
    pub community_total_reward: f64,
    /// `total_participant_units * community_stake_days * 86_400`.
    pub community_total_point_seconds: f64,
    /// Community reward divided by community point-seconds. Unguarded.
    pub reward_value_per_point_second: f64,
    /// `your_units * your_stake_days * 86_400`.
    pub your_point_seconds: f64,
    /// `your_point_seconds * reward_value_per_point_second`.
    pub your_reward: f64,
}

/// Everything derived from one input snapshot.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SimulationResult {
    pub schedule: Schedule,
    #[serde(flatten)]
    pub allocation: Allocation,
}

impl SimulationResult {
    pub fn community_total_reward(&self) -> f64 {
        self.allocation.community_total_reward
    }

    pub fn community_total_point_seconds(&self) -> f64 {
        self.allocation.community_total_point_seconds
    }

    pub fn reward_value_per_point_second(&self) -> f64 {
        self.allocation.reward_value_per_point_second
    }

    pub fn your_point_seconds(&self) -> f64 {
        self.allocation.your_point_seconds
    }

    pub fn your_reward(&self) -> f64 {
        self.allocation.your_reward
    }
}
