//! The 45-day reward schedule.
//!
//! Two legs accrue every day:
//! - **Pool leg**: `initial_principal * daily_pool_rate`. The principal never
//!   grows, so this is the same amount every day.
//! - **Stake leg**: the pool rewards accrued before today, restaked at the
//!   stake rate. Stake-leg rewards are not themselves restaked.
//!
//! The horizon is [`SCHEDULE_DAYS`] no matter what stake duration the
//! community is configured with.

use crate::constants::{DAYS_PER_YEAR, PERCENT, SCHEDULE_DAYS};
use crate::types::{DailyAccrual, Schedule};

/// Convert an annual percentage rate into a daily percentage rate.
pub fn daily_rate_percent(apr_percent: f64) -> f64 {
    apr_percent / DAYS_PER_YEAR
}

/// Project the daily accruals for the full horizon.
///
/// Inputs are not validated: zero or negative values propagate
/// arithmetically and NaN reaches every derived field.
pub fn compute_schedule(
    pool_apr_percent: f64,
    stake_apr_percent: f64,
    initial_principal: f64,
) -> Schedule {
    let daily_pool_rate = daily_rate_percent(pool_apr_percent);
    let daily_stake_rate = daily_rate_percent(stake_apr_percent);

    let mut days = [DailyAccrual::default(); SCHEDULE_DAYS];
    let mut restaked_balance = 0.0;
    let mut cumulative_total = 0.0;

    for (index, slot) in days.iter_mut().enumerate() {
        let pool_reward = initial_principal * (daily_pool_rate / PERCENT);
        let compounded_stake_reward = restaked_balance * (daily_stake_rate / PERCENT);
        let daily_total = pool_reward + compounded_stake_reward;

        restaked_balance += pool_reward;
        cumulative_total += daily_total;

        *slot = DailyAccrual {
            day: index as u32 + 1,
            pool_reward,
            compounded_stake_reward,
            daily_total,
            cumulative_total,
            restaked_balance,
        };
    }

    Schedule::from_days(days)
}
