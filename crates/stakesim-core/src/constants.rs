//! Simulation constants and the default input snapshot.

/// Length of the projected schedule in days.
///
/// Fixed regardless of the configured community stake days.
pub const SCHEDULE_DAYS: usize = 45;

/// Days per year used to turn an APR into a daily rate.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Divisor turning a percentage into a fraction.
pub const PERCENT: f64 = 100.0;

/// Point-seconds earned by one unit staked for one day (one point per second).
pub const POINT_SECONDS_PER_UNIT_DAY: f64 = 86_400.0;

/// Default pool APR, in percent.
pub const DEFAULT_POOL_APR_PERCENT: f64 = 317.0;

/// Default stake APR, in percent.
pub const DEFAULT_STAKE_APR_PERCENT: f64 = 328.0;

/// Default starting principal, in the base asset.
pub const DEFAULT_INITIAL_PRINCIPAL: f64 = 50_000.0;

/// Default number of participating units across the community.
pub const DEFAULT_TOTAL_PARTICIPANT_UNITS: f64 = 100.0;

/// Default average community stake duration, in days.
pub const DEFAULT_COMMUNITY_STAKE_DAYS: f64 = 45.0;

/// Default individual unit count.
pub const DEFAULT_YOUR_UNITS: f64 = 1.0;

/// Default individual stake duration, in days.
pub const DEFAULT_YOUR_STAKE_DAYS: f64 = 15.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_day_is_86400_seconds() {
        assert_eq!(POINT_SECONDS_PER_UNIT_DAY, 24.0 * 60.0 * 60.0);
    }

    #[test]
    fn horizon_matches_default_community_days() {
        // Coincidence of defaults only; the horizon never reads the field.
        assert_eq!(SCHEDULE_DAYS as f64, DEFAULT_COMMUNITY_STAKE_DAYS);
    }
}
