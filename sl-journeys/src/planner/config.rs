//! Collection configuration for the trip collector.

use chrono::Duration;

use super::detour::DetourPolicy;

/// Number of journeys shown when the caller does not ask for a count.
pub const RESULTS_TO_SHOW: usize = 5;

/// Configuration parameters for trip collection.
#[derive(Debug, Clone)]
pub struct CollectConfig {
    /// Itineraries requested per trip-search call.
    pub batch_size: usize,

    /// Maximum number of trip-search calls per collection.
    pub max_attempts: usize,

    /// How far in the past a departure may be before it is dropped (minutes).
    pub stale_grace_mins: i64,

    /// Cursor step past the latest departure seen in a batch (minutes).
    pub cursor_step_mins: i64,

    /// Cursor step when a batch brings no later departure (minutes).
    /// Keeps the search moving when the service repeats a window.
    pub stall_step_mins: i64,

    /// How detour itineraries are filtered.
    pub detour_policy: DetourPolicy,
}

impl CollectConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        batch_size: usize,
        max_attempts: usize,
        stale_grace_mins: i64,
        cursor_step_mins: i64,
        stall_step_mins: i64,
        detour_policy: DetourPolicy,
    ) -> Self {
        Self {
            batch_size,
            max_attempts,
            stale_grace_mins,
            cursor_step_mins,
            stall_step_mins,
            detour_policy,
        }
    }

    /// Set the detour policy.
    pub fn with_detour_policy(mut self, policy: DetourPolicy) -> Self {
        self.detour_policy = policy;
        self
    }

    /// Upper bound on candidates collected for `desired` results.
    ///
    /// Over-fetching leaves room for the detour filter to drop journeys
    /// and still meet the quota.
    pub fn max_candidates(desired: usize) -> usize {
        let desired = desired.max(1);
        desired.saturating_mul(3).max(desired.saturating_add(3))
    }

    /// Most journeys a single collection can return.
    pub fn max_collected(&self) -> usize {
        self.batch_size.saturating_mul(self.max_attempts)
    }

    /// Returns the staleness grace period as a Duration.
    pub fn stale_grace(&self) -> Duration {
        Duration::minutes(self.stale_grace_mins)
    }

    /// Returns the cursor step as a Duration.
    pub fn cursor_step(&self) -> Duration {
        Duration::minutes(self.cursor_step_mins)
    }

    /// Returns the stall step as a Duration.
    pub fn stall_step(&self) -> Duration {
        Duration::minutes(self.stall_step_mins)
    }
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            batch_size: 3,
            max_attempts: 10,
            stale_grace_mins: 2,
            cursor_step_mins: 1,
            stall_step_mins: 10,
            detour_policy: DetourPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = CollectConfig::default();

        assert_eq!(config.batch_size, 3);
        assert_eq!(config.max_attempts, 10);
        assert_eq!(config.stale_grace_mins, 2);
        assert_eq!(config.cursor_step_mins, 1);
        assert_eq!(config.stall_step_mins, 10);
        assert_eq!(config.detour_policy, DetourPolicy::Strict);
    }

    #[test]
    fn duration_methods() {
        let config = CollectConfig::default();

        assert_eq!(config.stale_grace(), Duration::minutes(2));
        assert_eq!(config.cursor_step(), Duration::minutes(1));
        assert_eq!(config.stall_step(), Duration::minutes(10));
    }

    #[test]
    fn custom_config() {
        let config = CollectConfig::new(5, 4, 0, 2, 15, DetourPolicy::Lenient);

        assert_eq!(config.batch_size, 5);
        assert_eq!(config.max_attempts, 4);
        assert_eq!(config.stale_grace_mins, 0);
        assert_eq!(config.cursor_step_mins, 2);
        assert_eq!(config.stall_step_mins, 15);
        assert_eq!(config.detour_policy, DetourPolicy::Lenient);

        let config = config.with_detour_policy(DetourPolicy::Strict);
        assert_eq!(config.detour_policy, DetourPolicy::Strict);
    }

    #[test]
    fn candidate_cap() {
        assert_eq!(CollectConfig::max_candidates(0), 4);
        assert_eq!(CollectConfig::max_candidates(1), 4);
        assert_eq!(CollectConfig::max_candidates(2), 6);
        assert_eq!(CollectConfig::max_candidates(5), 15);
    }

    #[test]
    fn candidate_cap_saturates() {
        assert_eq!(CollectConfig::max_candidates(usize::MAX), usize::MAX);
        assert_eq!(CollectConfig::max_candidates(usize::MAX / 2), usize::MAX);
        assert_eq!(CollectConfig::max_candidates(usize::MAX - 1), usize::MAX);
    }

    #[test]
    fn collected_bound() {
        assert_eq!(CollectConfig::default().max_collected(), 30);
        let config = CollectConfig::new(usize::MAX, 2, 2, 1, 10, DetourPolicy::Strict);
        assert_eq!(config.max_collected(), usize::MAX);
    }
}
