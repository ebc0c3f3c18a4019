//! Timer accrual cadence.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Accrual tick interval in seconds. Coarse on purpose: ticks bound how
/// often running time is folded in and persisted.
const fn default_tick_interval_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TimerConfig {
    #[serde(default = "default_tick_interval_secs")]
    pub tick_interval_secs: u64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            tick_interval_secs: default_tick_interval_secs(),
        }
    }
}

impl TimerConfig {
    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        Duration::from_secs(self.tick_interval_secs)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timer.tick_interval_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
