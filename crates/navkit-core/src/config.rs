//! Navigation configuration.
//!
//! Defaults match what the rendering layer needs on a typical device.
//! Override via environment variables or explicit construction for tests.

use std::time::Duration;

/// Default wait between a flow switch and its follow-up action.
pub const DEFAULT_FLOW_SWITCH_DELAY: Duration = Duration::from_millis(100);

/// Tunables for the router manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationConfig {
    /// How long `navigate_to_flow` waits before running its follow-up action
    /// when the target flow does not acknowledge its mount first.
    pub flow_switch_delay: Duration,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            flow_switch_delay: DEFAULT_FLOW_SWITCH_DELAY,
        }
    }
}

impl NavigationConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `NAVKIT_FLOW_SWITCH_DELAY_MS` (default: 100)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            flow_switch_delay: env_millis(
                "NAVKIT_FLOW_SWITCH_DELAY_MS",
                DEFAULT_FLOW_SWITCH_DELAY,
            )?,
        })
    }

    /// Same configuration with a different flow switch delay.
    pub fn with_flow_switch_delay(mut self, delay: Duration) -> Self {
        self.flow_switch_delay = delay;
        self
    }
}

fn env_millis(var: &str, default: Duration) -> Result<Duration, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|e| ConfigError::InvalidValue(var.to_string(), e.to_string())),
        Err(_) => Ok(default),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable held an unparseable value: (variable, reason).
    #[error("invalid value for {0}: {1}")]
    InvalidValue(String, String),
}
