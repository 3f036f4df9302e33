//! Configuration for a checkout simulation run
//!
//! The shipped program always uses the defaults; the setters exist so tests
//! and embedding code can shrink the scenario or pin the random seed.

use serde::{Deserialize, Serialize};

/// Number of customers that may wait in line
pub const QUEUE_CAPACITY: usize = 5;
/// Customers served before the run ends
pub const TOTAL_TO_SERVE: u64 = 100;
/// Inclusive inter-arrival range
pub const ARRIVAL_INTERVAL: (u64, u64) = (0, 3);
/// Inclusive service-duration range
pub const SERVICE_DURATION: (u64, u64) = (1, 5);
/// Inclusive cash range for generated customers
pub const CASH_RANGE: (u64, u64) = (1, 200);

/// Errors reported by [`SimulationConfig::validate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Queue capacity must be at least one
    ZeroCapacity,
    /// At least one customer must be served
    ZeroTarget,
    /// Range minimum exceeds its maximum
    InvalidRange { name: &'static str, min: u64, max: u64 },
    /// Service must take at least one time unit
    ZeroServiceTime,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ZeroCapacity => write!(f, "Queue capacity must be greater than zero"),
            ConfigError::ZeroTarget => write!(f, "Target served count must be greater than zero"),
            ConfigError::InvalidRange { name, min, max } => {
                write!(f, "Invalid {} range: min {} exceeds max {}", name, min, max)
            }
            ConfigError::ZeroServiceTime => write!(f, "Service duration must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub queue_capacity: usize,
    pub target_served: u64,
    pub arrival_interval: (u64, u64),
    pub service_duration: (u64, u64),
    pub cash_range: (u64, u64),
    /// `None` seeds from OS entropy
    pub random_seed: Option<u64>,
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self {
            queue_capacity: QUEUE_CAPACITY,
            target_served: TOTAL_TO_SERVE,
            arrival_interval: ARRIVAL_INTERVAL,
            service_duration: SERVICE_DURATION,
            cash_range: CASH_RANGE,
            random_seed: None,
        }
    }

    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    pub fn with_target_served(mut self, target: u64) -> Self {
        self.target_served = target;
        self
    }

    pub fn with_arrival_interval(mut self, min: u64, max: u64) -> Self {
        self.arrival_interval = (min, max);
        self
    }

    pub fn with_service_duration(mut self, min: u64, max: u64) -> Self {
        self.service_duration = (min, max);
        self
    }

    pub fn with_cash_range(mut self, min: u64, max: u64) -> Self {
        self.cash_range = (min, max);
        self
    }

    pub fn with_random_seed(mut self, seed: Option<u64>) -> Self {
        self.random_seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.queue_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.target_served == 0 {
            return Err(ConfigError::ZeroTarget);
        }
        check_range("arrival interval", self.arrival_interval)?;
        check_range("service duration", self.service_duration)?;
        check_range("cash", self.cash_range)?;
        if self.service_duration.0 == 0 {
            return Err(ConfigError::ZeroServiceTime);
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn check_range(name: &'static str, (min, max): (u64, u64)) -> Result<(), ConfigError> {
    if min > max {
        return Err(ConfigError::InvalidRange { name, min, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.queue_capacity, 5);
        assert_eq!(config.target_served, 100);
        assert_eq!(config.arrival_interval, (0, 3));
        assert_eq!(config.service_duration, (1, 5));
        assert_eq!(config.cash_range, (1, 200));
        assert_eq!(config.random_seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = SimulationConfig::new()
            .with_queue_capacity(1)
            .with_target_served(3)
            .with_random_seed(Some(9));

        assert_eq!(config.queue_capacity, 1);
        assert_eq!(config.target_served, 3);
        assert_eq!(config.random_seed, Some(9));
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert_eq!(
            SimulationConfig::new().with_queue_capacity(0).validate(),
            Err(ConfigError::ZeroCapacity)
        );
        assert_eq!(
            SimulationConfig::new().with_target_served(0).validate(),
            Err(ConfigError::ZeroTarget)
        );
        assert_eq!(
            SimulationConfig::new().with_arrival_interval(4, 2).validate(),
            Err(ConfigError::InvalidRange { name: "arrival interval", min: 4, max: 2 })
        );
        assert_eq!(
            SimulationConfig::new().with_service_duration(0, 2).validate(),
            Err(ConfigError::ZeroServiceTime)
        );
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidRange { name: "cash", min: 5, max: 1 };
        assert_eq!(err.to_string(), "Invalid cash range: min 5 exceeds max 1");
    }
}
