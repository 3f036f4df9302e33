use serde::{Deserialize, Serialize};

/// Simulated clock value. Advanced only to the next event time.
pub type SimTime = u64;

/// Longest customer name kept, in characters
pub const MAX_NAME_LEN: usize = 63;

/// Identity and wallet of an arriving customer, as supplied by a customer source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub name: String,
    pub cash: f64,
}

impl CustomerProfile {
    /// Create a profile, truncating the name and clamping cash to a non-negative amount
    pub fn new(name: impl Into<String>, cash: f64) -> Self {
        let name: String = name.into().chars().take(MAX_NAME_LEN).collect();
        let cash = if cash.is_finite() && cash > 0.0 { cash } else { 0.0 };
        Self { name, cash }
    }
}

/// A customer that has arrived at the checkout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub cash: f64,
    pub arrival_time: SimTime,
    pub service_time: u64,
}

impl Customer {
    pub fn new(profile: CustomerProfile, arrival_time: SimTime, service_time: u64) -> Self {
        Self {
            name: profile.name,
            cash: profile.cash,
            arrival_time,
            service_time,
        }
    }

    /// Time spent queueing if service starts at `start`
    pub fn wait_until(&self, start: SimTime) -> u64 {
        start.saturating_sub(self.arrival_time)
    }
}

impl std::fmt::Display for Customer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
