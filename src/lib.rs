pub mod console;
pub mod core;

// Re-export commonly used types
pub use crate::core::event::SimulationEvent;
pub use crate::core::execution::config::{ConfigError, SimulationConfig};
pub use crate::core::queue::BoundedQueue;
pub use crate::core::report::SimulationReport;
pub use crate::core::simulation_engine::{CheckoutSimulation, SimulationObserver, SimulationState};
pub use crate::core::types::{Customer, CustomerProfile, SimTime};
