use serde::Serialize;

use super::types::SimTime;

/// Final statistics of a completed run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub served: u64,
    pub attempted_arrivals: u64,
    pub rejected_arrivals: u64,
    pub total_wait: u64,
    pub average_wait: f64,
    pub final_time: SimTime,
}

impl std::fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Simulation finished: Served {} customers.", self.served)?;
        writeln!(f, "Total attempted arrivals: {}", self.attempted_arrivals)?;
        write!(f, "Average waiting time: {:.3} seconds", self.average_wait)
    }
}
