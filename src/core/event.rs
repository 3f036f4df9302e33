use super::types::{Customer, SimTime};

/// Something that happened at the checkout during one simulation step
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationEvent {
    /// The cashier finished the previous service
    CashierFreed { time: SimTime },
    /// A customer joined the queue
    Arrived {
        time: SimTime,
        customer: Customer,
        queue_len: usize,
    },
    /// A customer found the queue full and left
    Rejected { time: SimTime, customer: Customer },
    /// The cashier started serving the head of the queue
    ServiceStarted {
        time: SimTime,
        customer: Customer,
        wait: u64,
        queue_len: usize,
    },
    /// Nobody to serve until the next arrival
    Idle { time: SimTime, next_arrival: SimTime },
}

impl SimulationEvent {
    pub fn time(&self) -> SimTime {
        match self {
            SimulationEvent::CashierFreed { time }
            | SimulationEvent::Arrived { time, .. }
            | SimulationEvent::Rejected { time, .. }
            | SimulationEvent::ServiceStarted { time, .. }
            | SimulationEvent::Idle { time, .. } => *time,
        }
    }
}
