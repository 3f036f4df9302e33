use super::types::SimTime;

/// The single cashier. Idle until a customer is taken from the queue,
/// busy until the clock reaches the recorded free time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CashierState {
    #[default]
    Idle,
    Busy { free_at: SimTime },
}

impl CashierState {
    pub fn is_busy(&self) -> bool {
        matches!(self, CashierState::Busy { .. })
    }

    pub fn is_idle(&self) -> bool {
        !self.is_busy()
    }

    /// Completion time of the current service, if any
    pub fn free_at(&self) -> Option<SimTime> {
        match self {
            CashierState::Busy { free_at } => Some(*free_at),
            CashierState::Idle => None,
        }
    }

    /// Idle -> Busy. Returns the time the service will complete.
    pub fn start_service(&mut self, now: SimTime, duration: u64) -> SimTime {
        debug_assert!(self.is_idle(), "cashier already serving");
        let free_at = now + duration;
        *self = CashierState::Busy { free_at };
        free_at
    }

    /// Busy -> Idle once the clock has reached the free time.
    /// Returns true if the transition happened.
    pub fn release_if_due(&mut self, now: SimTime) -> bool {
        match *self {
            CashierState::Busy { free_at } if now >= free_at => {
                *self = CashierState::Idle;
                true
            }
            _ => false,
        }
    }
}
