//! Console front end: the input-mode menu and the per-event log lines.

use std::io::{BufRead, Write};

use log::warn;

use crate::core::event::SimulationEvent;
use crate::core::execution::config::SimulationConfig;
use crate::core::simulation_engine::SimulationObserver;
use crate::core::source::{read_trimmed_line, InputMode};

/// Render one event as a console line. Events with no console form yield `None`.
pub fn format_event(event: &SimulationEvent) -> Option<String> {
    match event {
        SimulationEvent::CashierFreed { .. } => None,
        SimulationEvent::Arrived {
            time,
            customer,
            queue_len,
        } => Some(format!(
            "At time {}: Arrival '{}' (cash={:.2}, service={}s) Queue size: {}",
            time, customer, customer.cash, customer.service_time, queue_len
        )),
        SimulationEvent::Rejected { time, customer } => Some(format!(
            "At time {}: Arrival '{}' - QUEUE IS FULL.",
            time, customer
        )),
        SimulationEvent::ServiceStarted {
            time,
            customer,
            wait,
            queue_len: 0,
        } => Some(format!(
            "At time {}: Served '{}' (wait={} s). No persons in queue.",
            time, customer, wait
        )),
        SimulationEvent::ServiceStarted {
            time,
            customer,
            wait,
            queue_len,
        } => Some(format!(
            "At time {}: Served '{}' (wait={} s). Members left: {}",
            time, customer, wait, queue_len
        )),
        SimulationEvent::Idle { time, next_arrival } => Some(format!(
            "At time {}: No persons in queue. Next arrival at t={}",
            time, next_arrival
        )),
    }
}

/// Writes every event to the console as it happens
pub struct ConsoleObserver<W> {
    output: W,
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}

impl<W: Write> SimulationObserver for ConsoleObserver<W> {
    fn on_event(&mut self, event: &SimulationEvent) {
        if let Some(line) = format_event(event) {
            if let Err(e) = writeln!(self.output, "{}", line) {
                warn!("Failed to write event: {}", e);
            }
        }
    }
}

/// Program banner
pub fn banner(config: &SimulationConfig) -> String {
    format!(
        "Single-Cashier Checkout Simulator\n\
         Queue capacity: {}, simulate serving {} customers then report average waiting time.\n",
        config.queue_capacity, config.target_served
    )
}

/// Show the mode menu and read the answer
pub fn choose_input_mode<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> InputMode {
    let shown = write!(output, "Choose input mode:\n1) Manual\n2) Automatic\nEnter 1 or 2: ")
        .and_then(|_| output.flush());
    if let Err(e) = shown {
        warn!("Failed to write menu: {}", e);
    }
    InputMode::from_selection(&read_trimmed_line(input))
}
