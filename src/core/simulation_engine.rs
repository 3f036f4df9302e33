use log::{debug, info};

use super::cashier::CashierState;
use super::event::SimulationEvent;
use super::execution::config::{ConfigError, SimulationConfig};
use super::queue::BoundedQueue;
use super::report::SimulationReport;
use super::source::{AutomaticSource, CustomerSource};
use super::timing::{TimingModel, UniformTiming};
use super::types::{Customer, SimTime};

/// Observer trait for simulation events
pub trait SimulationObserver {
    /// Called when the simulated clock moves forward
    fn on_clock_advance(&mut self, _old_time: SimTime, _new_time: SimTime) {}

    /// Called for every event, in the order the events happened
    fn on_event(&mut self, _event: &SimulationEvent) {}
}

/// Counters and clock of a running simulation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationState {
    pub current_time: SimTime,
    /// `None` until the first arrival has been scheduled
    pub next_arrival: Option<SimTime>,
    pub cashier: CashierState,
    pub served: u64,
    pub generated: u64,
    pub rejected: u64,
    /// Sum of `service start - arrival` over served customers
    pub total_wait: u64,
}

impl SimulationState {
    pub fn average_wait(&self) -> f64 {
        if self.served == 0 {
            return 0.0;
        }
        self.total_wait as f64 / self.served as f64
    }
}

/// Single-cashier checkout driven by a discrete-event clock
pub struct CheckoutSimulation {
    config: SimulationConfig,
    queue: BoundedQueue<Customer>,
    state: SimulationState,
    source: Box<dyn CustomerSource>,
    timing: Box<dyn TimingModel>,
    observers: Vec<Box<dyn SimulationObserver>>,
}

impl CheckoutSimulation {
    /// Create a simulation with explicit customer and timing sources
    pub fn new(
        config: SimulationConfig,
        source: Box<dyn CustomerSource>,
        timing: Box<dyn TimingModel>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            queue: BoundedQueue::new(config.queue_capacity),
            config,
            state: SimulationState::default(),
            source,
            timing,
            observers: Vec::new(),
        })
    }

    /// Uniform timing drawn from the config's seed and ranges
    pub fn with_source(
        config: SimulationConfig,
        source: Box<dyn CustomerSource>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let timing = Box::new(UniformTiming::from_config(&config)?);
        Self::new(config, source, timing)
    }

    /// Fully automatic run: generated customers, uniform timing
    pub fn automatic(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let source = Box::new(AutomaticSource::from_config(&config)?);
        Self::with_source(config, source)
    }

    /// Add an observer to the simulation
    pub fn add_observer(&mut self, observer: Box<dyn SimulationObserver>) {
        self.observers.push(observer);
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn queue(&self) -> &BoundedQueue<Customer> {
        &self.queue
    }

    pub fn current_time(&self) -> SimTime {
        self.state.current_time
    }

    pub fn is_finished(&self) -> bool {
        self.state.served >= self.config.target_served
    }

    /// Run until the target number of customers has been served
    pub fn run(&mut self) -> SimulationReport {
        info!(
            "Starting checkout simulation: capacity {}, target {} served",
            self.config.queue_capacity, self.config.target_served
        );
        while !self.is_finished() {
            self.step();
        }
        let report = self.report();
        info!(
            "Simulation finished at t={}: {} served, {} rejected, average wait {:.3}",
            report.final_time, report.served, report.rejected_arrivals, report.average_wait
        );
        report
    }

    /// Process the next event time. Within one step the order is:
    /// service completion, arrival, service start, idle check.
    pub fn step(&mut self) -> Vec<SimulationEvent> {
        let mut events = Vec::new();

        let next_arrival = self.next_arrival();
        let next_event = match self.state.cashier.free_at() {
            Some(free_at) => free_at.min(next_arrival),
            None => next_arrival,
        };
        self.advance_clock(next_event);
        let now = self.state.current_time;

        if self.state.cashier.release_if_due(now) {
            events.push(SimulationEvent::CashierFreed { time: now });
        }

        if now >= next_arrival {
            events.push(self.admit_arrival(now));
        }

        if self.state.cashier.is_idle() {
            if let Some(customer) = self.queue.dequeue() {
                events.push(self.start_service(now, customer));
            } else if let Some(next_arrival) = self.state.next_arrival.filter(|t| *t > now) {
                events.push(SimulationEvent::Idle { time: now, next_arrival });
            }
        }

        for event in &events {
            debug!("{:?}", event);
            for observer in &mut self.observers {
                observer.on_event(event);
            }
        }

        events
    }

    /// Snapshot the statistics gathered so far
    pub fn report(&self) -> SimulationReport {
        SimulationReport {
            served: self.state.served,
            attempted_arrivals: self.state.generated,
            rejected_arrivals: self.state.rejected,
            total_wait: self.state.total_wait,
            average_wait: self.state.average_wait(),
            final_time: self.state.current_time,
        }
    }

    fn next_arrival(&mut self) -> SimTime {
        match self.state.next_arrival {
            Some(time) => time,
            None => {
                let time = self.state.current_time + self.timing.inter_arrival();
                self.state.next_arrival = Some(time);
                time
            }
        }
    }

    fn advance_clock(&mut self, new_time: SimTime) {
        let old_time = self.state.current_time;
        if new_time == old_time {
            return;
        }
        debug!("=== Simulation time {} ===", new_time);
        self.state.current_time = new_time;
        for observer in &mut self.observers {
            observer.on_clock_advance(old_time, new_time);
        }
    }

    fn admit_arrival(&mut self, now: SimTime) -> SimulationEvent {
        self.state.generated += 1;
        let profile = self.source.next_profile(self.state.generated);
        let service_time = self.timing.service_duration();
        let customer = Customer::new(profile, now, service_time);

        let record = customer.clone();
        let event = match self.queue.enqueue(customer) {
            Ok(()) => SimulationEvent::Arrived {
                time: now,
                customer: record,
                queue_len: self.queue.len(),
            },
            Err(customer) => {
                self.state.rejected += 1;
                SimulationEvent::Rejected { time: now, customer }
            }
        };

        self.state.next_arrival = Some(now + self.timing.inter_arrival());
        event
    }

    fn start_service(&mut self, now: SimTime, customer: Customer) -> SimulationEvent {
        let wait = customer.wait_until(now);
        self.state.total_wait += wait;
        self.state.served += 1;
        self.state.cashier.start_service(now, customer.service_time);
        SimulationEvent::ServiceStarted {
            time: now,
            customer,
            wait,
            queue_len: self.queue.len(),
        }
    }
}
