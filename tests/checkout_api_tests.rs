use std::io::{self, Cursor};

use checkout_sim::console::format_event;
use checkout_sim::core::source::{AutomaticSource, ManualSource};
use checkout_sim::core::timing::UniformTiming;
use checkout_sim::{BoundedQueue, CheckoutSimulation, SimulationConfig, SimulationEvent};

#[test]
fn test_default_program_run() {
    let config = SimulationConfig::default().with_random_seed(Some(12345));
    let mut simulation = CheckoutSimulation::automatic(config).unwrap();

    let report = simulation.run();

    assert_eq!(report.served, 100);
    assert!(report.attempted_arrivals >= report.served + report.rejected_arrivals);
    assert!(report.average_wait >= 0.0);
    let summary = report.to_string();
    assert!(summary.starts_with("Simulation finished: Served 100 customers.\n"));
    assert!(summary.contains(&format!("Total attempted arrivals: {}", report.attempted_arrivals)));
    assert!(summary.ends_with(" seconds"));
}

#[test]
fn test_manual_mode_with_scripted_console() {
    // Named first customer, then blank answers for everyone else
    let script = "Ann\n42.5\n".to_string() + &"\n".repeat(200);
    let source = ManualSource::new(Cursor::new(script), io::sink());
    let config = SimulationConfig::new()
        .with_target_served(5)
        .with_random_seed(Some(3));
    let mut simulation = CheckoutSimulation::with_source(config, Box::new(source)).unwrap();

    let mut arrivals = Vec::new();
    while !simulation.is_finished() {
        for event in simulation.step() {
            if let SimulationEvent::Arrived { customer, .. } | SimulationEvent::Rejected { customer, .. } = event {
                arrivals.push(customer);
            }
        }
    }

    assert_eq!(arrivals[0].name, "Ann");
    assert_eq!(arrivals[0].cash, 42.5);
    for (index, customer) in arrivals.iter().enumerate().skip(1) {
        assert_eq!(customer.name, format!("Guest{}", index + 1));
        assert_eq!(customer.cash, 0.0);
    }
    assert_eq!(simulation.state().served, 5);
}

#[test]
fn test_custom_timing_and_source() {
    let config = SimulationConfig::new()
        .with_queue_capacity(2)
        .with_target_served(20)
        .with_service_duration(4, 4)
        .with_arrival_interval(1, 1);
    let mut simulation = CheckoutSimulation::new(
        config,
        Box::new(AutomaticSource::new((5, 5), Some(1)).unwrap()),
        Box::new(UniformTiming::new((1, 1), (4, 4), Some(1)).unwrap()),
    )
    .unwrap();

    let report = simulation.run();

    // Arrivals every tick against four-tick service keep the line saturated
    assert_eq!(report.served, 20);
    assert!(report.rejected_arrivals > 0);
    assert!(simulation.queue().len() <= 2);
}

#[test]
fn test_every_event_but_cashier_freed_renders() {
    let config = SimulationConfig::new().with_random_seed(Some(99));
    let mut simulation = CheckoutSimulation::automatic(config).unwrap();

    while !simulation.is_finished() {
        for event in simulation.step() {
            let line = format_event(&event);
            match event {
                SimulationEvent::CashierFreed { .. } => assert!(line.is_none()),
                _ => assert!(line.unwrap().starts_with(&format!("At time {}: ", event.time()))),
            }
        }
    }
}

#[test]
fn test_bounded_queue_public_api() {
    let mut queue = BoundedQueue::new(5);
    for i in 0..7 {
        let accepted = queue.enqueue(i).is_ok();
        assert_eq!(accepted, i < 5);
    }
    assert_eq!(queue.len(), 5);
    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
}
