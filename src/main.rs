use std::io;

use checkout_sim::console::{banner, choose_input_mode, ConsoleObserver};
use checkout_sim::core::execution::config::SimulationConfig;
use checkout_sim::core::simulation_engine::CheckoutSimulation;
use checkout_sim::core::source::{AutomaticSource, CustomerSource, InputMode, ManualSource};
use log::warn;

const SEED_VAR: &str = "CHECKOUT_SIM_SEED";

/// Optional fixed seed for reproducible runs
fn seed_from_env() -> Option<u64> {
    let raw = std::env::var(SEED_VAR).ok()?;
    match raw.trim().parse() {
        Ok(seed) => Some(seed),
        Err(e) => {
            warn!("Ignoring {}={:?}: {}", SEED_VAR, raw, e);
            None
        }
    }
}

fn main() -> Result<(), String> {
    env_logger::init();

    let config = SimulationConfig::new().with_random_seed(seed_from_env());
    println!("{}", banner(&config));

    let mut input = io::stdin().lock();
    let mode = choose_input_mode(&mut input, &mut io::stdout());

    let source: Box<dyn CustomerSource> = match mode {
        InputMode::Manual => Box::new(ManualSource::new(input, io::stdout())),
        InputMode::Automatic => {
            Box::new(AutomaticSource::from_config(&config).map_err(|e| e.to_string())?)
        }
    };

    let mut simulation = CheckoutSimulation::with_source(config, source).map_err(|e| e.to_string())?;
    simulation.add_observer(Box::new(ConsoleObserver::new(io::stdout())));

    let report = simulation.run();
    println!("\n{}", report);

    Ok(())
}
