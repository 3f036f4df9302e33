pub mod cashier;
pub mod event;
pub mod execution;
pub mod queue;
pub mod report;
pub mod simulation_engine;
pub mod source;
pub mod timing;
pub mod types;
