//! Simulation orchestration for Perfcast.
//!
//! This crate wires the pure model from `perfcast-core` and the solver
//! from `perfcast-solve` to the outside world: it resolves the initial
//! state from an evaluation store, runs the projection, normalizes the
//! result, and hands the outcome to a simulation store. Both stores are
//! traits so persistence stays an external collaborator.
//!
//! A run is a synchronous, CPU-bound computation over immutable inputs.
//! Services that dispatch requests on an async runtime should use
//! [`run_detached`] so the blocking integration never stalls the
//! request path.

mod engine;
mod error;
mod outcome;
mod request;
mod resolver;
mod store;

pub use engine::{CompletedSimulation, Engine, run_detached};
pub use error::SimulationError;
pub use outcome::SimulationOutcome;
pub use request::{SimulationParams, SimulationRequest};
pub use resolver::resolve_initial_score;
pub use store::{EvaluationStore, SimulationId, SimulationRecord, SimulationStore};
