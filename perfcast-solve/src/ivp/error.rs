use ode_solvers::dop_shared::IntegrationError;
use thiserror::Error;

/// Errors that can occur while solving an initial value problem.
///
/// Each variant is a deterministic function of the solver inputs, so a
/// failed solve is never worth retrying with the same inputs. The
/// diagnostic carried by the underlying integration error is preserved
/// for operator visibility.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("integration interval must end after zero, got x_end = {x_end}")]
    InvalidInterval { x_end: f64 },

    #[error("initial state is not finite: {y}")]
    NonFiniteInitialState { y: f64 },

    /// The stepper could not keep the local error within tolerance
    /// inside its step budget.
    #[error(transparent)]
    Integration(#[from] IntegrationError),

    #[error("non-finite sample {y} at x = {x}")]
    NonFiniteSample { x: f64, y: f64 },

    #[error("solver produced {actual} samples, expected {expected}")]
    IncompleteOutput { expected: usize, actual: usize },
}
