use std::error::Error as StdError;

use thiserror::Error;

/// Failure of one simulation run.
///
/// A run fails with exactly one of these; a partially computed
/// trajectory is never returned.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// The integrator could not produce a stable solution. Deterministic
    /// given the inputs, so the run is never retried automatically; the
    /// solver diagnostic is preserved in the source chain.
    #[error("performance projection did not converge")]
    Convergence(#[from] perfcast_solve::ivp::Error),

    /// The simulation store rejected the write after a successful run.
    /// The computed trajectory is discarded, not returned partially.
    #[error("failed to persist simulation results")]
    Persistence(#[source] Box<dyn StdError + Send + Sync>),

    /// The worker task running the simulation was cancelled or
    /// panicked.
    #[error("simulation worker did not complete")]
    Worker(#[source] tokio::task::JoinError),
}

impl SimulationError {
    /// Returns whether the failure is attributable to the caller's
    /// inputs rather than the system.
    ///
    /// Convergence failures are a deterministic function of the request
    /// and are reported as client errors; persistence and worker
    /// failures are server-side.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Convergence(_))
    }
}
