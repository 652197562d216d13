//! Collaborator seams for evaluation reads and simulation writes.

use std::error::Error as StdError;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{SimulationOutcome, SimulationParams};

/// Read-only access to an employee's evaluation history.
pub trait EvaluationStore {
    type Error: StdError + Send + Sync + 'static;

    /// Returns the most recent non-null score for the employee, ordered
    /// by evaluation date descending, or `None` if no qualifying record
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns the store's own error if the lookup itself fails. The
    /// engine treats such failures like an absent record and falls back
    /// to the calibrated default.
    fn latest_score(&self, employee_id: i64) -> Result<Option<f64>, Self::Error>;
}

/// Write access for completed simulation runs.
pub trait SimulationStore {
    type Error: StdError + Send + Sync + 'static;

    /// Persists a completed run and returns the generated identifier.
    ///
    /// Called strictly after a successful simulation; the read that
    /// seeded the run and this write are separate, non-atomic
    /// operations.
    ///
    /// # Errors
    ///
    /// Returns the store's own error if the write fails.
    fn persist(&self, record: &SimulationRecord) -> Result<SimulationId, Self::Error>;
}

/// Identifier generated by the simulation store for a persisted run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SimulationId(pub i64);

/// A completed run as handed to the simulation store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationRecord {
    /// The employee the projection was run for.
    pub employee_id: i64,
    /// The input parameters, echoed for auditability.
    pub parametres: SimulationParams,
    /// The normalized output trajectory.
    pub resultats: SimulationOutcome,
    /// When the run was generated.
    pub generated_at: Timestamp,
}
