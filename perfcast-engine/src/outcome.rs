//! The simulation output contract.

use perfcast_core::Trajectory;
use serde::{Deserialize, Serialize};

/// The output trajectory of one simulation run.
///
/// Two parallel ordered sequences of equal length: the relative month
/// offsets and the predicted performance at each offset. The field
/// names are the wire contract consumed by the persistence
/// collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    pub temps_relatif_mois: Vec<f64>,
    pub performance_predite: Vec<f64>,
}

impl SimulationOutcome {
    /// Returns the number of sampled months (horizon + 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.temps_relatif_mois.len()
    }

    /// Returns whether the outcome holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.temps_relatif_mois.is_empty()
    }
}

impl From<&Trajectory> for SimulationOutcome {
    fn from(trajectory: &Trajectory) -> Self {
        Self {
            temps_relatif_mois: trajectory
                .months()
                .into_iter()
                .map(f64::from)
                .collect(),
            performance_predite: trajectory.scores(),
        }
    }
}
