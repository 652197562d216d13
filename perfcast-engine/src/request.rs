//! The simulation request contract.

use perfcast_core::Scenario;
use serde::{Deserialize, Serialize};

/// A request to project one employee's performance.
///
/// Mirrors the JSON produced by the request-handling collaborator.
/// Fields beyond the ones listed here are accepted and ignored;
/// validating well-formed values (for example `duree_mois >= 1`) is the
/// request layer's job, not this crate's.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SimulationRequest {
    #[serde(alias = "employe_id")]
    pub employee_id: i64,

    #[serde(default)]
    pub parametres: SimulationParams,
}

/// Scenario parameters for a simulation run.
///
/// The French field names are the wire contract and are serialized
/// verbatim into the persisted record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParams {
    /// Scenario tag, for example "standard", "formation", or
    /// "augmentation_charge".
    #[serde(default = "default_scenario")]
    pub scenario: String,

    /// Projection horizon in whole months.
    #[serde(default = "default_horizon")]
    pub duree_mois: u32,

    /// Optional stress-multiplier override for "augmentation_charge".
    #[serde(default)]
    pub facteur_stress: Option<f64>,

    /// Optional direct-impact override for "formation".
    #[serde(default)]
    pub impact_formation: Option<f64>,
}

impl SimulationParams {
    /// Resolves the tag and overrides into a [`Scenario`].
    #[must_use]
    pub fn scenario(&self) -> Scenario {
        Scenario::from_tag(&self.scenario, self.facteur_stress, self.impact_formation)
    }
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            scenario: default_scenario(),
            duree_mois: default_horizon(),
            facteur_stress: None,
            impact_formation: None,
        }
    }
}

fn default_scenario() -> String {
    "standard".to_string()
}

fn default_horizon() -> u32 {
    6
}
