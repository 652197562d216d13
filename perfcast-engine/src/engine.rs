//! The simulation engine: resolve, integrate, normalize, persist.

use std::sync::Arc;

use perfcast_core::{Calibration, PerformanceModel, Scenario, Trajectory};
use perfcast_solve::ivp;
use tracing::{debug, info, warn};

use crate::{
    EvaluationStore, SimulationError, SimulationId, SimulationOutcome, SimulationRecord,
    SimulationRequest, SimulationStore, resolver::resolve_initial_score,
};

/// A persisted simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedSimulation {
    /// Identifier generated by the simulation store.
    pub id: SimulationId,
    /// The normalized output trajectory.
    pub outcome: SimulationOutcome,
}

/// Runs performance projections against a pair of collaborator stores.
///
/// The engine itself is stateless across runs: each run is a pure
/// function of the request, the calibration, and the latest evaluation
/// read, so concurrent runs share nothing mutable and need no locking.
pub struct Engine<E, S> {
    calibration: Calibration,
    solver: ivp::Config,
    evaluations: E,
    simulations: S,
}

impl<E, S> Engine<E, S>
where
    E: EvaluationStore,
    S: SimulationStore,
{
    /// Creates an engine with default calibration and solver settings.
    pub fn new(evaluations: E, simulations: S) -> Self {
        Self {
            calibration: Calibration::default(),
            solver: ivp::Config::default(),
            evaluations,
            simulations,
        }
    }

    /// Replaces the calibration constants.
    #[must_use]
    pub fn with_calibration(mut self, calibration: Calibration) -> Self {
        self.calibration = calibration;
        self
    }

    /// Replaces the solver configuration.
    #[must_use]
    pub fn with_solver_config(mut self, config: ivp::Config) -> Self {
        self.solver = config;
        self
    }

    /// Computes the projected trajectory for a request without
    /// persisting it.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Convergence`] if the integrator
    /// cannot produce a stable solution for these inputs.
    pub fn project(
        &self,
        request: &SimulationRequest,
    ) -> Result<SimulationOutcome, SimulationError> {
        let params = &request.parametres;

        if !Scenario::is_known_tag(&params.scenario) {
            // Current contract: unknown tags run as "standard".
            warn!(
                employee_id = request.employee_id,
                scenario = %params.scenario,
                "unrecognized scenario tag, projecting the standard scenario"
            );
        }

        let initial = resolve_initial_score(&self.evaluations, request.employee_id, &self.calibration);
        let model = PerformanceModel::new(params.scenario().coefficients(&self.calibration));

        let solution = ivp::solve(
            &model,
            initial.value(),
            f64::from(params.duree_mois),
            &self.solver,
        )?;

        debug!(
            employee_id = request.employee_id,
            evals = solution.evals,
            accepted_steps = solution.accepted_steps,
            rejected_steps = solution.rejected_steps,
            "projection integrated"
        );

        let trajectory = Trajectory::normalized(&solution.values());
        Ok(SimulationOutcome::from(&trajectory))
    }

    /// Runs a simulation end to end: project, then persist.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Convergence`] if the projection
    /// fails, or [`SimulationError::Persistence`] if the simulation
    /// store rejects the completed run. A persistence failure discards
    /// the computed trajectory.
    pub fn run(&self, request: &SimulationRequest) -> Result<CompletedSimulation, SimulationError> {
        info!(
            employee_id = request.employee_id,
            scenario = %request.parametres.scenario,
            horizon_months = request.parametres.duree_mois,
            "running performance simulation"
        );

        let outcome = self.project(request)?;

        let record = SimulationRecord {
            employee_id: request.employee_id,
            parametres: request.parametres.clone(),
            resultats: outcome.clone(),
            generated_at: jiff::Timestamp::now(),
        };

        let id = self
            .simulations
            .persist(&record)
            .map_err(|error| SimulationError::Persistence(Box::new(error)))?;

        info!(
            employee_id = request.employee_id,
            simulation_id = id.0,
            samples = outcome.len(),
            "simulation persisted"
        );

        Ok(CompletedSimulation { id, outcome })
    }
}

/// Runs a simulation on a blocking worker thread.
///
/// The integration is CPU-bound, so services handling requests on an
/// async runtime should go through this wrapper instead of calling
/// [`Engine::run`] directly on a runtime thread.
///
/// # Errors
///
/// Propagates the run's [`SimulationError`], or returns
/// [`SimulationError::Worker`] if the worker task is cancelled or
/// panics.
pub async fn run_detached<E, S>(
    engine: Arc<Engine<E, S>>,
    request: SimulationRequest,
) -> Result<CompletedSimulation, SimulationError>
where
    E: EvaluationStore + Send + Sync + 'static,
    S: SimulationStore + Send + Sync + 'static,
{
    match tokio::task::spawn_blocking(move || engine.run(&request)).await {
        Ok(result) => result,
        Err(join_error) => Err(SimulationError::Worker(join_error)),
    }
}
