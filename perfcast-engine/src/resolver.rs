//! Resolution of the starting performance score.

use perfcast_core::{Calibration, Score};
use tracing::{debug, warn};

use crate::EvaluationStore;

/// Resolves the initial performance score for an employee.
///
/// Uses the most recent evaluation with a non-null score, saturated
/// into `[0, 100]`. An employee with no usable evaluation, or a store
/// that fails to answer, degrades to the calibrated default rather than
/// erroring: the resolver never fails.
pub fn resolve_initial_score<E: EvaluationStore>(
    store: &E,
    employee_id: i64,
    calibration: &Calibration,
) -> Score {
    match store.latest_score(employee_id) {
        Ok(Some(value)) => {
            let score = Score::clamping(value);
            debug!(employee_id, score = score.value(), "resolved initial score");
            score
        }
        Ok(None) => {
            warn!(
                employee_id,
                default = calibration.default_initial_score,
                "no usable evaluation, starting from the default score"
            );
            Score::clamping(calibration.default_initial_score)
        }
        Err(error) => {
            warn!(
                employee_id,
                error = %error,
                default = calibration.default_initial_score,
                "evaluation lookup failed, starting from the default score"
            );
            Score::clamping(calibration.default_initial_score)
        }
    }
}
