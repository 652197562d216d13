/// Calibration constants for the performance dynamics model.
///
/// All tunable values live here rather than inside the model logic, so
/// they can be adjusted or tested independently of the algorithm. The
/// defaults are the values the model was originally calibrated with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    /// Base monthly growth rate (learning, motivation).
    pub base_growth: f64,

    /// Base monthly decay rate (fatigue, attrition).
    pub base_decay: f64,

    /// Starting score used when an employee has no usable evaluation.
    pub default_initial_score: f64,

    /// Direct monthly boost applied by the training scenario when no
    /// override is given.
    pub formation_boost: f64,

    /// Stress multiplier applied by the increased-load scenario when no
    /// override is given.
    pub charge_stress: f64,

    /// Direct monthly impact of the increased-load scenario.
    pub charge_impact: f64,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            base_growth: 0.2,
            base_decay: 0.1,
            default_initial_score: 70.0,
            formation_boost: 2.0,
            charge_stress: 0.5,
            charge_impact: -1.0,
        }
    }
}
