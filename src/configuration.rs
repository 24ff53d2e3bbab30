//! Numeric and iteration settings for a solve call

/// Numeric tolerance governing entering-column selection, the minimum-ratio
/// test, and pivot-row elimination
pub const PIVOT_TOLERANCE: f64 = 1e-12;

/// Tunable settings for a single solve call.
///
/// Settings are plain values owned by the caller; the solver keeps no
/// process-wide state between calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverSettings {
    /// Tolerance applied wherever the pivot engine compares against zero
    pub tolerance: f64,
    /// Optional bound on simplex iterations. `None` reproduces the classic
    /// uncapped loop, which can cycle on degenerate inputs.
    pub max_iterations: Option<u64>,
}

impl Default for SolverSettings {
    fn default() -> Self {
        SolverSettings {
            tolerance: PIVOT_TOLERANCE,
            max_iterations: None,
        }
    }
}
