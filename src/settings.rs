use num_traits::Float;

use crate::error::ValidationError;

/// Configuration of the Newton-CG solver.
///
/// All fields have default values, provided separately for `f64` and `f32`.
/// The five float fields must lie in the open interval (0, 1);
/// [`validate`](SolverSettings::validate) rejects anything else, NaN
/// included. The iteration caps are plain counts and may be zero, in which
/// case the corresponding loop performs no work and the run terminates with
/// the matching reason.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverSettings<F> {
    /// Gradient-norm reduction factor for convergence, measured against the
    /// gradient norm at the initial guess.
    pub relative_tolerance: F,
    /// Absolute gradient-norm floor for convergence.
    pub absolute_tolerance: F,
    /// Minimum magnitude of the directional derivative `(g, d)` for a search
    /// direction to count as descent.
    pub gradient_projection_tolerance: F,
    /// Outer (Newton) iteration cap.
    pub max_num_newton_iterations: usize,
    /// Outer iterations using the Gauss-Newton Hessian before switching to
    /// the full Newton Hessian. Zero means full Newton from the start.
    pub num_gauss_newton_iterations: usize,
    /// Upper bound on the inner CG relative tolerance.
    pub coarsest_tolerance_cg: F,
    /// Inner CG iteration cap per outer iteration.
    pub max_num_cg_iterations: usize,
    /// Sufficient-decrease constant `c` in the Armijo condition.
    pub armijo_line_search_constant: F,
    /// Backtracking trial cap per line search.
    pub max_num_line_search_iterations: usize,
    /// Print a per-iteration diagnostic table to stdout.
    pub verbose: bool,
}

impl Default for SolverSettings<f64> {
    fn default() -> Self {
        SolverSettings {
            relative_tolerance: 1e-6,
            absolute_tolerance: 1e-12,
            gradient_projection_tolerance: 1e-18,
            max_num_newton_iterations: 20,
            num_gauss_newton_iterations: 5,
            coarsest_tolerance_cg: 0.5,
            max_num_cg_iterations: 100,
            armijo_line_search_constant: 1e-4,
            max_num_line_search_iterations: 10,
            verbose: false,
        }
    }
}

impl Default for SolverSettings<f32> {
    fn default() -> Self {
        SolverSettings {
            relative_tolerance: 1e-4,
            absolute_tolerance: 1e-7,
            gradient_projection_tolerance: 1e-12,
            max_num_newton_iterations: 20,
            num_gauss_newton_iterations: 5,
            coarsest_tolerance_cg: 0.5,
            max_num_cg_iterations: 100,
            armijo_line_search_constant: 1e-4,
            max_num_line_search_iterations: 10,
            verbose: false,
        }
    }
}

impl<F: Float> SolverSettings<F> {
    /// Check every float field against its (0, 1) domain.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("relative_tolerance", self.relative_tolerance),
            ("absolute_tolerance", self.absolute_tolerance),
            (
                "gradient_projection_tolerance",
                self.gradient_projection_tolerance,
            ),
            ("coarsest_tolerance_cg", self.coarsest_tolerance_cg),
            (
                "armijo_line_search_constant",
                self.armijo_line_search_constant,
            ),
        ];
        for (name, value) in fields {
            // Written so that NaN fails the test as well
            if !(value > F::zero() && value < F::one()) {
                return Err(ValidationError::SettingOutOfDomain {
                    name,
                    value: value.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        Ok(())
    }
}
