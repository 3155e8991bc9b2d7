use num_traits::Float;

use crate::linalg::{dot, scaled_sum};
use crate::model::Model;
use crate::settings::SolverSettings;

/// Result of a successful backtracking search.
#[derive(Debug)]
pub struct LineSearchOutcome<F> {
    /// The accepted step size.
    pub alpha: F,
    /// Cost at `p + alpha * d`.
    pub cost: F,
    /// Number of cost evaluations used.
    pub evals: usize,
}

/// Backtracking line search satisfying the Armijo (sufficient decrease)
/// condition.
///
/// Tries `alpha = 1, 1/2, 1/4, ...` for at most
/// `max_num_line_search_iterations` trials and accepts the first one with
/// `cost(p + alpha*d) <= cost_p + c * alpha * (g, d)`.
///
/// The directional derivative must satisfy
/// `(g, d) < -gradient_projection_tolerance` before any trial is evaluated;
/// a direction failing that test is not usable for descent and the search
/// fails without touching the model. Returns `None` on failure.
pub fn armijo_backtracking<F: Float, M: Model<F>>(
    model: &mut M,
    p: &[F],
    d: &[F],
    cost_p: F,
    grad: &[F],
    settings: &SolverSettings<F>,
) -> Option<LineSearchOutcome<F>> {
    let gdm = dot(grad, d);

    // Not a sufficiently negative directional derivative
    if gdm >= -settings.gradient_projection_tolerance {
        return None;
    }

    let half = F::one() / (F::one() + F::one());
    let c = settings.armijo_line_search_constant;
    let mut alpha = F::one();
    let mut evals = 0;

    for _ in 0..settings.max_num_line_search_iterations {
        let trial = scaled_sum(p, alpha, d);
        let cost_new = model.cost(&trial);
        evals += 1;

        // Armijo condition: cost(p + alpha*d) <= cost(p) + c * alpha * (g, d)
        if cost_new <= cost_p + c * alpha * gdm {
            return Some(LineSearchOutcome {
                alpha,
                cost: cost_new,
                evals,
            });
        }

        alpha = alpha * half;
    }

    None
}
