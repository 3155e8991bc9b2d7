use num_traits::Float;

use crate::linalg::{axpy, dot};
use crate::model::{HessianMode, Model};

/// Why a truncated-CG run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CgStatus {
    /// Residual norm dropped below the relative tolerance.
    Converged,
    /// A search direction exposed non-positive curvature. The returned
    /// direction is the last iterate before the offending step, the zero
    /// vector if that was the first step.
    NegativeCurvature,
    /// Iteration cap reached; the returned direction is the last iterate.
    MaxIterations,
}

/// Direction and statistics returned by [`truncated_cg`].
#[derive(Debug, Clone)]
pub struct CgOutcome<F> {
    /// Approximate solution of `H d = -g`.
    pub direction: Vec<F>,
    /// Why CG stopped.
    pub status: CgStatus,
    /// Number of completed CG iterations (one Hessian application each,
    /// except that a negative-curvature exit spends one application on the
    /// aborted step).
    pub iterations: usize,
    /// Residual norm of `H d = -g` at exit.
    pub residual_norm: F,
}

/// Truncated conjugate gradients for the Newton system `H d = -g` (Steihaug).
///
/// Runs standard CG recurrences from `d = 0`, applying the Hessian
/// matrix-free through the model. Three exits:
/// residual norm below `rel_tolerance * ||g||`, non-positive curvature
/// `p^T H p <= 0` (keep the best iterate so far), or the iteration cap
/// (keep the last iterate). The returned direction is the zero vector only
/// when no iteration completed.
pub fn truncated_cg<F: Float, M: Model<F>>(
    model: &mut M,
    p: &[F],
    grad: &[F],
    mode: HessianMode,
    rel_tolerance: F,
    max_iterations: usize,
) -> CgOutcome<F> {
    let n = grad.len();
    let mut d = vec![F::zero(); n];
    // Residual of H d = -g at d = 0
    let mut r: Vec<F> = grad.iter().map(|&g| F::zero() - g).collect();
    let mut p_dir = r.clone();
    let mut r_dot_r = dot(&r, &r);

    // ||r|| = ||g|| at the zero iterate
    let threshold = rel_tolerance * r_dot_r.sqrt();
    if r_dot_r.sqrt() <= threshold {
        return CgOutcome {
            direction: d,
            status: CgStatus::Converged,
            iterations: 0,
            residual_norm: r_dot_r.sqrt(),
        };
    }

    for iter in 0..max_iterations {
        let hp = model.hessian_action(p, &p_dir, mode);
        let php = dot(&p_dir, &hp);

        if php <= F::zero() {
            return CgOutcome {
                direction: d,
                status: CgStatus::NegativeCurvature,
                iterations: iter,
                residual_norm: r_dot_r.sqrt(),
            };
        }

        let alpha = r_dot_r / php;
        axpy(alpha, &p_dir, &mut d);
        axpy(-alpha, &hp, &mut r);

        let r_dot_r_new = dot(&r, &r);
        if r_dot_r_new.sqrt() <= threshold {
            return CgOutcome {
                direction: d,
                status: CgStatus::Converged,
                iterations: iter + 1,
                residual_norm: r_dot_r_new.sqrt(),
            };
        }

        let beta = r_dot_r_new / r_dot_r;
        r_dot_r = r_dot_r_new;
        for i in 0..n {
            p_dir[i] = r[i] + beta * p_dir[i];
        }
    }

    CgOutcome {
        direction: d,
        status: CgStatus::MaxIterations,
        iterations: max_iterations,
        residual_norm: r_dot_r.sqrt(),
    }
}
