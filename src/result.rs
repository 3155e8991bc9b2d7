use std::fmt;

/// Result of a [`solve`](crate::NewtonCgSolver::solve) call.
///
/// Produced exactly once per run and immutable afterwards. On failure paths
/// it holds the best iterate reached before the failure, so callers can
/// inspect partial progress.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverResult<F> {
    /// Final parameter iterate.
    pub optimal_parameter: Vec<F>,
    /// Objective value at the final iterate.
    pub final_cost: F,
    /// Gradient norm at the final iterate.
    pub final_gradient_norm: F,
    /// Number of outer (Newton) iterations performed.
    pub num_iterations: usize,
    /// Inner CG iterations accumulated over the whole run.
    pub total_cg_iterations: usize,
    /// Whether the gradient-norm convergence test was met.
    pub converged: bool,
    /// Why the solver stopped.
    pub termination: TerminationReason,
}

/// Why the outer iteration stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerminationReason {
    /// Gradient norm fell below `max(absolute_tolerance, relative_tolerance
    /// * initial gradient norm)`.
    Converged,
    /// Reached the outer iteration cap.
    MaxIterationsReached,
    /// Line search could not find a sufficient decrease along the direction.
    LineSearchFailure,
    /// CG hit negative curvature on its very first inner step, leaving no
    /// usable direction.
    CgIndefiniteOnFirstIteration,
    /// CG hit its iteration cap without completing a single step.
    CgMaxIterationsReached,
}

impl TerminationReason {
    /// Whether this reason counts as success.
    pub fn is_success(&self) -> bool {
        matches!(self, TerminationReason::Converged)
    }
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationReason::Converged => write!(f, "gradient norm below tolerance"),
            TerminationReason::MaxIterationsReached => {
                write!(f, "maximum number of Newton iterations reached")
            }
            TerminationReason::LineSearchFailure => {
                write!(f, "line search failed to find sufficient decrease")
            }
            TerminationReason::CgIndefiniteOnFirstIteration => {
                write!(f, "negative curvature on the first CG iteration")
            }
            TerminationReason::CgMaxIterationsReached => {
                write!(f, "CG iteration cap reached without progress")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_converged_is_success() {
        assert!(TerminationReason::Converged.is_success());
        for reason in [
            TerminationReason::MaxIterationsReached,
            TerminationReason::LineSearchFailure,
            TerminationReason::CgIndefiniteOnFirstIteration,
            TerminationReason::CgMaxIterationsReached,
        ] {
            assert!(!reason.is_success(), "{} should not be success", reason);
        }
    }
}
