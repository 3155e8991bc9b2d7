use num_traits::Float;

use crate::cg::{truncated_cg, CgStatus};
use crate::error::ValidationError;
use crate::line_search::armijo_backtracking;
use crate::linalg::{axpy, dot, norm};
use crate::model::{HessianMode, Model};
use crate::result::{SolverResult, TerminationReason};
use crate::settings::SolverSettings;

/// Inexact Newton solver with truncated-CG inner iterations.
///
/// Each outer iteration solves the Newton system `H d = -g` approximately
/// with [`truncated_cg`], using an Eisenstat-Walker forcing term to tighten
/// the inner tolerance as the gradient shrinks, then globalizes the step
/// with Armijo backtracking. The first few iterations apply the
/// Gauss-Newton Hessian, the rest the full Hessian.
///
/// ```
/// use newton_cg::{HessianMode, Model, NewtonCgSolver, SolverSettings};
///
/// struct Paraboloid;
///
/// impl Model<f64> for Paraboloid {
///     fn parameter_dim(&self) -> usize {
///         2
///     }
///
///     fn cost(&mut self, p: &[f64]) -> f64 {
///         0.5 * (4.0 * p[0] * p[0] + p[1] * p[1])
///     }
///
///     fn gradient(&mut self, p: &[f64]) -> Vec<f64> {
///         vec![4.0 * p[0], p[1]]
///     }
///
///     fn hessian_action(&mut self, _p: &[f64], dir: &[f64], _mode: HessianMode) -> Vec<f64> {
///         vec![4.0 * dir[0], dir[1]]
///     }
/// }
///
/// let mut solver = NewtonCgSolver::new(SolverSettings::default(), Paraboloid).unwrap();
/// let result = solver.solve(&[1.0, -2.0]).unwrap();
/// assert!(result.converged);
/// assert!(result.optimal_parameter.iter().all(|&x| x.abs() < 1e-6));
/// ```
pub struct NewtonCgSolver<F, M> {
    settings: SolverSettings<F>,
    model: M,
}

impl<F: Float, M: Model<F>> NewtonCgSolver<F, M> {
    /// Validates the settings and wraps the model.
    pub fn new(settings: SolverSettings<F>, model: M) -> Result<Self, ValidationError> {
        settings.validate()?;
        Ok(Self { settings, model })
    }

    /// Borrows the wrapped model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Consumes the solver and returns the wrapped model.
    pub fn into_model(self) -> M {
        self.model
    }

    /// Runs the Newton iteration from `initial_guess`.
    ///
    /// Fails before touching the model if the guess does not match the
    /// model's parameter dimension. All other outcomes, including line
    /// search and curvature failures, are reported through the
    /// [`TerminationReason`] in the returned result.
    pub fn solve(&mut self, initial_guess: &[F]) -> Result<SolverResult<F>, ValidationError> {
        let dim = self.model.parameter_dim();
        if initial_guess.len() != dim {
            return Err(ValidationError::DimensionMismatch {
                expected: dim,
                actual: initial_guess.len(),
            });
        }

        let mut p = initial_guess.to_vec();
        let mut grad = self.model.gradient(&p);
        let mut gradnorm = norm(&grad);
        let gradnorm0 = gradnorm;
        let tol = self
            .settings
            .absolute_tolerance
            .max(self.settings.relative_tolerance * gradnorm0);
        let mut cost = self.model.cost(&p);

        let mut eta = self.settings.coarsest_tolerance_cg;
        let mut total_cg_iterations = 0;
        let mut it = 0;
        let mut converged = false;
        let mut reason = TerminationReason::MaxIterationsReached;

        if self.settings.verbose {
            print_header();
        }

        while it < self.settings.max_num_newton_iterations {
            if gradnorm <= tol {
                converged = true;
                reason = TerminationReason::Converged;
                break;
            }

            let mode = if it < self.settings.num_gauss_newton_iterations {
                HessianMode::GaussNewton
            } else {
                HessianMode::Full
            };

            eta = forcing_term(eta, gradnorm, gradnorm0, self.settings.coarsest_tolerance_cg);
            let cg = truncated_cg(
                &mut self.model,
                &p,
                &grad,
                mode,
                eta,
                self.settings.max_num_cg_iterations,
            );
            total_cg_iterations += cg.iterations;

            if cg.iterations == 0 && cg.status != CgStatus::Converged {
                reason = match cg.status {
                    CgStatus::NegativeCurvature => TerminationReason::CgIndefiniteOnFirstIteration,
                    _ => TerminationReason::CgMaxIterationsReached,
                };
                break;
            }

            let gdm = dot(&grad, &cg.direction);
            let ls = match armijo_backtracking(
                &mut self.model,
                &p,
                &cg.direction,
                cost,
                &grad,
                &self.settings,
            ) {
                Some(ls) => ls,
                None => {
                    reason = TerminationReason::LineSearchFailure;
                    break;
                }
            };

            axpy(ls.alpha, &cg.direction, &mut p);
            cost = ls.cost;
            it += 1;

            if self.settings.verbose {
                print_iteration(it, cg.iterations, cost, gdm, gradnorm, ls.alpha, eta);
            }

            grad = self.model.gradient(&p);
            gradnorm = norm(&grad);
        }

        Ok(SolverResult {
            optimal_parameter: p,
            final_cost: cost,
            final_gradient_norm: gradnorm,
            num_iterations: it,
            total_cg_iterations,
            converged,
            termination: reason,
        })
    }
}

/// Eisenstat-Walker forcing term, clamped so it never loosens.
fn forcing_term<F: Float>(eta_prev: F, gradnorm: F, gradnorm0: F, coarsest: F) -> F {
    eta_prev.min(coarsest.min((gradnorm / gradnorm0).sqrt()))
}

fn as_f64<F: Float>(value: F) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

fn print_header() {
    println!(
        "{:>3} {:>6} {:>15} {:>15} {:>15} {:>15} {:>15}",
        "it", "cg_it", "cost", "(g, dm)", "||g||L2", "alpha", "tol_cg"
    );
}

fn print_iteration<F: Float>(
    it: usize,
    cg_iterations: usize,
    cost: F,
    gdm: F,
    gradnorm: F,
    alpha: F,
    eta: F,
) {
    println!(
        "{:>3} {:>6} {:>15.6e} {:>15.6e} {:>15.6e} {:>15.6e} {:>15.6e}",
        it,
        cg_iterations,
        as_f64(cost),
        as_f64(gdm),
        as_f64(gradnorm),
        as_f64(alpha),
        as_f64(eta),
    );
}
