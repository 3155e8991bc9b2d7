//! nalgebra adapters for the Newton-CG solver.
//!
//! Thin wrappers accepting `DVector<F>` guesses, plus a dense quadratic
//! model for problems small enough to hold the Hessian in memory.

use nalgebra::{DMatrix, DVector, RealField};
use num_traits::Float;

use crate::error::ValidationError;
use crate::model::{HessianMode, Model};
use crate::result::SolverResult;
use crate::settings::SolverSettings;
use crate::solver::NewtonCgSolver;

/// Quadratic cost `0.5 * (p - t)^T H (p - t)` with a dense Hessian.
///
/// The Hessian does not depend on the parameter, so the Gauss-Newton and
/// full modes coincide and, for positive definite `H`, the solver reaches
/// `t` in a single Newton step.
#[derive(Debug, Clone)]
pub struct DenseQuadraticModel<F> {
    hessian: DMatrix<F>,
    target: DVector<F>,
}

impl<F: Float + RealField> DenseQuadraticModel<F> {
    /// Returns `None` unless `hessian` is square with one row per entry of
    /// `target`.
    pub fn new(hessian: DMatrix<F>, target: DVector<F>) -> Option<Self> {
        if !hessian.is_square() || hessian.nrows() != target.len() {
            return None;
        }
        Some(Self { hessian, target })
    }

    fn difference(&self, p: &[F]) -> DVector<F> {
        DVector::from_column_slice(p) - &self.target
    }
}

impl<F: Float + RealField> Model<F> for DenseQuadraticModel<F> {
    fn parameter_dim(&self) -> usize {
        self.target.len()
    }

    fn cost(&mut self, p: &[F]) -> F {
        let diff = self.difference(p);
        let hd = &self.hessian * &diff;
        let half = F::one() / (F::one() + F::one());
        half * diff.dot(&hd)
    }

    fn gradient(&mut self, p: &[F]) -> Vec<F> {
        let diff = self.difference(p);
        (&self.hessian * diff).as_slice().to_vec()
    }

    fn hessian_action(&mut self, _p: &[F], dir: &[F], _mode: HessianMode) -> Vec<F> {
        let v = DVector::from_column_slice(dir);
        (&self.hessian * v).as_slice().to_vec()
    }
}

/// Run the solver from a `DVector` initial guess.
pub fn solve_dvector<F: Float + RealField, M: Model<F>>(
    settings: SolverSettings<F>,
    model: M,
    initial_guess: &DVector<F>,
) -> Result<SolverResult<F>, ValidationError> {
    let mut solver = NewtonCgSolver::new(settings, model)?;
    solver.solve(initial_guess.as_slice())
}

/// The optimal parameter of a result, returned as a `DVector`.
pub fn optimal_parameter_dvector<F: Float + RealField>(result: &SolverResult<F>) -> DVector<F> {
    DVector::from_vec(result.optimal_parameter.clone())
}
