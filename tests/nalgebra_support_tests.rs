#![cfg(feature = "nalgebra")]

use approx::assert_relative_eq;
use nalgebra::{DMatrix, DVector};
use newton_cg::nalgebra_support::{optimal_parameter_dvector, solve_dvector, DenseQuadraticModel};
use newton_cg::{SolverSettings, TerminationReason};

#[test]
fn dense_quadratic_reaches_target() {
    let hessian = DMatrix::from_row_slice(2, 2, &[4.0, 1.0, 1.0, 3.0]);
    let target = DVector::from_vec(vec![1.0, -2.0]);
    let model = DenseQuadraticModel::new(hessian, target).unwrap();

    let result = solve_dvector(SolverSettings::default(), model, &DVector::zeros(2)).unwrap();

    assert_eq!(result.termination, TerminationReason::Converged);
    assert_relative_eq!(result.optimal_parameter[0], 1.0, epsilon = 1e-4);
    assert_relative_eq!(result.optimal_parameter[1], -2.0, epsilon = 1e-4);
}

#[test]
fn identity_hessian_takes_one_newton_step() {
    let hessian = DMatrix::identity(3, 3);
    let target = DVector::from_vec(vec![1.0, 2.0, 3.0]);
    let model = DenseQuadraticModel::new(hessian, target).unwrap();

    let result = solve_dvector(SolverSettings::default(), model, &DVector::zeros(3)).unwrap();

    assert!(result.converged);
    assert_eq!(result.num_iterations, 1);

    let p = optimal_parameter_dvector(&result);
    assert_eq!(p.len(), 3);
    for (i, expected) in [1.0, 2.0, 3.0].into_iter().enumerate() {
        assert_relative_eq!(p[i], expected, epsilon = 1e-10);
    }
}

#[test]
fn non_square_hessian_is_rejected() {
    let hessian = DMatrix::<f64>::zeros(2, 3);
    let target = DVector::from_vec(vec![1.0, 2.0]);
    assert!(DenseQuadraticModel::new(hessian, target).is_none());
}

#[test]
fn hessian_target_dimension_mismatch_is_rejected() {
    let hessian = DMatrix::<f64>::identity(2, 2);
    let target = DVector::from_vec(vec![1.0, 2.0, 3.0]);
    assert!(DenseQuadraticModel::new(hessian, target).is_none());
}
