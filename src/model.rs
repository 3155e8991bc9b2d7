use num_traits::Float;

/// Which reduced Hessian [`Model::hessian_action`] applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HessianMode {
    /// Gauss-Newton approximation. Positive semi-definite by construction,
    /// used in the early outer iterations for robustness.
    GaussNewton,
    /// Full Newton Hessian. Possibly indefinite away from a minimizer.
    Full,
}

/// Reduced-space model of a PDE-constrained inverse problem.
///
/// Implementors encapsulate the forward and adjoint solves behind three
/// operations on flat parameter vectors: objective value, reduced gradient,
/// and reduced Hessian applied to a vector. The solver treats each call as
/// opaque and possibly expensive, and issues the minimum it needs: one
/// `gradient` per outer iteration, one `hessian_action` per inner CG
/// iteration, one `cost` per line-search trial plus one at the start.
///
/// Methods take `&mut self` to allow caching of state/adjoint solutions and
/// evaluation counting.
pub trait Model<F: Float> {
    /// Dimension of the parameter space. Fixed for the lifetime of the model;
    /// every vector passed in or out has this length.
    fn parameter_dim(&self) -> usize;

    /// Objective value at `p`.
    fn cost(&mut self, p: &[F]) -> F;

    /// Reduced gradient at `p`.
    fn gradient(&mut self, p: &[F]) -> Vec<F>;

    /// Apply the reduced Hessian at `p` to `dir`, without materializing it.
    fn hessian_action(&mut self, p: &[F], dir: &[F], mode: HessianMode) -> Vec<F>;
}
