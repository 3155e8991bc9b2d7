pub mod cg;
pub mod error;
pub mod linalg;
pub mod line_search;
pub mod model;
pub mod result;
pub mod settings;
pub mod solver;

#[cfg(feature = "nalgebra")]
pub mod nalgebra_support;

pub use cg::{truncated_cg, CgOutcome, CgStatus};
pub use error::ValidationError;
pub use line_search::{armijo_backtracking, LineSearchOutcome};
pub use model::{HessianMode, Model};
pub use result::{SolverResult, TerminationReason};
pub use settings::SolverSettings;
pub use solver::NewtonCgSolver;

#[cfg(feature = "nalgebra")]
pub use nalgebra_support::{optimal_parameter_dvector, solve_dvector, DenseQuadraticModel};
