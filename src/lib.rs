pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod solver;

pub use error::{BaseError, Result};
pub use models::{BaseRecipe, SolutionRecord};
pub use solver::{calculate_base, SolveMethod, SolverConfig};
