pub mod closure;
pub mod constants;
pub mod direct;
pub mod equations;
pub mod newton;

pub use closure::Closure;
pub use constants::*;
pub use direct::solve_direct;
pub use equations::MassBalance;
pub use newton::{newton_raphson, solve_newton};

use clap::ValueEnum;
use tracing::{debug, warn};

use crate::error::{BaseError, Result};
use crate::models::{BaseRecipe, BaseSolution, SolutionRecord};

/// Strategy used to solve the balance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SolveMethod {
    /// LU decomposition of the 3x3 system.
    #[default]
    Direct,

    /// Newton-Raphson from the even split, bounded by `max_iterations`.
    Newton,
}

/// Solver settings passed explicitly to every solve.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub method: SolveMethod,
    pub max_iterations: usize,
    pub tolerance: f64,

    /// Reject negative masses instead of returning them.
    pub check_feasibility: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            method: SolveMethod::Direct,
            max_iterations: MAX_ITERATIONS,
            tolerance: RESIDUAL_TOLERANCE,
            check_feasibility: false,
        }
    }
}

/// Solve for unrounded milk, cream, and added sugar masses.
///
/// Negative masses mean the targets cannot be reached with these ingredients.
/// They are returned unchanged unless `config.check_feasibility` is set.
pub fn solve_base(recipe: &BaseRecipe, config: &SolverConfig) -> Result<BaseSolution> {
    let system = MassBalance::from_recipe(recipe);
    debug!(
        method = ?config.method,
        available = system.available_mass,
        "solving mass balance"
    );
    system.ensure_solvable()?;

    let solution = match config.method {
        SolveMethod::Direct => solve_direct(&system)?,
        SolveMethod::Newton => solve_newton(&system, config.max_iterations, config.tolerance)?,
    };

    for (ingredient, mass) in solution.masses() {
        if mass < -FEASIBILITY_EPSILON {
            if config.check_feasibility {
                return Err(BaseError::Infeasible { ingredient, mass });
            }
            warn!(ingredient, mass, "negative mass, target not reachable");
        }
    }

    Ok(solution)
}

/// Compute the masses for a base and round them for presentation.
pub fn calculate_base(recipe: &BaseRecipe, config: &SolverConfig) -> Result<SolutionRecord> {
    let solution = solve_base(recipe, config)?;
    let supp = &recipe.supplement;

    Ok(SolutionRecord::new(
        &solution,
        supp.extra_liquid_mass,
        supp.total_yolk_mass(),
        supp.yolk_count,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_fat() -> BaseRecipe {
        // 40% fat cannot be reached with 30% cream.
        BaseRecipe::new(1000.0).with_targets(40.0, 20.0)
    }

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.method, SolveMethod::Direct);
        assert_eq!(config.max_iterations, MAX_ITERATIONS);
        assert!(!config.check_feasibility);
    }

    #[test]
    fn test_negative_mass_returned_by_default() {
        let solution = solve_base(&unreachable_fat(), &SolverConfig::default()).unwrap();
        assert!(solution.milk < 0.0);
        assert!(solution.cream > 1000.0);
    }

    #[test]
    fn test_strict_mode_rejects_negative_mass() {
        let config = SolverConfig {
            check_feasibility: true,
            ..SolverConfig::default()
        };
        let result = solve_base(&unreachable_fat(), &config);
        assert!(matches!(
            result,
            Err(BaseError::Infeasible {
                ingredient: "milk",
                ..
            })
        ));
    }

    #[test]
    fn test_strict_mode_accepts_feasible_recipe() {
        let config = SolverConfig {
            check_feasibility: true,
            ..SolverConfig::default()
        };
        assert!(solve_base(&BaseRecipe::new(1000.0), &config).is_ok());
    }

    #[test]
    fn test_calculate_echoes_supplements() {
        let recipe = BaseRecipe::new(1000.0).with_extra_liquid(100.0).with_yolks(4);
        let record = calculate_base(&recipe, &SolverConfig::default()).unwrap();

        assert_eq!(record.extra_liquid, 100.0);
        assert_eq!(record.egg_yolk_mass, 72.0);
        assert_eq!(record.egg_yolk_count, 4);
    }
}
