use tracing::debug;

use crate::error::{BaseError, Result};
use crate::models::BaseSolution;
use crate::solver::equations::MassBalance;

/// Solve the balance exactly with an LU decomposition (partial pivoting).
pub fn solve_direct(system: &MassBalance) -> Result<BaseSolution> {
    system.ensure_solvable()?;

    let x = system
        .coefficients
        .lu()
        .solve(&system.rhs)
        .ok_or(BaseError::SingularSystem)?;

    debug!(milk = x[0], cream = x[1], sugar = x[2], "direct solve");

    Ok(BaseSolution {
        milk: x[0],
        cream: x[1],
        added_sugar: x[2],
        iterations: 0,
    })
}
