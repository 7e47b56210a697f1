use nalgebra::{Matrix3, Vector3};
use tracing::{debug, trace};

use crate::error::{BaseError, Result};
use crate::models::BaseSolution;
use crate::solver::constants::{JACOBIAN_STEP, SINGULAR_EPSILON};
use crate::solver::equations::MassBalance;

/// Solve the balance iteratively, starting from the even split.
///
/// `tolerance` is relative to the total mass (at least 1 g).
pub fn solve_newton(
    system: &MassBalance,
    max_iterations: usize,
    tolerance: f64,
) -> Result<BaseSolution> {
    system.ensure_solvable()?;

    let abs_tol = tolerance * system.total_mass.abs().max(1.0);
    let (x, iterations) = newton_raphson(
        |x| system.residuals(x),
        system.initial_guess(),
        max_iterations,
        abs_tol,
    )?;

    debug!(
        iterations,
        milk = x[0],
        cream = x[1],
        sugar = x[2],
        "newton solve"
    );

    Ok(BaseSolution {
        milk: x[0],
        cream: x[1],
        added_sugar: x[2],
        iterations,
    })
}

/// Newton-Raphson on a three-equation residual function.
///
/// Returns the root and the number of steps taken. The residual function may be
/// nonlinear; the Jacobian is rebuilt by forward differences every step.
pub fn newton_raphson<F>(
    residuals: F,
    start: Vector3<f64>,
    max_iterations: usize,
    abs_tol: f64,
) -> Result<(Vector3<f64>, usize)>
where
    F: Fn(&Vector3<f64>) -> Vector3<f64>,
{
    let mut x = start;

    for iteration in 0..max_iterations {
        let r = residuals(&x);
        let norm = r.amax();
        trace!(iteration, norm, "newton step");

        if !norm.is_finite() {
            return Err(BaseError::DidNotConverge {
                iterations: iteration,
                residual: norm,
            });
        }
        if norm <= abs_tol {
            return Ok((x, iteration));
        }

        let jacobian = forward_jacobian(&residuals, &x, &r);
        if is_degenerate(&jacobian) {
            return Err(BaseError::SingularSystem);
        }

        let step = jacobian.lu().solve(&(-r)).ok_or(BaseError::SingularSystem)?;
        x += step;
    }

    let norm = residuals(&x).amax();
    if norm <= abs_tol {
        Ok((x, max_iterations))
    } else {
        Err(BaseError::DidNotConverge {
            iterations: max_iterations,
            residual: norm,
        })
    }
}

/// Determinant small relative to the column lengths.
fn is_degenerate(jacobian: &Matrix3<f64>) -> bool {
    let scale: f64 = jacobian.column_iter().map(|c| c.norm()).product();
    jacobian.determinant().abs() <= SINGULAR_EPSILON * scale
}

fn forward_jacobian<F>(residuals: &F, x: &Vector3<f64>, r: &Vector3<f64>) -> Matrix3<f64>
where
    F: Fn(&Vector3<f64>) -> Vector3<f64>,
{
    let mut jacobian = Matrix3::zeros();
    for j in 0..3 {
        let mut shifted = *x;
        shifted[j] += JACOBIAN_STEP * x[j].abs().max(1.0);
        let h = shifted[j] - x[j];
        let column = (residuals(&shifted) - r) / h;
        jacobian.set_column(j, &column);
    }
    jacobian
}
