use nalgebra::{Matrix3, Vector3};
use tracing::debug;

use crate::error::{BaseError, Result};
use crate::models::BaseRecipe;
use crate::solver::constants::SINGULAR_EPSILON;

/// Linear mass, fat, and sugar balance in the unknowns `[milk, cream, added sugar]`.
///
/// Rows of `coefficients` are the mass, fat, and sugar equations. Fixed
/// contributions (extra liquid, yolks) are already moved into `rhs`.
#[derive(Debug, Clone)]
pub struct MassBalance {
    pub coefficients: Matrix3<f64>,
    pub rhs: Vector3<f64>,
    pub total_mass: f64,
    pub available_mass: f64,
}

impl MassBalance {
    pub fn from_recipe(recipe: &BaseRecipe) -> Self {
        let target = &recipe.target;
        let comp = &recipe.composition;
        let supp = &recipe.supplement;

        let coefficients = Matrix3::new(
            1.0,
            1.0,
            1.0,
            comp.milk_fat_pct / 100.0,
            comp.cream_fat_pct / 100.0,
            0.0,
            comp.milk_sugar_pct / 100.0,
            comp.cream_sugar_pct / 100.0,
            1.0,
        );

        let rhs = Vector3::new(
            target.total_mass - supp.fixed_mass(),
            target.total_mass * target.fat_pct / 100.0 - supp.total_yolk_fat(),
            target.total_mass * target.sugar_pct / 100.0,
        );

        Self {
            coefficients,
            rhs,
            total_mass: target.total_mass,
            available_mass: recipe.available_mass(),
        }
    }

    /// Residual of each balance equation at `x`. Zero when all three hold.
    pub fn residuals(&self, x: &Vector3<f64>) -> Vector3<f64> {
        self.coefficients * x - self.rhs
    }

    /// Even three-way split of the available mass.
    pub fn initial_guess(&self) -> Vector3<f64> {
        Vector3::repeat(self.available_mass / 3.0)
    }

    pub fn determinant(&self) -> f64 {
        self.coefficients.determinant()
    }

    /// Fail with `SingularSystem` when milk and cream cannot be told apart.
    ///
    /// Every solution method checks the exact coefficients with the same cutoff.
    pub fn ensure_solvable(&self) -> Result<()> {
        let det = self.determinant();
        if det.abs() < SINGULAR_EPSILON {
            debug!(det, "coefficient matrix is singular");
            return Err(BaseError::SingularSystem);
        }
        Ok(())
    }
}
