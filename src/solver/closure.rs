use crate::models::{BaseRecipe, SolutionRecord};
use crate::solver::constants::CLOSURE_TOLERANCE;

/// Totals recomputed from a rounded record, compared with the recipe targets.
#[derive(Debug, Clone)]
pub struct Closure {
    pub total_mass: f64,
    pub fat_pct: f64,
    pub sugar_pct: f64,

    /// Achieved minus target, in grams.
    pub mass_error: f64,

    /// Achieved minus target, in percentage points.
    pub fat_error: f64,
    pub sugar_error: f64,
}

impl Closure {
    pub fn measure(recipe: &BaseRecipe, record: &SolutionRecord) -> Self {
        let comp = &recipe.composition;
        let target = &recipe.target;

        let fat = record.milk * comp.milk_fat_pct / 100.0
            + record.cream * comp.cream_fat_pct / 100.0
            + record.egg_yolk_mass * recipe.supplement.yolk_fat_pct / 100.0;
        let sugar = record.milk * comp.milk_sugar_pct / 100.0
            + record.cream * comp.cream_sugar_pct / 100.0
            + record.added_sugar;

        let total_mass = record.total_mass();
        let fat_pct = fat / target.total_mass * 100.0;
        let sugar_pct = sugar / target.total_mass * 100.0;

        Self {
            total_mass,
            fat_pct,
            sugar_pct,
            mass_error: total_mass - target.total_mass,
            fat_error: fat_pct - target.fat_pct,
            sugar_error: sugar_pct - target.sugar_pct,
        }
    }

    /// True when every balance holds within `CLOSURE_TOLERANCE`.
    pub fn holds(&self) -> bool {
        self.mass_error.abs() <= CLOSURE_TOLERANCE
            && self.fat_error.abs() <= CLOSURE_TOLERANCE
            && self.sugar_error.abs() <= CLOSURE_TOLERANCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_record_closes() {
        let recipe = BaseRecipe::new(1000.0).with_targets(10.75, 23.7);
        let record = SolutionRecord {
            milk: 500.0,
            cream: 300.0,
            added_sugar: 200.0,
            extra_liquid: 0.0,
            egg_yolk_mass: 0.0,
            egg_yolk_count: 0,
        };

        let closure = Closure::measure(&recipe, &record);
        assert!(closure.holds());
        assert!(closure.mass_error.abs() < 1e-9);
        assert!((closure.fat_pct - 10.75).abs() < 1e-9);
    }

    #[test]
    fn test_short_record_does_not_close() {
        let recipe = BaseRecipe::new(1000.0).with_targets(10.75, 23.7);
        let record = SolutionRecord {
            milk: 500.0,
            cream: 300.0,
            added_sugar: 150.0,
            extra_liquid: 0.0,
            egg_yolk_mass: 0.0,
            egg_yolk_count: 0,
        };

        let closure = Closure::measure(&recipe, &record);
        assert!(!closure.holds());
        assert!((closure.mass_error + 50.0).abs() < 1e-9);
    }
}
