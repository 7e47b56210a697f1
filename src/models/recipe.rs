use serde::{Deserialize, Serialize};

use crate::error::{BaseError, Result};
use crate::solver::constants::*;

/// Target total mass and composition of the finished base.
///
/// Percentages are on a 0-100 scale. Only the total mass is checked, by
/// [`BaseRecipe::validate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeTarget {
    pub total_mass: f64,

    #[serde(default = "default_fat_pct")]
    pub fat_pct: f64,

    #[serde(default = "default_sugar_pct")]
    pub sugar_pct: f64,
}

/// Fat and sugar percentages of the two dairy ingredients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientComposition {
    pub milk_fat_pct: f64,
    pub cream_fat_pct: f64,
    pub milk_sugar_pct: f64,
    pub cream_sugar_pct: f64,
}

impl Default for IngredientComposition {
    fn default() -> Self {
        Self {
            milk_fat_pct: DEFAULT_MILK_FAT_PCT,
            cream_fat_pct: DEFAULT_CREAM_FAT_PCT,
            milk_sugar_pct: DEFAULT_MILK_SUGAR_PCT,
            cream_sugar_pct: DEFAULT_CREAM_SUGAR_PCT,
        }
    }
}

/// Fixed additions that are not solved for.
///
/// Extra liquid carries no fat or sugar. Egg yolks carry fat only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplement {
    pub extra_liquid_mass: f64,
    pub yolk_count: u32,
    pub yolk_mass_each: f64,
    pub yolk_fat_pct: f64,
}

impl Default for Supplement {
    fn default() -> Self {
        Self {
            extra_liquid_mass: DEFAULT_EXTRA_LIQUID_G,
            yolk_count: DEFAULT_YOLK_COUNT,
            yolk_mass_each: DEFAULT_YOLK_MASS_G,
            yolk_fat_pct: YOLK_FAT_PERCENTAGE,
        }
    }
}

impl Supplement {
    /// Combined mass of all egg yolks.
    #[inline]
    pub fn total_yolk_mass(&self) -> f64 {
        self.yolk_count as f64 * self.yolk_mass_each
    }

    /// Fat contributed by the egg yolks.
    #[inline]
    pub fn total_yolk_fat(&self) -> f64 {
        self.total_yolk_mass() * self.yolk_fat_pct / 100.0
    }

    /// Mass of everything that is not milk, cream, or added sugar.
    #[inline]
    pub fn fixed_mass(&self) -> f64 {
        self.extra_liquid_mass + self.total_yolk_mass()
    }
}

/// Everything the solver needs for one base.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseRecipe {
    pub target: RecipeTarget,

    #[serde(default)]
    pub composition: IngredientComposition,

    #[serde(default)]
    pub supplement: Supplement,
}

impl BaseRecipe {
    /// Recipe for `total_mass` grams with every optional parameter at its default.
    pub fn new(total_mass: f64) -> Self {
        Self {
            target: RecipeTarget {
                total_mass,
                fat_pct: DEFAULT_FAT_PCT,
                sugar_pct: DEFAULT_SUGAR_PCT,
            },
            composition: IngredientComposition::default(),
            supplement: Supplement::default(),
        }
    }

    pub fn with_targets(mut self, fat_pct: f64, sugar_pct: f64) -> Self {
        self.target.fat_pct = fat_pct;
        self.target.sugar_pct = sugar_pct;
        self
    }

    pub fn with_composition(mut self, composition: IngredientComposition) -> Self {
        self.composition = composition;
        self
    }

    pub fn with_extra_liquid(mut self, mass: f64) -> Self {
        self.supplement.extra_liquid_mass = mass;
        self
    }

    /// Add `count` yolks, keeping the current per-yolk mass and fat.
    pub fn with_yolks(mut self, count: u32) -> Self {
        self.supplement.yolk_count = count;
        self
    }

    /// Mass left for milk, cream, and sugar once fixed additions are removed.
    pub fn available_mass(&self) -> f64 {
        self.target.total_mass - self.supplement.fixed_mass()
    }

    /// Check the inputs a caller is expected to supply.
    ///
    /// Only domain errors are rejected here. Targets that cannot be reached
    /// with the given ingredients are left for the solver.
    pub fn validate(&self) -> Result<()> {
        let total = self.target.total_mass;
        if !total.is_finite() || total <= 0.0 {
            return Err(BaseError::InvalidInput(format!(
                "total mass must be a positive number of grams, got {}",
                total
            )));
        }

        let finite_fields = [
            ("fat percentage", self.target.fat_pct),
            ("sugar percentage", self.target.sugar_pct),
            ("milk fat percentage", self.composition.milk_fat_pct),
            ("cream fat percentage", self.composition.cream_fat_pct),
            ("milk sugar percentage", self.composition.milk_sugar_pct),
            ("cream sugar percentage", self.composition.cream_sugar_pct),
            ("yolk fat percentage", self.supplement.yolk_fat_pct),
        ];
        for (name, value) in finite_fields {
            if !value.is_finite() {
                return Err(BaseError::InvalidInput(format!("{} must be finite", name)));
            }
        }

        let non_negative = [
            ("extra liquid mass", self.supplement.extra_liquid_mass),
            ("yolk mass", self.supplement.yolk_mass_each),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(BaseError::InvalidInput(format!(
                    "{} must be zero or more grams, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

fn default_fat_pct() -> f64 {
    DEFAULT_FAT_PCT
}

fn default_sugar_pct() -> f64 {
    DEFAULT_SUGAR_PCT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_documented_defaults() {
        let recipe = BaseRecipe::new(1000.0);
        assert_eq!(recipe.target.fat_pct, 12.0);
        assert_eq!(recipe.target.sugar_pct, 20.0);
        assert_eq!(recipe.composition.milk_fat_pct, 3.5);
        assert_eq!(recipe.composition.cream_fat_pct, 30.0);
        assert_eq!(recipe.composition.milk_sugar_pct, 5.0);
        assert_eq!(recipe.composition.cream_sugar_pct, 4.0);
        assert_eq!(recipe.supplement.extra_liquid_mass, 0.0);
        assert_eq!(recipe.supplement.yolk_count, 0);
        assert_eq!(recipe.supplement.yolk_mass_each, 18.0);
        assert_eq!(recipe.supplement.yolk_fat_pct, 27.0);
    }

    #[test]
    fn test_yolk_derived_quantities() {
        let recipe = BaseRecipe::new(1000.0).with_yolks(4);
        assert!((recipe.supplement.total_yolk_mass() - 72.0).abs() < 1e-9);
        assert!((recipe.supplement.total_yolk_fat() - 19.44).abs() < 1e-9);
    }

    #[test]
    fn test_available_mass_subtracts_fixed_additions() {
        let recipe = BaseRecipe::new(1000.0).with_extra_liquid(100.0).with_yolks(2);
        assert!((recipe.available_mass() - 864.0).abs() < 1e-9);
    }

    #[test]
    fn test_validate_rejects_non_positive_total() {
        assert!(BaseRecipe::new(0.0).validate().is_err());
        assert!(BaseRecipe::new(-5.0).validate().is_err());
        assert!(BaseRecipe::new(f64::NAN).validate().is_err());
        assert!(BaseRecipe::new(1.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_extra_liquid() {
        let recipe = BaseRecipe::new(1000.0).with_extra_liquid(-1.0);
        assert!(matches!(recipe.validate(), Err(BaseError::InvalidInput(_))));
    }

    #[test]
    fn test_validate_allows_unreachable_targets() {
        let recipe = BaseRecipe::new(1000.0).with_targets(80.0, 90.0);
        assert!(recipe.validate().is_ok());
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let json = r#"{"target": {"total_mass": 750}}"#;
        let recipe: BaseRecipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.target.total_mass, 750.0);
        assert_eq!(recipe.target.fat_pct, DEFAULT_FAT_PCT);
        assert_eq!(recipe.composition.cream_fat_pct, DEFAULT_CREAM_FAT_PCT);
        assert_eq!(recipe.supplement.yolk_fat_pct, YOLK_FAT_PERCENTAGE);
    }
}
