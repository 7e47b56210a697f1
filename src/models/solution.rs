use serde::{Deserialize, Serialize};

use crate::solver::constants::round_mass;

/// Unrounded masses produced by a solve.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseSolution {
    pub milk: f64,
    pub cream: f64,
    pub added_sugar: f64,

    /// Iterations spent by the method (0 for direct solving).
    pub iterations: usize,
}

impl BaseSolution {
    /// Masses as `(name, grams)` pairs, in result order.
    pub fn masses(&self) -> [(&'static str, f64); 3] {
        [
            ("milk", self.milk),
            ("cream", self.cream),
            ("added sugar", self.added_sugar),
        ]
    }
}

/// Result handed to callers. All masses are grams rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionRecord {
    #[serde(rename = "milk_g")]
    pub milk: f64,

    #[serde(rename = "cream_g")]
    pub cream: f64,

    #[serde(rename = "added_sugar_g")]
    pub added_sugar: f64,

    #[serde(rename = "extra_liquid_g")]
    pub extra_liquid: f64,

    #[serde(rename = "egg_yolks_g")]
    pub egg_yolk_mass: f64,

    #[serde(rename = "egg_yolks_count")]
    pub egg_yolk_count: u32,
}

impl SolutionRecord {
    pub fn new(
        solution: &BaseSolution,
        extra_liquid: f64,
        egg_yolk_mass: f64,
        egg_yolk_count: u32,
    ) -> Self {
        Self {
            milk: round_mass(solution.milk),
            cream: round_mass(solution.cream),
            added_sugar: round_mass(solution.added_sugar),
            extra_liquid: round_mass(extra_liquid),
            egg_yolk_mass: round_mass(egg_yolk_mass),
            egg_yolk_count,
        }
    }

    /// Sum of every mass in the record.
    pub fn total_mass(&self) -> f64 {
        self.milk + self.cream + self.added_sugar + self.extra_liquid + self.egg_yolk_mass
    }
}
