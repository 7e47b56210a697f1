use clap::{Args, Parser, Subcommand};

use crate::models::{BaseRecipe, IngredientComposition, RecipeTarget, Supplement};
use crate::solver::constants::*;
use crate::solver::{SolveMethod, SolverConfig};

/// Ice cream base calculator: balances milk, cream, and sugar for target fat and sugar percentages.
#[derive(Parser, Debug)]
#[command(name = "ice_cream_base")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Solution method.
    #[arg(long, value_enum, default_value_t = SolveMethod::Direct, global = true)]
    pub method: SolveMethod,

    /// Iteration budget for the newton method.
    #[arg(long, default_value_t = MAX_ITERATIONS, global = true)]
    pub max_iterations: usize,

    /// Fail instead of returning negative masses for unreachable targets.
    #[arg(long, global = true)]
    pub strict: bool,

    /// Log solver details to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            method: self.method,
            max_iterations: self.max_iterations,
            check_feasibility: self.strict,
            ..SolverConfig::default()
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Prompt for each input, with defaults.
    Interactive,

    /// Solve once from command-line flags.
    Solve(SolveArgs),
}

impl Default for Command {
    fn default() -> Self {
        Command::Interactive
    }
}

#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Total mass of the base in grams.
    #[arg(long)]
    pub total_mass: f64,

    /// Target fat percentage.
    #[arg(long, default_value_t = DEFAULT_FAT_PCT)]
    pub fat_pct: f64,

    /// Target sugar percentage.
    #[arg(long, default_value_t = DEFAULT_SUGAR_PCT)]
    pub sugar_pct: f64,

    /// Milk fat percentage.
    #[arg(long, default_value_t = DEFAULT_MILK_FAT_PCT)]
    pub milk_fat: f64,

    /// Cream fat percentage.
    #[arg(long, default_value_t = DEFAULT_CREAM_FAT_PCT)]
    pub cream_fat: f64,

    /// Milk sugar percentage.
    #[arg(long, default_value_t = DEFAULT_MILK_SUGAR_PCT)]
    pub milk_sugar: f64,

    /// Cream sugar percentage.
    #[arg(long, default_value_t = DEFAULT_CREAM_SUGAR_PCT)]
    pub cream_sugar: f64,

    /// Extra non-dairy liquid in grams.
    #[arg(long, default_value_t = DEFAULT_EXTRA_LIQUID_G)]
    pub extra_liquid: f64,

    /// Number of egg yolks.
    #[arg(long, default_value_t = DEFAULT_YOLK_COUNT)]
    pub yolks: u32,

    /// Mass of one egg yolk in grams.
    #[arg(long, default_value_t = DEFAULT_YOLK_MASS_G)]
    pub yolk_mass: f64,

    /// Egg yolk fat percentage.
    #[arg(long, default_value_t = YOLK_FAT_PERCENTAGE)]
    pub yolk_fat: f64,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

impl SolveArgs {
    pub fn recipe(&self) -> BaseRecipe {
        BaseRecipe {
            target: RecipeTarget {
                total_mass: self.total_mass,
                fat_pct: self.fat_pct,
                sugar_pct: self.sugar_pct,
            },
            composition: IngredientComposition {
                milk_fat_pct: self.milk_fat,
                cream_fat_pct: self.cream_fat,
                milk_sugar_pct: self.milk_sugar,
                cream_sugar_pct: self.cream_sugar,
            },
            supplement: Supplement {
                extra_liquid_mass: self.extra_liquid,
                yolk_count: self.yolks,
                yolk_mass_each: self.yolk_mass,
                yolk_fat_pct: self.yolk_fat,
            },
        }
    }
}
