pub mod recipe;
pub mod solution;

pub use recipe::{BaseRecipe, IngredientComposition, RecipeTarget, Supplement};
pub use solution::{BaseSolution, SolutionRecord};
