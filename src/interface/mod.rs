pub mod parse;
pub mod prompts;
pub mod render;

pub use parse::{parse_field, parse_finite, parse_positive_mass};
pub use prompts::{
    collect_recipe, prompt_composition, prompt_supplement, prompt_target, prompt_total_mass,
    prompt_yes_no,
};
pub use render::{display_solution, display_solution_json, result_lines};
