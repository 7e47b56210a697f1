use crate::error::Result;
use crate::models::{BaseRecipe, SolutionRecord};
use crate::solver::Closure;

/// Result lines as `(label, value)` pairs, in display order.
pub fn result_lines(record: &SolutionRecord) -> Vec<(&'static str, String)> {
    vec![
        ("milk (g)", format!("{:.2}", record.milk)),
        ("cream (g)", format!("{:.2}", record.cream)),
        ("added sugar (g)", format!("{:.2}", record.added_sugar)),
        ("extra liquid (g)", format!("{:.2}", record.extra_liquid)),
        ("egg yolks (g)", format!("{:.2}", record.egg_yolk_mass)),
        ("egg yolks (count)", record.egg_yolk_count.to_string()),
    ]
}

/// Display a solved base followed by a closure summary.
pub fn display_solution(recipe: &BaseRecipe, record: &SolutionRecord) {
    println!();
    println!("Recipe Results:");
    println!("--------------");

    for (label, value) in result_lines(record) {
        println!("{}: {}", label, value);
    }

    let closure = Closure::measure(recipe, record);

    println!();
    println!("--- Summary ---");
    println!(
        "Total mass: {:.2} g (target {:.2})",
        closure.total_mass, recipe.target.total_mass
    );
    println!(
        "Fat: {:.2}% (target {:.2}%)",
        closure.fat_pct, recipe.target.fat_pct
    );
    println!(
        "Sugar: {:.2}% (target {:.2}%)",
        closure.sugar_pct, recipe.target.sugar_pct
    );

    let negatives: Vec<&str> = [
        ("milk", record.milk),
        ("cream", record.cream),
        ("added sugar", record.added_sugar),
    ]
    .into_iter()
    .filter(|(_, mass)| *mass < 0.0)
    .map(|(name, _)| name)
    .collect();

    if !negatives.is_empty() {
        println!(
            "Warning: negative {} - targets are not reachable with these ingredients.",
            negatives.join(", ")
        );
    }
    println!();
}

/// Print the record as pretty JSON.
pub fn display_solution_json(record: &SolutionRecord) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(record)?);
    Ok(())
}
