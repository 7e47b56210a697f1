use dialoguer::{Confirm, Input};

use crate::error::{BaseError, Result};
use crate::interface::parse::{parse_field, parse_finite, parse_positive_mass};
use crate::models::{BaseRecipe, IngredientComposition, RecipeTarget, Supplement};
use crate::solver::constants::*;

/// Prompt until `convert` accepts the text.
///
/// Blank input takes `default` when one is given. Rejected text prints the
/// conversion error and asks again.
fn prompt_with<T, V>(prompt: &str, default: Option<String>, convert: V) -> Result<T>
where
    V: Fn(&str) -> Result<T>,
{
    let mut input = Input::<String>::new().with_prompt(prompt);
    if let Some(default) = default {
        input = input.default(default);
    }

    let text = input
        .validate_with(|text: &String| -> std::result::Result<(), String> {
            convert(text).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()?;

    convert(&text)
}

/// Prompt for a percentage with a default.
fn prompt_pct(prompt: &str, field: &str, default: f64) -> Result<f64> {
    prompt_with(prompt, Some(default.to_string()), |text| {
        parse_finite(field, text, Some(default))
    })
}

/// Prompt for a mass in grams that may be zero but not negative.
fn prompt_grams(prompt: &str, field: &str, default: f64) -> Result<f64> {
    prompt_with(prompt, Some(default.to_string()), |text| {
        let value = parse_finite(field, text, Some(default))?;
        if value < 0.0 {
            return Err(BaseError::InvalidInput(format!(
                "{} cannot be negative",
                field
            )));
        }
        Ok(value)
    })
}

/// Prompt for the total mass of the base. No default.
pub fn prompt_total_mass() -> Result<f64> {
    prompt_with("Total mass of ice cream base (g)", None, |text| {
        parse_positive_mass("total mass", text)
    })
}

/// Prompt for target fat and sugar percentages.
pub fn prompt_target(total_mass: f64) -> Result<RecipeTarget> {
    let fat_pct = prompt_pct(
        "Desired fat percentage",
        "fat percentage",
        DEFAULT_FAT_PCT,
    )?;
    let sugar_pct = prompt_pct(
        "Desired sugar percentage",
        "sugar percentage",
        DEFAULT_SUGAR_PCT,
    )?;

    Ok(RecipeTarget {
        total_mass,
        fat_pct,
        sugar_pct,
    })
}

/// Prompt for milk and cream fat and sugar percentages.
pub fn prompt_composition() -> Result<IngredientComposition> {
    Ok(IngredientComposition {
        milk_fat_pct: prompt_pct(
            "Milk fat percentage",
            "milk fat percentage",
            DEFAULT_MILK_FAT_PCT,
        )?,
        cream_fat_pct: prompt_pct(
            "Cream fat percentage",
            "cream fat percentage",
            DEFAULT_CREAM_FAT_PCT,
        )?,
        milk_sugar_pct: prompt_pct(
            "Milk sugar percentage",
            "milk sugar percentage",
            DEFAULT_MILK_SUGAR_PCT,
        )?,
        cream_sugar_pct: prompt_pct(
            "Cream sugar percentage",
            "cream sugar percentage",
            DEFAULT_CREAM_SUGAR_PCT,
        )?,
    })
}

/// Prompt for extra liquid and egg yolks.
pub fn prompt_supplement() -> Result<Supplement> {
    let extra_liquid_mass = prompt_grams(
        "Mass of extra liquid (g)",
        "extra liquid mass",
        DEFAULT_EXTRA_LIQUID_G,
    )?;

    let yolk_count = prompt_with(
        "Number of egg yolks",
        Some(DEFAULT_YOLK_COUNT.to_string()),
        |text| parse_field("egg yolk count", text, Some(DEFAULT_YOLK_COUNT)),
    )?;

    let yolk_mass_each = prompt_grams(
        "Mass per egg yolk (g)",
        "yolk mass",
        DEFAULT_YOLK_MASS_G,
    )?;
    let yolk_fat_pct = prompt_pct(
        "Egg yolk fat percentage",
        "yolk fat percentage",
        YOLK_FAT_PERCENTAGE,
    )?;

    Ok(Supplement {
        extra_liquid_mass,
        yolk_count,
        yolk_mass_each,
        yolk_fat_pct,
    })
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect every recipe input in order.
pub fn collect_recipe() -> Result<BaseRecipe> {
    let total_mass = prompt_total_mass()?;
    let target = prompt_target(total_mass)?;
    let composition = prompt_composition()?;
    let supplement = prompt_supplement()?;

    let recipe = BaseRecipe {
        target,
        composition,
        supplement,
    };
    recipe.validate()?;

    Ok(recipe)
}
