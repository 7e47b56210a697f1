use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use ice_cream_base_rs::cli::{Cli, Command, SolveArgs};
use ice_cream_base_rs::error::Result;
use ice_cream_base_rs::interface::{
    collect_recipe, display_solution, display_solution_json, prompt_yes_no,
};
use ice_cream_base_rs::solver::{calculate_base, SolverConfig};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.solver_config();
    debug!(?config, "solver configuration");

    match cli.command.unwrap_or_default() {
        Command::Interactive => cmd_interactive(&config),
        Command::Solve(args) => cmd_solve(&args, &config),
    }
}

/// Prompt for inputs, solve, print, and offer another round.
fn cmd_interactive(config: &SolverConfig) -> Result<()> {
    println!("Ice Cream Base Calculator");
    println!("-------------------------");

    loop {
        let recipe = collect_recipe()?;
        info!(total_mass = recipe.target.total_mass, "calculating base");

        let record = calculate_base(&recipe, config)?;
        display_solution(&recipe, &record);

        if !prompt_yes_no("Calculate another base?", false)? {
            break;
        }
        println!();
    }

    Ok(())
}

/// Solve once from flags.
fn cmd_solve(args: &SolveArgs, config: &SolverConfig) -> Result<()> {
    let recipe = args.recipe();
    recipe.validate()?;
    info!(total_mass = recipe.target.total_mass, "calculating base");

    let record = calculate_base(&recipe, config)?;

    if args.json {
        display_solution_json(&record)?;
    } else {
        display_solution(&recipe, &record);
    }

    Ok(())
}
