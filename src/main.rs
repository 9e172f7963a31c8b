use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use equation_solver::error::IoError;
use equation_solver::logging;
use equation_solver::output::OutputFormatter;
use equation_solver::{cli, EquationStore, Solution};

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(args.verbose, args.quiet);
    args.validate().context("Invalid arguments")?;

    let config = args.solver_config().context("Invalid configuration")?;
    let resolver = config.resolver();

    let source = args.source();
    let lines = source.read_lines()?;
    let store = EquationStore::load(lines)
        .with_context(|| format!("Malformed equation in {}", source.name()))?;
    tracing::info!(
        "{} equations loaded, operator {}, cycle guard {}",
        store.len(),
        config.operator,
        config.cycle_guard
    );

    let solutions: Vec<Solution> = if args.all {
        resolver.resolve_all(&store)
    } else {
        args.variables
            .iter()
            .map(|variable| resolver.resolve(&store, variable))
            .collect()
    };

    let solved = solutions.iter().filter(|s| s.is_solved()).count();
    tracing::info!("solved {solved} of {} variables", solutions.len());

    let rendered = OutputFormatter::format(&solutions, args.format)?;
    match args.output_file {
        Some(ref path) => {
            std::fs::write(path, &rendered).map_err(|e| IoError::write_error(path, e))?;
            tracing::info!("wrote {} solutions to {}", solutions.len(), path.display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
