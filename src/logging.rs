//! Diagnostics for the `eqsolve` binary. Everything goes to stderr; stdout
//! is reserved for solutions.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// `-q` wins over any number of `-v`. Without flags only warnings show.
pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn directives(level: LevelFilter) -> String {
    format!("equation_solver={level},eqsolve={level}")
}

/// Installs the global subscriber. A set `RUST_LOG` replaces the flag-derived
/// filter entirely.
pub fn init(verbose: u8, quiet: bool) {
    let level = level_for(verbose, quiet);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(level)));
    let located = level >= LevelFilter::DEBUG;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(located)
        .with_line_number(located)
        .without_time()
        .compact()
        .init();
}
