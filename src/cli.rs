use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::SolverConfig;
use crate::engine::{BinaryOp, CycleGuard};
use crate::input::{EquationSource, FileSource, ReaderSource};
use crate::output::OutputFormat;

const STDIN_PATH: &str = "-";

#[derive(Parser, Debug)]
#[command(name = "eqsolve")]
#[command(about = "Equation solver - resolve variables defined by '#'-separated equations", long_about = None)]
pub struct Args {
    /// Equation file, one `name = a # b` per line (stdin if omitted or "-")
    #[arg(long, value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Variable to solve. Can be specified multiple times.
    #[arg(short = 'x', long = "variable", value_name = "NAME")]
    pub variables: Vec<String>,

    /// Solve every variable defined in the input
    #[arg(long)]
    pub all: bool,

    /// Output format (text, json)
    #[arg(short = 'f', long, default_value = "text")]
    pub format: OutputFormat,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'O', long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Solver config file (YAML or JSON)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Operator folded over operands (add, sub, mul, min, max, xor)
    #[arg(long, value_name = "OP")]
    pub operator: Option<BinaryOp>,

    /// Cycle detection: path (any revisited variable) or root (requested variable only)
    #[arg(long, value_name = "GUARD")]
    pub cycle_guard: Option<CycleGuard>,

    /// Longest dependency chain followed before giving up
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        if self.variables.is_empty() && !self.all {
            anyhow::bail!("Nothing to solve: pass --variable NAME or --all");
        }
        if let Some(path) = self.input_path() {
            validate_path(path)?;
        }
        if let Some(ref config_path) = self.config {
            if !config_path.exists() {
                anyhow::bail!("Config file does not exist: {}", config_path.display());
            }
        }
        if self.max_depth == Some(0) {
            anyhow::bail!("--max-depth must be at least 1");
        }
        Ok(())
    }

    /// File to read equations from, `None` for stdin.
    pub fn input_path(&self) -> Option<&Path> {
        self.path
            .as_deref()
            .filter(|path| path.as_os_str() != STDIN_PATH)
    }

    pub fn source(&self) -> Box<dyn EquationSource> {
        match self.input_path() {
            Some(path) => Box::new(FileSource::new(path)),
            None => Box::new(ReaderSource::new("<stdin>", || Ok(io::stdin()))),
        }
    }

    /// Config file settings with command-line overrides applied.
    pub fn solver_config(&self) -> Result<SolverConfig> {
        let mut config = match self.config {
            Some(ref path) => SolverConfig::load(path)?,
            None => SolverConfig::default(),
        };
        if let Some(operator) = self.operator {
            config.operator = operator;
        }
        if let Some(cycle_guard) = self.cycle_guard {
            config.cycle_guard = cycle_guard;
        }
        if let Some(max_depth) = self.max_depth {
            config.max_depth = max_depth;
        }
        config.validate()?;
        Ok(config)
    }
}

pub fn validate_path(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }
    if !path.is_file() {
        anyhow::bail!("Path is not a file: {}", path.display());
    }
    Ok(())
}
