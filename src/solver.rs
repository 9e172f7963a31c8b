use tracing::debug;

use crate::engine::{Operator, Resolver, Solution};
use crate::equations::EquationStore;
use crate::error::Result;
use crate::input::EquationSource;

/// Solves one variable against an equation source.
///
/// The source is read and validated again on every [`Solver::solve`] call;
/// malformed input is the only error, an unsolvable variable is a
/// [`Solution`] without a value.
pub struct Solver<S> {
    source: S,
    resolver: Resolver,
    variable: String,
}

impl<S: EquationSource> Solver<S> {
    pub fn new<O: Operator + 'static>(source: S, operator: O, variable: impl Into<String>) -> Self {
        Self::with_resolver(source, Resolver::with_operator(operator), variable)
    }

    pub fn with_resolver(source: S, resolver: Resolver, variable: impl Into<String>) -> Self {
        Self {
            source,
            resolver,
            variable: variable.into(),
        }
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    pub fn solve(&self) -> Result<Solution> {
        let store = self.load()?;
        Ok(self.resolver.resolve(&store, &self.variable))
    }

    fn load(&self) -> Result<EquationStore> {
        let lines = self.source.read_lines()?;
        debug!("read {} lines from {}", lines.len(), self.source.name());
        Ok(EquationStore::load(lines)?)
    }
}
