use std::collections::HashMap;

use tracing::debug;

use super::parser::{parse_line, EquationLine, Operand};
use crate::error::ParseError;

/// Immutable, validated set of equations keyed by variable name.
///
/// When a name is defined more than once, the first definition in input
/// order is the one `lookup` returns; later ones are kept but shadowed.
#[derive(Debug, Clone, Default)]
pub struct EquationStore {
    equations: Vec<EquationLine>,
    index: HashMap<String, usize>,
}

impl EquationStore {
    /// Parses every line, failing on the first malformed one. Nothing is
    /// returned unless the whole input is valid.
    pub fn load<I, S>(lines: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let equations = lines
            .into_iter()
            .enumerate()
            .map(|(i, line)| parse_line(line.as_ref(), i + 1))
            .collect::<Result<Vec<_>, _>>()?;

        let mut index = HashMap::with_capacity(equations.len());
        for (position, equation) in equations.iter().enumerate() {
            if let Some(&first) = index.get(&equation.name) {
                let first: &EquationLine = &equations[first];
                debug!(
                    "'{}' redefined at line {}, keeping line {}",
                    equation.name, equation.line, first.line
                );
                continue;
            }
            index.insert(equation.name.clone(), position);
        }

        debug!(
            "loaded {} equations defining {} variables",
            equations.len(),
            index.len()
        );
        Ok(Self { equations, index })
    }

    /// Splits `text` into lines and loads them.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        Self::load(text.lines())
    }

    pub fn lookup(&self, name: &str) -> Option<&[Operand]> {
        self.equation(name).map(|eq| eq.operands.as_slice())
    }

    pub fn equation(&self, name: &str) -> Option<&EquationLine> {
        self.index.get(name).map(|&i| &self.equations[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Defined names in order of first definition.
    pub fn variables(&self) -> Vec<&str> {
        self.equations
            .iter()
            .enumerate()
            .filter(|(position, eq)| self.index.get(&eq.name) == Some(position))
            .map(|(_, eq)| eq.name.as_str())
            .collect()
    }

    /// Number of equation lines, shadowed duplicates included.
    pub fn len(&self) -> usize {
        self.equations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.equations.is_empty()
    }
}
