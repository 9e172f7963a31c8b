//! Line grammar: `name = operand ( # operand)*`.
//!
//! Names and operands are non-empty runs of ASCII letters and digits. Exactly
//! one space surrounds `=` and every `#`; anything else (tabs, doubled spaces,
//! a second `=`) is rejected with the line and column of the offending token.

use std::fmt;

use crate::error::ParseError;

pub const ASSIGN: &str = " = ";
pub const SEPARATOR: &str = " # ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Literal(i64),
    Variable(String),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => write!(f, "{value}"),
            Self::Variable(name) => write!(f, "{name}"),
        }
    }
}

/// One parsed equation. `line` is the 1-based position in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquationLine {
    pub name: String,
    pub operands: Vec<Operand>,
    pub line: usize,
}

impl fmt::Display for EquationLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{ASSIGN}", self.name)?;
        for (i, operand) in self.operands.iter().enumerate() {
            if i > 0 {
                f.write_str(SEPARATOR)?;
            }
            write!(f, "{operand}")?;
        }
        Ok(())
    }
}

fn is_token(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric())
}

pub fn parse_line(raw: &str, line: usize) -> Result<EquationLine, ParseError> {
    let leading = raw.len() - raw.trim_start().len();
    let text = raw.trim();
    if text.is_empty() {
        return Err(ParseError::EmptyLine { line });
    }

    let (name, rhs) = text
        .split_once(ASSIGN)
        .ok_or_else(|| ParseError::missing_assignment(line, text))?;
    if !is_token(name) {
        return Err(ParseError::invalid_name(line, leading + 1, name));
    }

    let mut offset = leading + name.len() + ASSIGN.len();
    let mut operands = Vec::new();
    for token in rhs.split(SEPARATOR) {
        operands.push(parse_operand(token, line, offset + 1)?);
        offset += token.len() + SEPARATOR.len();
    }

    Ok(EquationLine {
        name: name.to_string(),
        operands,
        line,
    })
}

fn parse_operand(token: &str, line: usize, column: usize) -> Result<Operand, ParseError> {
    if token.is_empty() {
        return Err(ParseError::EmptyOperand { line, column });
    }
    if !is_token(token) {
        return Err(ParseError::invalid_operand(line, column, token));
    }
    if token.bytes().all(|b| b.is_ascii_digit()) {
        return token
            .parse::<i64>()
            .map(Operand::Literal)
            .map_err(|_| ParseError::integer_out_of_range(line, column, token));
    }
    Ok(Operand::Variable(token.to_string()))
}
