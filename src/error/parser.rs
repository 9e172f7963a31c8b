use thiserror::Error;

/// A line that does not follow `name = operand ( # operand)*`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: empty line")]
    EmptyLine { line: usize },

    #[error("line {line}: missing ' = ' separator in '{text}'")]
    MissingAssignment { line: usize, text: String },

    #[error("line {line}, column {column}: invalid variable name '{token}'")]
    InvalidName {
        line: usize,
        column: usize,
        token: String,
    },

    #[error("line {line}, column {column}: empty operand")]
    EmptyOperand { line: usize, column: usize },

    #[error("line {line}, column {column}: invalid operand '{token}'")]
    InvalidOperand {
        line: usize,
        column: usize,
        token: String,
    },

    #[error("line {line}, column {column}: integer '{token}' does not fit in 64 bits")]
    IntegerOutOfRange {
        line: usize,
        column: usize,
        token: String,
    },
}

impl ParseError {
    pub fn missing_assignment(line: usize, text: impl Into<String>) -> Self {
        Self::MissingAssignment {
            line,
            text: text.into(),
        }
    }

    pub fn invalid_name(line: usize, column: usize, token: impl Into<String>) -> Self {
        Self::InvalidName {
            line,
            column,
            token: token.into(),
        }
    }

    pub fn invalid_operand(line: usize, column: usize, token: impl Into<String>) -> Self {
        Self::InvalidOperand {
            line,
            column,
            token: token.into(),
        }
    }

    pub fn integer_out_of_range(line: usize, column: usize, token: impl Into<String>) -> Self {
        Self::IntegerOutOfRange {
            line,
            column,
            token: token.into(),
        }
    }

    /// 1-based number of the offending input line.
    pub fn line(&self) -> usize {
        match self {
            Self::EmptyLine { line }
            | Self::MissingAssignment { line, .. }
            | Self::InvalidName { line, .. }
            | Self::EmptyOperand { line, .. }
            | Self::InvalidOperand { line, .. }
            | Self::IntegerOutOfRange { line, .. } => *line,
        }
    }
}
