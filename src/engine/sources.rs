use serde::Serialize;
use std::fmt;

/// Why a variable has no solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UnresolvedSource {
    /// A referenced variable has no equation.
    UndefinedVariable { variable: String },
    /// Evaluation reached a variable that is already being evaluated.
    CycleDetected { variable: String },
    /// The dependency chain is deeper than the resolver allows.
    DepthExceeded { limit: usize },
    /// The outermost evaluation was not for the requested variable.
    DetachedEntry { variable: String },
}

impl UnresolvedSource {
    pub fn undefined(variable: impl Into<String>) -> Self {
        Self::UndefinedVariable {
            variable: variable.into(),
        }
    }

    pub fn cycle(variable: impl Into<String>) -> Self {
        Self::CycleDetected {
            variable: variable.into(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UndefinedVariable { .. } => "undefined_variable",
            Self::CycleDetected { .. } => "cycle_detected",
            Self::DepthExceeded { .. } => "depth_exceeded",
            Self::DetachedEntry { .. } => "detached_entry",
        }
    }
}

impl fmt::Display for UnresolvedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedVariable { variable } => write!(f, "undefined variable '{variable}'"),
            Self::CycleDetected { variable } => write!(f, "cycle through '{variable}'"),
            Self::DepthExceeded { limit } => write!(f, "dependency chain deeper than {limit}"),
            Self::DetachedEntry { variable } => {
                write!(f, "evaluation did not start at '{variable}'")
            }
        }
    }
}
