use serde::Serialize;
use std::fmt;

use super::sources::UnresolvedSource;

/// Outcome of solving one variable. `value` is `None` when there is no
/// solution, and `reason` then says why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    pub variable: String,
    pub value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<UnresolvedSource>,
}

impl Solution {
    pub fn found(variable: impl Into<String>, value: i64) -> Self {
        Self {
            variable: variable.into(),
            value: Some(value),
            reason: None,
        }
    }

    pub fn unsolved(variable: impl Into<String>, reason: UnresolvedSource) -> Self {
        Self {
            variable: variable.into(),
            value: None,
            reason: Some(reason),
        }
    }

    pub fn from_result(variable: impl Into<String>, result: Result<i64, UnresolvedSource>) -> Self {
        match result {
            Ok(value) => Self::found(variable, value),
            Err(reason) => Self::unsolved(variable, reason),
        }
    }

    pub fn is_solved(&self) -> bool {
        self.value.is_some()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.value, &self.reason) {
            (Some(value), _) => write!(f, "{} = {}", self.variable, value),
            (None, Some(reason)) => write!(f, "{} = no solution ({})", self.variable, reason),
            (None, None) => write!(f, "{} = no solution", self.variable),
        }
    }
}
